use serde::{Deserialize, Serialize};

use super::conference::ConferenceInstance;

/// Paper count for a single conference instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstancePaperCount {
    pub instance: ConferenceInstance,
    pub paper_count: u64,
}

/// Paper count for a conference within one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferencePaperCount {
    pub conference_name: String,
    pub paper_count: u64,
}
