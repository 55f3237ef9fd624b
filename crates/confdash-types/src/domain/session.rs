use serde::{Deserialize, Serialize};

use super::conference::InstanceId;

/// A person presenting in one or more sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub speaker_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

/// A scheduled block within a conference instance.
///
/// `speakers` is always populated when a session comes out of the index;
/// an empty list means the session has no linked speakers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: i64,
    pub instance_id: InstanceId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    /// Start time as stored (ISO 8601 local time)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub speakers: Vec<Speaker>,
}

impl Session {
    pub fn speaker_names(&self) -> Vec<&str> {
        self.speakers.iter().map(|s| s.name.as_str()).collect()
    }
}
