use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Long forms that collapse onto a canonical abbreviation after cleanup.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("MASSACHUSETTS INSTITUTE OF TECHNOLOGY", "MIT"),
    ("MASS INST OF TECH", "MIT"),
    ("MASS INSTITUTE OF TECHNOLOGY", "MIT"),
];

/// An organization authors and speakers belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    pub affiliation_id: i64,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Affiliation {
    /// First of `name` and `aliases` that appears in `tracked`.
    pub fn tracked_name<'a>(&'a self, tracked: &[String]) -> Option<&'a str> {
        if tracked.iter().any(|t| t == &self.name) {
            return Some(self.name.as_str());
        }

        self.aliases
            .iter()
            .map(|alias| alias.trim_matches('"'))
            .find(|alias| tracked.iter().any(|t| t == alias))
    }
}

/// Attributes of an affiliation that an upsert may set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliationFields {
    pub aliases: Option<Vec<String>>,
    pub country: Option<String>,
}

/// Canonical form used to match affiliation names that differ in case,
/// punctuation or spacing.
///
/// Returns the input unchanged when it is empty.
pub fn normalize_affiliation_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let upper = name.to_uppercase();
    let stripped = NON_WORD.replace_all(&upper, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    let cleaned = collapsed.trim();

    ABBREVIATIONS
        .iter()
        .find(|(long, _)| *long == cleaned)
        .map(|(_, short)| short.to_string())
        .unwrap_or_else(|| cleaned.to_string())
}
