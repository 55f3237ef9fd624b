use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Stable conference identifier (e.g. "neurips")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConferenceId(String);

impl ConferenceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ConferenceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ConferenceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ConferenceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Row id of a conference instance, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(i64);

impl InstanceId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for InstanceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// One year's occurrence of a conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceInstance {
    pub instance_id: InstanceId,
    pub conference_id: ConferenceId,
    /// Copy of the conference name at the time the instance was created.
    pub conference_name: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Attributes of a conference instance that an upsert may set.
///
/// `None` means "leave as is" on update and "unset" on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceFields {
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

impl InstanceFields {
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Year restriction for statistics queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearFilter {
    /// Every year the conference has an instance for
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    pub fn year(self) -> Option<i32> {
        match self {
            YearFilter::All => None,
            YearFilter::Year(year) => Some(year),
        }
    }
}

impl From<Option<i32>> for YearFilter {
    fn from(year: Option<i32>) -> Self {
        year.map_or(YearFilter::All, YearFilter::Year)
    }
}

impl From<i32> for YearFilter {
    fn from(year: i32) -> Self {
        YearFilter::Year(year)
    }
}

impl FromStr for YearFilter {
    type Err = Error;

    /// Accepts a year number, `all`, or the dropdown label `All Years`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("all years") {
            return Ok(YearFilter::All);
        }

        trimmed
            .parse::<i32>()
            .map(YearFilter::Year)
            .map_err(|_| Error::InvalidYear(s.to_string()))
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => write!(f, "All Years"),
            YearFilter::Year(year) => write!(f, "{}", year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_filter_parses_sentinels() {
        assert_eq!("all".parse::<YearFilter>().unwrap(), YearFilter::All);
        assert_eq!("All Years".parse::<YearFilter>().unwrap(), YearFilter::All);
        assert_eq!(" 2023 ".parse::<YearFilter>().unwrap(), YearFilter::Year(2023));
    }

    #[test]
    fn test_year_filter_rejects_garbage() {
        let err = "twenty".parse::<YearFilter>().unwrap_err();
        assert_eq!(err, Error::InvalidYear("twenty".to_string()));
        assert!(err.to_string().contains("expected a number or 'all'"));
    }

    #[test]
    fn test_year_filter_from_option() {
        assert_eq!(YearFilter::from(None), YearFilter::All);
        assert_eq!(YearFilter::from(Some(2022)), YearFilter::Year(2022));
        assert_eq!(YearFilter::All.year(), None);
        assert_eq!(YearFilter::Year(2022).to_string(), "2022");
    }

    #[test]
    fn test_instance_fields_builder() {
        let fields = InstanceFields::default()
            .with_location("Vancouver")
            .with_website("https://neurips.cc");
        assert_eq!(fields.location.as_deref(), Some("Vancouver"));
        assert_eq!(fields.summary, None);
    }

    #[test]
    fn test_instance_serialization_skips_unset_fields() {
        let instance = ConferenceInstance {
            instance_id: InstanceId::new(7),
            conference_id: ConferenceId::from("aaai"),
            conference_name: "AAAI".to_string(),
            year: 2023,
            location: None,
            start_date: NaiveDate::from_ymd_opt(2023, 2, 7),
            end_date: None,
            website: None,
            summary: None,
        };

        let json = serde_json::to_value(&instance).unwrap();
        assert_eq!(json["instance_id"], 7);
        assert_eq!(json["conference_id"], "aaai");
        assert_eq!(json["start_date"], "2023-02-07");
        assert!(json.get("location").is_none());
    }
}
