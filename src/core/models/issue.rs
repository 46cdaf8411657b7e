//! Issue tracker records
//!
//! The tracker is an external tool; the core only needs the record list and
//! a timestamp that parses to a UTC instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One issue as reported by the tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Issue number
    #[serde(default)]
    pub number: u64,
    /// Issue title
    #[serde(default)]
    pub title: String,
    /// Issue body (the tracker may send null)
    #[serde(default)]
    pub body: Option<String>,
    /// Last update time
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl IssueRecord {
    /// Title and body joined by a newline
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}\n{}", self.title, self.body.as_deref().unwrap_or_default())
    }
}

/// What the tracker returned: issues, or the reason it could not be queried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerOutcome {
    /// The tracker answered with a (possibly empty) list
    Issues(Vec<IssueRecord>),
    /// The tracker was missing, failed, or returned unparsable data
    Unavailable(String),
}
