//! Issue tracker port
//!
//! Defines the interface for fetching recent issues.

use super::super::models::TrackerOutcome;

/// Source of issue records for the dead-man switch
///
/// Implementations never fail: a missing tool, a failed query or
/// unparsable output are all reported as [`TrackerOutcome::Unavailable`].
pub trait IssueTracker {
    /// Fetch recent issues, open and closed
    fn recent_issues(&self) -> TrackerOutcome;
}
