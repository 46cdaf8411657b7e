//! Report sink port
//!
//! Defines where a finished report goes.

use std::path::PathBuf;

use chrono::NaiveDate;

use super::super::models::GuardianReport;

/// Persists the report of a pass
pub trait ReportSink {
    /// Persist the whole report for the given UTC date
    ///
    /// Returns where the report was written.
    fn persist(&self, report: &GuardianReport, date: NaiveDate) -> anyhow::Result<PathBuf>;
}
