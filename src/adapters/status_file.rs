//! Dated Markdown status reports
//!
//! Implements `ReportSink` by writing `docs/status/YYYY-MM-DD.md`. A second
//! pass on the same UTC day replaces that day's file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use log::info;

use crate::core::models::GuardianReport;
use crate::core::ports::ReportSink;
use crate::paths;

/// Writes one Markdown status file per UTC day
#[derive(Debug, Clone)]
pub struct StatusFileWriter {
    root: PathBuf,
}

impl StatusFileWriter {
    /// Write reports under `root/docs/status/`
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

/// Render a report as the status file's Markdown
#[must_use]
pub fn render_markdown(report: &GuardianReport, date: NaiveDate) -> String {
    format!(
        "# Guardian Status — {} UTC\n\n```\n{report}\n```\n",
        date.format("%Y-%m-%d")
    )
}

impl ReportSink for StatusFileWriter {
    fn persist(&self, report: &GuardianReport, date: NaiveDate) -> anyhow::Result<PathBuf> {
        let dir = paths::status_dir(&self.root);
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

        let path = paths::status_file(&self.root, date);
        fs::write(&path, render_markdown(report, date))
            .with_context(|| format!("writing {}", path.display()))?;
        info!("status written to {}", path.display());
        Ok(path)
    }
}
