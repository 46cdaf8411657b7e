//! GitHub CLI issue tracker
//!
//! Implements `IssueTracker` by shelling out to `gh issue list`. Every
//! failure mode (no `gh`, a failing command, bad JSON) becomes
//! `TrackerOutcome::Unavailable`.

use std::process::Command;

use log::debug;

use crate::core::models::{IssueRecord, TrackerOutcome};
use crate::core::ports::IssueTracker;

/// Issues fetched per query
pub const ISSUE_LIMIT: u32 = 100;

/// Fields requested from `gh`
const ISSUE_FIELDS: &str = "title,updatedAt,number,body";

/// Issue tracker backed by the `gh` command
#[derive(Debug, Clone)]
pub struct GhIssueTracker {
    program: String,
    repo: Option<String>,
    limit: u32,
}

impl Default for GhIssueTracker {
    fn default() -> Self {
        Self::new(None)
    }
}

impl GhIssueTracker {
    /// Query the given `owner/name` repository, or the current one when `None`
    #[must_use]
    pub fn new(repo: Option<String>) -> Self {
        Self {
            program: "gh".to_string(),
            repo,
            limit: ISSUE_LIMIT,
        }
    }

    /// Use another executable (for wrappers and tests)
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments passed to the issue query
    #[must_use]
    pub fn list_args(&self) -> Vec<String> {
        let mut args = vec![
            "issue".to_string(),
            "list".to_string(),
            "--limit".to_string(),
            self.limit.to_string(),
            "--state".to_string(),
            "all".to_string(),
            "--json".to_string(),
            ISSUE_FIELDS.to_string(),
        ];
        if let Some(repo) = &self.repo {
            args.push("--repo".to_string());
            args.push(repo.clone());
        }
        args
    }

    fn is_installed(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .output()
            .is_ok_and(|o| o.status.success())
    }
}

/// Parse the JSON array printed by `gh issue list --json ...`
pub fn parse_issue_list(json: &str) -> Result<Vec<IssueRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

impl IssueTracker for GhIssueTracker {
    fn recent_issues(&self) -> TrackerOutcome {
        if !self.is_installed() {
            return TrackerOutcome::Unavailable(format!("{} is not installed", self.program));
        }

        let output = match Command::new(&self.program).args(self.list_args()).output() {
            Ok(output) => output,
            Err(e) => return TrackerOutcome::Unavailable(format!("failed to run {}: {e}", self.program)),
        };
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return TrackerOutcome::Unavailable(format!(
                "{} issue list failed: {}",
                self.program,
                stderr.trim()
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        match parse_issue_list(&stdout) {
            Ok(issues) => {
                debug!("fetched {} issues", issues.len());
                TrackerOutcome::Issues(issues)
            },
            Err(e) => TrackerOutcome::Unavailable(format!("unparsable issue list: {e}")),
        }
    }
}
