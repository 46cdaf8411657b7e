//! Remediation outcomes
//!
//! Records what the remediator did (or deliberately did not do) so the
//! report can tell "healthy, nothing to do" apart from "cannot act".

use serde::Serialize;

use super::HookProvider;

/// Outcome of the admin bootstrap step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BootstrapOutcome {
    /// The API is healthy
    NotNeeded,
    /// The API is unhealthy but no API base is configured
    SkippedNoApiBase,
    /// A bootstrap request was sent
    Attempted {
        /// HTTP status, if the request completed
        code: Option<u16>,
        /// Response body or failure text, truncated
        message: String,
    },
}

impl BootstrapOutcome {
    /// Format the report line for this outcome
    #[must_use]
    pub fn report_line(&self) -> String {
        match self {
            Self::NotNeeded => "ADMIN bootstrap: not needed".to_string(),
            Self::SkippedNoApiBase => "ADMIN bootstrap: skipped (no API_BASE)".to_string(),
            Self::Attempted { code, message } => {
                format!("ADMIN bootstrap: code={} msg={message}", display_code(*code))
            },
        }
    }
}

/// One redeploy webhook call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookAttempt {
    /// Provider whose hook was called
    pub provider: HookProvider,
    /// HTTP status, if the request completed
    pub code: Option<u16>,
    /// Failure text when the request did not complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HookAttempt {
    /// Format the report line for this attempt
    #[must_use]
    pub fn report_line(&self) -> String {
        format!("{} redeploy: code={}", self.provider.label(), display_code(self.code))
    }
}

/// Outcome of the redeploy step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "attempts", rename_all = "snake_case")]
pub enum RedeployOutcome {
    /// UI and API are both healthy
    NotNeeded,
    /// At least one endpoint is unhealthy; every configured hook was called
    Triggered(Vec<HookAttempt>),
}

impl RedeployOutcome {
    /// Format the report lines for this outcome, one per attempt
    #[must_use]
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            Self::NotNeeded => vec!["Redeploy: not needed".to_string()],
            Self::Triggered(attempts) if attempts.is_empty() => {
                vec!["Redeploy: no deploy hooks configured".to_string()]
            },
            Self::Triggered(attempts) => attempts.iter().map(HookAttempt::report_line).collect(),
        }
    }
}

/// Render an optional status code for report lines
#[must_use]
pub fn display_code(code: Option<u16>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}
