//! Health state model

use serde::Serialize;

use super::display_code;

/// How a probed endpoint is judged healthy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCheck {
    /// Any success or redirect status is healthy
    Reachable,
    /// A success or redirect status whose body also says "ok" or "healthy"
    BodyToken,
}

/// Result of probing one endpoint during a pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthState {
    /// URL that was probed (empty when not configured)
    pub target: String,
    /// HTTP status, if the request completed
    pub status_code: Option<u16>,
    /// Whether the endpoint is considered healthy
    pub ok: bool,
    /// Failure text or configuration note
    pub detail: String,
    /// False when no URL was configured for this endpoint
    pub configured: bool,
}

impl HealthState {
    /// State for an endpoint whose URL setting is absent
    #[must_use]
    pub fn not_configured(setting: &str) -> Self {
        Self {
            target: String::new(),
            status_code: None,
            ok: false,
            detail: format!("no {setting} (not configured)"),
            configured: false,
        }
    }

    /// Format the report line for this state
    #[must_use]
    pub fn report_line(&self, label: &str) -> String {
        let target = if self.target.is_empty() { "-" } else { self.target.as_str() };
        let mut line =
            format!("{label}: {target} code={} ok={}", display_code(self.status_code), self.ok);
        if !self.ok && !self.detail.is_empty() {
            line.push_str(" detail=");
            line.push_str(&self.detail);
        }
        line
    }
}
