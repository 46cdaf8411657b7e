//! Structured outcome of one guardian pass

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
    BootstrapOutcome, DeadManState, GuardianReport, HealthState, RedeployOutcome, RepoResolution,
};

/// Everything one pass observed and did, plus the line report
#[derive(Debug, Clone, Serialize)]
pub struct PassOutcome {
    /// When the pass started
    pub started_at: DateTime<Utc>,
    /// Resolution attempt per tracked repository hint
    pub resolutions: Vec<RepoResolution>,
    /// UI health
    pub ui: HealthState,
    /// API health
    pub api: HealthState,
    /// Admin bootstrap step
    pub bootstrap: BootstrapOutcome,
    /// Redeploy step
    pub redeploy: RedeployOutcome,
    /// Dead-man switch
    pub dead_man: DeadManState,
    /// Ordered report lines
    pub report: GuardianReport,
}

impl PassOutcome {
    /// Whether both endpoints were healthy
    #[must_use]
    pub const fn healthy(&self) -> bool {
        self.ui.ok && self.api.ok
    }
}
