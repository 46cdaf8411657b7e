//! Domain models for the guardian
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`AliasConfig`] - How loose repository hints map to real names
//! - [`HealthState`] - Result of probing an endpoint
//! - [`BootstrapOutcome`] / [`RedeployOutcome`] - What remediation did
//! - [`DeadManState`] - Days since the last trusted acknowledgment
//! - [`GuardianReport`] - Ordered line log of a pass

mod alias;
mod dead_man;
mod health;
mod hooks;
mod issue;
mod pass;
mod remediation;
mod report;
mod resolution;

pub use alias::{
    AliasConfig, AliasOverlay, AliasRules, CaseStyle, DEFAULT_HYPHEN_STYLES, DEFAULT_ORG,
    DEFAULT_PREFIXES, OrgAliases, OrgOverlay, title_case,
};
pub use dead_man::{DeadManState, NO_ACK_SENTINEL_DAYS};
pub use health::{HealthCheck, HealthState};
pub use hooks::{DeployHooks, HookProvider};
pub use issue::{IssueRecord, TrackerOutcome};
pub use pass::PassOutcome;
pub use remediation::{BootstrapOutcome, HookAttempt, RedeployOutcome, display_code};
pub use report::GuardianReport;
pub use resolution::{RepoResolution, ResolutionResult};
