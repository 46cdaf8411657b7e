//! Business logic services
//!
//! Orchestration logic over the domain models. Services reach the outside
//! world only through the port traits.
//!
//! - [`candidates`] - Generate name candidates from a hint
//! - [`resolver`] - Verify candidates against the code host
//! - [`prober`] - Classify endpoint health
//! - [`remediator`] - Bootstrap and redeploy actions
//! - [`dead_man`] - Days since the last trusted acknowledgment
//! - [`guardian`] - One full pass over all of the above

pub mod candidates;
pub mod dead_man;
pub mod guardian;
pub mod prober;
pub mod remediator;
pub mod resolver;

pub use candidates::{CandidateGenerator, Dedup, case_variants, hyphen_variants};
pub use dead_man::{evaluate, whole_days_between};
pub use guardian::{API_LABEL, Guardian, UI_LABEL};
pub use prober::{HEALTH_TOKENS, HealthProber, body_reports_healthy};
pub use remediator::{BOOTSTRAP_REASON, MESSAGE_PREVIEW_CHARS, Remediator, truncate_chars};
pub use resolver::{DEFAULT_CODE_HOST, DEFAULT_RESOLVE_TIMEOUT, RepoResolver};
