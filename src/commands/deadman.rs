//! Deadman command - acknowledgment check only

use chrono::Utc;
use guardian::core::ports::IssueTracker;
use guardian::core::services::dead_man;
use guardian::output::{DeadManResult, OutputMode};

use super::Context;

/// Evaluate the dead-man switch against the issue tracker
pub fn deadman(ctx: &Context, mode: OutputMode) {
    let outcome = ctx.tracker.recent_issues();
    let state = dead_man::evaluate(
        &outcome,
        &ctx.config.trusted_phrase,
        ctx.config.days_no_ack,
        Utc::now(),
    );
    DeadManResult { state }.render(mode);
}
