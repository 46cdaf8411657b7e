//! Dead-man switch evaluation
//!
//! Pure logic: finds the most recent issue carrying the trusted phrase and
//! counts whole days since it was updated. No evidence means the switch
//! fires.

use chrono::{DateTime, Utc};

use crate::core::models::{DeadManState, TrackerOutcome};

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `then` to `now`, rounded down
#[must_use]
pub fn whole_days_between(now: DateTime<Utc>, then: DateTime<Utc>) -> i64 {
    (now - then).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Evaluate the dead-man switch.
///
/// An issue counts when `trusted_phrase` occurs verbatim in its title or
/// body. An empty phrase never matches, so nothing counts.
#[must_use]
pub fn evaluate(
    outcome: &TrackerOutcome,
    trusted_phrase: &str,
    threshold_days: u32,
    now: DateTime<Utc>,
) -> DeadManState {
    let issues = match outcome {
        TrackerOutcome::Issues(issues) => issues,
        TrackerOutcome::Unavailable(reason) => {
            return DeadManState::tracker_unavailable(threshold_days, reason.clone());
        },
    };

    if trusted_phrase.is_empty() {
        return DeadManState::no_evidence(threshold_days);
    }

    issues
        .iter()
        .filter(|issue| issue.text().contains(trusted_phrase))
        .map(|issue| whole_days_between(now, issue.updated_at))
        .min()
        .map_or_else(
            || DeadManState::no_evidence(threshold_days),
            |days| DeadManState::new(days, threshold_days),
        )
}
