//! Tests for the dead-man switch

use chrono::{DateTime, Duration, TimeZone, Utc};
use guardian::core::models::{NO_ACK_SENTINEL_DAYS, TrackerOutcome};
use guardian::core::services::dead_man::evaluate;

use crate::common::mocks::issue;

const PHRASE: &str = "guardian-ack";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap()
}

fn acked(days_ago: Duration) -> TrackerOutcome {
    let mut record = issue(1, &format!("Weekly check {PHRASE}"), None, "2025-01-01T00:00:00Z");
    record.updated_at = now() - days_ago;
    TrackerOutcome::Issues(vec![record])
}

#[test]
fn no_issues_fires_with_sentinel() {
    let state = evaluate(&TrackerOutcome::Issues(vec![]), PHRASE, 3, now());
    assert_eq!(state.days_since_ack, NO_ACK_SENTINEL_DAYS);
    assert!(state.triggered);
    assert!(state.unavailable.is_none());
}

#[test]
fn unavailable_tracker_fails_secure() {
    let state = evaluate(&TrackerOutcome::Unavailable("gh missing".into()), PHRASE, 3, now());
    assert_eq!(state.days_since_ack, NO_ACK_SENTINEL_DAYS);
    assert!(state.triggered);
    assert_eq!(state.unavailable.as_deref(), Some("gh missing"));
}

#[test]
fn threshold_is_inclusive() {
    let state = evaluate(&acked(Duration::days(3)), PHRASE, 3, now());
    assert_eq!(state.days_since_ack, 3);
    assert!(state.triggered);
}

#[test]
fn partial_days_round_down() {
    let state = evaluate(&acked(Duration::days(3) - Duration::minutes(1)), PHRASE, 3, now());
    assert_eq!(state.days_since_ack, 2);
    assert!(!state.triggered);
    assert_eq!(state.report_line(), "Dead-man: days_since_ack=2 threshold=3 triggered=false");
}

#[test]
fn most_recent_trusted_issue_counts() {
    let old = issue(1, "ack", Some(&format!("signed {PHRASE}")), "2025-06-01T12:00:00Z");
    let recent = issue(2, "status", Some(&format!("{PHRASE} today")), "2025-06-09T12:00:00Z");
    let untrusted = issue(3, "noise", None, "2025-06-10T11:00:00Z");

    let state = evaluate(&TrackerOutcome::Issues(vec![old, recent, untrusted]), PHRASE, 3, now());
    assert_eq!(state.days_since_ack, 1);
    assert!(!state.triggered);
}

#[test]
fn phrase_must_appear_verbatim() {
    let outcome = TrackerOutcome::Issues(vec![issue(
        1,
        "GUARDIAN-ACK",
        None,
        "2025-06-10T00:00:00Z",
    )]);
    let state = evaluate(&outcome, PHRASE, 3, now());
    assert_eq!(state.days_since_ack, NO_ACK_SENTINEL_DAYS);
}

#[test]
fn empty_phrase_trusts_nothing() {
    let state = evaluate(&acked(Duration::hours(1)), "", 3, now());
    assert_eq!(state.days_since_ack, NO_ACK_SENTINEL_DAYS);
    assert!(state.triggered);
}

#[test]
fn zero_threshold_always_fires() {
    let state = evaluate(&acked(Duration::hours(1)), PHRASE, 0, now());
    assert_eq!(state.days_since_ack, 0);
    assert!(state.triggered);
}
