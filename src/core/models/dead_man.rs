//! Dead-man switch state

use serde::Serialize;

/// Days reported when no acknowledgment evidence exists.
///
/// Large enough that any sane threshold is exceeded.
pub const NO_ACK_SENTINEL_DAYS: i64 = 9999;

/// Outcome of the dead-man evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeadManState {
    /// Whole days since the most recent trusted acknowledgment
    pub days_since_ack: i64,
    /// Days without acknowledgment before the switch fires
    pub threshold: u32,
    /// Whether the switch fired
    pub triggered: bool,
    /// Why the tracker could not be consulted, if it could not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<String>,
}

impl DeadManState {
    /// Build a state, deriving `triggered` (the threshold itself counts)
    #[must_use]
    pub fn new(days_since_ack: i64, threshold: u32) -> Self {
        Self {
            days_since_ack,
            threshold,
            triggered: days_since_ack >= i64::from(threshold),
            unavailable: None,
        }
    }

    /// State used when there is no evidence at all
    #[must_use]
    pub fn no_evidence(threshold: u32) -> Self {
        Self::new(NO_ACK_SENTINEL_DAYS, threshold)
    }

    /// State used when the tracker could not be consulted
    #[must_use]
    pub fn tracker_unavailable(threshold: u32, reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::no_evidence(threshold)
        }
    }

    /// Format the report line for this state
    #[must_use]
    pub fn report_line(&self) -> String {
        format!(
            "Dead-man: days_since_ack={} threshold={} triggered={}",
            self.days_since_ack, self.threshold, self.triggered
        )
    }
}
