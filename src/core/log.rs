//! Transition audit log.
//!
//! Every gate transition is announced for auditing; this module holds the
//! in-memory record of those announcements. The log is immutable - `record`
//! returns a new log with the transition appended.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// Records are immutable values describing a move from one state to
/// another at a specific point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered audit log of state transitions.
///
/// # Example
///
/// ```rust
/// use lotkeeper::core::{State, TransitionLog, TransitionRecord};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Idle,
///     Busy,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Busy => "Busy",
///         }
///     }
/// }
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: Phase::Idle,
///     to: Phase::Busy,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.path(), vec![&Phase::Idle, &Phase::Busy]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// The existing log is left untouched.
    pub fn record(&self, record: TransitionRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first recorded `from`
    /// state, then the `to` state of each transition.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded transitions in order.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether anything has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Stopped,
        Moving,
        Jammed,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Stopped => "Stopped",
                Self::Moving => "Moving",
                Self::Jammed => "Jammed",
            }
        }
    }

    fn record(from: TestState, to: TestState) -> TransitionRecord<TestState> {
        TransitionRecord {
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log: TransitionLog<TestState> = TransitionLog::new();
        assert!(log.is_empty());
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let log = TransitionLog::new();
        let new_log = log.record(record(TestState::Stopped, TestState::Moving));

        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn path_returns_state_sequence() {
        let log = TransitionLog::new()
            .record(record(TestState::Stopped, TestState::Moving))
            .record(record(TestState::Moving, TestState::Jammed));

        let path = log.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Stopped);
        assert_eq!(path[1], &TestState::Moving);
        assert_eq!(path[2], &TestState::Jammed);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let log = TransitionLog::new().record(record(TestState::Stopped, TestState::Moving));

        std::thread::sleep(Duration::from_millis(10));

        let log = log.record(record(TestState::Moving, TestState::Stopped));

        let duration = log.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn single_record_has_duration_zero() {
        let timestamp = Utc::now();
        let log = TransitionLog::new().record(TransitionRecord {
            from: TestState::Stopped,
            to: TestState::Moving,
            timestamp,
        });

        assert_eq!(log.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn log_serializes_correctly() {
        let log = TransitionLog::new().record(record(TestState::Stopped, TestState::Moving));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TransitionLog<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(log.len(), deserialized.len());
    }
}
