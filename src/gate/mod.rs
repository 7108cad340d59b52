//! Entry/exit gate state machine.
//!
//! One controller drives one physical gate through a fixed four-state
//! cycle. The transition table below is the complete authority - exactly
//! one outgoing transition per state, no branching, no terminal state:
//!
//! ```text
//! Closed  --request--> Opening
//! Opening --request--> Open
//! Open    --request--> Closing
//! Closing --request--> Closed
//! ```
//!
//! Lanes sharing one gate must serialize their requests; the facade wraps
//! the controller in a mutex for that reason.

use crate::core::{State, TransitionLog, TransitionRecord};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Position of the physical gate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GateState {
    Closed,
    Opening,
    Open,
    Closing,
}

impl GateState {
    /// The transition table: the single successor of each state.
    pub fn next(self) -> GateState {
        match self {
            Self::Closed => Self::Opening,
            Self::Opening => Self::Open,
            Self::Open => Self::Closing,
            Self::Closing => Self::Closed,
        }
    }

    /// Narrative announced when a request arrives in this state.
    fn narrative(self) -> &'static str {
        match self {
            Self::Closed => "gate is closed, initiating opening process",
            Self::Opening => "gate is opening, now fully open",
            Self::Open => "gate is open, allowing vehicle passage",
            Self::Closing => "gate is closing, now fully closed",
        }
    }
}

impl State for GateState {
    fn name(&self) -> &str {
        match self {
            Self::Closed => "Closed",
            Self::Opening => "Opening",
            Self::Open => "Open",
            Self::Closing => "Closing",
        }
    }
}

/// Controller for one physical gate.
///
/// Starts `Closed` and cycles indefinitely. Every transition is announced
/// through `tracing` and recorded in an audit log. The immediately
/// preceding state is remembered for diagnostics only; it plays no part in
/// transition logic.
///
/// # Example
///
/// ```rust
/// use lotkeeper::gate::{GateController, GateState};
///
/// let mut gate = GateController::new();
/// assert_eq!(gate.state(), GateState::Closed);
///
/// assert_eq!(gate.request(), GateState::Opening);
/// assert_eq!(gate.request(), GateState::Open);
/// assert_eq!(gate.previous_state(), Some(GateState::Opening));
/// ```
#[derive(Debug)]
pub struct GateController {
    current: GateState,
    previous: Option<GateState>,
    log: TransitionLog<GateState>,
}

impl Default for GateController {
    fn default() -> Self {
        Self::new()
    }
}

impl GateController {
    /// Create a controller with the gate closed.
    pub fn new() -> Self {
        Self {
            current: GateState::Closed,
            previous: None,
            log: TransitionLog::new(),
        }
    }

    /// Current gate position.
    pub fn state(&self) -> GateState {
        self.current
    }

    /// The state the gate was in before the last request, if any.
    pub fn previous_state(&self) -> Option<GateState> {
        self.previous
    }

    /// Advance the gate one transition.
    ///
    /// Always succeeds and returns the new state. The transition narrative
    /// is announced for auditing and appended to the log.
    pub fn request(&mut self) -> GateState {
        let from = self.current;
        let to = from.next();

        tracing::info!(from = from.name(), to = to.name(), "{}", from.narrative());
        self.log = self.log.record(TransitionRecord {
            from,
            to,
            timestamp: Utc::now(),
        });
        self.previous = Some(from);
        self.current = to;
        to
    }

    /// Drive the gate forward until it is fully open.
    pub fn open(&mut self) {
        while self.current != GateState::Open {
            self.request();
        }
    }

    /// Drive the gate forward until it is fully closed.
    pub fn close(&mut self) {
        while self.current != GateState::Closed {
            self.request();
        }
    }

    /// The audit log of every transition so far.
    pub fn log(&self) -> &TransitionLog<GateState> {
        &self.log
    }
}
