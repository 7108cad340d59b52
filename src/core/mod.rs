//! Core state-machine substrate.
//!
//! This module contains the pure pieces shared by the facility's control
//! machines:
//! - State definitions via the `State` trait
//! - Immutable transition audit logging
//!
//! Nothing here performs I/O; side effects (gate narratives, notifications)
//! live with the components that own them.

mod log;
mod state;

pub use log::{TransitionLog, TransitionRecord};
pub use state::State;
