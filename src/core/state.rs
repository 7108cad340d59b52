//! Core State trait for control-state machines.
//!
//! Every state machine in the facility (currently the entry/exit gate)
//! represents its position as a small tagged enum implementing this trait.
//! Transition logic lives in a pure transition table on the enum itself,
//! never in per-state virtual dispatch.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for control-machine states.
///
/// States are immutable values describing the current position in a
/// machine. All methods are pure.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for audit-log tracking
/// - `PartialEq`: states must be comparable for transition logic
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so audit
///   logs can be exported
///
/// # Example
///
/// ```rust
/// use lotkeeper::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum LaneLight {
///     Red,
///     Green,
/// }
///
/// impl State for LaneLight {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///         }
///     }
/// }
///
/// assert_eq!(LaneLight::Red.name(), "Red");
/// assert!(!LaneLight::Red.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Cycling machines such as the gate never terminate, so the default
    /// implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
