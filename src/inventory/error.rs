//! Inventory error types.

use thiserror::Error;

/// Errors from spot inventory mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    /// A release would push the free count past capacity.
    ///
    /// This indicates a caller-side bug (double release) and is never
    /// silently clamped.
    #[error("Release would exceed capacity of {capacity} spots (double release?)")]
    Overflow { capacity: usize },
}
