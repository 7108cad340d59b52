//! Facade error types.

use crate::inventory::InventoryError;
use crate::ticket::TicketError;
use thiserror::Error;

/// Errors surfaced by facility operations.
///
/// Refusals (no free spots, payment declined) are not errors; they are
/// reported in the operation's result value. `Err` is reserved for
/// validation failures and invariant violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacilityError {
    /// Ticket construction input was malformed.
    #[error(transparent)]
    Ticket(#[from] TicketError),

    /// The inventory detected a double release.
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
