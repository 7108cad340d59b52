//! Ticket construction errors.

use thiserror::Error;

/// Errors from building a ticket with malformed or missing input.
///
/// All variants are local validation failures, rejected before any facility
/// state is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicketError {
    #[error("License plate not specified. Call .license_plate(plate) before .build()")]
    MissingLicensePlate,

    #[error("Entry time not specified. Call .entry_time(time) before .build()")]
    MissingEntryTime,

    #[error("Spot number not specified. Call .spot_number(n) before .build()")]
    MissingSpotNumber,

    #[error("Ticket class not specified. Call .class(class) before .build()")]
    MissingClass,

    #[error("Spot number must be positive, got {0}")]
    InvalidSpotNumber(u32),
}
