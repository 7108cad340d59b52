//! Fluent builder for ticket records.

use super::error::TicketError;
use super::{Ticket, TicketClass};
use chrono::{DateTime, Utc};

/// Builder for constructing tickets with a fluent API.
///
/// `build` validates that every field was supplied and that the spot
/// number is positive; construction is pure and has no side effects.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use lotkeeper::ticket::{TicketBuilder, TicketClass};
///
/// let ticket = TicketBuilder::standard()
///     .license_plate("ABC123")
///     .entry_time(Utc::now())
///     .spot_number(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(ticket.spot_number, 42);
/// assert_eq!(ticket.class, TicketClass::Standard);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TicketBuilder {
    license_plate: Option<String>,
    entry_time: Option<DateTime<Utc>>,
    spot_number: Option<u32>,
    class: Option<TicketClass>,
}

impl TicketBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the class preset to `Standard`.
    pub fn standard() -> Self {
        Self::new().class(TicketClass::Standard)
    }

    /// Create a builder with the class preset to `Vip`.
    pub fn vip() -> Self {
        Self::new().class(TicketClass::Vip)
    }

    /// Set the license plate (required).
    pub fn license_plate(mut self, plate: impl Into<String>) -> Self {
        self.license_plate = Some(plate.into());
        self
    }

    /// Set the entry timestamp (required).
    pub fn entry_time(mut self, time: DateTime<Utc>) -> Self {
        self.entry_time = Some(time);
        self
    }

    /// Set the assigned spot number (required, must be positive).
    pub fn spot_number(mut self, number: u32) -> Self {
        self.spot_number = Some(number);
        self
    }

    /// Set the ticket class (required).
    pub fn class(mut self, class: TicketClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Build the ticket.
    pub fn build(self) -> Result<Ticket, TicketError> {
        let license_plate = self.license_plate.ok_or(TicketError::MissingLicensePlate)?;
        let entry_time = self.entry_time.ok_or(TicketError::MissingEntryTime)?;
        let spot_number = self.spot_number.ok_or(TicketError::MissingSpotNumber)?;
        let class = self.class.ok_or(TicketError::MissingClass)?;

        if spot_number == 0 {
            return Err(TicketError::InvalidSpotNumber(spot_number));
        }

        Ok(Ticket {
            license_plate,
            entry_time,
            spot_number,
            class,
        })
    }
}
