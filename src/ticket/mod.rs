//! Ticket records and their builder.
//!
//! A ticket is issued exactly once per successful entry, is immutable after
//! construction, and is owned by the caller until presented back at exit.
//! The core keeps no copy - durable ticket storage is out of scope.

mod builder;
mod error;

pub use builder::TicketBuilder;
pub use error::TicketError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The known ticket classes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TicketClass {
    Standard,
    Vip,
}

impl TicketClass {
    /// Get the class name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Vip => "Vip",
        }
    }
}

/// An issued parking ticket.
///
/// The spot number is derived from the inventory's free-count snapshot at
/// admission time; spot identity is tied to the counter rather than to a
/// real per-spot assignment. That is a known simplification of this core,
/// not a bug.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Ticket {
    /// License plate of the admitted vehicle
    pub license_plate: String,
    /// When the vehicle entered
    pub entry_time: DateTime<Utc>,
    /// Assigned spot number, always positive
    pub spot_number: u32,
    /// Ticket class
    pub class: TicketClass,
}

impl Ticket {
    /// Start building a ticket.
    pub fn builder() -> TicketBuilder {
        TicketBuilder::new()
    }
}
