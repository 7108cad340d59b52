//! Lotkeeper: a control core for a single-gate parking facility.
//!
//! The crate models parking admission control over a finite spot pool:
//! one entry/exit gate driven by a four-state machine, a shared spot
//! inventory with atomic reserve/release, ticket issuance, event fan-out
//! to subscribers, and a pluggable payment gateway - all composed by the
//! [`ParkingFacility`] facade.
//!
//! It is a library-level component meant to sit behind an HTTP/RPC layer
//! or a CLI. It decides *whether* an operation may proceed and reports
//! *what happened*; pricing, vehicle classification, rendering, and
//! durable storage belong to its callers.
//!
//! # Core Concepts
//!
//! - **Admission control**: [`SpotInventory`] hands out at most `capacity`
//!   reservations, atomically, with no overbooking under concurrent entries
//! - **Gate cycle**: every entry or exit walks the gate through
//!   Closed → Opening → Open → Closing → Closed, unconditionally
//! - **Fan-out**: the [`NotificationBus`] delivers each event to every
//!   subscriber, isolating per-subscriber failures
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::Utc;
//! use lotkeeper::payment::CashPayment;
//! use lotkeeper::{EntryOutcome, ParkingFacility, VehicleCategory};
//!
//! let facility = ParkingFacility::new(2, Arc::new(CashPayment));
//!
//! let outcome = facility
//!     .enter(VehicleCategory::Car, "ABC123", Utc::now())
//!     .unwrap();
//!
//! match outcome {
//!     EntryOutcome::Admitted { ticket, .. } => {
//!         assert_eq!(ticket.spot_number, 2);
//!         let ack = facility.exit(&ticket, 10.0).unwrap();
//!         assert!(ack.payment_ok);
//!     }
//!     EntryOutcome::Refused { .. } => unreachable!("two spots were free"),
//! }
//! ```

pub mod core;
pub mod facility;
pub mod gate;
pub mod inventory;
pub mod notify;
pub mod payment;
pub mod spot;
pub mod ticket;
pub mod vehicle;

// Re-export commonly used types
pub use facility::{EntryOutcome, ExitReceipt, FacilityError, ParkingFacility, RefusalReason};
pub use gate::{GateController, GateState};
pub use inventory::SpotInventory;
pub use notify::{NotificationBus, Subscriber, SubscriberId};
pub use payment::{PaymentMethod, PaymentReceipt};
pub use spot::ParkingSpot;
pub use ticket::{Ticket, TicketBuilder, TicketClass};
pub use vehicle::{Vehicle, VehicleCategory};
