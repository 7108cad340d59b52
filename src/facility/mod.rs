//! The facility facade.
//!
//! Composes the gate controller, spot inventory, ticket issuance,
//! notification bus, and payment gateway into two operations: vehicle
//! entry and vehicle exit. The facade may be called concurrently from
//! several lanes; the inventory is atomic and the one physical gate is
//! mutex-serialized.

mod error;

pub use error::FacilityError;

use crate::core::TransitionLog;
use crate::gate::{GateController, GateState};
use crate::inventory::SpotInventory;
use crate::notify::{NotificationBus, NotifyError, Subscriber, SubscriberId};
use crate::payment::{PaymentMethod, PaymentReceipt};
use crate::spot::ParkingSpot;
use crate::ticket::{Ticket, TicketBuilder};
use crate::vehicle::{Vehicle, VehicleCategory};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Why an entry was refused.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RefusalReason {
    /// No free spots; refusal is the normal outcome, not a failure.
    CapacityExhausted,
}

/// Result of a vehicle entry attempt.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum EntryOutcome {
    /// The vehicle was admitted and issued a ticket.
    Admitted {
        /// The issued ticket, owned by the caller until exit
        ticket: Ticket,
        /// The reserved spot record
        spot: ParkingSpot,
    },
    /// The vehicle was turned away. The gate still cycled.
    Refused {
        /// Why admission was refused
        reason: RefusalReason,
    },
}

impl EntryOutcome {
    /// The issued ticket, if the vehicle was admitted.
    pub fn ticket(&self) -> Option<&Ticket> {
        match self {
            Self::Admitted { ticket, .. } => Some(ticket),
            Self::Refused { .. } => None,
        }
    }

    /// Whether the vehicle was admitted.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted { .. })
    }
}

/// Acknowledgement of a vehicle exit.
///
/// Carries the payment confirmation - boolean success plus the amount and
/// reference used - so callers can log or reconcile it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ExitReceipt {
    /// License plate from the presented ticket
    pub license_plate: String,
    /// Spot returned to the pool
    pub freed_spot: u32,
    /// Amount the payment gateway was asked to charge
    pub amount: f64,
    /// Whether the payment succeeded
    pub payment_ok: bool,
    /// Gateway receipt when the payment succeeded
    pub receipt: Option<PaymentReceipt>,
    /// Gateway failure description when it did not
    pub payment_failure: Option<String>,
    /// When exit processing completed
    pub exited_at: DateTime<Utc>,
}

/// Single entry point composing the facility's subsystems.
///
/// The inventory is an explicitly constructed instance owned here - state
/// is deliberately scoped to the facade, never a hidden process global.
/// The payment strategy is swappable at runtime via [`set_payment`].
///
/// [`set_payment`]: ParkingFacility::set_payment
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use chrono::Utc;
/// use lotkeeper::payment::CashPayment;
/// use lotkeeper::{EntryOutcome, ParkingFacility, VehicleCategory};
///
/// let facility = ParkingFacility::new(1, Arc::new(CashPayment));
///
/// let outcome = facility
///     .enter(VehicleCategory::Car, "ABC123", Utc::now())
///     .unwrap();
/// let ticket = outcome.ticket().cloned().unwrap();
/// assert_eq!(ticket.spot_number, 1);
/// assert_eq!(facility.free_spots(), 0);
///
/// let ack = facility.exit(&ticket, 10.0).unwrap();
/// assert!(ack.payment_ok);
/// assert_eq!(facility.free_spots(), 1);
/// ```
pub struct ParkingFacility {
    inventory: Arc<SpotInventory>,
    gate: Mutex<GateController>,
    bus: NotificationBus,
    payment: RwLock<Arc<dyn PaymentMethod>>,
    spot_template: ParkingSpot,
}

impl ParkingFacility {
    /// Create a facility with `capacity` free spots and a payment method.
    pub fn new(capacity: usize, payment: Arc<dyn PaymentMethod>) -> Self {
        Self {
            inventory: Arc::new(SpotInventory::new(capacity)),
            gate: Mutex::new(GateController::new()),
            bus: NotificationBus::new(),
            payment: RwLock::new(payment),
            spot_template: ParkingSpot::template("standard"),
        }
    }

    /// Process a vehicle entry.
    ///
    /// Drives the gate through a full open step, attempts to reserve a
    /// spot, and on success issues a Standard-class ticket whose spot
    /// number is the inventory's free-count snapshot from before the
    /// decrement. The gate cycle is unconditional: it closes again whether
    /// or not a spot was available.
    pub fn enter(
        &self,
        category: VehicleCategory,
        license_plate: &str,
        now: DateTime<Utc>,
    ) -> Result<EntryOutcome, FacilityError> {
        let vehicle = Vehicle::new(category, license_plate);
        self.gate.lock().open();

        let outcome = match self.inventory.try_reserve() {
            Some(spot_number) => {
                let ticket = TicketBuilder::standard()
                    .license_plate(&vehicle.license_plate)
                    .entry_time(now)
                    .spot_number(spot_number)
                    .build();
                let ticket = match ticket {
                    Ok(ticket) => ticket,
                    Err(err) => {
                        // The reservation must not leak if the ticket is rejected.
                        if let Err(release_err) = self.inventory.release() {
                            tracing::error!(
                                %release_err,
                                "inventory overflow while undoing a reservation"
                            );
                        }
                        self.gate.lock().close();
                        return Err(err.into());
                    }
                };

                let spot = self.spot_template.derive(spot_number, true);
                tracing::info!(
                    category = vehicle.category.as_str(),
                    license_plate = %vehicle.license_plate,
                    spot = spot_number,
                    "vehicle admitted"
                );
                self.bus.publish(&format!(
                    "{} with license plate {} entered, assigned spot {}",
                    vehicle.category, vehicle.license_plate, spot_number
                ));
                EntryOutcome::Admitted { ticket, spot }
            }
            None => {
                tracing::warn!(
                    license_plate = %vehicle.license_plate,
                    "entry denied, no free spots"
                );
                self.bus.publish("no available spots, entry denied");
                EntryOutcome::Refused {
                    reason: RefusalReason::CapacityExhausted,
                }
            }
        };

        self.gate.lock().close();
        Ok(outcome)
    }

    /// Process a vehicle exit against a presented ticket.
    ///
    /// Drives the gate open, invokes the payment gateway, releases the
    /// spot, publishes the exit event, and closes the gate.
    ///
    /// Current policy: the spot is released even when payment fails; the
    /// failure is reported in the returned receipt rather than blocking
    /// the exit. An inventory overflow on release is a double-release bug
    /// and aborts with an error after the gate has closed.
    pub fn exit(&self, ticket: &Ticket, amount: f64) -> Result<ExitReceipt, FacilityError> {
        self.gate.lock().open();

        let method = Arc::clone(&self.payment.read());
        let payment = method.pay(amount, &ticket.license_plate);
        if let Err(err) = &payment {
            tracing::warn!(
                license_plate = %ticket.license_plate,
                %err,
                "payment failed, spot released regardless"
            );
        }

        let free_now = match self.inventory.release() {
            Ok(free) => free,
            Err(err) => {
                tracing::error!(%err, "inventory overflow on exit, aborting");
                self.gate.lock().close();
                return Err(err.into());
            }
        };

        self.bus.publish(&format!(
            "vehicle with license plate {} exited, spot {} is now available",
            ticket.license_plate, ticket.spot_number
        ));
        tracing::info!(
            license_plate = %ticket.license_plate,
            spot = ticket.spot_number,
            free = free_now,
            "vehicle exited"
        );

        self.gate.lock().close();

        let (payment_ok, receipt, payment_failure) = match payment {
            Ok(receipt) => (true, Some(receipt), None),
            Err(err) => (false, None, Some(err.to_string())),
        };
        Ok(ExitReceipt {
            license_plate: ticket.license_plate.clone(),
            freed_spot: ticket.spot_number,
            amount,
            payment_ok,
            receipt,
            payment_failure,
            exited_at: Utc::now(),
        })
    }

    /// Swap the payment strategy for all future exits.
    pub fn set_payment(&self, payment: Arc<dyn PaymentMethod>) {
        *self.payment.write() = payment;
    }

    /// Register an event subscriber.
    pub fn subscribe(&self, subscriber: Arc<dyn Subscriber>) -> SubscriberId {
        self.bus.subscribe(subscriber)
    }

    /// Remove an event subscriber; strict about unknown handles.
    pub fn unsubscribe(&self, id: SubscriberId) -> Result<(), NotifyError> {
        self.bus.unsubscribe(id)
    }

    /// Current number of free spots.
    pub fn free_spots(&self) -> usize {
        self.inventory.free_count()
    }

    /// Total number of spots.
    pub fn capacity(&self) -> usize {
        self.inventory.capacity()
    }

    /// Current gate position.
    pub fn gate_state(&self) -> GateState {
        self.gate.lock().state()
    }

    /// Snapshot of the gate's transition audit log.
    pub fn gate_log(&self) -> TransitionLog<GateState> {
        self.gate.lock().log().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::SubscriberError;
    use crate::payment::{CashPayment, PaymentError};
    use parking_lot::Mutex as PlMutex;

    #[derive(Default)]
    struct Recorder {
        messages: PlMutex<Vec<String>>,
    }

    impl Recorder {
        fn messages(&self) -> Vec<String> {
            self.messages.lock().clone()
        }
    }

    impl Subscriber for Recorder {
        fn receive(&self, message: &str) -> Result<(), SubscriberError> {
            self.messages.lock().push(message.to_string());
            Ok(())
        }
    }

    struct RefusingGateway;

    impl PaymentMethod for RefusingGateway {
        fn name(&self) -> &str {
            "refusing"
        }

        fn pay(&self, _amount: f64, _reference: &str) -> Result<PaymentReceipt, PaymentError> {
            Err(PaymentError::Declined {
                reason: "insufficient funds".to_string(),
            })
        }
    }

    fn facility(capacity: usize) -> ParkingFacility {
        ParkingFacility::new(capacity, Arc::new(CashPayment))
    }

    #[test]
    fn entry_issues_standard_ticket_from_snapshot() {
        let facility = facility(3);
        let outcome = facility
            .enter(VehicleCategory::Car, "ABC123", Utc::now())
            .unwrap();

        let ticket = outcome.ticket().unwrap();
        assert_eq!(ticket.spot_number, 3);
        assert_eq!(ticket.license_plate, "ABC123");
        assert_eq!(facility.free_spots(), 2);
    }

    #[test]
    fn admitted_spot_derives_from_the_template() {
        let facility = facility(1);
        let outcome = facility
            .enter(VehicleCategory::Car, "ABC123", Utc::now())
            .unwrap();

        match outcome {
            EntryOutcome::Admitted { spot, .. } => {
                assert_eq!(spot.number, 1);
                assert!(spot.reserved);
                assert_eq!(spot.size_class, "standard");
            }
            EntryOutcome::Refused { .. } => panic!("expected admission"),
        }
    }

    #[test]
    fn full_facility_refuses_without_mutation() {
        let facility = facility(1);
        facility
            .enter(VehicleCategory::Car, "A1", Utc::now())
            .unwrap();

        let outcome = facility
            .enter(VehicleCategory::Truck, "B2", Utc::now())
            .unwrap();

        assert_eq!(
            outcome,
            EntryOutcome::Refused {
                reason: RefusalReason::CapacityExhausted
            }
        );
        assert_eq!(facility.free_spots(), 0);
    }

    #[test]
    fn gate_cycles_fully_even_on_refusal() {
        let facility = facility(0);
        facility
            .enter(VehicleCategory::Car, "A1", Utc::now())
            .unwrap();

        assert_eq!(facility.gate_state(), GateState::Closed);
        assert_eq!(facility.gate_log().len(), 4);
    }

    #[test]
    fn exit_restores_the_spot_and_acknowledges() {
        let facility = facility(2);
        let outcome = facility
            .enter(VehicleCategory::Car, "ABC123", Utc::now())
            .unwrap();
        let ticket = outcome.ticket().cloned().unwrap();

        let ack = facility.exit(&ticket, 10.0).unwrap();

        assert!(ack.payment_ok);
        assert_eq!(ack.freed_spot, ticket.spot_number);
        assert_eq!(ack.amount, 10.0);
        assert_eq!(facility.free_spots(), 2);
    }

    #[test]
    fn payment_failure_still_releases_the_spot() {
        let facility = ParkingFacility::new(1, Arc::new(RefusingGateway));
        let outcome = facility
            .enter(VehicleCategory::Car, "ABC123", Utc::now())
            .unwrap();
        let ticket = outcome.ticket().cloned().unwrap();

        let ack = facility.exit(&ticket, 10.0).unwrap();

        assert!(!ack.payment_ok);
        assert!(ack.receipt.is_none());
        assert!(ack.payment_failure.unwrap().contains("insufficient funds"));
        assert_eq!(facility.free_spots(), 1);
        assert_eq!(facility.gate_state(), GateState::Closed);
    }

    #[test]
    fn exit_without_entry_is_a_double_release() {
        let facility = facility(1);
        let ticket = Ticket::builder()
            .license_plate("GHOST")
            .entry_time(Utc::now())
            .spot_number(1)
            .class(crate::ticket::TicketClass::Standard)
            .build()
            .unwrap();

        let err = facility.exit(&ticket, 5.0).unwrap_err();
        assert!(matches!(err, FacilityError::Inventory(_)));
        // The gate still finished its cycle.
        assert_eq!(facility.gate_state(), GateState::Closed);
    }

    #[test]
    fn events_reach_subscribers_on_entry_and_exit() {
        let facility = facility(1);
        let recorder = Arc::new(Recorder::default());
        facility.subscribe(recorder.clone());

        let outcome = facility
            .enter(VehicleCategory::Car, "ABC123", Utc::now())
            .unwrap();
        let ticket = outcome.ticket().cloned().unwrap();
        facility.exit(&ticket, 10.0).unwrap();

        let messages = recorder.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("entered"));
        assert!(messages[0].contains("spot 1"));
        assert!(messages[1].contains("exited"));
        assert!(messages[1].contains("spot 1"));
    }

    #[test]
    fn unsubscribed_observer_misses_later_events() {
        let facility = facility(2);
        let recorder = Arc::new(Recorder::default());
        let id = facility.subscribe(recorder.clone());

        facility
            .enter(VehicleCategory::Car, "A1", Utc::now())
            .unwrap();
        facility.unsubscribe(id).unwrap();
        facility
            .enter(VehicleCategory::Car, "B2", Utc::now())
            .unwrap();

        assert_eq!(recorder.messages().len(), 1);
    }

    #[test]
    fn payment_strategy_swaps_at_runtime() {
        let facility = facility(2);
        let outcome = facility
            .enter(VehicleCategory::Car, "ABC123", Utc::now())
            .unwrap();
        let ticket = outcome.ticket().cloned().unwrap();

        facility.set_payment(Arc::new(RefusingGateway));
        let ack = facility.exit(&ticket, 10.0).unwrap();

        assert!(!ack.payment_ok);
    }

    #[test]
    fn entry_records_the_supplied_timestamp() {
        let facility = facility(1);
        let now = Utc::now();
        let outcome = facility
            .enter(VehicleCategory::Motorcycle, "M1", now)
            .unwrap();

        assert_eq!(outcome.ticket().unwrap().entry_time, now);
    }
}
