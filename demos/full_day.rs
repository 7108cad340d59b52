//! A short day at the facility: two observers, a full lot, and a strategy
//! swap between exits.
//!
//! Run with: `cargo run --example full_day`

use chrono::Utc;
use lotkeeper::notify::{Subscriber, SubscriberError};
use lotkeeper::payment::{CashPayment, LegacyAdapter, LegacyRegister};
use lotkeeper::{ParkingFacility, VehicleCategory};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

struct SecurityDesk;

impl Subscriber for SecurityDesk {
    fn receive(&self, message: &str) -> Result<(), SubscriberError> {
        println!("[security] {message}");
        Ok(())
    }
}

struct BillingDesk;

impl Subscriber for BillingDesk {
    fn receive(&self, message: &str) -> Result<(), SubscriberError> {
        println!("[billing] {message}");
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let facility = ParkingFacility::new(2, Arc::new(CashPayment));
    facility.subscribe(Arc::new(SecurityDesk));
    let billing = facility.subscribe(Arc::new(BillingDesk));

    // Morning: two vehicles fill the lot, the third is turned away.
    let car = facility
        .enter(VehicleCategory::Car, "ABC123", Utc::now())
        .expect("entry processing failed");
    let truck = facility
        .enter(VehicleCategory::Truck, "XYZ789", Utc::now())
        .expect("entry processing failed");
    facility
        .enter(VehicleCategory::Motorcycle, "MOP001", Utc::now())
        .expect("entry processing failed");

    println!("free spots at peak: {}", facility.free_spots());

    // The car pays cash on the way out.
    if let Some(ticket) = car.ticket() {
        let ack = facility.exit(ticket, 10.0).expect("exit processing failed");
        println!("car paid {} via {:?}", ack.amount, ack.receipt.map(|r| r.method));
    }

    // Billing goes offline; the truck settles through the legacy register.
    facility.unsubscribe(billing).expect("billing was subscribed");
    facility.set_payment(Arc::new(LegacyAdapter::new(LegacyRegister)));

    if let Some(ticket) = truck.ticket() {
        let ack = facility.exit(ticket, 20.0).expect("exit processing failed");
        println!("truck payment ok: {}", ack.payment_ok);
    }

    println!("free spots at close: {}", facility.free_spots());
}
