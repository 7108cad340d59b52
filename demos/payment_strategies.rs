//! Tour of the payment mechanisms behind the uniform gateway contract,
//! including the latency-bounded wrapper.
//!
//! Run with: `cargo run --example payment_strategies`

use lotkeeper::payment::{
    BoundedPayment, CardPayment, CashPayment, LegacyAdapter, LegacyRegister, MobilePayment,
    PaymentError, PaymentMethod, PaymentReceipt,
};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// A back-end that never answers in time.
struct UnresponsiveBackend;

impl PaymentMethod for UnresponsiveBackend {
    fn name(&self) -> &str {
        "unresponsive"
    }

    fn pay(&self, _amount: f64, _reference: &str) -> Result<PaymentReceipt, PaymentError> {
        thread::sleep(Duration::from_secs(60));
        Err(PaymentError::Declined {
            reason: "woke up far too late".to_string(),
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let methods: Vec<Arc<dyn PaymentMethod>> = vec![
        Arc::new(CashPayment),
        Arc::new(CardPayment),
        Arc::new(MobilePayment),
        Arc::new(LegacyAdapter::new(LegacyRegister)),
    ];

    for method in &methods {
        match method.pay(12.5, "ABC123") {
            Ok(receipt) => println!("{}: charged {} at {}", receipt.method, receipt.amount, receipt.paid_at),
            Err(err) => println!("{}: {err}", method.name()),
        }
    }

    // A stalled back-end cannot hold the gate open once it is bounded.
    let bounded = BoundedPayment::new(Arc::new(UnresponsiveBackend), Duration::from_millis(200));
    match bounded.pay(12.5, "ABC123") {
        Ok(_) => println!("unexpected: the unresponsive back-end answered"),
        Err(err) => println!("bounded gateway gave up: {err}"),
    }
}
