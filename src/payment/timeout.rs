//! Latency bound for payment calls.
//!
//! The payment gateway is the only external dependency in the entry/exit
//! path, and the gate stays open while it runs. Wrapping a method in
//! [`BoundedPayment`] guarantees the facade gets an answer within the
//! budget, so a stalled back-end cannot hold the gate open indefinitely.

use super::error::PaymentError;
use super::{PaymentMethod, PaymentReceipt};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// A payment method with a latency budget.
///
/// The inner call runs on a worker thread; if it has not answered within
/// the budget the wrapper reports [`PaymentError::TimedOut`]. A result
/// arriving after that is discarded - the charge outcome of a timed-out
/// call is unknown to the facility.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
/// use lotkeeper::payment::{BoundedPayment, CardPayment, PaymentMethod};
///
/// let gateway = BoundedPayment::new(Arc::new(CardPayment), Duration::from_secs(5));
/// assert!(gateway.pay(8.0, "ABC123").is_ok());
/// ```
pub struct BoundedPayment {
    inner: Arc<dyn PaymentMethod>,
    budget: Duration,
}

impl BoundedPayment {
    /// Wrap a payment method with a latency budget.
    pub fn new(inner: Arc<dyn PaymentMethod>, budget: Duration) -> Self {
        Self { inner, budget }
    }
}

impl PaymentMethod for BoundedPayment {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn pay(&self, amount: f64, reference: &str) -> Result<PaymentReceipt, PaymentError> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let reference = reference.to_string();

        thread::spawn(move || {
            // The receiver may have given up; a late send just fails.
            let _ = tx.send(inner.pay(amount, &reference));
        });

        match rx.recv_timeout(self.budget) {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    method = self.inner.name(),
                    budget = ?self.budget,
                    "payment call exceeded its latency budget"
                );
                Err(PaymentError::TimedOut {
                    budget: self.budget,
                })
            }
        }
    }
}
