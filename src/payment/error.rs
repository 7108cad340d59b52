//! Payment error types.

use std::time::Duration;
use thiserror::Error;

/// Errors from the payment gateway.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The amount is not a positive finite value.
    #[error("Payment amount {0} is not a positive value")]
    InvalidAmount(f64),

    /// The back-end refused the payment.
    #[error("Payment declined: {reason}")]
    Declined { reason: String },

    /// The back-end did not answer within the latency budget.
    #[error("Payment did not complete within {budget:?}")]
    TimedOut { budget: Duration },
}
