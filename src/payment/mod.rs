//! Payment gateway.
//!
//! One uniform contract, [`PaymentMethod`], over several mechanisms: cash,
//! card, and mobile directly, plus an adapter for a legacy back-end that
//! expects account identifiers instead of vehicle references. The facade
//! holds one method at a time and may swap it at runtime.

mod error;
pub mod legacy;
pub mod timeout;

pub use error::PaymentError;
pub use legacy::{LegacyAdapter, LegacyProcessor, LegacyRegister};
pub use timeout::BoundedPayment;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform payment capability.
///
/// `reference` is the vehicle reference (license plate) the charge is
/// attributed to; the core treats it as opaque.
pub trait PaymentMethod: Send + Sync {
    /// Short mechanism name for logs and receipts.
    fn name(&self) -> &str;

    /// Charge `amount` against `reference`.
    fn pay(&self, amount: f64, reference: &str) -> Result<PaymentReceipt, PaymentError>;
}

/// Confirmation of a completed payment, suitable for logging by a caller.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Mechanism that took the payment
    pub method: String,
    /// Amount charged
    pub amount: f64,
    /// Vehicle reference the charge was attributed to
    pub reference: String,
    /// When the charge completed
    pub paid_at: DateTime<Utc>,
}

pub(crate) fn validate_amount(amount: f64) -> Result<(), PaymentError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(PaymentError::InvalidAmount(amount))
    }
}

fn receipt(method: &str, amount: f64, reference: &str) -> PaymentReceipt {
    PaymentReceipt {
        method: method.to_string(),
        amount,
        reference: reference.to_string(),
        paid_at: Utc::now(),
    }
}

/// Cash payment taken at the booth.
#[derive(Clone, Copy, Debug, Default)]
pub struct CashPayment;

impl PaymentMethod for CashPayment {
    fn name(&self) -> &str {
        "cash"
    }

    fn pay(&self, amount: f64, reference: &str) -> Result<PaymentReceipt, PaymentError> {
        validate_amount(amount)?;
        tracing::info!(amount, reference, "processing cash payment");
        Ok(receipt(self.name(), amount, reference))
    }
}

/// Credit/debit card payment.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardPayment;

impl PaymentMethod for CardPayment {
    fn name(&self) -> &str {
        "card"
    }

    fn pay(&self, amount: f64, reference: &str) -> Result<PaymentReceipt, PaymentError> {
        validate_amount(amount)?;
        tracing::info!(amount, reference, "processing card payment");
        Ok(receipt(self.name(), amount, reference))
    }
}

/// Mobile wallet payment.
#[derive(Clone, Copy, Debug, Default)]
pub struct MobilePayment;

impl PaymentMethod for MobilePayment {
    fn name(&self) -> &str {
        "mobile"
    }

    fn pay(&self, amount: f64, reference: &str) -> Result<PaymentReceipt, PaymentError> {
        validate_amount(amount)?;
        tracing::info!(amount, reference, "processing mobile payment");
        Ok(receipt(self.name(), amount, reference))
    }
}
