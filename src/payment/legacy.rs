//! Adapter for the legacy payment back-end.
//!
//! The old back-end charges accounts, not vehicles. The adapter derives a
//! synthetic account identifier from the vehicle reference - a fixed
//! prefix concatenation, deterministic so the same vehicle always maps to
//! the same account - and delegates.

use super::error::PaymentError;
use super::{receipt, validate_amount, PaymentMethod, PaymentReceipt};
use thiserror::Error;

/// Prefix prepended to a vehicle reference to form the synthetic account id.
pub const LEGACY_ACCOUNT_PREFIX: &str = "ACC-";

/// Failure reported by the legacy back-end.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Legacy back-end rejected account {account_id}: {reason}")]
pub struct LegacyError {
    /// Account the charge was attempted against
    pub account_id: String,
    /// Back-end supplied reason
    pub reason: String,
}

/// The call shape of the old payment mechanism.
pub trait LegacyProcessor: Send + Sync {
    /// Charge `amount` against an account.
    fn pay_account(&self, account_id: &str, amount: f64) -> Result<(), LegacyError>;
}

/// The stock legacy register, which accepts every charge.
#[derive(Clone, Copy, Debug, Default)]
pub struct LegacyRegister;

impl LegacyProcessor for LegacyRegister {
    fn pay_account(&self, account_id: &str, amount: f64) -> Result<(), LegacyError> {
        tracing::info!(account_id, amount, "processing payment through legacy register");
        Ok(())
    }
}

/// Shim presenting a [`LegacyProcessor`] as a [`PaymentMethod`].
///
/// # Example
///
/// ```rust
/// use lotkeeper::payment::{LegacyAdapter, LegacyRegister, PaymentMethod};
///
/// let gateway = LegacyAdapter::new(LegacyRegister);
/// let receipt = gateway.pay(25.0, "XYZ123").unwrap();
/// assert_eq!(receipt.method, "legacy");
/// ```
#[derive(Clone, Debug)]
pub struct LegacyAdapter<P: LegacyProcessor> {
    processor: P,
}

impl<P: LegacyProcessor> LegacyAdapter<P> {
    /// Wrap a legacy processor.
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    fn account_id(reference: &str) -> String {
        format!("{LEGACY_ACCOUNT_PREFIX}{reference}")
    }
}

impl<P: LegacyProcessor> PaymentMethod for LegacyAdapter<P> {
    fn name(&self) -> &str {
        "legacy"
    }

    fn pay(&self, amount: f64, reference: &str) -> Result<PaymentReceipt, PaymentError> {
        validate_amount(amount)?;
        let account_id = Self::account_id(reference);
        self.processor
            .pay_account(&account_id, amount)
            .map_err(|err| PaymentError::Declined {
                reason: err.to_string(),
            })?;
        Ok(receipt(self.name(), amount, reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingProcessor {
        charges: Mutex<Vec<(String, f64)>>,
    }

    impl LegacyProcessor for RecordingProcessor {
        fn pay_account(&self, account_id: &str, amount: f64) -> Result<(), LegacyError> {
            self.charges.lock().push((account_id.to_string(), amount));
            Ok(())
        }
    }

    struct RefusingProcessor;

    impl LegacyProcessor for RefusingProcessor {
        fn pay_account(&self, account_id: &str, _amount: f64) -> Result<(), LegacyError> {
            Err(LegacyError {
                account_id: account_id.to_string(),
                reason: "account frozen".to_string(),
            })
        }
    }

    #[test]
    fn adapter_derives_prefixed_account_id() {
        let processor = RecordingProcessor::default();
        let adapter = LegacyAdapter::new(processor);

        adapter.pay(25.0, "XYZ123").unwrap();

        let charges = adapter.processor.charges.lock();
        assert_eq!(charges.as_slice(), &[("ACC-XYZ123".to_string(), 25.0)]);
    }

    #[test]
    fn account_derivation_is_deterministic() {
        assert_eq!(
            LegacyAdapter::<LegacyRegister>::account_id("AB12"),
            LegacyAdapter::<LegacyRegister>::account_id("AB12"),
        );
    }

    #[test]
    fn back_end_refusal_surfaces_as_declined() {
        let adapter = LegacyAdapter::new(RefusingProcessor);
        let err = adapter.pay(10.0, "ZZ999").unwrap_err();

        match err {
            PaymentError::Declined { reason } => {
                assert!(reason.contains("ACC-ZZ999"));
                assert!(reason.contains("account frozen"));
            }
            other => panic!("expected Declined, got {other:?}"),
        }
    }

    #[test]
    fn adapter_validates_amount_before_delegating() {
        let processor = RecordingProcessor::default();
        let adapter = LegacyAdapter::new(processor);

        assert!(adapter.pay(-1.0, "XYZ123").is_err());
        assert!(adapter.processor.charges.lock().is_empty());
    }

    #[test]
    fn stock_register_accepts_charges() {
        let receipt = LegacyAdapter::new(LegacyRegister).pay(5.0, "AA111").unwrap();
        assert_eq!(receipt.reference, "AA111");
    }
}
