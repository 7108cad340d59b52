//! Notification error types.

use super::SubscriberId;
use thiserror::Error;

/// Errors from bus membership operations.
///
/// Unsubscribe is strict: removing a handle that was never registered (or
/// was already removed) is reported, not ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotifyError {
    /// No subscriber is registered under the given handle.
    #[error("No subscriber registered under handle {0}")]
    SubscriberNotFound(SubscriberId),
}

/// Failure raised by a subscriber's `receive` callback.
///
/// Delivery is best-effort; one subscriber failing never blocks or rolls
/// back delivery to the others.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Subscriber failed to handle message: {0}")]
pub struct SubscriberError(pub String);
