//! Event notification fan-out.
//!
//! The bus owns a set of subscribers - membership only, never subscriber
//! lifetime - and delivers each published message to every current member
//! synchronously, in unspecified order. Consumers (security system,
//! billing system, customer app) only implement the single-method
//! [`Subscriber`] contract.

mod error;

pub use error::{NotifyError, SubscriberError};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Contract every event consumer implements.
pub trait Subscriber: Send + Sync {
    /// Handle one event message.
    ///
    /// A returned error is logged and skipped; it does not affect delivery
    /// to other subscribers.
    fn receive(&self, message: &str) -> Result<(), SubscriberError>;
}

/// Opaque handle identifying a registered subscriber.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SubscriberId(Uuid);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Registry of subscribers with synchronous best-effort fan-out.
///
/// Membership is a set: registering the same subscriber (same `Arc`) twice
/// hands back the existing handle instead of duplicating delivery.
/// Publishing snapshots the membership under a read lock and delivers
/// outside it, so concurrent subscribe/unsubscribe calls never corrupt an
/// in-flight fan-out.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use lotkeeper::notify::{NotificationBus, Subscriber, SubscriberError};
///
/// struct Console;
///
/// impl Subscriber for Console {
///     fn receive(&self, message: &str) -> Result<(), SubscriberError> {
///         println!("{message}");
///         Ok(())
///     }
/// }
///
/// let bus = NotificationBus::new();
/// let id = bus.subscribe(Arc::new(Console));
/// assert_eq!(bus.publish("vehicle entered"), 1);
///
/// bus.unsubscribe(id).unwrap();
/// assert_eq!(bus.publish("vehicle exited"), 0);
/// ```
pub struct NotificationBus {
    subscribers: RwLock<HashMap<SubscriberId, Arc<dyn Subscriber>>>,
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a subscriber, returning its handle.
    ///
    /// Registering an `Arc` that is already a member returns the handle it
    /// was first registered under.
    pub fn subscribe(&self, subscriber: Arc<dyn Subscriber>) -> SubscriberId {
        let mut members = self.subscribers.write();
        let existing = members
            .iter()
            .find_map(|(id, member)| Arc::ptr_eq(member, &subscriber).then_some(*id));
        if let Some(id) = existing {
            return id;
        }

        let id = SubscriberId(Uuid::new_v4());
        members.insert(id, subscriber);
        id
    }

    /// Remove a subscriber by handle.
    ///
    /// Strict policy: an unknown handle fails with
    /// [`NotifyError::SubscriberNotFound`].
    pub fn unsubscribe(&self, id: SubscriberId) -> Result<(), NotifyError> {
        match self.subscribers.write().remove(&id) {
            Some(_) => Ok(()),
            None => Err(NotifyError::SubscriberNotFound(id)),
        }
    }

    /// Deliver a message to every current subscriber.
    ///
    /// Returns the number of successful deliveries. Per-subscriber
    /// failures are logged at warn level and skipped.
    pub fn publish(&self, message: &str) -> usize {
        let snapshot: Vec<(SubscriberId, Arc<dyn Subscriber>)> = self
            .subscribers
            .read()
            .iter()
            .map(|(id, member)| (*id, Arc::clone(member)))
            .collect();

        let mut delivered = 0;
        for (id, subscriber) in snapshot {
            match subscriber.receive(message) {
                Ok(()) => delivered += 1,
                Err(err) => {
                    tracing::warn!(subscriber = %id, %err, "subscriber failed, continuing fan-out");
                }
            }
        }
        delivered
    }

    /// Number of registered subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Whether the bus has no subscribers.
    pub fn is_empty(&self) -> bool {
        self.subscribers.read().is_empty()
    }
}
