//! Shared spot-inventory counter.
//!
//! The inventory is the only piece of facility state that needs cross-lane
//! mutual exclusion. Both mutations are single atomic compare-exchange
//! steps, so at most `capacity` admissions can be outstanding at any
//! instant - no overbooking under concurrent entries, no lost updates.

mod error;

pub use error::InventoryError;

use std::sync::atomic::{AtomicUsize, Ordering};

/// Count of free spots in the facility, shared by every entry/exit call
/// for the process lifetime.
///
/// Invariant: `0 <= free_count <= capacity` at all times.
///
/// # Example
///
/// ```rust
/// use lotkeeper::inventory::SpotInventory;
///
/// let inventory = SpotInventory::new(2);
/// assert_eq!(inventory.try_reserve(), Some(2));
/// assert_eq!(inventory.try_reserve(), Some(1));
/// assert_eq!(inventory.try_reserve(), None);
///
/// inventory.release().unwrap();
/// assert_eq!(inventory.free_count(), 1);
/// ```
#[derive(Debug)]
pub struct SpotInventory {
    free: AtomicUsize,
    capacity: usize,
}

impl SpotInventory {
    /// Create an inventory with every spot free.
    ///
    /// Spot numbers are `u32`, so the capacity is clamped to `u32::MAX`;
    /// every reserve snapshot then fits a spot number exactly.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(u32::MAX as usize);
        Self {
            free: AtomicUsize::new(capacity),
            capacity,
        }
    }

    /// Total number of spots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of free spots.
    pub fn free_count(&self) -> usize {
        self.free.load(Ordering::SeqCst)
    }

    /// Atomically reserve one spot.
    ///
    /// On success returns the free-count snapshot taken before the
    /// decrement (always in `1..=capacity`), which the facade uses as the
    /// assigned spot number. Returns `None` when no spots are free;
    /// exhaustion is a normal refusal, not an error.
    pub fn try_reserve(&self) -> Option<u32> {
        self.free
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |free| {
                free.checked_sub(1)
            })
            .ok()
            .map(|snapshot| u32::try_from(snapshot).unwrap_or(u32::MAX))
    }

    /// Atomically return one spot to the pool.
    ///
    /// Returns the new free count. A release that would exceed capacity is
    /// a double-release bug somewhere in the caller; it fails with
    /// [`InventoryError::Overflow`] and leaves the count untouched.
    pub fn release(&self) -> Result<usize, InventoryError> {
        self.free
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |free| {
                if free < self.capacity {
                    Some(free + 1)
                } else {
                    None
                }
            })
            .map(|snapshot| snapshot + 1)
            .map_err(|_| InventoryError::Overflow {
                capacity: self.capacity,
            })
    }
}
