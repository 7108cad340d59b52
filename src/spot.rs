//! Parking spot records.

use serde::{Deserialize, Serialize};

/// A single parking spot.
///
/// New spots are produced by deriving from a template: a full-value copy
/// with `number` and `reserved` overridden. Template and copies share no
/// mutable state.
///
/// # Example
///
/// ```rust
/// use lotkeeper::spot::ParkingSpot;
///
/// let template = ParkingSpot::template("medium");
/// let spot = template.derive(42, true);
///
/// assert_eq!(spot.number, 42);
/// assert_eq!(spot.size_class, "medium");
/// assert!(spot.reserved);
/// assert!(!template.reserved);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ParkingSpot {
    /// Spot number; 0 is reserved for templates
    pub number: u32,
    /// Size class shared by every spot derived from one template
    pub size_class: String,
    /// Whether the spot is currently reserved
    pub reserved: bool,
}

impl ParkingSpot {
    /// Create a spot with explicit fields.
    pub fn new(number: u32, size_class: impl Into<String>, reserved: bool) -> Self {
        Self {
            number,
            size_class: size_class.into(),
            reserved,
        }
    }

    /// Create an unnumbered, unreserved template spot.
    pub fn template(size_class: impl Into<String>) -> Self {
        Self::new(0, size_class, false)
    }

    /// Derive an independent spot from this one, overriding the number and
    /// reservation flag.
    pub fn derive(&self, number: u32, reserved: bool) -> Self {
        Self {
            number,
            size_class: self.size_class.clone(),
            reserved,
        }
    }
}
