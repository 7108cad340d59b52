//! Vehicle classification input.
//!
//! The facility treats classification itself as an external concern; what
//! crosses the boundary is a category tag plus a license-plate identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing vehicle classification input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VehicleError {
    /// The category tag is not one of the known kinds.
    #[error("Unknown vehicle category: {0}")]
    UnknownCategory(String),
}

/// The kinds of vehicle the facility admits.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Motorcycle,
    Truck,
}

impl VehicleCategory {
    /// The lowercase tag used in classification input and event messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = VehicleError;

    /// Parse a classifier tag.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lotkeeper::vehicle::VehicleCategory;
    ///
    /// let category: VehicleCategory = "motorcycle".parse().unwrap();
    /// assert_eq!(category, VehicleCategory::Motorcycle);
    /// assert!("hovercraft".parse::<VehicleCategory>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            "truck" => Ok(Self::Truck),
            other => Err(VehicleError::UnknownCategory(other.to_string())),
        }
    }
}

/// An admitted vehicle.
///
/// Built by the facade on entry and discarded once the entry call returns;
/// the core never retains it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Vehicle {
    /// License-plate identifier, opaque after validation
    pub license_plate: String,
    /// Classifier-supplied category
    pub category: VehicleCategory,
}

impl Vehicle {
    /// Create a vehicle record from classification input.
    pub fn new(category: VehicleCategory, license_plate: impl Into<String>) -> Self {
        Self {
            license_plate: license_plate.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_parse() {
        assert_eq!("car".parse(), Ok(VehicleCategory::Car));
        assert_eq!("motorcycle".parse(), Ok(VehicleCategory::Motorcycle));
        assert_eq!("truck".parse(), Ok(VehicleCategory::Truck));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "bicycle".parse::<VehicleCategory>().unwrap_err();
        assert_eq!(err, VehicleError::UnknownCategory("bicycle".to_string()));
    }

    #[test]
    fn category_round_trips_through_its_tag() {
        for category in [
            VehicleCategory::Car,
            VehicleCategory::Motorcycle,
            VehicleCategory::Truck,
        ] {
            assert_eq!(category.as_str().parse(), Ok(category));
        }
    }

    #[test]
    fn vehicle_keeps_its_fields() {
        let vehicle = Vehicle::new(VehicleCategory::Truck, "LMN456");
        assert_eq!(vehicle.license_plate, "LMN456");
        assert_eq!(vehicle.category, VehicleCategory::Truck);
    }

    #[test]
    fn category_serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&VehicleCategory::Car).unwrap();
        assert_eq!(json, "\"car\"");
    }
}
