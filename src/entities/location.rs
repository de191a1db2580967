use serde::{Deserialize, Serialize};

use crate::error::{validation_error, Error};

/// A stored point of interest. `distance_km` is only populated by a nearby
/// search; it is never persisted and serializes as null on create responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: Option<f64>,
}

impl Location {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Client-supplied fields for a create; the id is assigned by the store.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn validate(&self) -> Result<(), Error> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(validation_error("latitude must be between -90 and 90"));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(validation_error("longitude must be between -180 and 180"));
        }

        Ok(())
    }
}

pub fn validate_radius_km(radius_km: f64) -> Result<(), Error> {
    if !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(validation_error("radius_km must be positive"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_at_range_limits_pass() {
        let north_west = Coordinates {
            latitude: 90.0,
            longitude: -180.0,
        };
        let south_east = Coordinates {
            latitude: -90.0,
            longitude: 180.0,
        };

        assert!(north_west.validate().is_ok());
        assert!(south_east.validate().is_ok());
    }

    #[test]
    fn latitude_out_of_range_fails() {
        let coordinates = Coordinates {
            latitude: 90.5,
            longitude: 0.0,
        };

        let err = coordinates.validate().unwrap_err();
        assert!(err.message.contains("latitude"));
    }

    #[test]
    fn longitude_out_of_range_fails() {
        let coordinates = Coordinates {
            latitude: 0.0,
            longitude: -180.5,
        };

        let err = coordinates.validate().unwrap_err();
        assert!(err.message.contains("longitude"));
    }

    #[test]
    fn non_finite_coordinates_fail() {
        let coordinates = Coordinates {
            latitude: f64::NAN,
            longitude: 0.0,
        };

        assert!(coordinates.validate().is_err());
    }

    #[test]
    fn zero_and_negative_radii_fail() {
        assert!(validate_radius_km(0.0).is_err());
        assert!(validate_radius_km(-5.0).is_err());
        assert!(validate_radius_km(f64::NAN).is_err());
        assert!(validate_radius_km(5.0).is_ok());
    }

    #[test]
    fn created_location_serializes_null_distance() {
        let location = Location {
            id: 1,
            name: "Cafe Central".into(),
            category: "cafe".into(),
            latitude: 52.52437,
            longitude: 13.41053,
            distance_km: None,
        };

        let value = serde_json::to_value(&location).unwrap();
        assert_eq!(value["distance_km"], serde_json::Value::Null);
        assert_eq!(value["id"], 1);
    }
}
