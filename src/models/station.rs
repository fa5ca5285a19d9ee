use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::coordinates::haversine_distance;

/// A fixed-position sensor station in the monitored network.
///
/// The station set is immutable for the lifetime of the process; it is
/// loaded once from configuration at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Station {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Station {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in kilometers from this station to the target.
    pub fn distance_to(&self, target: &TargetLocation) -> f64 {
        haversine_distance(
            self.latitude,
            self.longitude,
            target.latitude,
            target.longitude,
        )
    }
}

/// The operator-chosen location predictions are computed for.
///
/// Accepted once at startup and immutable afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct TargetLocation {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl TargetLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_validation() {
        let station = Station::new("WS1", 7.0193689, 79.9001577);
        assert!(station.validate().is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        let station = Station::new("WS1", 91.0, 79.9001577);
        assert!(station.validate().is_err());

        let station = Station::new("WS2", 7.0, -181.0);
        assert!(station.validate().is_err());
    }

    #[test]
    fn test_empty_id_rejected() {
        let station = Station::new("", 7.0, 79.9);
        assert!(station.validate().is_err());
    }

    #[test]
    fn test_distance_to_target() {
        let station = Station::new("WS1", 7.0193689, 79.9001577);
        let target = TargetLocation::new(7.0195, 79.9002);

        let distance = station.distance_to(&target);
        assert!(distance > 0.0);
        assert!(distance < 1.0, "stations sit within a kilometre of the site");
    }

    #[test]
    fn test_target_location_validation() {
        assert!(TargetLocation::new(7.02, 79.9).validate().is_ok());
        assert!(TargetLocation::new(-95.0, 79.9).validate().is_err());
    }
}
