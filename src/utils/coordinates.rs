use crate::error::{PredictionError, Result};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Parse a decimal-degree coordinate value
///
/// # Examples
/// ```
/// use microclimate::utils::coordinates::parse_coordinate;
///
/// let decimal = parse_coordinate(" 7.0193689 ").unwrap();
/// assert!((decimal - 7.0193689).abs() < 0.000001);
/// ```
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let trimmed = coord_str.trim();

    trimmed.parse::<f64>().map_err(|_| {
        PredictionError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
    })
}

/// Validate a latitude in decimal degrees
pub fn validate_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(PredictionError::InvalidCoordinate(format!(
            "Latitude {} is outside valid range [-90, 90]",
            latitude
        )));
    }

    Ok(())
}

/// Validate a longitude in decimal degrees
pub fn validate_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(PredictionError::InvalidCoordinate(format!(
            "Longitude {} is outside valid range [-180, 180]",
            longitude
        )));
    }

    Ok(())
}

/// Calculate the great-circle distance in kilometers between two points
/// using the Haversine formula.
///
/// Callers are responsible for range-validating the coordinates; this
/// function assumes valid input.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
