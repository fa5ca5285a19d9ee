use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::TargetLocation;
use crate::utils::constants::{DATE_FORMAT, TIME_FORMAT};

/// The five predicted fields for the target site, as produced by the
/// interpolation engine. Timestamp and coordinates are attached later,
/// when the emitting step builds the full `PredictionRecord`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitePrediction {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub air_quality: String,
    pub rain_status: String,
}

/// One emitted prediction: local timestamp, target coordinates, and the
/// five predicted fields. Appended to the prediction sheet once per
/// completed cycle and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub air_quality: String,
    pub rain_status: String,
}

impl PredictionRecord {
    pub fn new(
        target: &TargetLocation,
        prediction: SitePrediction,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            date: timestamp.date_naive(),
            time: timestamp.time(),
            latitude: target.latitude,
            longitude: target.longitude,
            temperature_c: prediction.temperature_c,
            humidity_pct: prediction.humidity_pct,
            pressure_hpa: prediction.pressure_hpa,
            air_quality: prediction.air_quality,
            rain_status: prediction.rain_status,
        }
    }

    /// Stamp a prediction with the current local time.
    pub fn at_local_now(target: &TargetLocation, prediction: SitePrediction) -> Self {
        Self::new(target, prediction, Local::now())
    }

    /// Positional sheet row. Column order is part of the sink contract;
    /// downstream consumers index by position.
    pub fn to_row(&self) -> [String; 9] {
        [
            self.date.format(DATE_FORMAT).to_string(),
            self.time.format(TIME_FORMAT).to_string(),
            self.latitude.to_string(),
            self.longitude.to_string(),
            self.temperature_c.to_string(),
            self.humidity_pct.to_string(),
            self.pressure_hpa.to_string(),
            self.air_quality.clone(),
            self.rain_status.clone(),
        ]
    }
}

impl fmt::Display for PredictionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}): temperature {}C, humidity {}%, pressure {}hPa, \
             air quality '{}', rain status '{}'",
            self.latitude,
            self.longitude,
            self.temperature_c,
            self.humidity_pct,
            self.pressure_hpa,
            self.air_quality,
            self.rain_status
        )
    }
}
