use crate::error::{PredictionError, Result};
use crate::models::{RawStationRecord, StationReading};
use crate::utils::constants::{
    COL_HUMIDITY, COL_PRESSURE, COL_TEMPERATURE, UNIT_CELSIUS, UNIT_HECTOPASCAL, UNIT_PERCENT,
};

/// Turns a raw sheet row into a typed `StationReading`.
///
/// Numeric fields must carry their expected unit suffix; categorical
/// fields are taken as-is after trimming. The parse is pure and
/// deterministic: identical input always yields the identical reading
/// or the identical failure.
pub struct RecordParser;

impl RecordParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse the latest record of `station_id` into a typed reading.
    ///
    /// Fails with `MalformedField` on the first field that does not
    /// parse; a reading is all-or-nothing.
    pub fn parse(&self, station_id: &str, raw: &RawStationRecord) -> Result<StationReading> {
        let temperature_c =
            self.parse_unit_field(station_id, COL_TEMPERATURE, &raw.temperature, UNIT_CELSIUS)?;
        let humidity_pct =
            self.parse_unit_field(station_id, COL_HUMIDITY, &raw.humidity, UNIT_PERCENT)?;
        let pressure_hpa =
            self.parse_unit_field(station_id, COL_PRESSURE, &raw.pressure, UNIT_HECTOPASCAL)?;

        Ok(StationReading {
            temperature_c,
            humidity_pct,
            pressure_hpa,
            air_quality: raw.air_quality.trim().to_string(),
            rain_status: raw.rain_status.trim().to_string(),
        })
    }

    /// Strip the expected unit suffix and parse the remainder as a float.
    fn parse_unit_field(
        &self,
        station_id: &str,
        field: &'static str,
        raw: &str,
        unit: &str,
    ) -> Result<f64> {
        let malformed = || PredictionError::MalformedField {
            station_id: station_id.to_string(),
            field,
            value: raw.to_string(),
        };

        let stripped = raw.trim().strip_suffix(unit).ok_or_else(malformed)?;

        stripped.trim().parse::<f64>().map_err(|_| malformed())
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}
