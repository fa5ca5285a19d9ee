use serde::{Deserialize, Serialize};

/// The most recent row of a station sheet, exactly as stored.
///
/// Numeric values still carry their unit suffix ("23.5C", "60%",
/// "1012hPa"); categorical values are free text. Field names map onto
/// the sheet column headers. The record is transient; it is discarded
/// as soon as `RecordParser` has produced a `StationReading` from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStationRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Time")]
    pub time: String,

    #[serde(rename = "Temperature")]
    pub temperature: String,

    #[serde(rename = "Humidity")]
    pub humidity: String,

    #[serde(rename = "Air Pressure")]
    pub pressure: String,

    #[serde(rename = "Air Quality")]
    pub air_quality: String,

    #[serde(rename = "Rain Status")]
    pub rain_status: String,
}

/// A typed, unit-stripped station reading.
///
/// Exists only if all five measured fields parsed successfully; a reading
/// is never partially populated. One per station per cycle, not persisted
/// across cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReading {
    /// Temperature in degrees Celsius
    pub temperature_c: f64,
    /// Relative humidity in percent
    pub humidity_pct: f64,
    /// Air pressure in hectopascals
    pub pressure_hpa: f64,
    /// Air quality category as reported by the station
    pub air_quality: String,
    /// Rain status category as reported by the station
    pub rain_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_deserializes_from_sheet_headers() {
        let csv_data = "\
Date,Time,Temperature,Humidity,Air Pressure,Air Quality,Rain Status
2026-08-08,10:15:00,23.5C,60%,1012hPa,Good,No Rain
";
        let mut reader = csv::Reader::from_reader(csv_data.as_bytes());
        let record: RawStationRecord = reader
            .deserialize()
            .next()
            .expect("one row expected")
            .expect("row should deserialize");

        assert_eq!(record.temperature, "23.5C");
        assert_eq!(record.humidity, "60%");
        assert_eq!(record.pressure, "1012hPa");
        assert_eq!(record.air_quality, "Good");
        assert_eq!(record.rain_status, "No Rain");
    }
}
