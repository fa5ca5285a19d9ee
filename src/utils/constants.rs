/// Station sheet column identifiers
pub const COL_DATE: &str = "Date";
pub const COL_TIME: &str = "Time";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";
pub const COL_TEMPERATURE: &str = "Temperature";
pub const COL_HUMIDITY: &str = "Humidity";
pub const COL_PRESSURE: &str = "Air Pressure";
pub const COL_AIR_QUALITY: &str = "Air Quality";
pub const COL_RAIN_STATUS: &str = "Rain Status";

/// Header row of a station sheet, in column order
pub const STATION_SHEET_HEADERS: [&str; 7] = [
    COL_DATE,
    COL_TIME,
    COL_TEMPERATURE,
    COL_HUMIDITY,
    COL_PRESSURE,
    COL_AIR_QUALITY,
    COL_RAIN_STATUS,
];

/// Header row of the prediction sheet, in column order.
/// Downstream consumers rely on column position; do not reorder.
pub const PREDICTION_SHEET_HEADERS: [&str; 9] = [
    COL_DATE,
    COL_TIME,
    COL_LATITUDE,
    COL_LONGITUDE,
    COL_TEMPERATURE,
    COL_HUMIDITY,
    COL_PRESSURE,
    COL_AIR_QUALITY,
    COL_RAIN_STATUS,
];

/// File name of the prediction sheet within the sheets directory
pub const PREDICTION_SHEET_FILE: &str = "predictions.csv";

/// Unit suffixes carried by raw numeric values
pub const UNIT_CELSIUS: &str = "C";
pub const UNIT_PERCENT: &str = "%";
pub const UNIT_HECTOPASCAL: &str = "hPa";

/// Interpolation defaults
pub const DEFAULT_IDW_POWER: f64 = 2.0;

/// Polling defaults (seconds)
pub const DEFAULT_RETRY_BACKOFF_SECS: u64 = 5;
pub const DEFAULT_CYCLE_INTERVAL_SECS: u64 = 35;

/// Timestamp formats used in emitted predictions
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
