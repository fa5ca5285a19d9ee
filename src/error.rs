use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictionError>;

#[derive(Error, Debug)]
pub enum PredictionError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sheet error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Station {station_id} has no records")]
    MissingRecord { station_id: String },

    #[error("Station {station_id}: cannot parse {field} value '{value}'")]
    MalformedField {
        station_id: String,
        field: &'static str,
        value: String,
    },

    #[error("Station {station_id} is at zero distance from the target")]
    DegenerateDistance { station_id: String },

    #[error("No reading available for station {station_id}")]
    MissingStation { station_id: String },
}

impl PredictionError {
    /// Whether the fetch step should retry after this failure.
    ///
    /// Per-station fetch and parse failures are recoverable by re-fetching
    /// the whole reading set; engine and configuration failures are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PredictionError::Io(_)
                | PredictionError::Csv(_)
                | PredictionError::MissingRecord { .. }
                | PredictionError::MalformedField { .. }
        )
    }
}
