pub mod sheet_store;

pub use sheet_store::CsvSheetStore;

use crate::error::Result;
use crate::models::{PredictionRecord, RawStationRecord};

/// Per-station latest-reading source and append-only prediction sink.
///
/// Implementations own the storage format and any remote transport; the
/// prediction service only depends on this contract. Implementations
/// doing network I/O are expected to bound their own call times.
pub trait ReadingStore {
    /// The most recently appended record for `station_id`, or `None`
    /// when the station has produced no data at all.
    fn latest(&self, station_id: &str) -> Result<Option<RawStationRecord>>;

    /// Append one prediction row to the sink. Column order follows
    /// `PREDICTION_SHEET_HEADERS` and must not change.
    fn append_prediction(&self, record: &PredictionRecord) -> Result<()>;
}
