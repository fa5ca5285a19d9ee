pub mod prediction;
pub mod reading;
pub mod station;

pub use prediction::{PredictionRecord, SitePrediction};
pub use reading::{RawStationRecord, StationReading};
pub use station::{Station, TargetLocation};
