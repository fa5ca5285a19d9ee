pub mod daemon;

pub use daemon::PredictionService;
