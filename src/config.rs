use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, File};
use serde::Deserialize;
use validator::Validate;

use crate::error::{PredictionError, Result};
use crate::models::Station;
use crate::utils::constants::{
    DEFAULT_CYCLE_INTERVAL_SECS, DEFAULT_IDW_POWER, DEFAULT_RETRY_BACKOFF_SECS,
};

/// Deployment configuration: the fixed station network plus tunables.
///
/// Loaded once at startup from a TOML file and passed by reference into
/// the service; nothing here changes for the lifetime of the process.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServiceConfig {
    /// Directory holding the station sheets and the prediction sheet
    #[serde(default = "default_sheets_dir")]
    pub sheets_dir: PathBuf,

    /// IDW power parameter `p`
    #[serde(default = "default_idw_power")]
    #[validate(range(min = 0.1))]
    pub idw_power: f64,

    /// Wait between fetch retries when station data is missing or invalid
    #[serde(default = "default_retry_backoff_secs")]
    #[validate(range(min = 1))]
    pub retry_backoff_secs: u64,

    /// Wait between completed prediction cycles
    #[serde(default = "default_cycle_interval_secs")]
    #[validate(range(min = 1))]
    pub cycle_interval_secs: u64,

    #[validate(length(min = 1))]
    #[validate(nested)]
    pub stations: Vec<Station>,
}

fn default_sheets_dir() -> PathBuf {
    PathBuf::from("sheets")
}

fn default_idw_power() -> f64 {
    DEFAULT_IDW_POWER
}

fn default_retry_backoff_secs() -> u64 {
    DEFAULT_RETRY_BACKOFF_SECS
}

fn default_cycle_interval_secs() -> u64 {
    DEFAULT_CYCLE_INTERVAL_SECS
}

impl ServiceConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| PredictionError::Config(e.to_string()))?;

        let config: ServiceConfig = settings
            .try_deserialize()
            .map_err(|e| PredictionError::Config(e.to_string()))?;

        config.validate()?;
        config.check_unique_station_ids()?;

        Ok(config)
    }

    fn check_unique_station_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for station in &self.stations {
            if !seen.insert(station.id.as_str()) {
                return Err(PredictionError::Config(format!(
                    "duplicate station id '{}'",
                    station.id
                )));
            }
        }

        Ok(())
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_secs(self.retry_backoff_secs)
    }

    pub fn cycle_interval(&self) -> Duration {
        Duration::from_secs(self.cycle_interval_secs)
    }
}
