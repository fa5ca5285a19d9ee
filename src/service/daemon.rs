use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::config::ServiceConfig;
use crate::error::{PredictionError, Result};
use crate::models::{PredictionRecord, StationReading, TargetLocation};
use crate::processors::IdwInterpolator;
use crate::readers::RecordParser;
use crate::storage::ReadingStore;

/// The polling service: fetch, validate, predict, emit, sleep, repeat.
///
/// Station-to-target distances are computed once at construction; both
/// endpoints are immutable for the lifetime of the process. A cycle
/// emits exactly one prediction, and only when every configured station
/// produced a valid reading in the same attempt; partial data never
/// produces a partial prediction.
pub struct PredictionService<S> {
    config: ServiceConfig,
    target: TargetLocation,
    store: S,
    parser: RecordParser,
    interpolator: IdwInterpolator,
    distances: BTreeMap<String, f64>,
}

impl<S: ReadingStore> PredictionService<S> {
    pub fn new(config: ServiceConfig, target: TargetLocation, store: S) -> Self {
        let mut distances = BTreeMap::new();
        for station in &config.stations {
            let distance = station.distance_to(&target);
            if distance <= 0.0 {
                // Interpolation will reject this every cycle; only a
                // configuration change can clear it.
                warn!(
                    station = %station.id,
                    "station coincides with the target location"
                );
            }
            distances.insert(station.id.clone(), distance);
        }

        let interpolator = IdwInterpolator::with_power(config.idw_power);

        Self {
            config,
            target,
            store,
            parser: RecordParser::new(),
            interpolator,
            distances,
        }
    }

    pub fn target(&self) -> &TargetLocation {
        &self.target
    }

    /// Cached station-to-target distances in kilometers, by station id.
    pub fn distances(&self) -> &BTreeMap<String, f64> {
        &self.distances
    }

    /// Run the prediction loop until `shutdown` fires.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        info!(
            stations = self.config.stations.len(),
            interval_secs = self.config.cycle_interval_secs,
            "starting prediction loop"
        );

        loop {
            let readings = match self.collect_readings(&mut shutdown).await {
                Some(readings) => readings,
                None => {
                    info!("shutdown requested; stopping");
                    return Ok(());
                }
            };

            match self.interpolator.predict(&readings, &self.distances) {
                Ok(prediction) => {
                    let record = PredictionRecord::at_local_now(&self.target, prediction);
                    match self.store.append_prediction(&record) {
                        Ok(()) => info!(%record, "prediction emitted"),
                        Err(e) => error!(error = %e, "failed to append prediction; record lost"),
                    }
                }
                Err(e) => error!(error = %e, "prediction failed; skipping cycle"),
            }

            if !sleep_or_shutdown(self.config.cycle_interval(), &mut shutdown).await {
                info!("shutdown requested; stopping");
                return Ok(());
            }
        }
    }

    /// Fetch and validate all stations, retrying with backoff until a
    /// complete valid set is obtained. Returns `None` when shutdown
    /// fires during a backoff wait. Retries are unbounded; a station
    /// that never recovers blocks the cycle indefinitely.
    async fn collect_readings(
        &self,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Option<BTreeMap<String, StationReading>> {
        loop {
            match self.fetch_all() {
                Ok(readings) => return Some(readings),
                Err(e) => {
                    warn!(
                        error = %e,
                        backoff_secs = self.config.retry_backoff_secs,
                        "station data unavailable; retrying"
                    );
                    if !sleep_or_shutdown(self.config.retry_backoff(), shutdown).await {
                        return None;
                    }
                }
            }
        }
    }

    /// One fetch-and-validate pass over every station in configured
    /// order. Any failure abandons the attempt: readings that were
    /// valid a moment ago may be stale relative to the failed station,
    /// so the retry re-fetches the full set.
    fn fetch_all(&self) -> Result<BTreeMap<String, StationReading>> {
        let mut readings = BTreeMap::new();

        for station in &self.config.stations {
            let raw = self.store.latest(&station.id)?.ok_or_else(|| {
                PredictionError::MissingRecord {
                    station_id: station.id.clone(),
                }
            })?;
            let reading = self.parser.parse(&station.id, &raw)?;
            readings.insert(station.id.clone(), reading);
        }

        Ok(readings)
    }

    /// Single fetch, validate, predict, emit attempt, no retry and
    /// no sleep. Used by the one-shot `predict` command and tests.
    pub fn run_once(&self) -> Result<PredictionRecord> {
        let readings = self.fetch_all()?;
        let prediction = self.interpolator.predict(&readings, &self.distances)?;
        let record = PredictionRecord::at_local_now(&self.target, prediction);
        self.store.append_prediction(&record)?;

        Ok(record)
    }
}

/// Cancellable timed wait. Returns `true` when the full duration
/// elapsed, `false` when shutdown fired first (or the sender is gone).
async fn sleep_or_shutdown(duration: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    tokio::select! {
        _ = tokio::time::sleep(duration) => true,
        _ = shutdown.changed() => false,
    }
}
