use std::collections::BTreeMap;

use crate::error::{PredictionError, Result};
use crate::models::{SitePrediction, StationReading};
use crate::utils::constants::DEFAULT_IDW_POWER;

/// Inverse Distance Weighting engine.
///
/// Combines one valid reading per station into a single prediction for
/// the target site: numeric fields by IDW with weight `1 / d^p`,
/// categorical fields by distance-weighted vote. Station maps are keyed
/// by station identifier; `BTreeMap` fixes the iteration order to
/// ascending identifier, which makes the categorical tie-break
/// deterministic and reproducible.
pub struct IdwInterpolator {
    power: f64,
}

impl IdwInterpolator {
    pub fn new() -> Self {
        Self {
            power: DEFAULT_IDW_POWER,
        }
    }

    pub fn with_power(power: f64) -> Self {
        Self { power }
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Produce the predicted site fields from one reading per station.
    ///
    /// `readings` and `distances` must cover the same station set;
    /// distances are in kilometers and must be strictly positive.
    pub fn predict(
        &self,
        readings: &BTreeMap<String, StationReading>,
        distances: &BTreeMap<String, f64>,
    ) -> Result<SitePrediction> {
        let entries = self.weighted_readings(readings, distances)?;

        Ok(SitePrediction {
            temperature_c: idw_estimate(&entries, |r| r.temperature_c),
            humidity_pct: idw_estimate(&entries, |r| r.humidity_pct),
            pressure_hpa: idw_estimate(&entries, |r| r.pressure_hpa),
            air_quality: weighted_vote(&entries, |r| r.air_quality.as_str()),
            rain_status: weighted_vote(&entries, |r| r.rain_status.as_str()),
        })
    }

    /// Pair every station's reading with its IDW weight, in ascending
    /// station-identifier order.
    fn weighted_readings<'a>(
        &self,
        readings: &'a BTreeMap<String, StationReading>,
        distances: &'a BTreeMap<String, f64>,
    ) -> Result<Vec<(&'a str, &'a StationReading, f64)>> {
        if distances.is_empty() {
            return Err(PredictionError::Config(
                "cannot interpolate over an empty station set".to_string(),
            ));
        }

        let mut entries = Vec::with_capacity(distances.len());

        for (station_id, &distance) in distances {
            let reading =
                readings
                    .get(station_id)
                    .ok_or_else(|| PredictionError::MissingStation {
                        station_id: station_id.clone(),
                    })?;

            if distance <= 0.0 {
                return Err(PredictionError::DegenerateDistance {
                    station_id: station_id.clone(),
                });
            }

            let weight = distance.powf(self.power).recip();
            entries.push((station_id.as_str(), reading, weight));
        }

        Ok(entries)
    }
}

impl Default for IdwInterpolator {
    fn default() -> Self {
        Self::new()
    }
}

/// Weighted average of one numeric field, rounded to two decimals.
/// The rounding is part of the observable output contract.
fn idw_estimate<F>(entries: &[(&str, &StationReading, f64)], value: F) -> f64
where
    F: Fn(&StationReading) -> f64,
{
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;

    for &(_, reading, weight) in entries {
        weighted_sum += value(reading) * weight;
        weight_sum += weight;
    }

    round2(weighted_sum / weight_sum)
}

/// Distance-weighted vote over one categorical field.
///
/// Buckets accumulate in first-encounter order; a later category must
/// strictly exceed the current maximum to win, so exact weight ties
/// resolve to the category seen first in ascending station order.
fn weighted_vote<'a, F>(entries: &[(&str, &'a StationReading, f64)], category: F) -> String
where
    F: Fn(&'a StationReading) -> &'a str,
{
    let mut buckets: Vec<(&str, f64)> = Vec::new();

    for &(_, reading, weight) in entries {
        let cat = category(reading);
        match buckets.iter_mut().find(|(existing, _)| *existing == cat) {
            Some((_, total)) => *total += weight,
            None => buckets.push((cat, weight)),
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for &(cat, weight) in &buckets {
        if best.map_or(true, |(_, best_weight)| weight > best_weight) {
            best = Some((cat, weight));
        }
    }

    best.map(|(cat, _)| cat.to_string()).unwrap_or_default()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
