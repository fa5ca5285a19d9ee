use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{PredictionRecord, RawStationRecord};
use crate::storage::ReadingStore;
use crate::utils::constants::{PREDICTION_SHEET_FILE, PREDICTION_SHEET_HEADERS};

/// Sheet storage backed by a directory of CSV files.
///
/// Each station owns one sheet named `<station_id>.csv` with the station
/// column headers; predictions accumulate in `predictions.csv`. The
/// prediction sheet's header row is written when the file is first
/// created.
pub struct CsvSheetStore {
    sheets_dir: PathBuf,
}

impl CsvSheetStore {
    pub fn new(sheets_dir: impl Into<PathBuf>) -> Self {
        Self {
            sheets_dir: sheets_dir.into(),
        }
    }

    pub fn sheet_path(&self, station_id: &str) -> PathBuf {
        self.sheets_dir.join(format!("{}.csv", station_id))
    }

    pub fn prediction_sheet_path(&self) -> PathBuf {
        self.sheets_dir.join(PREDICTION_SHEET_FILE)
    }

    fn is_missing_or_empty(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(true);
        }
        Ok(fs::metadata(path)?.len() == 0)
    }
}

impl ReadingStore for CsvSheetStore {
    fn latest(&self, station_id: &str) -> Result<Option<RawStationRecord>> {
        let path = self.sheet_path(station_id);
        if Self::is_missing_or_empty(&path)? {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&path)?;
        let mut latest = None;

        for row in reader.deserialize::<RawStationRecord>() {
            latest = Some(row?);
        }

        Ok(latest)
    }

    fn append_prediction(&self, record: &PredictionRecord) -> Result<()> {
        fs::create_dir_all(&self.sheets_dir)?;

        let path = self.prediction_sheet_path();
        let needs_header = Self::is_missing_or_empty(&path)?;

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(PREDICTION_SHEET_HEADERS)?;
        }

        writer.write_record(record.to_row())?;
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SitePrediction, TargetLocation};
    use std::io::Write;
    use tempfile::TempDir;

    fn write_sheet(dir: &Path, station_id: &str, rows: &[&str]) {
        let path = dir.join(format!("{}.csv", station_id));
        let mut file = fs::File::create(path).unwrap();
        writeln!(
            file,
            "Date,Time,Temperature,Humidity,Air Pressure,Air Quality,Rain Status"
        )
        .unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
    }

    fn sample_record() -> PredictionRecord {
        let target = TargetLocation::new(7.0195, 79.9002);
        PredictionRecord::at_local_now(
            &target,
            SitePrediction {
                temperature_c: 23.67,
                humidity_pct: 60.25,
                pressure_hpa: 1011.55,
                air_quality: "Good".to_string(),
                rain_status: "No Rain".to_string(),
            },
        )
    }

    #[test]
    fn test_latest_returns_last_row() {
        let dir = TempDir::new().unwrap();
        write_sheet(
            dir.path(),
            "WS1",
            &[
                "2026-08-08,10:00:00,23.1C,58%,1012hPa,Good,No Rain",
                "2026-08-08,10:15:00,23.5C,60%,1013hPa,Moderate,Raining",
            ],
        );

        let store = CsvSheetStore::new(dir.path());
        let record = store.latest("WS1").unwrap().expect("row expected");

        assert_eq!(record.time, "10:15:00");
        assert_eq!(record.temperature, "23.5C");
        assert_eq!(record.air_quality, "Moderate");
    }

    #[test]
    fn test_latest_missing_sheet_is_none() {
        let dir = TempDir::new().unwrap();
        let store = CsvSheetStore::new(dir.path());

        assert!(store.latest("WS9").unwrap().is_none());
    }

    #[test]
    fn test_latest_header_only_sheet_is_none() {
        let dir = TempDir::new().unwrap();
        write_sheet(dir.path(), "WS1", &[]);

        let store = CsvSheetStore::new(dir.path());
        assert!(store.latest("WS1").unwrap().is_none());
    }

    #[test]
    fn test_append_creates_sheet_with_header() {
        let dir = TempDir::new().unwrap();
        let store = CsvSheetStore::new(dir.path());

        store.append_prediction(&sample_record()).unwrap();

        let contents = fs::read_to_string(store.prediction_sheet_path()).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Time,Latitude,Longitude,Temperature,Humidity,Air Pressure,Air Quality,Rain Status"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("23.67"));
        assert!(row.contains("Good"));
    }

    #[test]
    fn test_append_is_append_only() {
        let dir = TempDir::new().unwrap();
        let store = CsvSheetStore::new(dir.path());

        store.append_prediction(&sample_record()).unwrap();
        store.append_prediction(&sample_record()).unwrap();

        let contents = fs::read_to_string(store.prediction_sheet_path()).unwrap();
        // one header plus two data rows, single header only
        assert_eq!(contents.lines().count(), 3);
        assert_eq!(
            contents.lines().filter(|l| l.starts_with("Date,")).count(),
            1
        );
    }
}
