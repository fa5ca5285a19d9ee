use std::path::Path;
use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands};
use crate::cli::prompt;
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::models::TargetLocation;
use crate::readers::RecordParser;
use crate::service::PredictionService;
use crate::storage::{CsvSheetStore, ReadingStore};
use crate::utils::coordinates::{validate_latitude, validate_longitude};

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Run {
            config,
            latitude,
            longitude,
        } => {
            let config = ServiceConfig::load(&config)?;
            let target = resolve_target(latitude, longitude)?;

            println!(
                "Predicting conditions at ({}, {}) from {} stations",
                target.latitude,
                target.longitude,
                config.stations.len()
            );
            println!("Press Ctrl+C to stop\n");

            let store = CsvSheetStore::new(&config.sheets_dir);
            let service = PredictionService::new(config, target, store);

            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    let _ = shutdown_tx.send(true);
                }
            });

            service.run(shutdown_rx).await
        }

        Commands::Predict {
            config,
            latitude,
            longitude,
        } => {
            let config = ServiceConfig::load(&config)?;
            let target = resolve_target(latitude, longitude)?;

            let store = CsvSheetStore::new(&config.sheets_dir);
            let service = PredictionService::new(config, target, store);

            println!(
                "Target location: ({}, {})",
                service.target().latitude,
                service.target().longitude
            );
            let record = service.run_once()?;
            println!("Prediction emitted at {} {}", record.date, record.time);
            println!("{}", record);

            Ok(())
        }

        Commands::Check { config } => {
            let config = ServiceConfig::load(&config)?;
            println!(
                "Configuration OK: {} stations, sheets in {}",
                config.stations.len(),
                config.sheets_dir.display()
            );

            let store = CsvSheetStore::new(&config.sheets_dir);
            let parser = RecordParser::new();
            let mut problems = 0;

            for station in &config.stations {
                match store.latest(&station.id) {
                    Ok(Some(raw)) => match parser.parse(&station.id, &raw) {
                        Ok(reading) => println!(
                            "   {} - latest reading {}C / {}% / {}hPa ({}, {})",
                            station.id,
                            reading.temperature_c,
                            reading.humidity_pct,
                            reading.pressure_hpa,
                            reading.air_quality,
                            reading.rain_status
                        ),
                        Err(e) => {
                            problems += 1;
                            println!("   {} - invalid data: {}", station.id, e);
                        }
                    },
                    Ok(None) => {
                        problems += 1;
                        println!("   {} - no records", station.id);
                    }
                    Err(e) => {
                        problems += 1;
                        println!("   {} - sheet error: {}", station.id, e);
                    }
                }
            }

            if problems == 0 {
                println!("All station sheets are ready");
            } else {
                println!("{} station(s) need attention", problems);
            }

            Ok(())
        }
    }
}

/// Flags bypass the interactive prompt; a missing flag falls back to
/// prompting for just that coordinate. Flag values fail fast on invalid
/// input, since reprompting is only meaningful interactively.
fn resolve_target(latitude: Option<f64>, longitude: Option<f64>) -> Result<TargetLocation> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => {
            validate_latitude(lat)?;
            validate_longitude(lon)?;
            Ok(TargetLocation::new(lat, lon))
        }
        (Some(lat), None) => {
            validate_latitude(lat)?;
            Ok(TargetLocation::new(lat, prompt::prompt_longitude()?))
        }
        (None, Some(lon)) => {
            validate_longitude(lon)?;
            Ok(TargetLocation::new(prompt::prompt_latitude()?, lon))
        }
        (None, None) => prompt::prompt_target_location(),
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    Ok(())
}
