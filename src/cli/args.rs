use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "microclimate")]
#[command(about = "Distance-weighted microclimate prediction service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the continuous prediction service
    Run {
        #[arg(
            short,
            long,
            default_value = "microclimate.toml",
            help = "Configuration file"
        )]
        config: PathBuf,

        #[arg(long, help = "Target latitude [default: prompt interactively]")]
        latitude: Option<f64>,

        #[arg(long, help = "Target longitude [default: prompt interactively]")]
        longitude: Option<f64>,
    },

    /// Emit a single prediction and exit
    Predict {
        #[arg(
            short,
            long,
            default_value = "microclimate.toml",
            help = "Configuration file"
        )]
        config: PathBuf,

        #[arg(long, help = "Target latitude [default: prompt interactively]")]
        latitude: Option<f64>,

        #[arg(long, help = "Target longitude [default: prompt interactively]")]
        longitude: Option<f64>,
    },

    /// Validate configuration and report station sheet status
    Check {
        #[arg(
            short,
            long,
            default_value = "microclimate.toml",
            help = "Configuration file"
        )]
        config: PathBuf,
    },
}
