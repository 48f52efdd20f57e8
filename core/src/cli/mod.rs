pub mod report;

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for qcparams
#[derive(Parser, Debug)]
#[command(name = "qcparams")]
#[command(about = "Gather acquisition parameters of a NIfTI file into Params.csv")]
#[command(version)]
pub struct Cli {
    /// Path to a .nii or .nii.gz file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Maps a `-v` count to a log level filter
pub fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}

/// Installs env_logger at the level selected by `-v`
pub fn setup_logging(verbose: u8) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level(verbose))
        .init();
}
