use clap::Parser;
use log::{error, info};
use qcslice_core::cli::{setup_logging, Cli, OutputFormat};
use qcslice_core::{
    write_params_csv, ParamRecord, ParameterProbe, ParameterSource, ShellRunner, PARAMS_HEADER,
};
use std::path::Path;
use std::process;

/// File name of the parameter table written next to the input
const PARAMS_FILE: &str = "Params.csv";

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    // Verify file exists
    if !cli.file.exists() {
        error!("path does not exist: {}", cli.file.display());
        eprintln!("Error: {} does not exist", cli.file.display());
        process::exit(1);
    }

    info!("Processing file: {}", cli.file.display());

    // Probe scan parameters
    let probe = ParameterProbe::new(ShellRunner::new());
    let record = match probe.probe(&cli.file, None) {
        Ok(record) => record,
        Err(e) => {
            error!("Failed to probe {}: {}", cli.file.display(), e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    output_record(&record, cli.format);

    // Write parameter table
    let table = params_path(&cli.file);
    if let Err(e) = write_params_csv(std::slice::from_ref(&record), &table) {
        error!("Failed to write {}: {}", table.display(), e);
        eprintln!("Error: Failed to write {}: {}", table.display(), e);
        process::exit(1);
    }
    info!("Wrote {}", table.display());
}

fn params_path(file: &Path) -> std::path::PathBuf {
    file.parent()
        .unwrap_or_else(|| Path::new("."))
        .join(PARAMS_FILE)
}

fn output_record(record: &ParamRecord, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for (name, value) in PARAMS_HEADER.iter().zip(record.to_row()) {
                println!("{:<10}{}", format!("{}:", name), value);
            }
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(record) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
