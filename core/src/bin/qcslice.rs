use clap::{ArgAction, Parser, ValueEnum};
use log::{error, info, warn};
use qcslice_core::cli::setup_logging;
use qcslice_core::{
    collect_corpus, slice_all, CorpusReport, CorpusTriage, ParameterProbe, ShellRunner,
    SliceOverrides, Slicer, SubjectLayout, TriageConfig, CORPUS_BUCKETS,
};
use std::path::PathBuf;
use std::process;

/// CLI tool for triaging and slicing a subject's NIfTI data
#[derive(Parser, Debug)]
#[command(name = "qcslice")]
#[command(about = "Bucket a subject's NIfTI files by modality and render QC slice images")]
#[command(version)]
struct Cli {
    /// Subject root containing a summary folder and unprocessed/NIFTI
    #[arg(value_name = "SUBJECT_DIR")]
    subject: PathBuf,

    /// Destination folder for slice images
    #[arg(short, long, default_value = "img")]
    dest: PathBuf,

    /// Also render one image per plane at the policy slice positions
    #[arg(long)]
    per_plane: bool,

    /// Extra path substring excluding files from triage (repeatable)
    #[arg(long, value_name = "SUBSTRING")]
    exclude: Vec<String>,

    /// Only print the corpus; do not slice
    #[arg(long)]
    dry_run: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Verbose logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
    /// File paths only (one per line)
    Paths,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    // Resolve subject layout
    let layout = match SubjectLayout::resolve(&cli.subject) {
        Ok(layout) => layout,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    info!("Processing data in: {}", layout.data_dir.display());

    // Triage data directory
    let config = cli
        .exclude
        .iter()
        .fold(TriageConfig::default(), |config, s| config.exclude(s.as_str()));

    let runner = ShellRunner::new();
    let probe = ParameterProbe::new(runner);
    let triage = match collect_corpus(&layout.data_dir, &probe, &config) {
        Ok(triage) => triage,
        Err(e) => {
            error!("Failed to read data directory: {}", e);
            eprintln!("Error: Failed to read data directory: {}", e);
            process::exit(1);
        }
    };

    // Output results
    output_triage(&triage, cli.format);

    if cli.dry_run {
        return;
    }

    // Slice each bucket
    let slicer = Slicer::new(runner);
    let overrides = SliceOverrides::default();
    let mut failures = 0;
    for bucket in &CORPUS_BUCKETS {
        let files = triage.corpus.bucket(*bucket);
        if files.is_empty() {
            continue;
        }
        info!("Slicing {} ({} files)", bucket, files.len());
        match slice_all(files, &cli.dest, cli.per_plane, &overrides, &slicer) {
            Ok(summary) => {
                info!("{}: wrote {} images", bucket, summary.written.len());
                failures += summary.failures.len();
            }
            Err(e) => {
                error!("Failed to prepare {}: {}", cli.dest.display(), e);
                eprintln!("Error: Failed to prepare {}: {}", cli.dest.display(), e);
                process::exit(1);
            }
        }
    }

    if failures > 0 {
        warn!("{} slicing requests failed", failures);
    }
}

fn output_triage(triage: &CorpusTriage, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", CorpusReport::new(triage));
        }
        OutputFormat::Paths => {
            for bucket in &CORPUS_BUCKETS {
                for path in triage.corpus.bucket(*bucket) {
                    println!("{}", path.display());
                }
            }
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(triage) {
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
