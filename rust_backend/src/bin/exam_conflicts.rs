//! Instructor conflicts report CLI.
//!
//! Reads a timetable snapshot (JSON) and writes the instructor conflicts
//! table as CSV or JSON.
//!
//! # Usage
//!
//! ```bash
//! exam-conflicts snapshot.json --output conflicts.csv
//! exam-conflicts snapshot.json --config examtt.toml --format json
//! RUST_LOG=debug exam-conflicts snapshot.json --back-to-back-distance 67
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use tracing_subscriber::EnvFilter;

use examtt_reports::config::ReportConfig;
use examtt_reports::distance::GeoDistanceMetric;
use examtt_reports::io::loaders::SnapshotLoader;
use examtt_reports::io::writers::{save_report, to_json_string, write_csv, OutputFormat};
use examtt_reports::services::{report_checksum, ReportAssembler};

#[derive(Parser)]
#[command(name = "exam-conflicts")]
#[command(about = "Instructor direct, back-to-back and more-than-two-a-day exam conflicts")]
struct Cli {
    /// Timetable snapshot (JSON)
    snapshot: PathBuf,

    /// Report configuration (TOML); defaults to examtt.toml when present
    #[arg(long, short, env = "EXAMTT_CONFIG")]
    config: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Output format: csv or json (default: from the output extension, else csv)
    #[arg(long, short)]
    format: Option<OutputFormat>,

    /// Generate rows for instructors in parallel
    #[arg(long)]
    parallel: bool,

    /// Count back-to-back exams across a day boundary
    #[arg(long)]
    day_break_back_to_back: bool,

    /// Back-to-back distance threshold in meters; negative disables distances
    #[arg(long, allow_hyphen_values = true)]
    back_to_back_distance: Option<f64>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<ReportConfig> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => match ReportConfig::from_default_location()
            .context("Failed to load examtt.toml")?
        {
            Some(config) => config,
            None => {
                debug!("no examtt.toml found; using default settings");
                ReportConfig::default()
            }
        },
    };
    if cli.day_break_back_to_back {
        config.conflicts.day_break_back_to_back = true;
    }
    if let Some(distance) = cli.back_to_back_distance {
        config.conflicts.back_to_back_distance = distance;
    }
    if cli.parallel {
        config.report.parallel = true;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let config = load_config(&cli)?;
    info!(
        "day break back-to-back: {}, back-to-back distance: {}",
        config.conflicts.day_break_back_to_back, config.conflicts.back_to_back_distance
    );

    let loaded = SnapshotLoader::load_from_file(&cli.snapshot)?;
    info!(
        "Loaded {} placements for {} instructors",
        loaded.num_placements,
        loaded.snapshot.timetable.instructors().len()
    );

    let metric = GeoDistanceMetric::new(config.distance.clone());
    let assembler = ReportAssembler::new(
        &loaded.snapshot.timetable,
        &loaded.snapshot.assignment,
        &loaded.index,
        &metric,
        config.conflicts,
    );
    let table = if config.report.parallel {
        assembler.report_parallel()?
    } else {
        assembler.report()?
    };
    info!("report checksum: {}", report_checksum(&table));

    match &cli.output {
        Some(path) => {
            let format = cli.format.unwrap_or_else(|| OutputFormat::from_path(path));
            save_report(&table, path, format)?;
            info!("Wrote {} rows to {}", table.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            match cli.format.unwrap_or(OutputFormat::Csv) {
                OutputFormat::Csv => write_csv(&table, &mut out)?,
                OutputFormat::Json => writeln!(out, "{}", to_json_string(&table)?)?,
            }
        }
    }

    Ok(())
}
