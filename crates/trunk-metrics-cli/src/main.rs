//! trunk-metrics CLI — estimate tree measurements from a single photograph.
//!
//! Stands in for the hosting layer: parses requests, runs the estimator,
//! and prints JSON to stdout. Estimation failures map to a nonzero exit
//! with the error kind and message on stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use trunk_metrics::{
    init_with_level, EstimateError, EstimatorParams, SpeciesTable, TrunkEstimator,
};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Estimate(#[from] EstimateError),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "trunk-metrics")]
#[command(about = "Estimate tree trunk diameter, girth, height, and canopy from a photo")]
#[command(version)]
struct Cli {
    /// Log pipeline progress to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate measurements from a trunk photo.
    Estimate(EstimateArgs),

    /// Print the species coefficient table.
    Species,

    /// Print the service readiness status.
    Health,
}

#[derive(Debug, Clone, Args)]
struct EstimateArgs {
    /// Path to the input image.
    #[arg(long)]
    image: PathBuf,

    /// Species name (case-sensitive; unknown names use "Default").
    #[arg(long)]
    species: Option<String>,

    /// Pixel-to-centimeter scale override, cm per pixel.
    ///
    /// The default is an uncalibrated placeholder; calibrate against a
    /// known reference object before trusting absolute values.
    #[arg(long)]
    scale: Option<f64>,
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Commands::Estimate(args) => {
            let mut params = EstimatorParams::default();
            if let Some(scale) = args.scale {
                params.scale_cm_per_pixel = scale;
            }
            let estimator = TrunkEstimator::with_params(SpeciesTable::builtin(), params);
            let measurement = estimator.estimate(&args.image, args.species.as_deref())?;
            Ok(serde_json::to_string_pretty(&measurement)?)
        }
        Commands::Species => {
            let table = SpeciesTable::builtin();
            Ok(serde_json::to_string_pretty(&table.export())?)
        }
        Commands::Health => {
            let estimator = TrunkEstimator::new(SpeciesTable::builtin());
            Ok(serde_json::to_string_pretty(&estimator.health())?)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = init_with_level(level);

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match &err {
                CliError::Estimate(e) => eprintln!("error ({}): {e}", e.kind()),
                CliError::Json(e) => eprintln!("error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}
