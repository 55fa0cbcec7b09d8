//! CLI interface for workout reports.
//!
//! Each subcommand is non-interactive: sensor values in, one report line
//! per workout out. Reports go to stdout; logs and errors go to stderr.
//!
//! - `workout report <CODE> [VALUES]...` reports a single package.
//! - `workout batch [--file <PATH>]` reports every package in a file,
//!   falling back to the configured file and then the sample dataset.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use workout::{WorkoutRecord, build, format_record, format_record_json};

use crate::config::{Config, OutputFormat};
use crate::packages::{self, Package};

/// Workout: turn raw sensor packages into workout reports.
#[derive(Debug, Parser)]
#[command(name = "workout", after_long_help = CODES_HELP)]
pub struct Cli {
    /// Config file (defaults to `~/.workout/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format. Overrides the `output` config key.
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

const CODES_HELP: &str = r"Workout codes and their values:
  RUN  actions duration weight
  WLK  actions duration weight height
  SWM  actions duration weight pool-length pool-laps

Examples:
  workout report RUN 15000 1 75
  workout report SWM 720 1 80 25 40 --output json
  workout batch --file packages.toml";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report a single sensor package.
    Report {
        /// Workout code: RUN, WLK or SWM.
        code: String,

        /// Positional sensor values for the workout code.
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Report every package in a packages file.
    ///
    /// Without `--file`, uses the `packages` config key, then the
    /// built-in sample dataset. Stops at the first invalid package.
    Batch {
        /// TOML file with `[[package]]` entries.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let output = cli.output.unwrap_or(config.output);

    let lines = match cli.command {
        Command::Report { code, values } => {
            let package = Package { code, data: values };
            vec![render(&package, output)?]
        }
        Command::Batch { file } => {
            let packages = match file.or(config.packages) {
                Some(path) => {
                    debug!(path = %path.display(), "loading packages");
                    packages::load(&path)?
                }
                None => packages::sample(),
            };
            info!(count = packages.len(), "reporting packages");
            render_batch(&packages, output)?
        }
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Build, compute and format every package, stopping at the first failure.
///
/// Errors name the failing package by its 1-based position and code.
fn render_batch(packages: &[Package], output: OutputFormat) -> Result<Vec<String>, String> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            render(package, output)
                .map_err(|e| format!("package {} ({}): {e}", index + 1, package.code))
        })
        .collect()
}

/// Build, compute and format a single package.
fn render(package: &Package, output: OutputFormat) -> Result<String, String> {
    let record = report(package)?;
    match output {
        OutputFormat::Text => Ok(format_record(&record)),
        OutputFormat::Json => {
            format_record_json(&record).map_err(|e| format!("failed to serialize report: {e}"))
        }
    }
}

fn report(package: &Package) -> Result<WorkoutRecord, String> {
    let workout = build(&package.code, &package.data).map_err(|e| e.to_string())?;
    Ok(workout.report())
}
