//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `scope_export` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use scope_export::config::DEFAULT_OUTPUT_DIR;
use scope_export::export::to_json;
use scope_export::initialization::init_logger_with;
use scope_export::{run_export, Config, InputFormat, LogFormat, LogLevel};

/// Extract categorized scope assets (domains, apps, repositories) from a
/// program page and write one list per category.
#[derive(Debug, Parser)]
#[command(name = "scope_export", version, about)]
struct Cli {
    /// Saved HTML page or plain-text scope list (`-` reads stdin)
    file: PathBuf,

    /// Directory the per-category `.txt` files are written into
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// How the input is interpreted
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// Print the assets as JSON on stdout instead of writing files
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            file: cli.file,
            output_dir: cli.output_dir,
            input_format: cli.format,
            json: cli.json,
            log_level: cli.log_level,
            log_format: cli.log_format,
        }
    }
}

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_export(&config) {
        Ok(report) => {
            if config.json {
                let json = to_json(&report.scope).context("Failed to render JSON")?;
                println!("{}", json);
                return Ok(());
            }

            if report.is_empty() {
                println!("No matching assets to export.");
            } else {
                println!(
                    "Wrote {} file(s) with {} asset{} (from {})",
                    report.files_written.len(),
                    report.total_assets(),
                    if report.total_assets() == 1 { "" } else { "s" },
                    report.strategy
                );
                for path in &report.files_written {
                    println!("  {}", path.display());
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("scope_export error: {:#}", e);
            process::exit(1);
        }
    }
}
