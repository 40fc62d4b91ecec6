//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::DEFAULT_OUTPUT_DIR;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the input file is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// HTML when the extension is `.html`/`.htm` or the content starts with `<`
    Auto,
    /// Saved HTML page (table rows first, page text as fallback)
    Html,
    /// Plain text, one item per line (page text extraction only)
    Text,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use scope_export::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("scope.html"),
///     output_dir: PathBuf::from("out"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read the page from (`-` for stdin)
    pub file: PathBuf,

    /// Directory the per-category files are written into
    pub output_dir: PathBuf,

    /// How the input is interpreted
    pub input_format: InputFormat,

    /// Print the assembled scope as JSON on stdout instead of writing files
    pub json: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("scope.html"),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            input_format: InputFormat::Auto,
            json: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
