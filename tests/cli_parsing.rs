//! Tests for CLI argument parsing.

use clap::Parser;
use scope_export::config::DEFAULT_OUTPUT_DIR;
use scope_export::{InputFormat, LogFormat, LogLevel};
use std::path::PathBuf;

// The CLI struct lives in main.rs and can't be imported, so this mirrors it.
#[derive(Debug, clap::Parser)]
#[command(name = "scope_export")]
struct TestCli {
    file: PathBuf,
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,
    #[arg(long)]
    json: bool,
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[test]
fn test_cli_defaults() {
    let cli = TestCli::try_parse_from(["scope_export", "scope.html"]).expect("Should parse");

    assert_eq!(cli.file, PathBuf::from("scope.html"));
    assert_eq!(cli.output_dir, PathBuf::from("."));
    assert_eq!(cli.format, InputFormat::Auto);
    assert!(!cli.json);
    assert_eq!(
        log::LevelFilter::from(cli.log_level),
        log::LevelFilter::Info
    );
    match cli.log_format {
        LogFormat::Plain => {}
        LogFormat::Json => panic!("Expected plain log format"),
    }
}

#[test]
fn test_cli_all_options() {
    let cli = TestCli::try_parse_from([
        "scope_export",
        "-",
        "-o",
        "out",
        "--format",
        "text",
        "--json",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse");

    assert_eq!(cli.file, PathBuf::from("-"));
    assert_eq!(cli.output_dir, PathBuf::from("out"));
    assert_eq!(cli.format, InputFormat::Text);
    assert!(cli.json);
    assert_eq!(
        log::LevelFilter::from(cli.log_level),
        log::LevelFilter::Debug
    );
    match cli.log_format {
        LogFormat::Json => {}
        LogFormat::Plain => panic!("Expected json log format"),
    }
}

#[test]
fn test_cli_requires_file() {
    assert!(TestCli::try_parse_from(["scope_export"]).is_err());
}

#[test]
fn test_cli_rejects_unknown_format() {
    let result = TestCli::try_parse_from(["scope_export", "scope.html", "--format", "pdf"]);
    assert!(result.is_err());
}
