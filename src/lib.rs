//! scope_export library: scope asset extraction and export
//!
//! This library reads a program's scope page (saved HTML or pasted text),
//! extracts the in-scope assets, classifies them into a fixed set of
//! categories (domains, iOS apps, Android apps, GitHub repositories) and
//! writes one deduplicated list per category.
//!
//! # Example
//!
//! ```no_run
//! use scope_export::{run_export, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("scope.html"),
//!     output_dir: PathBuf::from("out"),
//!     ..Default::default()
//! };
//!
//! let report = run_export(&config)?;
//! println!("Wrote {} file(s)", report.files_written.len());
//! # Ok(())
//! # }
//! ```
//!
//! The extraction engine itself is pure and can be used without any I/O:
//!
//! ```
//! use scope_export::scope::{assemble, extract_structured, Category};
//!
//! let rows = [["a.com", "Domain"], ["x", "unknown"], ["foo/bar", "GitHub"]];
//! let scope = assemble(&extract_structured(&rows));
//! assert_eq!(scope.get(Category::Domain).unwrap(), ["a.com".to_string()]);
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod parse;
pub mod scope;
pub mod utils;

// Re-export public API
pub use config::{Config, InputFormat, LogFormat, LogLevel};
pub use error_handling::{ExportError, InfoType, InitializationError, ProcessingStats};
pub use run::{run_export, ExportReport};

// Internal run module (contains the export orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::io::Read;
    use std::path::{Path, PathBuf};

    use scraper::Html;

    use crate::app::{print_category_summary, print_extraction_statistics};
    use crate::config::{Config, InputFormat, STDIN_PATH};
    use crate::error_handling::ProcessingStats;
    use crate::export::write_category_files;
    use crate::parse::{extract_page, extract_text, resolve_input_format};
    use crate::scope::{assemble, AssembledScope, ExtractionStrategy};

    /// Results of an export run.
    #[derive(Debug, Clone)]
    pub struct ExportReport {
        /// Extraction tier that produced the assets
        pub strategy: ExtractionStrategy,
        /// Input format the page was read as (`Html` or `Text`)
        pub input_format: InputFormat,
        /// Deduplicated assets per non-empty category
        pub scope: AssembledScope,
        /// Files written, in category order (empty in JSON mode)
        pub files_written: Vec<PathBuf>,
    }

    impl ExportReport {
        /// Total number of exported assets.
        pub fn total_assets(&self) -> usize {
            self.scope.total_assets()
        }

        /// `true` when nothing matched; a valid outcome, not an error.
        pub fn is_empty(&self) -> bool {
            self.scope.is_empty()
        }
    }

    fn read_input(path: &Path) -> Result<String> {
        if path.as_os_str() == STDIN_PATH {
            info!("Reading page from stdin");
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read page from stdin")?;
            Ok(content)
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
    }

    /// Runs an export with the provided configuration.
    ///
    /// Reads the page, extracts and classifies its assets, assembles the
    /// per-category lists and, unless `config.json` is set, writes one file
    /// per non-empty category into `config.output_dir`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input cannot be read
    /// - The output directory or a category file cannot be written
    ///
    /// Finding no assets is not an error; check [`ExportReport::is_empty`].
    pub fn run_export(config: &Config) -> Result<ExportReport> {
        let content = read_input(&config.file)?;
        let input_format = resolve_input_format(config.input_format, &config.file, &content);
        info!(
            "Reading {} as {:?} ({} bytes)",
            config.file.display(),
            input_format,
            content.len()
        );

        let stats = ProcessingStats::new();
        let extraction = match input_format {
            InputFormat::Text => extract_text(&content, &stats),
            InputFormat::Html | InputFormat::Auto => {
                let document = Html::parse_document(&content);
                extract_page(&document, &stats)
            }
        };

        let scope = assemble(&extraction.result);
        info!(
            "Extracted {} unique asset(s) from {}",
            scope.total_assets(),
            extraction.strategy
        );
        print_extraction_statistics(&stats);
        print_category_summary(&scope);

        let files_written = if config.json {
            Vec::new()
        } else {
            write_category_files(&config.output_dir, &scope).with_context(|| {
                format!(
                    "Failed to export assets to {}",
                    config.output_dir.display()
                )
            })?
        };

        Ok(ExportReport {
            strategy: extraction.strategy,
            input_format,
            scope,
            files_written,
        })
    }
}
