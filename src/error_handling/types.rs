//! Error type definitions.
//!
//! This module defines the error and info types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for writing the assembled scope out.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A category file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The scope could not be encoded as JSON.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Informational metrics gathered while extracting a page.
///
/// None of these are failures: dropped rows and unclassified lines are a
/// normal outcome of the heuristic design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Table rows with enough cells to be structured data
    TableRowsFound,
    /// Table rows dropped for having fewer than two cells
    TableRowsSkipped,
    /// Structured rows whose type label matched no category
    RowsUnclassified,
    /// Page text lines that looked like an asset
    CandidateLines,
    /// Candidate lines with no category keyword nearby
    CandidatesUnclassified,
    /// Pages that fell back to the page text
    HeuristicFallback,
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InfoType::TableRowsFound => "Table rows found",
            InfoType::TableRowsSkipped => "Table rows skipped (fewer than 2 cells)",
            InfoType::RowsUnclassified => "Rows with unknown type",
            InfoType::CandidateLines => "Candidate text lines",
            InfoType::CandidatesUnclassified => "Candidate lines without category",
            InfoType::HeuristicFallback => "Fell back to page text",
        };
        write!(f, "{}", s)
    }
}
