//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and export
//! - Processing statistics tracking (informational metrics)
//!
//! Extraction itself never fails: rows and lines that cannot be classified are
//! counted as info metrics, not reported as errors.

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ExportError, InfoType, InitializationError};
