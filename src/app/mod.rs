//! Main application modules.
//!
//! This module provides the statistics printing used at the end of a run.

pub mod statistics;

// Re-export public API
pub use statistics::{print_category_summary, print_extraction_statistics};
