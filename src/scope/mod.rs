//! Scope asset extraction and classification.
//!
//! This module turns page content into categorized asset lists:
//! - Keyword classification over a fixed, ordered pattern table
//! - Structured extraction from asset / type table rows
//! - Heuristic extraction from page text (fallback when there are no rows)
//! - Output assembly (trim, dedup, drop empty categories)
//!
//! Everything here is pure: no I/O, no shared state. Page acquisition lives in
//! `crate::parse` and file output in `crate::export`.

mod assemble;
mod category;
mod heuristic;
mod result;
mod structured;

// Re-export public API
pub use assemble::{assemble, AssembledScope};
pub use category::{classify, match_patterns, Category, CategoryPatterns, PATTERN_TABLE};
pub use heuristic::{count_candidate_lines, extract_heuristic, is_candidate_line, normalize_lines};
pub use result::{ExtractionResult, ExtractionStrategy, PageExtraction};
pub use structured::{extract_structured, is_structured_row, Row};
