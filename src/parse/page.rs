//! Two-tier page extraction.
//!
//! Structured table rows are tried first. Only a page with zero structured
//! rows falls back to its text; a table whose rows all have unknown types is
//! still a handled (empty) result.

use scraper::Html;

use super::html::{table_rows, text_lines, text_lines_from_str};
use crate::error_handling::{InfoType, ProcessingStats};
use crate::scope::{
    count_candidate_lines, extract_heuristic, extract_structured, ExtractionStrategy,
    PageExtraction,
};

/// Extracts assets from an HTML page.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `stats` - Processing statistics tracker
pub fn extract_page(document: &Html, stats: &ProcessingStats) -> PageExtraction {
    let rows = table_rows(document, stats);

    if !rows.is_empty() {
        let result = extract_structured(&rows);
        stats.add_info(
            InfoType::RowsUnclassified,
            rows.len().saturating_sub(result.len()),
        );
        log::info!(
            "Classified {} of {} table rows",
            result.len(),
            rows.len()
        );
        return PageExtraction {
            strategy: ExtractionStrategy::Structured,
            result,
        };
    }

    log::info!("No asset table found, scanning page text");
    stats.increment_info(InfoType::HeuristicFallback);
    extract_lines(&text_lines(document), stats)
}

/// Extracts assets from plain text (e.g. a pasted scope list).
///
/// Text has no table rows, so this always uses the heuristic path.
pub fn extract_text(text: &str, stats: &ProcessingStats) -> PageExtraction {
    extract_lines(&text_lines_from_str(text), stats)
}

fn extract_lines(lines: &[String], stats: &ProcessingStats) -> PageExtraction {
    let result = extract_heuristic(lines);
    let candidates = count_candidate_lines(lines);
    stats.add_info(InfoType::CandidateLines, candidates);
    stats.add_info(
        InfoType::CandidatesUnclassified,
        candidates.saturating_sub(result.len()),
    );
    log::info!(
        "Classified {} of {} candidate lines ({} lines scanned)",
        result.len(),
        candidates,
        lines.len()
    );
    PageExtraction {
        strategy: ExtractionStrategy::Heuristic,
        result,
    }
}
