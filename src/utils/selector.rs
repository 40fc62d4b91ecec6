//! CSS selector parsing for the page acquisition statics.

use scraper::Selector;

// Valid selector that never matches an element
const MATCH_NOTHING_SELECTOR: &str = "*:not(*)";

/// Parses a CSS selector, degrading to one that matches nothing.
///
/// A selector that fails to parse is logged with its `context` (the name of
/// the static it backs), and page acquisition then finds no rows or body
/// instead of aborting the run.
///
/// # Panics
///
/// Only if the built-in match-nothing selector itself fails to parse.
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str)
        .or_else(|e| {
            log::error!(
                "Failed to parse CSS selector '{}' for {}: {}. Matching nothing instead.",
                selector_str,
                context,
                e
            );
            Selector::parse(MATCH_NOTHING_SELECTOR)
        })
        .unwrap_or_else(|e| {
            panic!(
                "Failed to parse fallback selector '{}': {}",
                MATCH_NOTHING_SELECTOR, e
            )
        })
}
