//! HTML and text page parsing.
//!
//! This module acquires extractor input from page content and runs the
//! two-tier extraction over it:
//! - Table rows and visible body text from HTML documents
//! - Lines from plain text
//! - Detection of which of the two an input is
//!
//! All HTML parsing is done using CSS selectors via the `scraper` crate.

mod detect;
mod html;
mod page;

// Re-export public API
pub use detect::resolve_input_format;
pub use html::{table_rows, text_lines, text_lines_from_str};
pub use page::{extract_page, extract_text};
