//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including CSS selectors, input detection hints and output defaults.

// Page acquisition selectors
/// Table rows that may carry an asset / type pair
pub const TABLE_ROW_SELECTOR_STR: &str = "table tr";
/// Data cells inside a table row (header `th` cells are not data)
pub const TABLE_CELL_SELECTOR_STR: &str = "td";
/// Document body, the root of visible page text
pub const BODY_SELECTOR_STR: &str = "body";

/// Elements whose text is never rendered and is skipped when collecting page text.
pub const NON_VISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements rendered as blocks: page text breaks into a new line before and after them.
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "dd", "details", "dialog",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hgroup", "hr", "html", "li", "main", "nav", "ol", "p", "pre",
    "section", "summary", "table", "tbody", "tfoot", "thead", "tr", "ul",
];

/// Table cells: their text stays on the row's line, separated by a space.
pub const TABLE_CELL_ELEMENTS: &[&str] = &["td", "th"];

/// Line break element inside inline text.
pub const LINE_BREAK_ELEMENT: &str = "br";

/// Minimum number of cells a table row needs to count as structured data.
/// Column 0 is the asset, column 1 the type label.
pub const MIN_ROW_COLUMNS: usize = 2;

/// Number of lines after a candidate line that are searched for a category keyword.
pub const LOOKAHEAD_LINES: usize = 2;

// Input format detection
/// File extensions treated as HTML when the input format is `auto`
pub const HTML_EXTENSIONS: &[&str] = &["html", "htm"];
/// Input path that means "read from stdin"
pub const STDIN_PATH: &str = "-";

// Output
/// Default directory the per-category files are written into
pub const DEFAULT_OUTPUT_DIR: &str = ".";
/// Extension of the per-category output files
pub const OUTPUT_FILE_EXTENSION: &str = "txt";
/// Replacement for characters not allowed in output file names
pub const FILENAME_REPLACEMENT_CHAR: char = '_';
