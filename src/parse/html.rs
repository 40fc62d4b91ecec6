//! Page content acquisition.
//!
//! This module turns a parsed HTML document into the two inputs the
//! extractors understand:
//! - Table rows (`table tr`, one string per `td` cell)
//! - Visible text lines of the page body, laid out the way a browser
//!   renders them (inline runs joined, whitespace collapsed)

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::config::{
    BLOCK_ELEMENTS, BODY_SELECTOR_STR, LINE_BREAK_ELEMENT, NON_VISIBLE_ELEMENTS,
    TABLE_CELL_ELEMENTS, TABLE_CELL_SELECTOR_STR, TABLE_ROW_SELECTOR_STR,
};
use crate::error_handling::{InfoType, ProcessingStats};
use crate::scope::{is_structured_row, Row};
use crate::utils::parse_selector_with_fallback;

static TABLE_ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(TABLE_ROW_SELECTOR_STR, "TABLE_ROW_SELECTOR")
});

static TABLE_CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(TABLE_CELL_SELECTOR_STR, "TABLE_CELL_SELECTOR")
});

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(BODY_SELECTOR_STR, "BODY_SELECTOR"));

/// Collects table rows that carry at least two data cells.
///
/// Each cell is the text of a `td` inside the row with whitespace runs
/// collapsed to a single space and the ends trimmed. Rows made only of `th`
/// header cells, or with a single cell, are counted as skipped and dropped.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `stats` - Processing statistics tracker
///
/// # Returns
///
/// The structured rows in document order.
pub fn table_rows(document: &Html, stats: &ProcessingStats) -> Vec<Row> {
    let mut rows = Vec::new();

    for tr in document.select(&TABLE_ROW_SELECTOR) {
        let cells: Row = tr
            .select(&TABLE_CELL_SELECTOR)
            .map(|td| collapse_whitespace(&td.text().collect::<String>()))
            .collect();

        if is_structured_row(&cells) {
            rows.push(cells);
        } else {
            stats.increment_info(InfoType::TableRowsSkipped);
        }
    }

    log::debug!("Found {} structured table rows", rows.len());
    stats.add_info(InfoType::TableRowsFound, rows.len());
    rows
}

/// Collects the visible text of the page body as rendered lines.
///
/// Inline elements are joined into the line of their enclosing block, and
/// whitespace runs collapse to one space. Lines break only at block element
/// boundaries and at `<br>`; cells of a table row share one line. Text inside
/// `script`, `style`, `noscript` and `template` is skipped. When the document
/// has no `<body>`, the whole document is used.
pub fn text_lines(document: &Html) -> Vec<String> {
    let root = document
        .select(&BODY_SELECTOR)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut layout = LineLayout::default();
    layout_children(root, &mut layout);
    let lines = layout.finish();

    log::debug!("Collected {} text lines from page body", lines.len());
    lines
}

#[derive(Default)]
struct LineLayout {
    lines: Vec<String>,
    current: String,
}

impl LineLayout {
    fn push_text(&mut self, text: &str) {
        self.current.push_str(text);
    }

    fn break_line(&mut self) {
        let line = collapse_whitespace(&self.current);
        self.current.clear();
        if !line.is_empty() {
            self.lines.push(line);
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.break_line();
        self.lines
    }
}

fn layout_children(element: ElementRef<'_>, layout: &mut LineLayout) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            layout.push_text(text);
            continue;
        }
        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };

        let name = child.value().name();
        if NON_VISIBLE_ELEMENTS.contains(&name) {
            continue;
        }
        if name == LINE_BREAK_ELEMENT {
            layout.break_line();
            continue;
        }

        let block = BLOCK_ELEMENTS.contains(&name);
        if block {
            layout.break_line();
        }
        layout_children(child, layout);
        if block {
            layout.break_line();
        } else if TABLE_CELL_ELEMENTS.contains(&name) {
            layout.push_text(" ");
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits plain text into trimmed, non-empty lines (`\n` or `\r\n`).
pub fn text_lines_from_str(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
