//! Structured extraction from table rows.

use super::category::classify;
use super::result::ExtractionResult;
use crate::config::MIN_ROW_COLUMNS;

/// One table row: column 0 is the asset, column 1 its type label.
pub type Row = Vec<String>;

/// Returns `true` if a row has enough columns to be treated as structured data.
pub fn is_structured_row<S: AsRef<str>>(row: &[S]) -> bool {
    row.len() >= MIN_ROW_COLUMNS
}

/// Extracts assets from asset / type rows.
///
/// Rows with fewer than two columns are ignored. Each remaining row files its
/// trimmed first column under the category of its trimmed second column;
/// rows whose label matches no category contribute nothing.
///
/// # Arguments
///
/// * `rows` - Rows in page order
///
/// # Returns
///
/// An `ExtractionResult` holding every category, in row order.
pub fn extract_structured<R, S>(rows: &[R]) -> ExtractionResult
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut result = ExtractionResult::new();

    for row in rows {
        let row: &[S] = row.as_ref();
        if !is_structured_row(row) {
            continue;
        }
        let asset = row[0].as_ref().trim();
        let label = row[1].as_ref().trim();
        match classify(label) {
            Some(category) => result.push(category, asset),
            None => log::trace!("No category for type label '{}' (asset '{}')", label, asset),
        }
    }

    result
}
