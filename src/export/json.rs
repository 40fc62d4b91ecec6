//! JSON export.

use crate::error_handling::ExportError;
use crate::scope::AssembledScope;

/// Renders the scope as a pretty-printed JSON object keyed by category.
///
/// Keys appear in category order; empty categories are absent.
pub fn to_json(scope: &AssembledScope) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(scope)?)
}
