//! File name sanitization.

use crate::config::FILENAME_REPLACEMENT_CHAR;

/// Turns an arbitrary name into a safe file name stem.
///
/// Every character outside `[a-zA-Z0-9-_.]` is replaced with `_` and the
/// result is lowercased. Replacement is per character, so multi-byte
/// characters become a single `_`.
///
/// # Examples
///
/// ```
/// use scope_export::utils::sanitize::sanitize_filename;
///
/// assert_eq!(sanitize_filename("ios_app"), "ios_app");
/// assert_eq!(sanitize_filename("Wild Card/*"), "wild_card__");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                FILENAME_REPLACEMENT_CHAR
            }
        })
        .collect::<String>()
        .to_lowercase()
}
