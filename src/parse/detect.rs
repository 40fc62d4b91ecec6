//! Input format detection.

use std::path::Path;

use crate::config::{InputFormat, HTML_EXTENSIONS};

/// Resolves `requested` to either `Html` or `Text`.
///
/// `Auto` picks HTML when the file extension is `.html`/`.htm` or when the
/// first non-whitespace character of the content is `<`.
pub fn resolve_input_format(requested: InputFormat, path: &Path, content: &str) -> InputFormat {
    match requested {
        InputFormat::Html | InputFormat::Text => requested,
        InputFormat::Auto => {
            let html_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    HTML_EXTENSIONS
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(ext))
                });
            if html_extension || content.trim_start().starts_with('<') {
                InputFormat::Html
            } else {
                InputFormat::Text
            }
        }
    }
}
