//! Heuristic extraction from unstructured page text.
//!
//! Used when a page has no asset table. A line is a candidate when it looks
//! like an asset (dotted token, URL scheme or a GitHub host); it is then
//! classified by the keywords found in the line itself and the two lines
//! after it.

use regex::Regex;
use std::sync::LazyLock;

use super::category::match_patterns;
use super::result::ExtractionResult;
use crate::config::LOOKAHEAD_LINES;
use crate::utils::compile_regex_unsafe;

// A dot followed by at least two word characters, e.g. ".com" or ".apk"
const DOTTED_TOKEN_PATTERN: &str = r"\.[A-Za-z0-9_]{2,}";
const URL_SCHEME_PATTERN: &str = r"https?://";
const GITHUB_HOST_PATTERN: &str = r"(?i)github\.com";

static DOTTED_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(DOTTED_TOKEN_PATTERN, "DOTTED_TOKEN_RE"));
static URL_SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(URL_SCHEME_PATTERN, "URL_SCHEME_RE"));
static GITHUB_HOST_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(GITHUB_HOST_PATTERN, "GITHUB_HOST_RE"));

/// Returns `true` if a line has the shape of an asset.
pub fn is_candidate_line(line: &str) -> bool {
    DOTTED_TOKEN_RE.is_match(line) || URL_SCHEME_RE.is_match(line) || GITHUB_HOST_RE.is_match(line)
}

/// Trims lines and drops the empty ones.
pub fn normalize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<&str> {
    lines
        .iter()
        .map(|l| l.as_ref().trim())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Lowercased text of the line at `index` and the lines after it.
///
/// Lines past the end count as empty strings.
fn lookahead_window(lines: &[&str], index: usize) -> String {
    (0..=LOOKAHEAD_LINES)
        .map(|offset| lines.get(index + offset).copied().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Extracts assets from page text.
///
/// Lines are trimmed and empty ones dropped before scanning. The candidate
/// line itself (never the window) is appended to the matched category.
/// No deduplication happens here.
pub fn extract_heuristic<S: AsRef<str>>(lines: &[S]) -> ExtractionResult {
    let lines = normalize_lines(lines);
    let mut result = ExtractionResult::new();

    for (index, line) in lines.iter().enumerate() {
        if !is_candidate_line(line) {
            continue;
        }
        let window = lookahead_window(&lines, index);
        match match_patterns(&window) {
            Some(category) => result.push(category, *line),
            None => log::trace!("No category keyword near candidate '{}'", line),
        }
    }

    result
}

/// Number of lines that pass the candidate shape test.
pub fn count_candidate_lines<S: AsRef<str>>(lines: &[S]) -> usize {
    normalize_lines(lines)
        .into_iter()
        .filter(|l| is_candidate_line(l))
        .count()
}
