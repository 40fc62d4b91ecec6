//! Asset categories and keyword classification.
//!
//! Classification is a case-insensitive substring scan over an ordered
//! pattern table. The table order is the tie-break: when a text contains
//! keywords of several categories, the category declared first wins.

use serde::Serialize;
use strum_macros::{Display, EnumIter as EnumIterMacro, IntoStaticStr};

/// The fixed set of scope asset categories, in declaration (tie-break) order.
///
/// The derived ordering follows the declaration, so maps keyed by `Category`
/// iterate in the same order the pattern table is scanned.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIterMacro,
    Display,
    IntoStaticStr,
    Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Web domains and wildcard hosts
    Domain,
    /// App Store listings
    IosApp,
    /// Play Store listings / Android packages
    Android,
    /// Source repositories hosted on GitHub
    Github,
}

impl Category {
    /// Output key of the category (`domain`, `ios_app`, `android`, `github`).
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Keywords that identify one category.
#[derive(Debug)]
pub struct CategoryPatterns {
    /// Category the patterns identify
    pub category: Category,
    /// Lowercase substrings, scanned in order
    pub patterns: &'static [&'static str],
}

/// Ordered pattern table shared by every extraction path.
pub static PATTERN_TABLE: [CategoryPatterns; 4] = [
    CategoryPatterns {
        category: Category::Domain,
        patterns: &["domain"],
    },
    CategoryPatterns {
        category: Category::IosApp,
        patterns: &["ios", "app store", "ios: app store"],
    },
    CategoryPatterns {
        category: Category::Android,
        patterns: &["android", "play store", "playstore"],
    },
    CategoryPatterns {
        category: Category::Github,
        patterns: &["github"],
    },
];

/// Scans the pattern table against text that is already lowercased.
///
/// Returns the first category (in table order) with a pattern contained in
/// `lowered`.
pub fn match_patterns(lowered: &str) -> Option<Category> {
    PATTERN_TABLE
        .iter()
        .find(|entry| entry.patterns.iter().any(|p| lowered.contains(*p)))
        .map(|entry| entry.category)
}

/// Classifies a free-text type label such as `"Domain"` or `"iOS: App Store"`.
///
/// Returns `None` for empty input or when no keyword matches.
pub fn classify(text: &str) -> Option<Category> {
    if text.is_empty() {
        return None;
    }
    match_patterns(&text.to_lowercase())
}
