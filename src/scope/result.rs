//! Extraction results.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::category::Category;

/// Which extraction tier produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Asset / type pairs read from table rows
    Structured,
    /// Asset-shaped lines classified by nearby keywords
    Heuristic,
}

impl std::fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionStrategy::Structured => write!(f, "structured table"),
            ExtractionStrategy::Heuristic => write!(f, "page text"),
        }
    }
}

/// Raw assets per category, in discovery order.
///
/// Every category is present, possibly with an empty list. Duplicates and
/// untrimmed strings are allowed here; see [`super::assemble`] for cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    assets: BTreeMap<Category, Vec<String>>,
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionResult {
    /// Creates a result with an empty list for every category.
    pub fn new() -> Self {
        Self {
            assets: Category::iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    /// Appends an asset to a category.
    pub fn push(&mut self, category: Category, asset: impl Into<String>) {
        self.assets.entry(category).or_default().push(asset.into());
    }

    /// Assets recorded for `category`, in discovery order.
    pub fn assets(&self, category: Category) -> &[String] {
        self.assets.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates categories in declaration order with their assets.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.assets.iter().map(|(c, a)| (*c, a.as_slice()))
    }

    /// Total number of assets across all categories.
    pub fn len(&self) -> usize {
        self.assets.values().map(Vec::len).sum()
    }

    /// `true` when no category holds any asset.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of running the two-tier extraction over one page.
#[derive(Debug, Clone)]
pub struct PageExtraction {
    /// Tier that produced the result
    pub strategy: ExtractionStrategy,
    /// Raw assets per category
    pub result: ExtractionResult,
}
