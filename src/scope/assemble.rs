//! Output assembly: the export-ready view of an extraction.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use super::category::Category;
use super::result::ExtractionResult;

/// Deduplicated, trimmed, non-empty assets per category.
///
/// Only categories with at least one asset are present. Serializes as a JSON
/// object keyed by category key, in category order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssembledScope {
    lists: BTreeMap<Category, Vec<String>>,
}

impl AssembledScope {
    /// Assets for `category`, or `None` if the category was omitted.
    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.lists.get(&category).map(Vec::as_slice)
    }

    /// Categories present, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.lists.keys().copied()
    }

    /// Iterates present categories with their assets.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.lists.iter().map(|(c, a)| (*c, a.as_slice()))
    }

    /// Total number of assets.
    pub fn total_assets(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    /// `true` when there is nothing to export.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// Trims, drops empties and deduplicates (first occurrence wins) per category.
///
/// Categories left empty are omitted.
pub fn assemble(result: &ExtractionResult) -> AssembledScope {
    let mut lists = BTreeMap::new();

    for (category, assets) in result.iter() {
        let mut seen = HashSet::new();
        let list: Vec<String> = assets
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty() && seen.insert(*a))
            .map(String::from)
            .collect();
        if !list.is_empty() {
            lists.insert(category, list);
        }
    }

    AssembledScope { lists }
}
