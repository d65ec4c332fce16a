//! Category extraction
//!
//! Groups records by the category codes they list. The grouping and the set of
//! known codes are built in a single pass and kept together in
//! [`CategoryIndex`], so a code is a key of the grouping exactly when it is in
//! the set.

use crate::types::Record;
use std::collections::{BTreeMap, BTreeSet};

/// Records grouped by category code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    /// Category code -> records, in order of first encounter
    items: BTreeMap<String, Vec<Record>>,
    /// Every distinct category code seen
    codes: BTreeSet<String>,
}

impl CategoryIndex {
    /// Iterate over all category codes in lexicographic order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Records of a category (empty if the code is unknown)
    pub fn items(&self, code: &str) -> &[Record] {
        self.items.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of records placed in a category
    pub fn item_count(&self, code: &str) -> usize {
        self.items(code).len()
    }

    /// True if at least one record references this code
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Number of distinct categories
    pub fn category_count(&self) -> usize {
        self.codes.len()
    }

    /// Total number of (category, record) placements
    pub fn total_placements(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The `n` largest categories as `(code, count)`, largest first
    ///
    /// Categories with equal counts are ordered by code.
    pub fn top_categories(&self, n: usize) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .items
            .iter()
            .map(|(code, records)| (code.as_str(), records.len()))
            .collect();
        // Stable sort over code-ordered input keeps ties in code order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts
    }

    fn insert(&mut self, code: &str, record: &Record) {
        self.codes.insert(code.to_string());
        self.items
            .entry(code.to_string())
            .or_default()
            .push(record.clone());
    }

    /// Register a code with no items (only reachable from tests)
    #[cfg(test)]
    pub(crate) fn insert_code_for_test(&mut self, code: &str) {
        self.codes.insert(code.to_string());
    }
}

/// Group records by category code
///
/// A record is placed once for every code it lists. Records without
/// categories contribute nothing.
pub fn extract(records: &[Record]) -> CategoryIndex {
    let mut index = CategoryIndex::default();
    let mut skipped = 0usize;

    for record in records {
        if !record.has_categories() {
            skipped += 1;
            continue;
        }
        for code in &record.category_codes {
            index.insert(code, record);
        }
    }

    log::debug!(
        "Extracted {} categories from {} records ({} without categories)",
        index.category_count(),
        records.len(),
        skipped
    );
    index
}
