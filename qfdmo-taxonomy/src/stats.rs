//! Run statistics
//!
//! Summary numbers reported after a taxonomy has been generated.

use crate::extractor::CategoryIndex;
use crate::label::format_category_label;
use serde::Serialize;

/// Item count of a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub code: String,
    /// Formatted display label
    pub label: String,
    pub items: usize,
}

/// Statistics about one generated taxonomy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaxonomyStats {
    /// Entries read from the input, including those without categories
    pub entries: usize,
    /// Distinct categories
    pub categories: usize,
    /// Total (category, item) placements
    pub placements: usize,
    /// Largest categories, largest first
    pub top: Vec<CategoryCount>,
}

impl TaxonomyStats {
    /// Collect statistics from an index built out of `entries` records
    pub fn collect(entries: usize, index: &CategoryIndex, top_n: usize) -> Self {
        let top = index
            .top_categories(top_n)
            .into_iter()
            .map(|(code, items)| CategoryCount {
                code: code.to_string(),
                label: format_category_label(code),
                items,
            })
            .collect();

        Self {
            entries,
            categories: index.category_count(),
            placements: index.total_placements(),
            top,
        }
    }
}
