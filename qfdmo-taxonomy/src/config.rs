//! Generator configuration
//!
//! The taxonomy format itself is fixed; only the reporting around it can be
//! tuned.

use serde::{Deserialize, Serialize};

/// Configuration for the taxonomy generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Number of categories listed in the statistics (default: 10)
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,
}

fn default_top_categories() -> usize {
    10
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            top_categories: default_top_categories(),
        }
    }
}

impl TaxonomyConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set how many categories the statistics list
    pub fn with_top_categories(mut self, n: usize) -> Self {
        self.top_categories = n;
        self
    }
}
