//! Configuration loading and parsing

use anyhow::{Context, Result};
use qfdmo_taxonomy::TaxonomyConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Input file used when neither the command line nor the config names one
pub const DEFAULT_INPUT: &str = "qfdmo.json";

/// Output file used when neither the command line nor the config names one
pub const DEFAULT_OUTPUT: &str = "qfdmo_taxonomy.txt";

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub stats: TaxonomyConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    pub file: Option<PathBuf>,
}

/// Settings for one run after merging arguments, config and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub taxonomy: TaxonomyConfig,
}

impl AppConfig {
    /// Merge with command line values; the command line wins
    pub fn resolve(
        self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        top: Option<usize>,
    ) -> RunSettings {
        let mut taxonomy = self.stats;
        if let Some(n) = top {
            taxonomy = taxonomy.with_top_categories(n);
        }

        RunSettings {
            input: input
                .or(self.input.file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: output
                .or(self.output.file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            taxonomy,
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
