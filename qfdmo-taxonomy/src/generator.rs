//! Main generator API
//!
//! The Generator struct ties the pieces together: load records, group them by
//! category, render the report and collect statistics.

use crate::config::TaxonomyConfig;
use crate::extractor::{extract, CategoryIndex};
use crate::loader::{load_records, write_report};
use crate::report::render_report;
use crate::stats::TaxonomyStats;
use crate::types::{Record, Result};
use std::path::Path;

/// Everything produced from one set of records
#[derive(Debug, Clone)]
pub struct TaxonomyOutput {
    pub index: CategoryIndex,
    /// Full report text (header, summary and details)
    pub report: String,
    pub stats: TaxonomyStats,
}

/// Steps reported while generating a taxonomy file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// About to read the input file
    Loading(&'a Path),
    /// Input parsed into this many entries
    Loaded { entries: usize },
    /// Records grouped into this many categories
    Extracted { categories: usize },
    /// Report rendered, about to be written here
    Writing(&'a Path),
}

/// The main generator struct - entry point for producing a taxonomy
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: TaxonomyConfig,
}

impl Generator {
    /// Create a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with a specific configuration
    pub fn with_config(config: TaxonomyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TaxonomyConfig {
        &self.config
    }

    /// Build the taxonomy for records already in memory
    ///
    /// This is a pure function of `records`.
    pub fn build(&self, records: &[Record]) -> TaxonomyOutput {
        let index = extract(records);
        let report = render_report(&index);
        let stats = TaxonomyStats::collect(records.len(), &index, self.config.top_categories);

        TaxonomyOutput {
            index,
            report,
            stats,
        }
    }

    /// Read `input`, generate the taxonomy and write it to `output`
    ///
    /// The output file is only touched once the whole report has been
    /// rendered, so a failure never leaves a partial file behind. Use
    /// [`Generator::generate_file_with_progress`] to follow the steps.
    ///
    /// # Example
    /// ```no_run
    /// use qfdmo_taxonomy::Generator;
    /// use std::path::Path;
    ///
    /// let stats = Generator::new()
    ///     .generate_file(Path::new("qfdmo.json"), Path::new("qfdmo_taxonomy.txt"))
    ///     .unwrap();
    /// println!("{} categories", stats.categories);
    /// ```
    pub fn generate_file(&self, input: &Path, output: &Path) -> Result<TaxonomyStats> {
        self.generate_file_with_progress(input, output, |_| {})
    }

    /// Same as [`Generator::generate_file`], calling `on_progress` before and
    /// after each step
    pub fn generate_file_with_progress<F>(
        &self,
        input: &Path,
        output: &Path,
        mut on_progress: F,
    ) -> Result<TaxonomyStats>
    where
        F: FnMut(Progress<'_>),
    {
        on_progress(Progress::Loading(input));
        let records = load_records(input)?;
        on_progress(Progress::Loaded {
            entries: records.len(),
        });

        let TaxonomyOutput { report, stats, .. } = self.build(&records);
        on_progress(Progress::Extracted {
            categories: stats.categories,
        });

        on_progress(Progress::Writing(output));
        write_report(output, &report)?;

        log::info!(
            "Taxonomy written to {:?}: {} categories, {} entries",
            output,
            stats.categories,
            stats.entries
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_steps_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("qfdmo.json");
        let output = dir.path().join("taxonomy.txt");
        std::fs::write(
            &input,
            r#"[{"fields": {"code": "lampe", "sous_categorie": ["luminaires"]}}, {"fields": {}}]"#,
        )
        .unwrap();

        let mut steps = Vec::new();
        Generator::new()
            .generate_file_with_progress(&input, &output, |step| steps.push(format!("{:?}", step)))
            .unwrap();

        assert_eq!(
            steps,
            vec![
                format!("{:?}", Progress::Loading(&input)),
                "Loaded { entries: 2 }".to_string(),
                "Extracted { categories: 1 }".to_string(),
                format!("{:?}", Progress::Writing(&output)),
            ]
        );
    }

    #[test]
    fn test_progress_stops_at_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.json");
        let mut steps = 0;
        let result = Generator::new().generate_file_with_progress(
            &input,
            &dir.path().join("out.txt"),
            |_| steps += 1,
        );
        assert!(result.is_err());
        assert_eq!(steps, 1);
    }

    #[test]
    fn test_build_empty() {
        let output = Generator::new().build(&[]);
        assert!(output.index.is_empty());
        assert_eq!(output.stats.entries, 0);
        assert!(output.report.ends_with("# DETAILED ITEMS LIST\n#"));
    }

    #[test]
    fn test_build_respects_top_limit() {
        let records: Vec<Record> = ["a", "b", "c"]
            .iter()
            .map(|code| Record::new("Objet", "objet").in_category(*code))
            .collect();
        let generator = Generator::with_config(TaxonomyConfig::new().with_top_categories(2));
        let output = generator.build(&records);
        assert_eq!(output.stats.categories, 3);
        assert_eq!(output.stats.top.len(), 2);
    }

    #[test]
    fn test_build_deterministic() {
        let records = vec![
            Record::new("Vélo", "velo").in_category("cycles"),
            Record::new("Casque", "casque").in_category("cycles").in_category("sport"),
        ];
        let generator = Generator::new();
        assert_eq!(generator.build(&records).report, generator.build(&records).report);
    }
}
