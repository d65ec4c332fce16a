//! QFDMO Taxonomy Library
//!
//! Converts the flat QFDMO catalog export (a JSON list of objects, each listing
//! the sub-categories it belongs to) into a hierarchical plain-text taxonomy in
//! the Open Products Facts style.
//!
//! # Architecture
//!
//! The work is a one-shot pipeline of pure steps:
//! - [`extract`] groups records by category code
//! - [`format_category_label`] turns a code into a display label
//! - [`render_report`] writes the header, summary and detailed listing
//!
//! File access is confined to the [`loader`] module. The library never prints;
//! status output belongs to the application layer (qfdmo-taxonomy-cli).
//!
//! # Example Usage
//!
//! ```
//! use qfdmo_taxonomy::{parse_records, Generator};
//! use std::path::Path;
//!
//! let json = r#"[{"fields": {"libelle": "Four micro-ondes", "code": "four_mo",
//!     "identifiant_qfdmod": 12, "sous_categorie": ["gros_electromenager_hors_refrigerant"]}}]"#;
//! let records = parse_records(json, Path::new("qfdmo.json")).unwrap();
//!
//! let output = Generator::new().build(&records);
//! assert!(output.report.contains("fr: Gros Electromenager Hors Refrigerant"));
//! assert_eq!(output.stats.categories, 1);
//! ```

// Public modules
pub mod config;
pub mod extractor;
pub mod generator;
pub mod label;
pub mod loader;
pub mod report;
pub mod stats;
pub mod types;

// Re-export main types for convenience
pub use config::TaxonomyConfig;
pub use extractor::{extract, CategoryIndex};
pub use generator::{Generator, Progress, TaxonomyOutput};
pub use label::format_category_label;
pub use loader::{load_records, parse_records, write_report};
pub use report::render_report;
pub use stats::{CategoryCount, TaxonomyStats};
pub use types::{Entry, Identifier, Record, Result, TaxonomyError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
