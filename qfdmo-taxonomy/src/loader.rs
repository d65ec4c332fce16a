//! Input loading and report writing
//!
//! The export is a JSON array of entries, each carrying its data in a `fields`
//! object. Entries of the wrong shape are kept as empty records so that the
//! entry count still matches the file.

use crate::types::{Entry, Record, Result, TaxonomyError};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load all records from a QFDMO JSON export
///
/// # Errors
/// * `InputNotFound` if the file does not exist
/// * `MalformedInput` if the content is not a JSON array
/// * `InputRead` for any other read failure (directory, permissions, non-UTF-8 content)
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    log::info!("Loading records from: {:?}", path);

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TaxonomyError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => TaxonomyError::InputRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    log::debug!("Read {} bytes from {:?}", content.len(), path);

    parse_records(&content, path)
}

/// Parse records from the text of a QFDMO JSON export
///
/// `source` only names the input in error messages.
pub fn parse_records(content: &str, source: &Path) -> Result<Vec<Record>> {
    let entries: Vec<Value> =
        serde_json::from_str(content).map_err(|e| TaxonomyError::MalformedInput {
            path: source.to_path_buf(),
            source: e,
        })?;

    let records: Vec<Record> = entries
        .into_iter()
        .enumerate()
        .map(|(position, value)| match serde_json::from_value::<Entry>(value) {
            Ok(entry) => entry.fields,
            Err(e) => {
                log::warn!("Entry {} has an unexpected shape, skipping: {}", position, e);
                Record::default()
            }
        })
        .collect();

    log::debug!("Parsed {} entries", records.len());
    Ok(records)
}

/// Write a finished report to disk in a single call
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report).map_err(|e| TaxonomyError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("Wrote {} bytes to {:?}", report.len(), path);
    Ok(())
}
