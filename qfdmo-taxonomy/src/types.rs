//! Core types for the taxonomy library
//!
//! This module defines the record model read from a QFDMO export and the error
//! type shared by every fallible operation. Field decoding is lenient: a value
//! of the wrong shape is treated as absent, never as an error.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// Result type for taxonomy operations
pub type Result<T> = std::result::Result<T, TaxonomyError>;

/// Display label used when a record has no `libelle`
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Display code used when a record has no `code`
pub const UNKNOWN_CODE: &str = "unknown";

/// One catalog entry, read from the inner `fields` object of an export entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Record {
    /// Display string in the source language (`libelle`)
    #[serde(rename = "libelle", default, deserialize_with = "lenient_string")]
    pub label: Option<String>,

    /// Stable identifier string (`code`)
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,

    /// Secondary id (`identifiant_qfdmod`), numeric or textual
    #[serde(
        rename = "identifiant_qfdmod",
        default,
        deserialize_with = "lenient_identifier"
    )]
    pub identifier: Option<Identifier>,

    /// Category codes this record belongs to (`sous_categorie`), in source order
    #[serde(
        rename = "sous_categorie",
        default,
        deserialize_with = "lenient_codes"
    )]
    pub category_codes: Vec<String>,
}

impl Record {
    /// Create a record with a label and code and no categories
    pub fn new(label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            code: Some(code.into()),
            ..Self::default()
        }
    }

    /// Builder method: set the secondary identifier
    pub fn with_identifier(mut self, identifier: impl Into<Identifier>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Builder method: append a category code
    pub fn in_category(mut self, code: impl Into<String>) -> Self {
        self.category_codes.push(code.into());
        self
    }

    /// Label shown in the report (`Unknown` when absent)
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(UNKNOWN_LABEL)
    }

    /// Code shown in the report (`unknown` when absent)
    pub fn display_code(&self) -> &str {
        self.code.as_deref().unwrap_or(UNKNOWN_CODE)
    }

    /// Key used to order items inside a category (empty when no label)
    pub fn sort_key(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// True if the record takes part in at least one category
    pub fn has_categories(&self) -> bool {
        !self.category_codes.is_empty()
    }
}

/// Secondary identifier of a record
#[derive(Debug, Clone, PartialEq)]
pub enum Identifier {
    Number(serde_json::Number),
    Text(String),
    /// Rendered in lower case (`true` / `false`)
    Bool(bool),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
            Identifier::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value.into())
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Text(value)
    }
}

/// Outer wrapper of one export entry (`{"model": ..., "pk": ..., "fields": {...}}`)
///
/// Only `fields` is read; everything else in the entry is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub fields: Record,
}

/// Errors that can occur while producing a taxonomy
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("Could not find file '{}'", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Invalid JSON in '{}': {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read file '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_identifier<'de, D>(deserializer: D) -> std::result::Result<Option<Identifier>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(Identifier::Text(s)),
        Value::Number(n) => Some(Identifier::Number(n)),
        Value::Bool(b) => Some(Identifier::Bool(b)),
        _ => None,
    })
}

fn lenient_codes<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                other => {
                    log::debug!("Ignoring non-string category code: {}", other);
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    })
}
