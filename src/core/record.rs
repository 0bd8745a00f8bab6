// Record structure representing a single row of a channel or contact table

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Missing required column: {0}")]
    Missing(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;

/// One row of a table, keyed by column name
///
/// Values are kept as the raw strings found in the file; numeric and boolean
/// values are string-encoded the way each vendor application expects them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from column/value pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a field value, if the column is present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Get a field value or a literal default when the column is absent
    pub fn get_or<'a>(&'a self, column: &str, default: &'a str) -> &'a str {
        self.get(column).unwrap_or(default)
    }

    /// Get a field value, treating an empty cell the same as an absent column
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.trim().is_empty())
    }

    /// Get a required field; an absent column is an error
    pub fn require(&self, column: &str) -> Result<&str> {
        self.get(column)
            .ok_or_else(|| FieldError::Missing(column.to_string()))
    }

    /// First non-empty value among several candidate column names
    ///
    /// Vendor exports are not consistent about header spelling, so several
    /// aliases are tried in order.
    pub fn first_of(&self, columns: &[&str]) -> Option<&str> {
        columns.iter().find_map(|c| self.non_empty(c))
    }

    /// Set a field value
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Whether the record has a column
    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// True when every cell is empty (e.g. a `,,,,` line)
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Truncate a value to at most `max` characters
///
/// Counts characters, not bytes, so multi-byte names never split mid-char.
pub fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
