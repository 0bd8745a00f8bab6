// Schema: the ordered column list of a destination table

use super::record::Record;
use std::fmt;

/// Ordered sequence of column names defining a table's header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    columns: Vec<String>,
}

impl Schema {
    /// Build a schema from a fixed vendor column list
    pub fn new(name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            name: name.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Build a schema from a header row read at run time
    pub fn from_header(name: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns: header,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Whether an existing header row matches this schema exactly
    pub fn matches_header<S: AsRef<str>>(&self, header: &[S]) -> bool {
        header.len() == self.columns.len()
            && header
                .iter()
                .zip(&self.columns)
                .all(|(h, c)| h.as_ref() == c)
    }

    /// Lay a record out in schema order
    ///
    /// Columns the record lacks serialize as empty cells and columns the
    /// schema lacks are dropped, so every row has exactly `len()` cells.
    pub fn project<'a>(&'a self, record: &'a Record) -> Vec<&'a str> {
        self.columns
            .iter()
            .map(|c| record.get(c).unwrap_or(""))
            .collect()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} columns)", self.name, self.columns.len())
    }
}
