// Template rows: existing destination records used as a field baseline

use super::table::{read_table, TableError};
use crate::core::{Record, Schema};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(
        "No {kind} template row in {} (column {column:?} starting with {prefix:?})",
        path.display()
    )]
    MissingTemplate {
        path: PathBuf,
        kind: &'static str,
        column: String,
        prefix: char,
    },
}

/// Analog and digital baseline rows plus the header they came from
#[derive(Debug, Clone)]
pub struct TemplateSet {
    schema: Schema,
    analog: Record,
    digital: Record,
}

impl TemplateSet {
    /// Load a working copy and pick the first analog and digital rows
    ///
    /// A row is analog when `type_column` starts with 'A' and digital when it
    /// starts with 'D'. Both kinds must be present.
    pub fn load(
        path: impl AsRef<Path>,
        type_column: &str,
        delimiter: u8,
    ) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let table = read_table(path, delimiter)?;

        let find = |prefix: char, kind: &'static str| {
            table
                .records
                .iter()
                .find(|r| r.get_or(type_column, "").starts_with(prefix))
                .cloned()
                .ok_or_else(|| TemplateError::MissingTemplate {
                    path: path.to_path_buf(),
                    kind,
                    column: type_column.to_string(),
                    prefix,
                })
        };

        let digital = find('D', "digital")?;
        let analog = find('A', "analog")?;

        tracing::info!(
            "Loaded templates from {} ({} columns, {} rows)",
            path.display(),
            table.header.len(),
            table.len()
        );

        Ok(Self {
            schema: Schema::from_header(path.display().to_string(), table.header),
            analog,
            digital,
        })
    }

    /// Header of the working copy, used as the destination schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Baseline record for a channel type
    pub fn select(&self, digital: bool) -> &Record {
        if digital {
            &self.digital
        } else {
            &self.analog
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_templates() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            "No.,Channel Name,Channel Type,Slot\n1,Simplex,A-Analog,\n2,TG9,D-Digital,2\n3,TG91,D-Digital,1\n",
        )
        .unwrap();

        let set = TemplateSet::load(file.path(), "Channel Type", b',').unwrap();
        assert_eq!(set.schema().len(), 4);
        assert_eq!(set.select(true).get("Channel Name"), Some("TG9"));
        assert_eq!(set.select(false).get("Channel Name"), Some("Simplex"));
    }

    #[test]
    fn test_missing_digital_template() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "No.,Channel Type\n1,A-Analog\n").unwrap();

        let err = TemplateSet::load(file.path(), "Channel Type", b',').unwrap_err();
        assert!(matches!(err, TemplateError::MissingTemplate { kind: "digital", .. }));
    }
}
