//! Delimited-text table reader and writer

use crate::core::{Record, Schema};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid table format in {}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;

/// UTF-8 byte order mark, emitted by several vendor CPS tools
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A fully materialized table
#[derive(Debug, Clone)]
pub struct Table {
    pub header: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Streaming reader over a delimited file whose first row names the columns
pub struct TableReader {
    path: PathBuf,
    header: Vec<String>,
    reader: csv::Reader<File>,
}

impl TableReader {
    /// Open a table and read its header row
    pub fn open(path: impl AsRef<Path>, delimiter: u8) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(TableError::NotFound(path));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_path(&path)?;

        let header = match reader.headers() {
            Ok(h) => normalize_header(h),
            Err(e) => {
                return Err(TableError::Format {
                    path,
                    reason: e.to_string(),
                })
            }
        };

        if header.iter().all(|h| h.trim().is_empty()) {
            return Err(TableError::Format {
                path,
                reason: "missing header row".to_string(),
            });
        }

        Ok(Self {
            path,
            header,
            reader,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lazily yield one `Record` per data row
    pub fn records(&mut self) -> impl Iterator<Item = Result<Record>> + '_ {
        let header = &self.header;
        let path = &self.path;
        self.reader.records().map(move |row| {
            let row = row.map_err(|e| {
                if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) {
                    TableError::Format {
                        path: path.clone(),
                        reason: e.to_string(),
                    }
                } else {
                    TableError::Csv(e)
                }
            })?;
            Ok(Record::from_pairs(
                header.iter().cloned().zip(row.iter().map(str::to_string)),
            ))
        })
    }
}

/// Read an entire table into memory
pub fn read_table(path: impl AsRef<Path>, delimiter: u8) -> Result<Table> {
    let mut reader = TableReader::open(path, delimiter)?;
    let records = reader.records().collect::<Result<Vec<_>>>()?;
    Ok(Table {
        header: reader.header,
        records,
    })
}

/// Header cells as strings, with any BOM stripped from the first one
fn normalize_header(header: &StringRecord) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect()
}

/// How the destination file is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Truncate and always write the header
    Overwrite,
    /// Keep existing rows and header, continue the row index
    Append,
}

/// Result of inspecting an existing destination before appending
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppendPlan {
    /// Whether a header row still has to be written
    pub write_header: bool,
    /// Number of data rows already present
    pub existing_rows: usize,
    /// Header found in the existing file, if any
    pub existing_header: Option<Vec<String>>,
    /// Why the existing header could not be read, if it could not
    pub unreadable: Option<String>,
}

impl AppendPlan {
    /// Plan for a destination that does not exist yet
    pub fn fresh() -> Self {
        Self {
            write_header: true,
            ..Default::default()
        }
    }

    /// Whether the existing header differs from the expected schema
    pub fn header_mismatch(&self, schema: &Schema) -> bool {
        self.existing_header
            .as_ref()
            .is_some_and(|h| !schema.matches_header(h.as_slice()))
    }
}

/// Scan an existing destination for its header and data row count
///
/// Never fails: a missing or empty file means a fresh header, and an
/// unreadable one is reported through `AppendPlan::unreadable` with the
/// header assumed absent and the row count assumed zero.
pub fn inspect_existing(path: impl AsRef<Path>, delimiter: u8) -> AppendPlan {
    let path = path.as_ref();
    if !path.is_file() {
        return AppendPlan::fresh();
    }

    let mut reader = match ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
    {
        Ok(r) => r,
        Err(e) => {
            return AppendPlan {
                unreadable: Some(e.to_string()),
                ..AppendPlan::fresh()
            }
        }
    };

    let mut rows = reader.records();
    let header = match rows.next() {
        None => return AppendPlan::fresh(),
        Some(Err(e)) => {
            return AppendPlan {
                unreadable: Some(e.to_string()),
                ..AppendPlan::fresh()
            }
        }
        Some(Ok(h)) => normalize_header(&h),
    };

    if header.iter().all(|h| h.trim().is_empty()) {
        return AppendPlan::fresh();
    }

    let existing_rows = match rows.collect::<std::result::Result<Vec<_>, _>>() {
        Ok(data) => data.len(),
        Err(e) => {
            tracing::warn!("Could not count rows in {}: {}", path.display(), e);
            0
        }
    };

    AppendPlan {
        write_header: false,
        existing_rows,
        existing_header: Some(header),
        unreadable: None,
    }
}

/// Writer that lays every record out in schema order
pub struct TableWriter {
    schema: Schema,
    writer: csv::Writer<File>,
    rows_written: usize,
}

impl TableWriter {
    /// Open a destination file
    ///
    /// In `Overwrite` mode the file is truncated. In `Append` mode new rows go
    /// after the existing ones. The header (and optional BOM) is written only
    /// when `write_header` is set, and the BOM only to an empty file.
    pub fn open(
        path: impl AsRef<Path>,
        schema: Schema,
        mode: WriteMode,
        write_header: bool,
        write_bom: bool,
        delimiter: u8,
    ) -> Result<Self> {
        let path = path.as_ref();
        let mut file = match mode {
            WriteMode::Overwrite => File::create(path)?,
            WriteMode::Append => OpenOptions::new().create(true).append(true).open(path)?,
        };

        if write_bom && file.metadata()?.len() == 0 {
            file.write_all(UTF8_BOM)?;
        }

        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file);

        if write_header {
            writer.write_record(schema.columns())?;
        }

        Ok(Self {
            schema,
            writer,
            rows_written: 0,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Write one record projected onto the schema
    pub fn write(&mut self, record: &Record) -> Result<()> {
        self.writer.write_record(self.schema.project(record))?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
