// Converter traits and shared run state

use crate::core::{FieldError, Record, Schema};
use crate::formats::{LookupTable, TableError, TemplateError, TemplateSet, WriteMode};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Line {line}: {source}")]
    Row {
        line: usize,
        #[source]
        source: FieldError,
    },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Unknown converter: {0}")]
    UnknownConverter(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConvertError {
    /// Whether this error means a required input file is missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConvertError::Table(TableError::NotFound(_))
                | ConvertError::Template(TemplateError::Table(TableError::NotFound(_)))
        )
    }
}

pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Non-fatal anomalies reported during a run
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionWarning {
    /// The existing destination header differs from the expected schema
    HeaderMismatch { expected: Vec<String>, found: Vec<String> },
    /// The existing destination header could not be read
    HeaderUnreadable(String),
    /// A join key was not present in the lookup table
    LookupMiss { line: usize, key: String },
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionWarning::HeaderMismatch { expected, found } => write!(
                f,
                "existing header differs from expected ({} columns expected, {} found)",
                expected.len(),
                found.len()
            ),
            ConversionWarning::HeaderUnreadable(reason) => {
                write!(f, "could not read existing header: {}", reason)
            }
            ConversionWarning::LookupMiss { line, key } => {
                write!(f, "line {}: '{}' not found in lookup table", line, key)
            }
        }
    }
}

/// Per-converter defaults, used when the caller leaves a setting unset
#[derive(Debug, Clone)]
pub struct ConverterDefaults {
    pub output: &'static str,
    pub mode: WriteMode,
    pub start_index: u32,
    pub write_bom: bool,
    pub needs_lookup: bool,
    pub needs_template: bool,
}

impl Default for ConverterDefaults {
    fn default() -> Self {
        Self {
            output: "converted.csv",
            mode: WriteMode::Overwrite,
            start_index: 1,
            write_bom: false,
            needs_lookup: false,
            needs_template: false,
        }
    }
}

/// State threaded through the row loop
///
/// Holds the running row index, the lookup table and templates resolved
/// before the first row, and the warnings collected so far.
#[derive(Debug, Default)]
pub struct RunState {
    index: u32,
    line: usize,
    lookup: Option<LookupTable>,
    templates: Option<TemplateSet>,
    warnings: Vec<ConversionWarning>,
}

impl RunState {
    pub fn new(start_index: u32) -> Self {
        Self {
            index: start_index,
            ..Default::default()
        }
    }

    pub fn with_lookup(mut self, lookup: LookupTable) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn with_templates(mut self, templates: TemplateSet) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Index value for the current row
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Source file line of the current row
    pub fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn set_index(&mut self, index: u32) {
        self.index = index;
    }

    pub(crate) fn begin_row(&mut self, line: usize) {
        self.line = line;
    }

    pub(crate) fn advance(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    pub fn lookup(&self) -> ConvertResult<&LookupTable> {
        self.lookup
            .as_ref()
            .ok_or_else(|| ConvertError::Config("lookup table not loaded".to_string()))
    }

    pub fn templates(&self) -> ConvertResult<&TemplateSet> {
        self.templates
            .as_ref()
            .ok_or_else(|| ConvertError::Config("template file not loaded".to_string()))
    }

    /// Record and log a non-fatal warning
    pub fn warn(&mut self, warning: ConversionWarning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[ConversionWarning] {
        &self.warnings
    }

    pub(crate) fn into_warnings(self) -> Vec<ConversionWarning> {
        self.warnings
    }
}

/// A field derivation set for one source -> destination table pair
pub trait Converter: Send + Sync {
    /// Registry identifier (e.g. "chirp-dm32")
    fn id(&self) -> &'static str;

    /// Source application / table
    fn source_format(&self) -> &'static str;

    /// Destination application / table
    fn target_format(&self) -> &'static str;

    /// One-line description for listings
    fn description(&self) -> &'static str;

    fn defaults(&self) -> ConverterDefaults {
        ConverterDefaults::default()
    }

    /// Destination schema; resolved after lookup and templates are loaded
    fn target_schema(&self, state: &RunState) -> ConvertResult<Schema>;

    /// Whether a source row is passed over without producing output
    fn skips(&self, source: &Record) -> bool {
        source.is_blank()
    }

    /// Derive one destination record from one source record
    fn derive(&self, source: &Record, state: &mut RunState) -> ConvertResult<Record>;

    /// Printable name
    fn name(&self) -> String {
        format!("{} -> {}", self.source_format(), self.target_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_state_index() {
        let mut state = RunState::new(6);
        assert_eq!(state.index(), 6);
        state.advance();
        assert_eq!(state.index(), 7);
        assert!(state.lookup().is_err());
        assert!(state.templates().is_err());
    }

    #[test]
    fn test_run_state_index_saturates() {
        let mut state = RunState::new(u32::MAX);
        state.advance();
        assert_eq!(state.index(), u32::MAX);
    }

    #[test]
    fn test_warnings_collected() {
        let mut state = RunState::new(1);
        state.warn(ConversionWarning::LookupMiss {
            line: 3,
            key: "TG 99".to_string(),
        });
        assert_eq!(state.warnings().len(), 1);
        assert_eq!(
            state.warnings()[0].to_string(),
            "line 3: 'TG 99' not found in lookup table"
        );
    }

    #[test]
    fn test_not_found_classification() {
        let err = ConvertError::Table(TableError::NotFound("x.csv".into()));
        assert!(err.is_not_found());
        assert!(!ConvertError::Config("bad".to_string()).is_not_found());
    }
}
