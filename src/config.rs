// Conversion run configuration

use crate::converters::{ConvertError, ConvertResult, ConverterDefaults};
use crate::formats::WriteMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Explicit parameters for one conversion run
///
/// Every field except `input` is optional; unset fields fall back to the
/// converter's `ConverterDefaults`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Source table
    pub input: PathBuf,

    /// Destination table
    pub output: Option<PathBuf>,

    /// Name -> identifier lookup table (talkgroups)
    pub lookup: Option<PathBuf>,

    /// Existing destination working copy providing template rows
    pub template: Option<PathBuf>,

    /// Overwrite or append
    pub mode: Option<WriteMode>,

    /// First value of the row index column
    pub start_index: Option<u32>,

    /// Field delimiter for every table in the run
    pub delimiter: Option<char>,

    /// Prefix freshly created output with a UTF-8 BOM
    pub write_bom: Option<bool>,
}

/// Configuration with every default applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lookup: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub mode: WriteMode,
    pub start_index: u32,
    pub delimiter: u8,
    pub write_bom: bool,
}

impl ConversionConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_lookup(mut self, lookup: impl Into<PathBuf>) -> Self {
        self.lookup = Some(lookup.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_start_index(mut self, start_index: u32) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> ConvertResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(json: &str) -> ConvertResult<Self> {
        serde_json::from_str(json).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Fill in unset values from a converter's defaults
    pub fn resolve(&self, defaults: &ConverterDefaults) -> ConvertResult<ResolvedConfig> {
        if self.input.as_os_str().is_empty() {
            return Err(ConvertError::Config("no input file given".to_string()));
        }

        let delimiter = match self.delimiter {
            None => b',',
            Some(c) if c.is_ascii() => c as u8,
            Some(c) => {
                return Err(ConvertError::Config(format!(
                    "delimiter must be a single ASCII character, got {:?}",
                    c
                )))
            }
        };

        if defaults.needs_lookup && self.lookup.is_none() {
            return Err(ConvertError::Config("a lookup file is required".to_string()));
        }
        if defaults.needs_template && self.template.is_none() {
            return Err(ConvertError::Config("a template file is required".to_string()));
        }

        Ok(ResolvedConfig {
            input: self.input.clone(),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(defaults.output)),
            lookup: self.lookup.clone(),
            template: self.template.clone(),
            mode: self.mode.unwrap_or(defaults.mode),
            start_index: self.start_index.unwrap_or(defaults.start_index),
            delimiter,
            write_bom: self.write_bom.unwrap_or(defaults.write_bom),
        })
    }
}
