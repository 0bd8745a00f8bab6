// RADIO-CSV: channel and contact table conversion between radio programming tools
// Copyright 2024 - Licensed under GPLv3

pub mod config;
pub mod converters;
pub mod core;
pub mod formats;

// Re-export commonly used types
pub use config::{ConversionConfig, ResolvedConfig};
pub use converters::{
    convert, find_converter, init_converters, list_converters, ConversionReport,
    ConversionWarning, ConvertError, Converter, RunState,
};
pub use crate::core::{CodeMap, Duplex, FieldError, Record, Schema};
pub use formats::{LookupTable, TableError, TableReader, TableWriter, TemplateSet, WriteMode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
