// Generic row loop shared by every converter

use super::traits::{ConversionWarning, ConvertError, ConvertResult, Converter, RunState};
use crate::config::{ConversionConfig, ResolvedConfig};
use crate::formats::{
    inspect_existing, AppendPlan, LookupTable, TableReader, TableWriter, TemplateSet, WriteMode,
};
use std::path::PathBuf;

/// Talkgroup file columns
pub const LOOKUP_KEY_COLUMN: &str = "Name";
pub const LOOKUP_VALUE_COLUMN: &str = "Radio ID";

/// Column that tells analog and digital template rows apart
pub const TEMPLATE_TYPE_COLUMN: &str = "Channel Type";

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub rows_read: usize,
    pub rows_written: usize,
    pub skipped: usize,
    pub first_index: u32,
    pub warnings: Vec<ConversionWarning>,
}

/// Run one conversion from input file to output file
///
/// Steps, strictly in order: verify the input exists, load the lookup table
/// and templates, inspect the destination when appending, then stream rows
/// from source to destination. The writer is flushed even when a row fails;
/// rows already written stay on disk.
pub fn convert(
    converter: &dyn Converter,
    config: &ConversionConfig,
) -> ConvertResult<ConversionReport> {
    let config = config.resolve(&converter.defaults())?;
    tracing::info!(
        "Converting {} ({}) -> {}",
        config.input.display(),
        converter.name(),
        config.output.display()
    );

    // Open the source first so a missing input is reported before anything else
    let mut reader = TableReader::open(&config.input, config.delimiter)?;

    let mut state = prepare_state(converter, &config)?;
    let schema = converter.target_schema(&state)?;

    let plan = match config.mode {
        WriteMode::Overwrite => AppendPlan::fresh(),
        WriteMode::Append => inspect_existing(&config.output, config.delimiter),
    };
    if let Some(reason) = &plan.unreadable {
        state.warn(ConversionWarning::HeaderUnreadable(reason.clone()));
    }
    if plan.header_mismatch(&schema) {
        state.warn(ConversionWarning::HeaderMismatch {
            expected: schema.columns().to_vec(),
            found: plan.existing_header.clone().unwrap_or_default(),
        });
    }
    if !plan.write_header {
        let existing = u32::try_from(plan.existing_rows).unwrap_or(u32::MAX);
        state.set_index(existing.saturating_add(1));
        tracing::info!(
            "Appending after {} existing rows in {}",
            plan.existing_rows,
            config.output.display()
        );
    }
    let first_index = state.index();

    let mut writer = TableWriter::open(
        &config.output,
        schema,
        config.mode,
        plan.write_header,
        config.write_bom,
        config.delimiter,
    )?;

    let streamed = stream_rows(converter, &mut reader, &mut writer, &mut state);
    writer.flush()?;
    let (rows_read, skipped) = streamed?;

    tracing::info!(
        "Wrote {} rows to {} ({} warnings)",
        writer.rows_written(),
        config.output.display(),
        state.warnings().len()
    );

    Ok(ConversionReport {
        output: config.output,
        rows_read,
        rows_written: writer.rows_written(),
        skipped,
        first_index,
        warnings: state.into_warnings(),
    })
}

/// Resolve the lookup table and templates once, before the row loop
fn prepare_state(converter: &dyn Converter, config: &ResolvedConfig) -> ConvertResult<RunState> {
    let defaults = converter.defaults();
    let mut state = RunState::new(config.start_index);

    if defaults.needs_lookup {
        let path = config
            .lookup
            .as_ref()
            .ok_or_else(|| ConvertError::Config("a lookup file is required".to_string()))?;
        state = state.with_lookup(LookupTable::load(
            path,
            LOOKUP_KEY_COLUMN,
            LOOKUP_VALUE_COLUMN,
            config.delimiter,
        )?);
    }

    if defaults.needs_template {
        let path = config
            .template
            .as_ref()
            .ok_or_else(|| ConvertError::Config("a template file is required".to_string()))?;
        state = state.with_templates(TemplateSet::load(
            path,
            TEMPLATE_TYPE_COLUMN,
            config.delimiter,
        )?);
    }

    Ok(state)
}

/// Derive and write every row; returns (rows read, rows skipped)
fn stream_rows(
    converter: &dyn Converter,
    reader: &mut TableReader,
    writer: &mut TableWriter,
    state: &mut RunState,
) -> ConvertResult<(usize, usize)> {
    let mut rows_read = 0;
    let mut skipped = 0;

    for (row_num, row) in reader.records().enumerate() {
        let line = row_num + 2; // header is line 1
        let source = row?;
        rows_read += 1;

        if converter.skips(&source) {
            tracing::debug!("Skipping line {}", line);
            skipped += 1;
            continue;
        }

        state.begin_row(line);
        let record = converter.derive(&source, state).map_err(|e| match e {
            ConvertError::Field(source) => ConvertError::Row { line, source },
            other => other,
        })?;
        writer.write(&record)?;
        state.advance();
    }

    Ok((rows_read, skipped))
}
