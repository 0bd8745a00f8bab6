// GD-88 channel export -> Maverick channel import
//
// Maverick CPS rejects files that don't carry its full column set, so each
// output row starts as a copy of an existing analog or digital row from a
// Maverick working copy and only the fields below are overwritten.

use super::schemas::MAX_NAME_LEN;
use super::traits::{ConversionWarning, ConvertResult, Converter, ConverterDefaults, RunState};
use crate::core::units::any_to_mhz;
use crate::core::{truncate, CodeMap, FieldError, Match, Record, Schema};
use lazy_static::lazy_static;
use regex::Regex;

const CHANNEL_TYPE: CodeMap = CodeMap::new(
    &[("ANALOG", "A-Analog"), ("DIGITAL", "D-Digital")],
    "",
    Match::ContainsIgnoreCase,
);

const NAME_COLUMNS: &[&str] = &["Name", "CH Name", "NameRX"];
const CONTACT_COLUMNS: &[&str] = &["Contact Name", "Contact NameRX Group Name"];
const SLOT_COLUMNS: &[&str] = &["CCTX", "TSTX", "TS TX", "TS"];
const COLOR_CODE_COLUMNS: &[&str] = &["CC", "CC TX", "CCTX"];

lazy_static! {
    static ref SLOT_PREFIX: Regex = Regex::new(r"^TS\s*").unwrap();
}

pub struct Gd88ToMaverick;

impl Converter for Gd88ToMaverick {
    fn id(&self) -> &'static str {
        "gd88-maverick"
    }

    fn source_format(&self) -> &'static str {
        "GD-88 channels"
    }

    fn target_format(&self) -> &'static str {
        "Maverick channels"
    }

    fn description(&self) -> &'static str {
        "Radioddity GD-88 channels to Maverick CPS, using template rows and a talkgroup list"
    }

    fn defaults(&self) -> ConverterDefaults {
        ConverterDefaults {
            output: "maverick_from_gd88_final.csv",
            start_index: 1000,
            write_bom: true,
            needs_lookup: true,
            needs_template: true,
            ..Default::default()
        }
    }

    fn target_schema(&self, state: &RunState) -> ConvertResult<Schema> {
        Ok(state.templates()?.schema().clone())
    }

    /// Rows with a name column but no name are left out
    fn skips(&self, source: &Record) -> bool {
        source.is_blank()
            || (NAME_COLUMNS.iter().any(|c| source.contains(c))
                && source.first_of(NAME_COLUMNS).is_none())
    }

    fn derive(&self, source: &Record, state: &mut RunState) -> ConvertResult<Record> {
        let name = source
            .first_of(NAME_COLUMNS)
            .ok_or_else(|| FieldError::Missing(NAME_COLUMNS.join(" / ")))?
            .trim();
        let gd_type = source.get_or("Type", "");
        let digital = gd_type.to_ascii_uppercase().contains("DIGITAL");

        let template = state.templates()?.select(digital);
        let mut out = template.clone();

        out.set("No.", state.index().to_string());
        out.set("Channel Name", truncate(name, MAX_NAME_LEN));
        out.set("Receive Frequency", any_to_mhz(source.get_or("RX Freq", "")));
        out.set("Transmit Frequency", any_to_mhz(source.get_or("TX Freq", "")));
        let channel_type = match CHANNEL_TYPE.get(gd_type) {
            Some(t) => t,
            None => template.get_or("Channel Type", ""),
        };
        out.set("Channel Type", channel_type);

        if digital {
            let slot =
                slot_from(source).unwrap_or_else(|| template.get_or("Slot", "1").to_string());
            out.set("Slot", slot);
            let cc = source
                .first_of(COLOR_CODE_COLUMNS)
                .map(str::trim)
                .unwrap_or_else(|| template.get_or("RX Color Code", "1"));
            out.set("RX Color Code", cc);
        }

        if let Some(scan) = source.non_empty("Scan List Name") {
            out.set("Scan List", truncate(scan, MAX_NAME_LEN));
        }
        if let Some(group) = source.non_empty("RX Group Name") {
            out.set("Receive Group List", truncate(group, MAX_NAME_LEN));
        }

        // Contact name and id change together; a miss keeps the template's pair
        if let Some(contact) = source.first_of(CONTACT_COLUMNS).map(str::trim) {
            match state.lookup()?.get(contact) {
                Some(id) => {
                    tracing::debug!("Mapped '{}' -> TG {}", contact, id);
                    out.set("Contact/TG", truncate(contact, MAX_NAME_LEN));
                    out.set("Contact/TG TG/DMR ID", id);
                }
                None => {
                    let line = state.line();
                    state.warn(ConversionWarning::LookupMiss {
                        line,
                        key: contact.to_string(),
                    });
                }
            }
        }

        Ok(out)
    }
}

/// Time slot from the first populated slot column, without a "TS" prefix
fn slot_from(source: &Record) -> Option<String> {
    source.first_of(SLOT_COLUMNS).map(|ts| {
        let ts = ts.trim().to_ascii_uppercase();
        SLOT_PREFIX.replace(&ts, "").into_owned()
    })
}
