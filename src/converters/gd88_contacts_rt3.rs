// GD-88 contact export -> RT3/RT3S contact import

use super::schemas::RT3_CONTACTS;
use super::traits::{ConvertResult, Converter, ConverterDefaults, RunState};
use crate::core::{CodeMap, Match, Record, Schema};

/// Unknown call types become group calls
const CALL_TYPE: CodeMap = CodeMap::new(&[("Group", "1"), ("Private", "2")], "1", Match::Exact);

pub struct Gd88ContactsToRt3;

impl Converter for Gd88ContactsToRt3 {
    fn id(&self) -> &'static str {
        "gd88-contacts-rt3"
    }

    fn source_format(&self) -> &'static str {
        "GD-88 contacts"
    }

    fn target_format(&self) -> &'static str {
        "RT3S contacts"
    }

    fn description(&self) -> &'static str {
        "Radioddity GD-88 digital contacts to Retevis RT3/RT3S CPS contacts"
    }

    fn defaults(&self) -> ConverterDefaults {
        ConverterDefaults {
            output: "rt3contacts_converted.csv",
            ..Default::default()
        }
    }

    fn target_schema(&self, _state: &RunState) -> ConvertResult<Schema> {
        Ok(Schema::new("RT3S contacts", RT3_CONTACTS))
    }

    fn derive(&self, source: &Record, _state: &mut RunState) -> ConvertResult<Record> {
        Ok(Record::from_pairs([
            ("Contact Name", source.require("Name")?.trim()),
            ("Call Type", CALL_TYPE.map(source.get_or("Type", ""))),
            ("Call ID", source.require("DMR ID")?.trim()),
            ("Call Receive Tone", "0"),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::ConvertError;
    use crate::core::FieldError;

    #[test]
    fn test_contact_mapping() {
        let src = Record::from_pairs([
            ("Name", " Worldwide "),
            ("DMR ID", " 91 "),
            ("Type", "Group"),
        ]);
        let out = Gd88ContactsToRt3.derive(&src, &mut RunState::new(1)).unwrap();

        assert_eq!(out.get("Contact Name"), Some("Worldwide"));
        assert_eq!(out.get("Call ID"), Some("91"));
        assert_eq!(out.get("Call Type"), Some("1"));
        assert_eq!(out.get("Call Receive Tone"), Some("0"));
    }

    #[test]
    fn test_call_types() {
        let mut state = RunState::new(1);
        let private = Record::from_pairs([
            ("Name", "N0CALL"),
            ("DMR ID", "3100001"),
            ("Type", "Private"),
        ]);
        let all_call = Record::from_pairs([
            ("Name", "All"),
            ("DMR ID", "16777215"),
            ("Type", "All Call"),
        ]);

        assert_eq!(
            Gd88ContactsToRt3.derive(&private, &mut state).unwrap().get("Call Type"),
            Some("2")
        );
        assert_eq!(
            Gd88ContactsToRt3.derive(&all_call, &mut state).unwrap().get("Call Type"),
            Some("1")
        );
    }

    #[test]
    fn test_missing_id() {
        let src = Record::from_pairs([("Name", "Orphan")]);
        let err = Gd88ContactsToRt3.derive(&src, &mut RunState::new(1)).unwrap_err();
        assert!(matches!(err, ConvertError::Field(FieldError::Missing(c)) if c == "DMR ID"));
    }
}
