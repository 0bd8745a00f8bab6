// GD-88 channel export -> DM-32 channel import

use super::schemas::GD88_DM32_CHANNELS;
use super::traits::{ConvertResult, Converter, ConverterDefaults, RunState};
use crate::core::units::hz_str_to_mhz;
use crate::core::{CodeMap, Match, Record, Schema};

const CHANNEL_TYPE: CodeMap =
    CodeMap::new(&[("ANALOG", "Analog")], "Digital", Match::IgnoreCase);

const FIXED: &[(&str, &str)] = &[
    ("TX Admit", "Allow TX"),
    ("Emergency System", "None"),
    ("Squelch Level", "3"),
    ("APRS Report Type", "Off"),
    ("Forbid TX", "0"),
    ("APRS Receive", "0"),
    ("Forbid Talkaround", "0"),
    ("Auto Scan", "0"),
    ("Lone Work", "0"),
    ("Emergency Indicator", "0"),
    ("Emergency ACK", "0"),
    ("Analog APRS PTT Mode", "0"),
    ("Digital APRS PTT Mode", "0"),
    ("Encryption", "0"),
    ("Encryption ID", "None"),
    ("APRS Report Channel", "1"),
    ("Direct Dual Mode", "0"),
    ("Private Confirm", "0"),
    ("Short Data Confirm", "0"),
    ("DMR ID", "Radio 1"),
    ("CTC/DCS Encode", "None"),
    ("CTC/DCS Decode", "None"),
    ("Scramble", "None"),
    ("RX Squelch Mode", "Carrier/CTC"),
    ("Signaling Type", "None"),
    ("PTT ID", "OFF"),
    ("VOX Function", "0"),
    ("PTT ID Display", "0"),
];

pub struct Gd88ToDm32;

impl Converter for Gd88ToDm32 {
    fn id(&self) -> &'static str {
        "gd88-dm32"
    }

    fn source_format(&self) -> &'static str {
        "GD-88 channels"
    }

    fn target_format(&self) -> &'static str {
        "DM-32 channels"
    }

    fn description(&self) -> &'static str {
        "Radioddity GD-88 channel export to DM-32 CPS channels"
    }

    fn defaults(&self) -> ConverterDefaults {
        ConverterDefaults {
            output: "dm32_channels.csv",
            ..Default::default()
        }
    }

    fn target_schema(&self, _state: &RunState) -> ConvertResult<Schema> {
        Ok(Schema::new("DM-32 channels", GD88_DM32_CHANNELS))
    }

    fn derive(&self, source: &Record, state: &mut RunState) -> ConvertResult<Record> {
        let name = source.require("CH Name")?;
        let rx = hz_str_to_mhz(source.require("RX Freq")?);
        let tx = hz_str_to_mhz(source.require("TX Freq")?);

        let channel_type = CHANNEL_TYPE.map(source.get_or("Type", ""));
        let digital = channel_type == "Digital";

        let mut out = Record::from_pairs(FIXED.iter().copied());
        out.set("No.", state.index().to_string());
        out.set("Channel Name", name);
        out.set("Channel Type", channel_type);
        out.set("RX Frequency[MHz]", rx);
        out.set("TX Frequency[MHz]", tx);
        out.set("Power", source.get_or("Power", "None"));
        out.set("Band Width", source.get_or("Bandwidth", "None"));
        out.set("Scan List", source.get_or("Scan List Name", "None"));
        out.set("TX Contact", source.get_or("Contact Name", "None"));
        out.set("RX Group List", source.get_or("RX Group Name", "None"));
        if digital {
            out.set("Color Code", source.get_or("RX CC", "1"));
            out.set("Time Slot", source.get_or("RX TS", "Slot 1"));
        } else {
            out.set("Color Code", "0");
            out.set("Time Slot", "Slot 1");
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gd88_row(kind: &str) -> Record {
        Record::from_pairs([
            ("No.", "1"),
            ("CH Name", "TG 3100 USA"),
            ("Type", kind),
            ("RX Freq", "439450000"),
            ("TX Freq", "434450000"),
            ("Power", "High"),
            ("Bandwidth", "12.5K"),
            ("Scan List Name", "Local"),
            ("Contact Name", "USA"),
            ("RX Group Name", "Nat"),
            ("RX CC", "7"),
            ("RX TS", "TS2"),
        ])
    }

    #[test]
    fn test_digital_channel() {
        let out = Gd88ToDm32.derive(&gd88_row("Digital"), &mut RunState::new(1)).unwrap();

        assert_eq!(out.get("Channel Type"), Some("Digital"));
        assert_eq!(out.get("RX Frequency[MHz]"), Some("439.45000"));
        assert_eq!(out.get("TX Frequency[MHz]"), Some("434.45000"));
        assert_eq!(out.get("Power"), Some("High"));
        assert_eq!(out.get("Scan List"), Some("Local"));
        assert_eq!(out.get("TX Contact"), Some("USA"));
        assert_eq!(out.get("RX Group List"), Some("Nat"));
        assert_eq!(out.get("Color Code"), Some("7"));
        assert_eq!(out.get("Time Slot"), Some("TS2"));
        assert_eq!(out.get("TX Admit"), Some("Allow TX"));
        assert_eq!(out.len(), GD88_DM32_CHANNELS.len());
    }

    #[test]
    fn test_analog_channel_ignores_dmr_fields() {
        let out = Gd88ToDm32.derive(&gd88_row("ANALOG"), &mut RunState::new(9)).unwrap();

        assert_eq!(out.get("No."), Some("9"));
        assert_eq!(out.get("Channel Type"), Some("Analog"));
        assert_eq!(out.get("Color Code"), Some("0"));
        assert_eq!(out.get("Time Slot"), Some("Slot 1"));
    }

    #[test]
    fn test_malformed_frequency_falls_back() {
        let mut src = gd88_row("Analog");
        src.set("RX Freq", "n/a");
        let out = Gd88ToDm32.derive(&src, &mut RunState::new(1)).unwrap();
        assert_eq!(out.get("RX Frequency[MHz]"), Some("0.00000"));
    }

    #[test]
    fn test_encode_written_before_decode() {
        let schema = Gd88ToDm32.target_schema(&RunState::new(1)).unwrap();
        let pos = |name: &str| schema.columns().iter().position(|c| c == name).unwrap();
        assert!(pos("CTC/DCS Encode") < pos("CTC/DCS Decode"));
        assert_eq!(pos("DMR ID") + 1, pos("CTC/DCS Encode"));
    }
}
