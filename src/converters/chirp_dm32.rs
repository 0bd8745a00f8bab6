// CHIRP (TIDRADIO H8 and similar) channel export -> DM-32 channel import

use super::schemas::DM32_CHANNELS;
use super::traits::{ConvertResult, Converter, ConverterDefaults, RunState};
use crate::core::units::{format_mhz, parse_number};
use crate::core::{CodeMap, Duplex, Match, Record, Schema};
use crate::formats::WriteMode;

/// CHIRP power labels for the H8; anything else is treated as high power
const POWER: CodeMap =
    CodeMap::new(&[("8.0W", "High"), ("4.0W", "Low")], "High", Match::Exact);

const CHANNEL_TYPE: CodeMap = CodeMap::new(&[("FM", "Analog")], "Digital", Match::Exact);

/// Channels below this are wide (25 kHz), above are narrow
const WIDE_BAND_LIMIT_MHZ: f64 = 400.0;

/// DM-32 fields with no CHIRP equivalent
const FIXED: &[(&str, &str)] = &[
    ("Scan List", "None"),
    ("TX Admit", "Always"),
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
    ("Color Code", "1"),
    ("Time Slot", "Slot 1"),
    ("Encryption", "0"),
    ("Encryption ID", "None"),
    ("APRS Report Channel", "1"),
    ("Direct Dual Mode", "0"),
    ("Private Confirm", "0"),
    ("Short Data Confirm", "0"),
    ("DMR ID", "DM32"),
    ("Scramble", "None"),
    ("RX Squelch Mode", "Carrier/CTC"),
    ("Signaling Type", "None"),
    ("PTT ID", "OFF"),
    ("VOX Function", "0"),
    ("PTT ID Display", "0"),
];

pub struct ChirpToDm32;

impl Converter for ChirpToDm32 {
    fn id(&self) -> &'static str {
        "chirp-dm32"
    }

    fn source_format(&self) -> &'static str {
        "CHIRP channels"
    }

    fn target_format(&self) -> &'static str {
        "DM-32 channels"
    }

    fn description(&self) -> &'static str {
        "CHIRP/TIDRADIO channel export to DM-32 CPS channels, appending to an existing file"
    }

    fn defaults(&self) -> ConverterDefaults {
        ConverterDefaults {
            output: "DM32_converted.csv",
            mode: WriteMode::Append,
            ..Default::default()
        }
    }

    fn target_schema(&self, _state: &RunState) -> ConvertResult<Schema> {
        Ok(Schema::new("DM-32 channels", DM32_CHANNELS))
    }

    fn derive(&self, source: &Record, state: &mut RunState) -> ConvertResult<Record> {
        let name = source.require("Name")?;
        let rx = parse_number(source.require("Frequency")?).unwrap_or(0.0);
        let offset = parse_number(source.get_or("Offset", "")).unwrap_or(0.0);
        let tx = Duplex::parse(source.get_or("Duplex", "")).tx_frequency(rx, offset);

        let bandwidth = if rx < WIDE_BAND_LIMIT_MHZ { "25KHz" } else { "12.5KHz" };
        let tone = source.get_or("cToneFreq", "None");

        let mut out = Record::from_pairs(FIXED.iter().copied());
        out.set("No.", state.index().to_string());
        out.set("Channel Name", name);
        out.set("Channel Type", CHANNEL_TYPE.map(source.get_or("Mode", "FM")));
        out.set("RX Frequency[MHz]", format_mhz(rx));
        out.set("TX Frequency[MHz]", format_mhz(tx));
        out.set("Power", POWER.map(source.get_or("Power", "")));
        out.set("Band Width", bandwidth);
        out.set("TX Contact", name);
        out.set("RX Group List", name);
        out.set("CTC/DCS Decode", tone);
        out.set("CTC/DCS Encode", tone);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::ConvertError;

    fn chirp_row(pairs: &[(&str, &str)]) -> Record {
        Record::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_repeater_channel() {
        let src = chirp_row(&[
            ("Location", "1"),
            ("Name", "W1AW Rptr"),
            ("Frequency", "146.520000"),
            ("Duplex", "+"),
            ("Offset", "0.600000"),
            ("Mode", "FM"),
            ("Power", "4.0W"),
            ("cToneFreq", "100.0"),
        ]);
        let mut state = RunState::new(3);
        let out = ChirpToDm32.derive(&src, &mut state).unwrap();

        assert_eq!(out.get("No."), Some("3"));
        assert_eq!(out.get("Channel Name"), Some("W1AW Rptr"));
        assert_eq!(out.get("Channel Type"), Some("Analog"));
        assert_eq!(out.get("RX Frequency[MHz]"), Some("146.52000"));
        assert_eq!(out.get("TX Frequency[MHz]"), Some("147.12000"));
        assert_eq!(out.get("Power"), Some("Low"));
        assert_eq!(out.get("Band Width"), Some("25KHz"));
        assert_eq!(out.get("CTC/DCS Encode"), Some("100.0"));
        assert_eq!(out.get("TX Contact"), Some("W1AW Rptr"));
        assert_eq!(out.get("DMR ID"), Some("DM32"));
    }

    #[test]
    fn test_minus_and_simplex() {
        let mut state = RunState::new(1);
        let minus = chirp_row(&[
            ("Name", "A"),
            ("Frequency", "146.520"),
            ("Duplex", "-"),
            ("Offset", "0.600"),
        ]);
        let out = ChirpToDm32.derive(&minus, &mut state).unwrap();
        assert_eq!(out.get("TX Frequency[MHz]"), Some("145.92000"));

        let simplex = chirp_row(&[
            ("Name", "B"),
            ("Frequency", "146.520"),
            ("Duplex", "off"),
            ("Offset", "0.600"),
        ]);
        let out = ChirpToDm32.derive(&simplex, &mut state).unwrap();
        assert_eq!(out.get("TX Frequency[MHz]"), Some("146.52000"));
    }

    #[test]
    fn test_unknown_power_and_uhf_bandwidth() {
        let src = chirp_row(&[
            ("Name", "UHF"),
            ("Frequency", "446.000"),
            ("Duplex", ""),
            ("Offset", ""),
            ("Mode", "DMR"),
            ("Power", "3.0W"),
        ]);
        let out = ChirpToDm32.derive(&src, &mut RunState::new(1)).unwrap();

        assert_eq!(out.get("Power"), Some("High"));
        assert_eq!(out.get("Band Width"), Some("12.5KHz"));
        assert_eq!(out.get("Channel Type"), Some("Digital"));
        assert_eq!(out.get("CTC/DCS Decode"), Some("None"));
    }

    #[test]
    fn test_missing_frequency_is_fatal() {
        let src = chirp_row(&[("Name", "NoFreq")]);
        let err = ChirpToDm32.derive(&src, &mut RunState::new(1)).unwrap_err();
        assert!(matches!(err, ConvertError::Field(_)));
    }

    #[test]
    fn test_schema_matches_every_field() {
        let src = chirp_row(&[("Name", "X"), ("Frequency", "146.52")]);
        let out = ChirpToDm32.derive(&src, &mut RunState::new(1)).unwrap();
        let schema = ChirpToDm32.target_schema(&RunState::new(1)).unwrap();

        assert_eq!(out.len(), schema.len());
        assert!(schema.columns().iter().all(|c| out.contains(c)));
    }
}
