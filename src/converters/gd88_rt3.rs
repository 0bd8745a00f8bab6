// GD-88 channel export -> RT3/RT3S channel import

use super::schemas::RT3_CHANNELS;
use super::traits::{ConvertResult, Converter, ConverterDefaults, RunState};
use crate::core::units::hz_str_to_mhz;
use crate::core::{CodeMap, Match, Record, Schema};

const CHANNEL_MODE: CodeMap = CodeMap::new(&[("ANALOG", "1")], "2", Match::IgnoreCase);

const POWER: CodeMap = CodeMap::new(&[("HIGH", "2")], "0", Match::IgnoreCase);

const REPEATER_SLOT: CodeMap = CodeMap::new(&[("TS1", "1")], "2", Match::Exact);

/// RT3 settings with no GD-88 counterpart
const FIXED: &[(&str, &str)] = &[
    ("Band Width", "0"),
    ("Scan List", "0"),
    ("Squelch", "3"),
    ("RX Ref Frequency", "0"),
    ("TX Ref Frequency", "0"),
    ("TOT[s]", "4"),
    ("TOT Rekey Delay[s]", "0"),
    ("Admit Criteria", "0"),
    ("Auto Scan", "0"),
    ("Rx Only", "0"),
    ("Lone Worker", "0"),
    ("VOX", "0"),
    ("Allow Talkaround", "0"),
    ("Send GPS Info", "0"),
    ("Receive GPS Info", "0"),
    ("Private Call Confirmed", "0"),
    ("Emergency Alarm Ack", "0"),
    ("Data Call Confirmed", "0"),
    ("Allow Interrupt", "0"),
    ("DCDM Switch", "1"),
    ("Leader/MS", "0"),
    ("Emergency System", "1"),
    ("In Call Criteria", "1"),
    ("Privacy", "0"),
    ("Privacy No.", "0"),
    ("GPS System", "0"),
    ("Rx Signaling System", "0"),
    ("Tx Signaling System", "0"),
    ("QT Reverse", "0"),
    ("Non-QT/DQT Turn-off Freq", "0"),
    ("Display PTT ID", "0"),
    ("Reverse Burst/Turn-off Code", "0"),
    ("Decode 1", "0"),
    ("Decode 2", "0"),
    ("Decode 3", "0"),
    ("Decode 4", "0"),
    ("Decode 5", "0"),
    ("Decode 6", "0"),
    ("Decode 7", "0"),
    ("Decode 8", "0"),
];

pub struct Gd88ToRt3;

impl Converter for Gd88ToRt3 {
    fn id(&self) -> &'static str {
        "gd88-rt3"
    }

    fn source_format(&self) -> &'static str {
        "GD-88 channels"
    }

    fn target_format(&self) -> &'static str {
        "RT3S channels"
    }

    fn description(&self) -> &'static str {
        "Radioddity GD-88 channel export to Retevis RT3/RT3S CPS channels"
    }

    fn defaults(&self) -> ConverterDefaults {
        ConverterDefaults {
            output: "converted_rt3s.csv",
            ..Default::default()
        }
    }

    fn target_schema(&self, _state: &RunState) -> ConvertResult<Schema> {
        Ok(Schema::new("RT3S channels", RT3_CHANNELS))
    }

    fn derive(&self, source: &Record, _state: &mut RunState) -> ConvertResult<Record> {
        let name = source.require("CH Name")?;
        let rx = hz_str_to_mhz(source.require("RX Freq")?);
        let tx = hz_str_to_mhz(source.require("TX Freq")?);

        let mut out = Record::from_pairs(FIXED.iter().copied());
        out.set("Channel Mode", CHANNEL_MODE.map(source.get_or("Type", "")));
        out.set("Channel Name", name);
        out.set("RX Frequency(MHz)", rx);
        out.set("TX Frequency(MHz)", tx);
        out.set("Power", POWER.map(source.get_or("Power", "")));
        out.set("Contact Name", source.get_or("Contact Name", "None"));
        out.set("Group List", source.get_or("RX Group Name", "None"));
        out.set("Color Code", source.get_or("TX CC", "1"));
        out.set("Repeater Slot", REPEATER_SLOT.map(source.get_or("TX TS", "")));
        out.set("CTCSS/DCS Dec", source.get_or("RX Tone", "None"));
        out.set("CTCSS/DCS Enc", source.get_or("TX Tone", "None"));
        Ok(out)
    }
}
