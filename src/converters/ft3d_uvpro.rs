// Yaesu FT3D channel export -> BTECH UV-Pro channel import

use super::schemas::UVPRO_CHANNELS;
use super::traits::{ConvertResult, Converter, ConverterDefaults, RunState};
use crate::core::units::mhz_str_to_hz;
use crate::core::{CodeMap, Match, Record, Schema};
use lazy_static::lazy_static;
use regex::Regex;

/// Order matters: "Mid" and "Med" are both medium power
const POWER: CodeMap = CodeMap::new(
    &[("High", "H"), ("Low", "L"), ("Mid", "M"), ("Med", "M")],
    "H",
    Match::Contains,
);

const MODULATION: CodeMap = CodeMap::new(&[("FM", "0")], "1", Match::Exact);

/// FT3D marks skipped memories with "On"
const SCAN: CodeMap = CodeMap::new(&[("On", "0")], "1", Match::Exact);

/// UV-Pro only offers wide FM
const BANDWIDTH_HZ: &str = "25000";

const FIXED: &[(&str, &str)] = &[
    ("bandwidth(12500/25000)", BANDWIDTH_HZ),
    ("talk around(0=OFF/1=ON)", "0"),
    ("pre_de_emph_bypass(0=OFF/1=ON)", "0"),
    ("sign(0=OFF/1=ON)", "0"),
    ("tx_dis(0=OFF/1=ON)", "0"),
    ("mute(0=OFF/1=ON)", "0"),
];

lazy_static! {
    static ref HZ_SUFFIX: Regex = Regex::new(r"\s*Hz$").unwrap();
}

pub struct Ft3dToUvPro;

impl Converter for Ft3dToUvPro {
    fn id(&self) -> &'static str {
        "ft3d-uvpro"
    }

    fn source_format(&self) -> &'static str {
        "FT3D channels"
    }

    fn target_format(&self) -> &'static str {
        "UV-Pro channels"
    }

    fn description(&self) -> &'static str {
        "Yaesu FT3D memory export to BTECH UV-Pro channels"
    }

    fn defaults(&self) -> ConverterDefaults {
        ConverterDefaults {
            output: "channels_out.csv",
            ..Default::default()
        }
    }

    fn target_schema(&self, _state: &RunState) -> ConvertResult<Schema> {
        Ok(Schema::new("UV-Pro channels", UVPRO_CHANNELS))
    }

    fn derive(&self, source: &Record, _state: &mut RunState) -> ConvertResult<Record> {
        let title = source.require("Name")?;
        let tx = mhz_str_to_hz(source.require("Transmit Frequency")?);
        let rx = mhz_str_to_hz(source.require("Receive Frequency")?);

        let sub_audio = sub_audio(
            source.get_or("Tone Mode", ""),
            source.get_or("CTCSS", ""),
            source.get_or("DCS", ""),
        );
        let modulation = MODULATION.map(source.get_or("Operating Mode", "FM"));

        let mut out = Record::from_pairs(FIXED.iter().copied());
        out.set("title", title);
        out.set("tx_freq", tx);
        out.set("rx_freq", rx);
        out.set("tx_sub_audio(CTCSS=freq/DCS=number)", sub_audio.clone());
        out.set("rx_sub_audio(CTCSS=freq/DCS=number)", sub_audio);
        out.set("tx_power(H/M/L)", POWER.map(source.get_or("Tx Power", "")));
        out.set("scan(0=OFF/1=ON)", SCAN.map(source.get_or("Skip", "")));
        out.set("rx_modulation(0=FM/1=AM)", modulation);
        out.set("tx_modulation(0=FM/1=AM)", modulation);
        Ok(out)
    }
}

/// Sub-audio cell: CTCSS frequency for tone modes, DCS code for DCS, else "0"
fn sub_audio(tone_mode: &str, ctcss: &str, dcs: &str) -> String {
    match tone_mode.trim() {
        "Tone" | "T Sql" => HZ_SUFFIX.replace(ctcss.trim(), "").into_owned(),
        "DCS" => dcs.trim().to_string(),
        _ => "0".to_string(),
    }
}
