// Frequency unit conversion and duplex arithmetic
//
// Vendor tables disagree on units: GD88 and UV-Pro store integer Hz, CHIRP,
// DM32, RT3 and Maverick store MHz with five decimals.

const HZ_PER_MHZ: f64 = 1_000_000.0;

/// Values above this are taken to be Hz rather than MHz
const HZ_THRESHOLD: f64 = 1000.0;

/// Convert Hz to MHz
pub fn hz_to_mhz(hz: f64) -> f64 {
    hz / HZ_PER_MHZ
}

/// Convert MHz to Hz
pub fn mhz_to_hz(mhz: f64) -> f64 {
    mhz * HZ_PER_MHZ
}

/// Format a MHz value as a fixed five-decimal string (e.g. "146.52000")
pub fn format_mhz(mhz: f64) -> String {
    format!("{:.5}", mhz)
}

/// Parse a numeric cell, ignoring surrounding whitespace
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Hz cell to a MHz string; malformed input yields "0.00000"
pub fn hz_str_to_mhz(value: &str) -> String {
    format_mhz(hz_to_mhz(parse_number(value).unwrap_or(0.0)))
}

/// MHz cell to an integer Hz string; malformed input yields "0"
pub fn mhz_str_to_hz(value: &str) -> String {
    match parse_number(value) {
        Some(mhz) => format!("{}", mhz_to_hz(mhz).round() as i64),
        None => "0".to_string(),
    }
}

/// Normalize a cell of unknown unit to a MHz string
///
/// Values above 1000 are treated as Hz and scaled, smaller values are
/// assumed to already be MHz. Empty or malformed input yields "".
pub fn any_to_mhz(value: &str) -> String {
    match parse_number(value) {
        Some(v) if v > HZ_THRESHOLD => format_mhz(hz_to_mhz(v)),
        Some(v) => format_mhz(v),
        None => String::new(),
    }
}

/// Direction of the transmit offset relative to the receive frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplex {
    Plus,
    Minus,
    Simplex,
}

impl Duplex {
    /// Parse a CHIRP duplex cell; anything other than "+" or "-" is simplex
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "+" => Duplex::Plus,
            "-" => Duplex::Minus,
            _ => Duplex::Simplex,
        }
    }

    /// Transmit frequency for a receive frequency and offset (same unit)
    pub fn tx_frequency(self, rx: f64, offset: f64) -> f64 {
        match self {
            Duplex::Plus => rx + offset,
            Duplex::Minus => rx - offset,
            Duplex::Simplex => rx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hz_mhz_roundtrip() {
        assert_eq!(hz_str_to_mhz("146000000"), "146.00000");
        assert_eq!(mhz_str_to_hz("146.00000"), "146000000");

        let hz = mhz_to_hz(hz_to_mhz(146_000_000.0));
        assert!((hz - 146_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_mhz_to_hz_rounds() {
        assert_eq!(mhz_str_to_hz("146.52"), "146520000");
        assert_eq!(mhz_str_to_hz("446.00625"), "446006250");
        assert_eq!(mhz_str_to_hz("bogus"), "0");
        assert_eq!(mhz_str_to_hz(""), "0");
    }

    #[test]
    fn test_malformed_fallbacks() {
        assert_eq!(hz_str_to_mhz("n/a"), "0.00000");
        assert_eq!(hz_str_to_mhz(""), "0.00000");
        assert_eq!(any_to_mhz(""), "");
        assert_eq!(any_to_mhz("abc"), "");
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_any_to_mhz() {
        assert_eq!(any_to_mhz("441950000"), "441.95000");
        assert_eq!(any_to_mhz("146.52"), "146.52000");
        assert_eq!(any_to_mhz(" 433.5 "), "433.50000");
    }

    #[test]
    fn test_duplex() {
        let rx = 146.520;
        let offset = 0.600;
        assert_eq!(format_mhz(Duplex::parse("+").tx_frequency(rx, offset)), "147.12000");
        assert_eq!(format_mhz(Duplex::parse("-").tx_frequency(rx, offset)), "145.92000");
        assert_eq!(format_mhz(Duplex::parse("").tx_frequency(rx, offset)), "146.52000");
        assert_eq!(Duplex::parse("split"), Duplex::Simplex);
        assert_eq!(Duplex::parse(" + "), Duplex::Plus);
    }
}
