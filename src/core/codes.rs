// Enumerated code remapping tables
//
// Every vendor encodes power level, call type, channel mode and time slot
// differently. A `CodeMap` translates one vendor's spelling into another's
// and never fails: unknown input falls back to the declared default.

/// How a `CodeMap` compares input against its keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Exact string equality (after trimming)
    Exact,
    /// ASCII case-insensitive equality
    IgnoreCase,
    /// Input contains the key
    Contains,
    /// Input contains the key, ignoring ASCII case
    ContainsIgnoreCase,
}

/// Fixed lookup table with an explicit fallback
#[derive(Debug, Clone, Copy)]
pub struct CodeMap {
    entries: &'static [(&'static str, &'static str)],
    default: &'static str,
    matching: Match,
}

impl CodeMap {
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        default: &'static str,
        matching: Match,
    ) -> Self {
        Self {
            entries,
            default,
            matching,
        }
    }

    /// The mapped code, or `None` when no key matches
    ///
    /// Entries are tried in declaration order, which matters for the
    /// substring modes.
    pub fn get(&self, input: &str) -> Option<&'static str> {
        let input = input.trim();
        self.entries
            .iter()
            .find(|(key, _)| self.is_match(input, key))
            .map(|&(_, code)| code)
    }

    /// The mapped code, or the declared default
    pub fn map(&self, input: &str) -> &'static str {
        self.get(input).unwrap_or(self.default)
    }

    pub fn default_code(&self) -> &'static str {
        self.default
    }

    fn is_match(&self, input: &str, key: &str) -> bool {
        match self.matching {
            Match::Exact => input == key,
            Match::IgnoreCase => input.eq_ignore_ascii_case(key),
            Match::Contains => input.contains(key),
            Match::ContainsIgnoreCase => input
                .to_ascii_uppercase()
                .contains(&key.to_ascii_uppercase()),
        }
    }
}
