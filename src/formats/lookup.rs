// Name -> identifier lookup table (talkgroups, contacts)

use super::table::{read_table, Result};
use std::collections::HashMap;
use std::path::Path;

/// External name -> identifier mapping, loaded fully before conversion
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: HashMap<String, String>,
}

impl LookupTable {
    /// Load a lookup table from a delimited file
    ///
    /// Keys and values are trimmed; rows where either is empty are ignored.
    pub fn load(
        path: impl AsRef<Path>,
        key_column: &str,
        value_column: &str,
        delimiter: u8,
    ) -> Result<Self> {
        let path = path.as_ref();
        let table = read_table(path, delimiter)?;

        let entries: HashMap<String, String> = table
            .records
            .iter()
            .filter_map(|rec| {
                let key = rec.get_or(key_column, "").trim();
                let value = rec.get_or(value_column, "").trim();
                if key.is_empty() || value.is_empty() {
                    return None;
                }
                Some((key.to_string(), value.to_string()))
            })
            .collect();

        tracing::info!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_talkgroups() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            "\u{feff}Name,Radio ID,Call Alert\nLocal 9, 9 ,None\n,3100,None\nEmpty,,None\nTAC 310,310,None\n",
        )
        .unwrap();

        let table = LookupTable::load(file.path(), "Name", "Radio ID", b',').unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Local 9"), Some("9"));
        assert_eq!(table.get("TAC 310"), Some("310"));
        assert_eq!(table.get("Empty"), None);
    }

    #[test]
    fn test_from_iter() {
        let table: LookupTable = [("A", "1")].into_iter().collect();
        assert_eq!(table.get("A"), Some("1"));
        assert!(!table.is_empty());
    }
}
