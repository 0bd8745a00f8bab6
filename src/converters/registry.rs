// Converter registry for looking up converters by id

use super::traits::Converter;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Information about a registered converter
#[derive(Debug, Clone)]
pub struct ConverterInfo {
    pub id: String,
    pub source: String,
    pub target: String,
    pub description: String,
}

impl ConverterInfo {
    fn from_converter(converter: &dyn Converter) -> Self {
        Self {
            id: converter.id().to_string(),
            source: converter.source_format().to_string(),
            target: converter.target_format().to_string(),
            description: converter.description().to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} -> {}", self.source, self.target)
    }
}

/// Global converter registry
lazy_static::lazy_static! {
    static ref CONVERTER_REGISTRY: Mutex<HashMap<String, Arc<dyn Converter>>> =
        Mutex::new(HashMap::new());
}

fn registry() -> std::sync::MutexGuard<'static, HashMap<String, Arc<dyn Converter>>> {
    CONVERTER_REGISTRY
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Register a converter in the global registry
pub fn register_converter(converter: Arc<dyn Converter>) {
    registry().insert(converter.id().to_string(), converter);
}

/// Get a converter by id
pub fn get_converter(id: &str) -> Option<Arc<dyn Converter>> {
    registry().get(id).cloned()
}

/// List all registered converters, sorted by id
pub fn list_converters() -> Vec<ConverterInfo> {
    let mut infos: Vec<ConverterInfo> = registry()
        .values()
        .map(|c| ConverterInfo::from_converter(c.as_ref()))
        .collect();
    infos.sort_by(|a, b| a.id.cmp(&b.id));
    infos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::{ConvertResult, RunState};
    use crate::core::{Record, Schema};

    struct Passthrough;

    impl Converter for Passthrough {
        fn id(&self) -> &'static str {
            "test-passthrough"
        }
        fn source_format(&self) -> &'static str {
            "Test A"
        }
        fn target_format(&self) -> &'static str {
            "Test B"
        }
        fn description(&self) -> &'static str {
            "Copies one column"
        }
        fn target_schema(&self, _state: &RunState) -> ConvertResult<Schema> {
            Ok(Schema::new("test", &["Name"]))
        }
        fn derive(&self, source: &Record, _state: &mut RunState) -> ConvertResult<Record> {
            Ok(Record::from_pairs([("Name", source.get_or("Name", ""))]))
        }
    }

    #[test]
    fn test_registry() {
        register_converter(Arc::new(Passthrough));

        let conv = get_converter("test-passthrough");
        assert!(conv.is_some());
        assert_eq!(conv.unwrap().name(), "Test A -> Test B");

        let info = list_converters()
            .into_iter()
            .find(|i| i.id == "test-passthrough")
            .unwrap();
        assert_eq!(info.full_name(), "Test A -> Test B");
        assert!(get_converter("nope").is_none());
    }
}
