// Converter framework
pub mod engine;
pub mod registry;
pub mod schemas;
pub mod traits;

// Converters
pub mod chirp_dm32;
pub mod ft3d_uvpro;
pub mod gd88_contacts_rt3;
pub mod gd88_dm32;
pub mod gd88_maverick;
pub mod gd88_rt3;

use std::sync::Arc;

pub use engine::{convert, ConversionReport};
pub use registry::{get_converter, list_converters, register_converter, ConverterInfo};
pub use traits::{
    ConversionWarning, ConvertError, ConvertResult, Converter, ConverterDefaults, RunState,
};

/// Initialize and register all available converters
///
/// Must be called once at startup before converters are looked up by id.
pub fn init_converters() {
    register_converter(Arc::new(chirp_dm32::ChirpToDm32));
    register_converter(Arc::new(gd88_dm32::Gd88ToDm32));
    register_converter(Arc::new(gd88_rt3::Gd88ToRt3));
    register_converter(Arc::new(gd88_contacts_rt3::Gd88ContactsToRt3));
    register_converter(Arc::new(gd88_maverick::Gd88ToMaverick));
    register_converter(Arc::new(ft3d_uvpro::Ft3dToUvPro));
}

/// Look up a registered converter, failing with `UnknownConverter`
pub fn find_converter(id: &str) -> ConvertResult<Arc<dyn Converter>> {
    get_converter(id).ok_or_else(|| ConvertError::UnknownConverter(id.to_string()))
}
