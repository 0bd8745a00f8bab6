// Core module containing the table data model and field derivation helpers
pub mod codes;
pub mod record;
pub mod schema;
pub mod units;

// Re-export commonly used types
pub use codes::{CodeMap, Match};
pub use record::{truncate, FieldError, Record};
pub use schema::Schema;
pub use units::Duplex;
