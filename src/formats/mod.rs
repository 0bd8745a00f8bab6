// File format handlers
pub mod lookup;
pub mod table;
pub mod template;

pub use lookup::LookupTable;
pub use table::{
    inspect_existing, read_table, AppendPlan, Table, TableError, TableReader, TableWriter,
    WriteMode,
};
pub use template::{TemplateError, TemplateSet};
