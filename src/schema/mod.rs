pub mod column_descriptor;
pub use column_descriptor::*;

pub mod table_schema;
pub use table_schema::*;

pub mod schema_dict;
pub use schema_dict::*;

pub mod schema_format;
pub use schema_format::*;

pub mod load_error;
pub use load_error::*;

pub mod schema_loader;
pub use schema_loader::*;

pub trait SchemaProvider {
    /// Return the description of `name` if the schema has such a table.
    fn table(&self, name: &str) -> Option<&TableSchema>;

    /// Table names in schema order.
    fn table_names(&self) -> Vec<String>;
}
