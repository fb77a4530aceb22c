pub mod filtered_schema;
pub use filtered_schema::*;

pub mod filter_error;
pub use filter_error::*;

pub mod schema_filter;
pub use schema_filter::*;
