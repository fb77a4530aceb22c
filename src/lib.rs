pub mod schema;
pub use schema::{Schema, SchemaLoader, SchemaProvider, LoadError};

pub mod rules;
pub use rules::{MatchRules, ColumnScan};

pub mod analyzer;
pub use analyzer::{QueryAnalyzer, ExtractedInfo, AnalysisError};

pub mod filter;
pub use filter::{SchemaFilter, FilteredSchema, FilterError};

pub mod config;
pub use config::*;

pub mod scout;
pub use scout::*;

mod _tests;
