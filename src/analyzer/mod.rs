pub mod tokenizer;
pub use tokenizer::*;

pub mod extracted_info;
pub use extracted_info::*;

pub mod analysis_error;
pub use analysis_error::*;

pub mod query_analyzer;
pub use query_analyzer::*;
