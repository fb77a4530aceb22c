pub mod column_scan;
pub use column_scan::*;

pub mod match_rules;
pub use match_rules::*;
