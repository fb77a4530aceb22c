use serde::{Deserialize, Serialize};

/// How the column pass of the analyzer relates to table discovery.
///
/// - `Complete`: collect every candidate table first, then match all words
///   against all of their columns.
/// - `Incremental`: match columns while tables are being discovered, so a
///   table found at word `n` only sees words `n..`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnScan {
    #[default]
    Complete,
    Incremental,
}
