use std::fmt::Display;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Tables and columns judged relevant to one query.
///
/// Both sets keep insertion order so output is stable, but membership is
/// all that matters to consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedInfo {
    pub tables: IndexSet<String>,
    pub columns: IndexSet<String>,
}

impl ExtractedInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(tables: &[&str], columns: &[&str]) -> Self {
        Self {
            tables: tables.iter().map(|t| t.to_string()).collect(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Record a table; returns `true` if it was not already present.
    pub fn add_table(&mut self, table: &str) -> bool {
        self.tables.insert(table.to_string())
    }

    /// Record a column; returns `true` if it was not already present.
    pub fn add_column(&mut self, column: &str) -> bool {
        self.columns.insert(column.to_string())
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains(column)
    }
}

impl Display for ExtractedInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables: Vec<&str> = self.tables.iter().map(String::as_str).collect();
        let columns: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        write!(f, "tables: [{}], columns: [{}]", tables.join(", "), columns.join(", "))
    }
}
