use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::ColumnDescriptor;

/// Description of one table: its ordered columns plus whatever else the
/// source document carried for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub columns: Vec<ColumnDescriptor>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TableSchema {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns, extra: IndexMap::new() }
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Keep only the columns accepted by `keep`, preserving their order.
    /// Extra table keys are not carried over.
    pub fn retain_columns<F>(&self, keep: F) -> TableSchema
    where
        F: Fn(&ColumnDescriptor) -> bool,
    {
        TableSchema::new(self.columns.iter().filter(|c| keep(c)).cloned().collect())
    }
}
