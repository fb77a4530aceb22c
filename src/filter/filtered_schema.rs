use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::{Schema, SchemaProvider, TableSchema};

/// The reduced schema produced for a query: `{ "tables": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredSchema {
    pub tables: IndexMap<String, TableSchema>,
}

impl FilteredSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn into_schema(self) -> Schema {
        Schema { tables: self.tables, extra: IndexMap::new() }
    }
}

impl SchemaProvider for FilteredSchema {
    fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }
}

impl From<FilteredSchema> for Schema {
    fn from(filtered: FilteredSchema) -> Self {
        filtered.into_schema()
    }
}
