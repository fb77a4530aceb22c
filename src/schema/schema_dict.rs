use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{SchemaProvider, TableSchema};

/// A relational schema description: table name -> table description.
///
/// The document is a bare map, the shape of the files read by
/// [`crate::schema::SchemaLoader`]. Entries that read as a table description
/// land in `tables`, in document order. Any other top-level entry
/// (`"version": 2`, `"$schema"`, a table missing its `columns`) is kept
/// untouched in `extra`; it is never selected by a query, and it is written
/// back on serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, Value>", into = "IndexMap<String, Value>")]
pub struct Schema {
    pub tables: IndexMap<String, TableSchema>,
    pub extra: IndexMap<String, Value>,
}

impl From<IndexMap<String, Value>> for Schema {
    fn from(document: IndexMap<String, Value>) -> Self {
        let mut schema = Schema::new();
        for (key, value) in document {
            match serde_json::from_value::<TableSchema>(value.clone()) {
                Ok(table) => {
                    schema.tables.insert(key, table);
                }
                Err(e) => {
                    tracing::debug!("top-level entry '{}' is not a table description ({}), keeping it as-is", key, e);
                    schema.extra.insert(key, value);
                }
            }
        }
        schema
    }
}

impl From<Schema> for IndexMap<String, Value> {
    fn from(schema: Schema) -> Self {
        let mut document: IndexMap<String, Value> = schema
            .tables
            .into_iter()
            .map(|(name, table)| {
                let value = serde_json::to_value(table).unwrap_or(Value::Null);
                (name, value)
            })
            .collect();
        document.extend(schema.extra);
        document
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(text: &str) -> Result<Schema, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Schema, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn insert(&mut self, name: &str, table: TableSchema) -> Option<TableSchema> {
        self.tables.insert(name.to_string(), table)
    }

    pub fn get(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl SchemaProvider for Schema {
    fn table(&self, name: &str) -> Option<&TableSchema> {
        self.get(name)
    }

    fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }
}

impl FromIterator<(String, TableSchema)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, TableSchema)>>(iter: I) -> Self {
        Schema { tables: iter.into_iter().collect(), extra: IndexMap::new() }
    }
}
