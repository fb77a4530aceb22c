use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single column entry of a table description.
///
/// Only `name` is used for matching. Every other key of the column object,
/// the declared `type` included, is kept verbatim in `extra` so a loaded
/// schema serializes back to the document it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name, matched case-insensitively against query words
    pub name: String,
    /// Any other key of the column object
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ColumnDescriptor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extra: IndexMap::new(),
        }
    }

    pub fn typed(name: &str, data_type: &str) -> Self {
        let mut column = Self::new(name);
        column.extra.insert("type".to_string(), Value::String(data_type.to_string()));
        column
    }

    /// Declared column type, when the document gives it as a string.
    pub fn data_type(&self) -> Option<&str> {
        self.extra.get("type").and_then(Value::as_str)
    }

    /// Lowercase form of the name, used for substring matching.
    pub fn match_key(&self) -> String {
        self.name.to_lowercase()
    }
}
