use std::{fmt::Display, path::Path};

use serde::de::DeserializeOwned;

/// Document formats accepted for schema and rule files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl SchemaFormat {
    /// Detect the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<SchemaFormat> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(SchemaFormat::Json),
            "yaml" | "yml" => Some(SchemaFormat::Yaml),
            _ => None,
        }
    }

    /// Parse raw file content in this format. Invalid UTF-8 is a parse
    /// failure like any other. The error is rendered to a message so both
    /// formats share one error shape.
    pub fn parse<T: DeserializeOwned>(&self, content: &[u8]) -> Result<T, String> {
        match self {
            SchemaFormat::Json => serde_json::from_slice(content).map_err(|e| e.to_string()),
            SchemaFormat::Yaml => serde_yaml::from_slice(content).map_err(|e| e.to_string()),
        }
    }
}

impl Display for SchemaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaFormat::Json => write!(f, "JSON"),
            SchemaFormat::Yaml => write!(f, "YAML"),
        }
    }
}
