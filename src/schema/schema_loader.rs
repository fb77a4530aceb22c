use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use crate::schema::{LoadError, Schema, SchemaFormat};

/// Reads schema documents from JSON or YAML files.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Load a schema from `path`, detecting the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Schema, LoadError> {
        let path = path.as_ref();
        tracing::info!("Loading schema from: {}", path.display());

        let schema: Schema = Self::load_document(path)?;

        tracing::info!("Schema loaded successfully ({} tables)", schema.len());
        Ok(schema)
    }

    /// Read and deserialize any JSON/YAML document.
    ///
    /// Checks run in order: the file must exist, then its extension must be a
    /// known format, then the content must parse into `T`.
    pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
        // Guard: the path must be an existing file
        if !path.is_file() {
            let err = LoadError::NotFound { path: path.to_path_buf(), source: None };
            tracing::warn!("{}", err);
            return Err(err);
        }

        // Guard: the extension must name a supported format
        let Some(format) = SchemaFormat::from_path(path) else {
            let err = LoadError::UnsupportedFormat { path: path.to_path_buf() };
            tracing::warn!("{}", err);
            return Err(err);
        };

        let content = fs::read(path).map_err(|source| {
            let err = LoadError::NotFound { path: path.to_path_buf(), source: Some(source) };
            tracing::warn!("{}", err);
            err
        })?;

        format.parse::<T>(&content).map_err(|message| {
            let err = LoadError::Parse { path: path.to_path_buf(), format, message };
            tracing::warn!("{}", err);
            err
        })
    }
}
