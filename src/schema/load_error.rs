use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SchemaFormat;

/// Failures while reading a schema or rule document from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File '{}' not found", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Unsupported file format for '{}'. Use JSON or YAML.", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Error loading {format} document '{}': {message}", path.display())]
    Parse {
        path: PathBuf,
        format: SchemaFormat,
        message: String,
    },

    #[error("Invalid rules in '{}': {message}", path.display())]
    InvalidRules { path: PathBuf, message: String },
}
