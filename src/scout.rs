use std::path::Path;

use thiserror::Error;

use crate::{
    analyzer::{AnalysisError, QueryAnalyzer},
    config::ScoutConfig,
    filter::{FilterError, FilteredSchema, SchemaFilter},
    rules::MatchRules,
    schema::{LoadError, Schema, SchemaLoader},
};

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Runs load, analyze and filter for a query.
#[derive(Debug, Clone, Default)]
pub struct SchemaScout {
    rules: MatchRules,
}

impl SchemaScout {
    pub fn new(rules: MatchRules) -> Self {
        Self { rules }
    }

    /// Load the schema at `path` and reduce it to what `query` needs.
    pub fn run(&self, path: impl AsRef<Path>, query: &str) -> Result<FilteredSchema, ScoutError> {
        let schema = SchemaLoader::load(path)?;
        self.run_with_schema(&schema, query)
    }

    /// Same as [`SchemaScout::run`] for an already loaded schema.
    pub fn run_with_schema(&self, schema: &Schema, query: &str) -> Result<FilteredSchema, ScoutError> {
        let info = QueryAnalyzer::new(&self.rules).analyze(query, schema)?;
        let filtered = SchemaFilter::filter(schema, &info)?;
        Ok(filtered)
    }

    /// Run with everything taken from `config`.
    pub fn run_config(config: &ScoutConfig) -> Result<FilteredSchema, ScoutError> {
        SchemaScout::new(config.rules.clone()).run(&config.schema_path, &config.query)
    }
}
