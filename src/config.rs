use std::path::PathBuf;

use crate::rules::MatchRules;

pub const DEFAULT_SCHEMA_PATH: &str = "schema.json";
pub const DEFAULT_QUERY: &str = "Find all orders placed by customers last month.";

/// Inputs for one scout run.
///
/// - `schema_path` is the JSON/YAML schema document to read.
/// - `query` is the natural-language question.
/// - `rules` is the rule table used to match words to tables and columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoutConfig {
    /// Schema document location
    pub schema_path: PathBuf,
    /// Question to analyze
    pub query: String,
    /// Keyword rules
    pub rules: MatchRules,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            query: DEFAULT_QUERY.to_string(),
            rules: MatchRules::default(),
        }
    }
}

impl ScoutConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for `query` against the schema at `schema_path`
    /// using the built-in rules.
    pub fn from(schema_path: impl Into<PathBuf>, query: &str) -> Self {
        Self {
            schema_path: schema_path.into(),
            query: query.to_string(),
            rules: MatchRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: MatchRules) -> Self {
        self.rules = rules;
        self
    }
}
