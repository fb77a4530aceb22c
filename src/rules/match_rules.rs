use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::{
    analyzer::Tokenizer,
    rules::ColumnScan,
    schema::{LoadError, SchemaLoader},
};

/// Trigger configuration for a single table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRule {
    /// Names of the keyword groups whose words select this table
    pub keyword_groups: Vec<String>,
    /// Columns always reported when this table is selected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mandatory_columns: Vec<String>,
}

impl TableRule {
    pub fn new(keyword_groups: &[&str], mandatory_columns: &[&str]) -> Self {
        Self {
            keyword_groups: keyword_groups.iter().map(|g| g.to_string()).collect(),
            mandatory_columns: mandatory_columns.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// The rule table driving query analysis.
///
/// Keyword groups are named word sets. Each table lists the groups that
/// trigger it, and `all_column_groups` lists the groups whose words select
/// every column of the candidate tables. The default value holds the
/// built-in `Orders`/`Customers` rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    pub keyword_groups: IndexMap<String, IndexSet<String>>,
    pub tables: IndexMap<String, TableRule>,
    #[serde(default)]
    pub all_column_groups: Vec<String>,
    #[serde(default)]
    pub column_scan: ColumnScan,
}

impl Default for MatchRules {
    fn default() -> Self {
        let mut keyword_groups = IndexMap::new();
        keyword_groups.insert("order".to_string(), words(&["order", "purchase", "transaction"]));
        keyword_groups.insert("customer".to_string(), words(&["customer", "client", "buyer", "user"]));
        keyword_groups.insert("date".to_string(), words(&["date", "time", "last", "month"]));

        let mut tables = IndexMap::new();
        tables.insert(
            "Orders".to_string(),
            TableRule::new(&["order", "date"], &["OrderDate", "CustomerID", "OrderID"]),
        );
        tables.insert("Customers".to_string(), TableRule::new(&["customer"], &[]));

        Self {
            keyword_groups,
            tables,
            all_column_groups: vec!["date".to_string()],
            column_scan: ColumnScan::Complete,
        }
    }
}

fn words(list: &[&str]) -> IndexSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl MatchRules {
    /// Read a rule file (JSON or YAML) and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<MatchRules, LoadError> {
        let path = path.as_ref();
        tracing::info!("Loading match rules from: {}", path.display());

        let rules: MatchRules = SchemaLoader::load_document(path)?;
        rules.validate().map_err(|message| {
            let err = LoadError::InvalidRules { path: path.to_path_buf(), message };
            tracing::warn!("{}", err);
            err
        })?;

        tracing::info!("Match rules loaded ({} tables)", rules.tables.len());
        Ok(rules)
    }

    /// Every group referenced by a table or by `all_column_groups` must be
    /// defined.
    pub fn validate(&self) -> Result<(), String> {
        for (table, rule) in &self.tables {
            if let Some(group) = rule.keyword_groups.iter().find(|g| !self.keyword_groups.contains_key(*g)) {
                return Err(format!("table '{}' refers to undefined keyword group '{}'", table, group));
            }
        }

        if let Some(group) = self.all_column_groups.iter().find(|g| !self.keyword_groups.contains_key(*g)) {
            return Err(format!("all_column_groups refers to undefined keyword group '{}'", group));
        }

        Ok(())
    }

    pub fn with_column_scan(mut self, column_scan: ColumnScan) -> Self {
        self.column_scan = column_scan;
        self
    }

    /// Lowercase union of the keyword groups that trigger `table`.
    pub fn table_keywords(&self, table: &str) -> IndexSet<String> {
        let Some(rule) = self.tables.get(table) else {
            return IndexSet::new();
        };

        self.group_words(&rule.keyword_groups)
    }

    fn group_words(&self, groups: &[String]) -> IndexSet<String> {
        groups
            .iter()
            .filter_map(|g| self.keyword_groups.get(g))
            .flatten()
            .map(|w| w.to_lowercase())
            .collect()
    }

    /// Resolve every keyword set once, for repeated per-word lookups.
    pub fn keyword_index(&self) -> KeywordIndex {
        KeywordIndex {
            tables: self
                .tables
                .keys()
                .map(|table| (table.clone(), self.table_keywords(table)))
                .collect(),
            all_columns: self.group_words(&self.all_column_groups),
        }
    }

    pub fn mandatory_columns(&self, table: &str) -> &[String] {
        self.tables
            .get(table)
            .map(|rule| rule.mandatory_columns.as_slice())
            .unwrap_or(&[])
    }
}

/// Lowercase keyword sets resolved from a [`MatchRules`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordIndex {
    /// Table name -> trigger words, in rule order
    tables: Vec<(String, IndexSet<String>)>,
    all_columns: IndexSet<String>,
}

impl KeywordIndex {
    /// Tables triggered by `token`, in rule order.
    pub fn tables_for(&self, token: &str) -> Vec<&str> {
        let forms = Tokenizer::word_forms(token);
        self.tables
            .iter()
            .filter(|(_, keywords)| forms.iter().any(|form| keywords.contains(form)))
            .map(|(table, _)| table.as_str())
            .collect()
    }

    /// Whether `token` selects all columns of the candidate tables.
    pub fn is_all_column_trigger(&self, token: &str) -> bool {
        Tokenizer::word_forms(token).iter().any(|form| self.all_columns.contains(form))
    }
}
