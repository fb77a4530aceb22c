use crate::{
    analyzer::{AnalysisError, ExtractedInfo, Tokenizer},
    rules::{ColumnScan, KeywordIndex, MatchRules},
    schema::SchemaProvider,
};

/// Guesses which tables and columns a natural-language query is about.
pub struct QueryAnalyzer<'a> {
    rules: &'a MatchRules,
    keywords: KeywordIndex,
}

impl<'a> QueryAnalyzer<'a> {
    pub fn new(rules: &'a MatchRules) -> Self {
        Self { rules, keywords: rules.keyword_index() }
    }

    pub fn analyze(&self, query: &str, schema: &dyn SchemaProvider) -> Result<ExtractedInfo, AnalysisError> {
        if schema.table_names().is_empty() {
            tracing::warn!("{}", AnalysisError::SchemaMissing);
            return Err(AnalysisError::SchemaMissing);
        }

        tracing::info!("Analyzing query: {}", query);
        let tokens = Tokenizer::tokenize(query);
        let mut info = ExtractedInfo::new();

        match self.rules.column_scan {
            ColumnScan::Complete => {
                for token in &tokens {
                    self.discover_tables(token, &mut info);
                }
                let tables: Vec<String> = info.tables.iter().cloned().collect();
                for token in &tokens {
                    self.match_columns(token, &tables, schema, &mut info);
                }
            }
            ColumnScan::Incremental => {
                for token in &tokens {
                    self.discover_tables(token, &mut info);
                    let tables: Vec<String> = info.tables.iter().cloned().collect();
                    self.match_columns(token, &tables, schema, &mut info);
                }
            }
        }

        let tables: Vec<String> = info.tables.iter().cloned().collect();
        for table in &tables {
            for column in self.rules.mandatory_columns(table) {
                info.add_column(column);
            }
        }

        tracing::info!("Extracted info: {}", info);
        Ok(info)
    }

    fn discover_tables(&self, token: &str, info: &mut ExtractedInfo) {
        for table in self.keywords.tables_for(token) {
            if info.add_table(table) {
                tracing::debug!("word '{}' selects table {}", token, table);
            }
        }
    }

    /// Add the columns of `tables` that contain `token`, or all of their
    /// columns when `token` is an all-column trigger. Tables unknown to the
    /// schema contribute nothing.
    fn match_columns(&self, token: &str, tables: &[String], schema: &dyn SchemaProvider, info: &mut ExtractedInfo) {
        let all_columns = self.keywords.is_all_column_trigger(token);

        for table in tables {
            let Some(table_schema) = schema.table(table) else {
                tracing::debug!("table {} is not in the schema, skipping column match", table);
                continue;
            };

            for column in &table_schema.columns {
                if (all_columns || column.match_key().contains(token)) && info.add_column(&column.name) {
                    tracing::debug!("word '{}' selects column {}.{}", token, table, column.name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        _tests::fixtures::{customers_only_schema, shop_schema, EXAMPLE_QUERY},
        rules::TableRule,
        schema::Schema,
    };

    fn as_set(values: &indexmap::IndexSet<String>) -> HashSet<&str> {
        values.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_example_query_selects_orders_and_customers() {
        let rules = MatchRules::default();
        let info = QueryAnalyzer::new(&rules).analyze(EXAMPLE_QUERY, &shop_schema()).unwrap();

        assert_eq!(as_set(&info.tables), HashSet::from(["Orders", "Customers"]));
        for column in ["OrderDate", "CustomerID", "OrderID"] {
            assert!(info.has_column(column), "missing {column}");
        }
        // "last" is a date word, so every column of both tables is selected
        for column in ["TotalAmount", "Status", "Name", "Email", "CreatedAt"] {
            assert!(info.has_column(column), "missing {column}");
        }
        assert!(!info.tables.contains("Products"));
        assert!(!info.has_column("Price"));
    }

    #[test]
    fn test_empty_schema_is_missing() {
        let rules = MatchRules::default();
        let err = QueryAnalyzer::new(&rules).analyze(EXAMPLE_QUERY, &Schema::new()).unwrap_err();
        assert_eq!(err, AnalysisError::SchemaMissing);
        assert_eq!(err.to_string(), "Schema not loaded");
    }

    #[test]
    fn test_substring_column_match() {
        let rules = MatchRules::default();
        let info = QueryAnalyzer::new(&rules).analyze("Show the customer email", &shop_schema()).unwrap();

        assert_eq!(as_set(&info.tables), HashSet::from(["Customers"]));
        assert_eq!(as_set(&info.columns), HashSet::from(["CustomerID", "Email"]));
    }

    #[test]
    fn test_possessive_clitic_matches_no_column() {
        let rules = MatchRules::default();
        let info = QueryAnalyzer::new(&rules).analyze("the client's name", &shop_schema()).unwrap();

        assert_eq!(as_set(&info.tables), HashSet::from(["Customers"]));
        assert_eq!(as_set(&info.columns), HashSet::from(["Name"]));
    }

    #[test]
    fn test_mandatory_columns_added_even_if_absent() {
        let rules = MatchRules::default();
        let info = QueryAnalyzer::new(&rules).analyze("orders by customer", &customers_only_schema()).unwrap();

        assert_eq!(as_set(&info.tables), HashSet::from(["Orders", "Customers"]));
        assert_eq!(as_set(&info.columns), HashSet::from(["CustomerID", "OrderDate", "OrderID"]));
    }

    #[test]
    fn test_no_keywords_yields_empty_info() {
        let rules = MatchRules::default();
        let info = QueryAnalyzer::new(&rules).analyze("hello world", &shop_schema()).unwrap();
        assert!(info.tables.is_empty());
        assert!(info.columns.is_empty());
    }

    #[test]
    fn test_complete_scan_ignores_word_order() {
        let rules = MatchRules::default();
        let analyzer = QueryAnalyzer::new(&rules);
        let schema = shop_schema();

        let a = analyzer.analyze("email of each client", &schema).unwrap();
        let b = analyzer.analyze("client email of each", &schema).unwrap();

        assert_eq!(as_set(&a.tables), as_set(&b.tables));
        assert_eq!(as_set(&a.columns), HashSet::from(["Email"]));
        assert_eq!(as_set(&a.columns), as_set(&b.columns));
    }

    #[test]
    fn test_incremental_scan_misses_earlier_words() {
        let rules = MatchRules::default().with_column_scan(ColumnScan::Incremental);
        let analyzer = QueryAnalyzer::new(&rules);
        let schema = shop_schema();

        let late = analyzer.analyze("email of each client", &schema).unwrap();
        assert!(late.tables.contains("Customers"));
        assert!(late.columns.is_empty());

        let early = analyzer.analyze("client email of each", &schema).unwrap();
        assert_eq!(as_set(&early.columns), HashSet::from(["Email"]));
    }

    #[test]
    fn test_custom_rules() {
        let mut rules = MatchRules::default();
        rules.keyword_groups.insert("product".to_string(), ["product", "item"].iter().map(|s| s.to_string()).collect());
        rules.tables.insert("Products".to_string(), TableRule::new(&["product"], &["ProductID"]));

        let info = QueryAnalyzer::new(&rules).analyze("cheapest items by price", &shop_schema()).unwrap();

        assert_eq!(as_set(&info.tables), HashSet::from(["Products"]));
        assert_eq!(as_set(&info.columns), HashSet::from(["Price", "ProductID"]));
    }
}
