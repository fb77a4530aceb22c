use crate::{
    analyzer::ExtractedInfo,
    filter::{FilterError, FilteredSchema},
    schema::SchemaProvider,
};

/// Reduces a schema to the tables and columns selected for a query.
pub struct SchemaFilter;

impl SchemaFilter {
    /// Keep every table of `info` that the schema knows, each restricted to
    /// the columns named in `info`, in schema order.
    pub fn filter(schema: &dyn SchemaProvider, info: &ExtractedInfo) -> Result<FilteredSchema, FilterError> {
        if info.tables.is_empty() {
            tracing::warn!("{}", FilterError::NoTables);
            return Err(FilterError::NoTables);
        }

        let tables: Vec<&str> = info.tables.iter().map(String::as_str).collect();
        tracing::info!("Filtering schema: keeping tables [{}]", tables.join(", "));

        let mut filtered = FilteredSchema::new();
        for table in &info.tables {
            let Some(table_schema) = schema.table(table) else {
                tracing::debug!("table {} is not in the schema, dropping it", table);
                continue;
            };

            let kept = table_schema.retain_columns(|c| info.has_column(&c.name));
            filtered.tables.insert(table.clone(), kept);
        }

        Ok(filtered)
    }
}
