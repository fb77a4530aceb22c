#[cfg(test)]
pub mod fixtures {
    use std::{fs::File, io::Write, path::PathBuf};

    use serde_json::{json, Value};
    use tempfile::TempDir;

    use crate::schema::Schema;

    pub const EXAMPLE_QUERY: &str = "Find all orders placed by customers last month.";

    pub fn shop_schema_json() -> Value {
        json!({
            "Orders": {
                "columns": [
                    { "name": "OrderID",     "type": "INT" },
                    { "name": "CustomerID",  "type": "INT" },
                    { "name": "OrderDate",   "type": "DATE" },
                    { "name": "TotalAmount", "type": "DECIMAL(10,2)" },
                    { "name": "Status",      "type": "VARCHAR(20)" }
                ]
            },
            "Customers": {
                "columns": [
                    { "name": "CustomerID", "type": "INT" },
                    { "name": "Name",       "type": "VARCHAR(100)" },
                    { "name": "Email",      "type": "VARCHAR(255)" },
                    { "name": "CreatedAt",  "type": "DATE" }
                ]
            },
            "Products": {
                "columns": [
                    { "name": "ProductID", "type": "INT" },
                    { "name": "Title",     "type": "VARCHAR(200)" },
                    { "name": "Price",     "type": "DECIMAL(10,2)" }
                ]
            }
        })
    }

    pub fn shop_schema() -> Schema {
        serde_json::from_value(shop_schema_json()).unwrap()
    }

    /// Only the `Customers` table of the shop schema.
    pub fn customers_only_schema() -> Schema {
        let mut schema = shop_schema();
        schema.tables.retain(|name, _| name == "Customers");
        schema
    }

    pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        let mut file = File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file_path
    }
}
