pub mod config;
pub mod director;
pub mod movie;

use comfy_table::{Table, presets::UTF8_FULL};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct OutputContext {
    pub json: bool,
}

impl OutputContext {
    pub fn print_table(&self, columns: &[&str], rows: &[Vec<Value>]) {
        if self.json {
            let records: Vec<Value> = rows
                .iter()
                .map(|row| {
                    let object = columns
                        .iter()
                        .zip(row)
                        .map(|(column, value)| (column.to_string(), value.clone()))
                        .collect();
                    Value::Object(object)
                })
                .collect();
            self.print_json(&records);
            return;
        }

        if rows.is_empty() {
            self.print_info("No records");
            return;
        }

        println!("{}", render_table(columns, rows));
    }

    pub fn print_json<T: serde::Serialize>(&self, data: &T) {
        match serde_json::to_string_pretty(data) {
            Ok(text) => println!("{text}"),
            Err(e) => self.print_error(&format!("Failed to encode output: {e}")),
        }
    }

    pub fn print_success(&self, message: &str) {
        use colored::Colorize;
        println!("{} {}", "✓".green(), message);
    }

    pub fn print_error(&self, message: &str) {
        use colored::Colorize;
        eprintln!("{} {}", "✗".red(), message);
    }

    pub fn print_info(&self, message: &str) {
        use colored::Colorize;
        println!("{} {}", "ℹ".blue(), message);
    }
}

pub fn render_table(columns: &[&str], rows: &[Vec<Value>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(columns);

    for row in rows {
        let values: Vec<String> = row.iter().map(value_to_string).collect();
        table.add_row(values);
    }

    table
}

fn value_to_string(v: &Value) -> String {
    match v {
        Value::Null => "-".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(value_to_string).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(obj) => serde_json::to_string(obj).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&Value::Null), "-");
        assert_eq!(value_to_string(&json!(52)), "52");
        assert_eq!(value_to_string(&json!("Heat")), "Heat");
        assert_eq!(value_to_string(&json!(["a", 1])), "[a, 1]");
    }

    #[test]
    fn test_render_table_contains_rows() {
        let table = render_table(
            &["name", "age"],
            &[vec![json!("Christopher Nolan"), json!(52)]],
        );
        let text = table.to_string();
        assert!(text.contains("name"));
        assert!(text.contains("Christopher Nolan"));
        assert!(text.contains("52"));
    }
}
