//! Output formatting for CLI

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Plain text format
    Plain,
}

/// Trait for items that can be displayed in a table
pub trait TableDisplay {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

fn table<T: TableDisplay>(rows: impl IntoIterator<Item = Vec<String>>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(T::headers());
    for row in rows {
        table.add_row(row);
    }
    table
}

fn plain<T: TableDisplay>(item: &T) -> String {
    T::headers()
        .iter()
        .zip(item.row())
        .map(|(header, value)| format!("{}: {}", header, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single item
pub fn render_item<T: Serialize + TableDisplay>(item: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => table::<T>([item.row()]).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(item).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(item).unwrap_or_default(),
        OutputFormat::Plain => plain(item),
    }
}

/// Render a list of items
pub fn render_list<T: Serialize + TableDisplay>(items: &[T], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(items).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(items).unwrap_or_default(),
        _ if items.is_empty() => "No items found.".to_string(),
        OutputFormat::Table => table::<T>(items.iter().map(TableDisplay::row)).to_string(),
        OutputFormat::Plain => items
            .iter()
            .map(plain)
            .collect::<Vec<_>>()
            .join("\n---\n"),
    }
}

/// Print a single item
pub fn print_item<T: Serialize + TableDisplay>(item: &T, format: OutputFormat) {
    println!("{}", render_item(item, format));
}

/// Print a list of items
pub fn print_list<T: Serialize + TableDisplay>(items: &[T], format: OutputFormat) {
    println!("{}", render_list(items, format));
}

/// Print success message
pub fn print_success(message: &str) {
    println!("✅ {}", message);
}

/// Print error message
pub fn print_error(message: &str) {
    eprintln!("❌ {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: String,
        size: u64,
    }

    impl TableDisplay for Row {
        fn headers() -> Vec<&'static str> {
            vec!["ID", "Size"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.id.clone(), self.size.to_string()]
        }
    }

    #[test]
    fn test_plain_output() {
        let row = Row {
            id: "OpiNull9".to_string(),
            size: 512,
        };
        assert_eq!(render_item(&row, OutputFormat::Plain), "ID: OpiNull9\nSize: 512");
    }

    #[test]
    fn test_json_list_output() {
        let rows = vec![Row {
            id: "a".to_string(),
            size: 1,
        }];
        let json: serde_json::Value =
            serde_json::from_str(&render_list(&rows, OutputFormat::Json)).unwrap();
        assert_eq!(json[0]["id"], "a");
    }

    #[test]
    fn test_empty_table() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(render_list(&rows, OutputFormat::Table), "No items found.");
        assert_eq!(render_list(&rows, OutputFormat::Json), "[]");
    }
}
