use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub use table::Table;

/// Render a serializable response in the requested format.
///
/// Tables fall back to a generic key/value layout; use [`output_table`] for
/// responses with a natural column layout.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_generic_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print `value` as JSON/raw, or `table` when the table format is selected.
pub fn output_table<T: Serialize>(
    value: &T,
    format: OutputFormat,
    table: impl FnOnce() -> Table,
) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Table => table().render(options()),
        OutputFormat::Json | OutputFormat::Raw => render(value, format)?,
    };
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_generic_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let table = match serde_json::to_value(value)? {
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let mut table = Table::new(["key", "value"]);
            for (key, value) in entries {
                table.push([key, value_to_cell(&value)]);
            }
            table
        }
        Value::Array(items) => {
            let mut table = Table::new(["value"]);
            for item in &items {
                table.push([value_to_cell(item)]);
            }
            table
        }
        scalar => {
            let mut table = Table::new(["value"]);
            table.push([value_to_cell(&scalar)]);
            table
        }
    };
    Ok(table.render(options()))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use zoo_core::responses::ZooStatus;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: u32,
        name: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: 7, name: "Leo" };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 7);
        assert_eq!(parsed["name"], "Leo");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: 7, name: "Leo" };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 7);
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let status = ZooStatus {
            animals: 12,
            categories: 3,
            enclosures: 4,
            unassigned_animals: 1,
        };
        let out = render(&status, OutputFormat::Table).expect("table render should work");
        let lines = out.lines().collect::<Vec<_>>();
        assert!(lines[0].starts_with("key"));
        assert!(lines[2].starts_with("animals"));
        assert!(lines[2].trim_end().ends_with("12"));
        assert!(out.contains("unassigned_animals"));
    }
}
