//! Report rendering: pretty JSON, single-line JSON, or an aligned table.

use std::collections::BTreeSet;
use std::io::IsTerminal;
use std::sync::OnceLock;

use serde::Serialize;
use serde_json::Value;

use crate::cli::{GlobalFlags, OutputFormat};

pub mod rows;
pub mod table;

use table::{TableOptions, render_report_table};

static TABLE_OPTIONS: OnceLock<TableOptions> = OnceLock::new();

/// Decide table width and coloring once per process from the terminal,
/// `COLUMNS` and `NO_COLOR`.
pub fn init(flags: &GlobalFlags) {
    let color = flags.format == OutputFormat::Table
        && !flags.quiet
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let max_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = TABLE_OPTIONS.set(TableOptions { max_width, color });
}

fn table_options() -> TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or(TableOptions {
        max_width: None,
        color: false,
    })
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Raw => serde_json::to_string(value)?,
        OutputFormat::Table => table_for(serde_json::to_value(value)?),
    })
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Arrays of objects become one row per element, objects become key/value
/// rows, anything else a single cell.
fn table_for(value: Value) -> String {
    let (headers, rows): (Vec<String>, Vec<Vec<String>>) = match value {
        Value::Array(items) if items.is_empty() => return String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let headers: Vec<String> = items
                .iter()
                .filter_map(Value::as_object)
                .flat_map(|map| map.keys().cloned())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            let rows = items
                .iter()
                .map(|item| headers.iter().map(|h| cell(item.get(h))).collect())
                .collect();
            (headers, rows)
        }
        Value::Array(items) => (
            vec!["value".to_string()],
            items.iter().map(|item| vec![cell(Some(item))]).collect(),
        ),
        Value::Object(map) => (
            vec!["key".to_string(), "value".to_string()],
            map.iter().map(|(k, v)| vec![k.clone(), cell(Some(v))]).collect(),
        ),
        scalar => (vec!["value".to_string()], vec![vec![cell(Some(&scalar))]]),
    };

    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    render_report_table(&header_refs, &rows, table_options())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::from("-"),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| cell(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        rank: usize,
        name: &'static str,
        country: Option<&'static str>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { rank: 1, name: "rocket_0", country: Some("USA") };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["name"], "rocket_0");
        assert_eq!(parsed["rank"], 1);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = vec![
            Example { rank: 1, name: "a", country: None },
            Example { rank: 2, name: "b", country: None },
        ];
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn table_render_for_rows_has_one_column_per_field() {
        let value = vec![Example { rank: 1, name: "rocket_0", country: None }];
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        assert!(header.starts_with("country"));
        assert!(header.contains("name"));
        assert!(header.contains("rank"));
        assert!(out.lines().nth(2).is_some_and(|row| row.contains("rocket_0")));
    }

    #[test]
    fn table_render_for_object_lists_keys() {
        let value = Example { rank: 3, name: "x", country: Some("Europe") };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("country"));
        assert!(out.contains("Europe"));
    }

    #[test]
    fn empty_rows_render_placeholder() {
        let value: Vec<Example> = Vec::new();
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
