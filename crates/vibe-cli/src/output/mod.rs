use std::io::IsTerminal;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

pub mod table;

/// Narrower `COLUMNS` values are ignored.
const MIN_TABLE_WIDTH: usize = 40;

/// Render a serializable response to a string in the format `flags` asks for.
pub fn render<T: Serialize>(value: &T, flags: &GlobalFlags) -> anyhow::Result<String> {
    match flags.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options(flags)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the format `flags` asks for.
pub fn output<T: Serialize>(value: &T, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render(value, flags)?;
    println!("{rendered}");
    Ok(())
}

/// Color follows `--color`; `auto` needs a terminal, no `--quiet`, and no
/// `NO_COLOR`. Width comes from `COLUMNS` when set.
fn table_options(flags: &GlobalFlags) -> table::TableOptions {
    let color = match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::io::stdout().is_terminal()
                && !flags.quiet
                && std::env::var_os("NO_COLOR").is_none()
        }
    };
    let max_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= MIN_TABLE_WIDTH);

    table::TableOptions { max_width, color }
}

/// Objects become a key/value table with nested objects flattened into
/// dotted keys (`result.match_percentage`). Arrays render one row per item.
fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => {
            let headers = ["value"];
            let rows = items
                .iter()
                .map(|item| vec![value_to_cell(item)])
                .collect::<Vec<_>>();
            if rows.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut rows = Vec::new();
            flatten_into(&mut rows, "", &map);
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

/// Keys come out in `serde_json::Map` order; absent optional fields are skipped.
fn flatten_into(rows: &mut Vec<Vec<String>>, prefix: &str, map: &Map<String, Value>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => flatten_into(rows, &path, nested),
            Value::Null if is_optional(key) => {}
            other => rows.push(vec![path, value_to_cell(other)]),
        }
    }
}

fn is_optional(key: &str) -> bool {
    matches!(key, "readiness" | "result" | "message")
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
