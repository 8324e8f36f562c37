use bnm_model::{Payload, Table};
use comfy_table::Table as TextTable;
use serde_json::Value;

pub fn render_payload(payload: &Payload) -> Result<String, serde_json::Error> {
    match payload {
        Payload::Json(value) => serde_json::to_string_pretty(value),
        Payload::Table(table) => Ok(render_table(table)),
    }
}

pub fn render_table(table: &Table) -> String {
    if table.columns.is_empty() {
        return "(no rows)".to_string();
    }
    let mut out = TextTable::new();
    out.set_header(table.columns.iter());
    for row in &table.rows {
        out.add_row(row.iter().map(cell_text));
    }
    out.to_string()
}

/// Strings print bare, nulls print empty, everything else as JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
