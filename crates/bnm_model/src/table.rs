use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Row/column view of an API payload.
///
/// Cells keep their JSON type; a column a row does not carry is `null`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("cannot tabulate {0}: expected an object or an array of objects")]
    NotTabular(&'static str),
}

impl Table {
    /// Builds a table out of a BNM response body.
    ///
    /// Bodies come wrapped as `{"data": ..., "meta": ...}`; only `data` is
    /// tabulated. A body with no `data` key is taken to be the data itself.
    /// Nested objects are flattened into dotted column names, nested arrays
    /// stay whole as JSON cells.
    pub fn from_envelope(body: &Value) -> Result<Table, ConversionError> {
        let data = match body {
            Value::Object(map) => map.get("data").unwrap_or(body),
            _ => body,
        };

        let records: Vec<&Map<String, Value>> = match data {
            Value::Object(map) => vec![map],
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Object(map) => Ok(map),
                    _ => Err(ConversionError::NotTabular("array of scalars")),
                })
                .collect::<Result<_, _>>()?,
            Value::Null => return Err(ConversionError::NotTabular("null")),
            _ => return Err(ConversionError::NotTabular("scalar value")),
        };

        let mut columns: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut flat_rows = Vec::with_capacity(records.len());

        for record in records {
            let mut cells = Vec::new();
            flatten("", record, &mut cells);
            disambiguate(&mut cells);
            for (name, _) in &cells {
                if !index.contains_key(name) {
                    index.insert(name.clone(), columns.len());
                    columns.push(name.clone());
                }
            }
            flat_rows.push(cells);
        }

        let rows = flat_rows
            .into_iter()
            .map(|cells| {
                let mut row = vec![Value::Null; columns.len()];
                for (name, value) in cells {
                    row[index[&name]] = value;
                }
                row
            })
            .collect();

        Ok(Table { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` under column `name`.
    pub fn get(&self, row: usize, name: &str) -> Option<&Value> {
        let col = self.column(name)?;
        self.rows.get(row)?.get(col)
    }
}

fn flatten(prefix: &str, map: &Map<String, Value>, out: &mut Vec<(String, Value)>) {
    for (key, value) in map {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(inner) if !inner.is_empty() => flatten(&name, inner, out),
            other => out.push((name, other.clone())),
        }
    }
}

/// A literal dotted key can spell the same name as a nested one; later
/// repeats get a `[n]` suffix instead of overwriting the first.
fn disambiguate(cells: &mut [(String, Value)]) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (name, _) in cells.iter_mut() {
        let count = seen.entry(name.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            *name = format!("{}[{}]", name, count);
        }
    }
}
