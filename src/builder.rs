//! Table assembly from JSON records

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::ConvertError;
use crate::flatten::{flatten, FlatRow};
use crate::model::{CellValue, Column, Table};

/// Conversion input: a JSON document on disk or an in-memory value
#[derive(Debug, Clone)]
pub enum Input {
    /// Path to a file containing a single JSON array of records
    Path(PathBuf),
    /// In-memory JSON value, expected to be an array of records
    Value(Value),
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::Path(path)
    }
}

impl From<&Path> for Input {
    fn from(path: &Path) -> Self {
        Input::Path(path.to_path_buf())
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Value(value)
    }
}

impl From<Vec<Map<String, Value>>> for Input {
    fn from(records: Vec<Map<String, Value>>) -> Self {
        Input::Value(Value::Array(records.into_iter().map(Value::Object).collect()))
    }
}

/// Builds a [`Table`] by flattening every record of the input
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    config: Config,
}

impl TableBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with an explicit configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Convert the input into a table with one row per record.
    ///
    /// Columns are the union of all flattened keys across records, in
    /// first-appearance order; cells absent from a record are filled with
    /// [`CellValue::Null`]. Fails fast on the first malformed input; no
    /// partial results.
    pub fn convert(&self, input: impl Into<Input>) -> Result<Table, ConvertError> {
        let records = resolve_records(input.into())?;

        let flat_rows: Vec<FlatRow> = records
            .iter()
            .map(|record| flatten(record, "", self.config.separator))
            .collect();

        Ok(assemble(&flat_rows))
    }
}

/// Resolve the input into its record list, validating shape
fn resolve_records(input: Input) -> Result<Vec<Map<String, Value>>, ConvertError> {
    let value = match input {
        Input::Path(path) => {
            if !path.exists() {
                return Err(ConvertError::NotFound { path });
            }
            let file = File::open(&path)?;
            serde_json::from_reader(BufReader::new(file))?
        }
        Input::Value(value) => value,
    };

    let Value::Array(items) = value else {
        return Err(ConvertError::InvalidInput(
            "input must be a JSON array of records".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(ConvertError::InvalidInput(format!(
                "record {} is {}, expected an object",
                i + 1,
                type_name(&other)
            ))),
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Union all row keys into columns and fill absent cells with null
fn assemble(rows: &[FlatRow]) -> Table {
    let mut column_names: IndexSet<String> = IndexSet::new();
    for row in rows {
        for key in row.keys() {
            column_names.insert(key.clone());
        }
    }

    let columns: Vec<Column> = column_names
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.clone(), i))
        .collect();

    let mut table = Table::new(columns);
    for (record_num, row) in rows.iter().enumerate() {
        let cells = column_names
            .iter()
            .map(|key| value_to_cell(row.get(key)))
            .collect();
        table.add_row(cells, record_num + 1);
    }

    table
}

/// Convert a flattened value into a cell; absent values become null
fn value_to_cell(value: Option<&Value>) -> CellValue {
    match value {
        None | Some(Value::Null) => CellValue::Null,
        Some(Value::Bool(b)) => CellValue::Bool(*b),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                CellValue::Int(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(Cow::Owned(n.to_string()))
            }
        }
        Some(Value::String(s)) => CellValue::String(Cow::Owned(s.clone())),
        Some(Value::Array(arr)) => {
            // Sequences kept verbatim by the flattener are serialized
            // back to JSON text
            CellValue::String(Cow::Owned(serde_json::to_string(arr).unwrap_or_default()))
        }
        Some(Value::Object(obj)) => {
            CellValue::String(Cow::Owned(serde_json::to_string(obj).unwrap_or_default()))
        }
    }
}
