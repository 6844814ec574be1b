//! Table, Row, and Cell data structures

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::schema::Column;

/// A cell value with type information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Bool(a), CellValue::Bool(b)) => a == b,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (CellValue::String(a), CellValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl CellValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Convert to a display string
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed("NULL"),
            CellValue::Bool(b) => Cow::Owned(b.to_string()),
            CellValue::Int(i) => Cow::Owned(i.to_string()),
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::String(s) => Cow::Borrowed(s.as_ref()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(Cow::Owned(s.to_string()))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(Cow::Owned(s))
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// A row in the table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<CellValue>,
    /// Position of the source record in the input (1-indexed)
    pub source_index: usize,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<CellValue>, source_index: usize) -> Self {
        Self {
            cells,
            source_index,
        }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// A table containing columns and rows
#[derive(Debug)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// All rows in the table
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, cells: Vec<CellValue>, source_index: usize) {
        self.rows.push(Row::new(cells, source_index));
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get a cell by row index and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_values() {
        assert_eq!(CellValue::Null.display(), "NULL");
        assert_eq!(CellValue::Bool(true).display(), "true");
        assert_eq!(CellValue::Int(42).display(), "42");
        assert_eq!(CellValue::Float(3.5).display(), "3.5");
        assert_eq!(CellValue::String(Cow::Borrowed("hi")).display(), "hi");
    }

    #[test]
    fn test_nan_equality() {
        assert_eq!(CellValue::Float(f64::NAN), CellValue::Float(f64::NAN));
        assert_ne!(CellValue::Float(1.0), CellValue::Int(1));
    }

    #[test]
    fn test_untagged_serde_round_trip() {
        let cell: CellValue = serde_json::from_value(serde_json::json!(3)).unwrap();
        assert_eq!(cell, CellValue::Int(3));
        let cell: CellValue = serde_json::from_value(serde_json::json!("x")).unwrap();
        assert_eq!(cell, CellValue::String("x".into()));
        assert_eq!(
            serde_json::to_value(CellValue::Bool(true)).unwrap(),
            serde_json::json!(true)
        );
        assert_eq!(
            serde_json::to_value(CellValue::Null).unwrap(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_table_lookup() {
        let columns = vec![Column::new("a", 0), Column::new("b", 1)];
        let mut table = Table::new(columns);
        table.add_row(vec![CellValue::Int(1), CellValue::Null], 1);

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.get(0, "a"), Some(&CellValue::Int(1)));
        assert_eq!(table.get(0, "b"), Some(&CellValue::Null));
        assert_eq!(table.get(0, "missing"), None);
        assert!(table.get(0, "b").unwrap().is_null());
    }
}
