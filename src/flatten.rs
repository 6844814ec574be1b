//! Record flattening into compound-keyed rows

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::normalize::normalize;

/// A single flattened record: compound column name to value
pub type FlatRow = IndexMap<String, Value>;

/// Flatten a record into a single-level row.
///
/// Nested mappings contribute their keys joined onto the parent key with
/// `separator`. A sequence of strings and numbers collapses into one
/// `", "`-joined string. A sequence carrying mappings merges each
/// mapping's keys under `key.subkey`, joining values as strings when the
/// same subkey repeats; its non-mapping elements contribute nothing. A
/// sequence with no mapping elements at all is stored verbatim.
pub fn flatten(record: &Map<String, Value>, prefix: &str, separator: char) -> FlatRow {
    let mut out = FlatRow::new();
    for (key, value) in record {
        let new_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{separator}{key}")
        };

        match normalize(value) {
            Value::Array(items) => flatten_sequence(items, new_key, separator, &mut out),
            Value::Object(nested) => {
                // Later keys overwrite on collision, no merge at this level.
                for (sub_key, sub_value) in flatten(&nested, &new_key, separator) {
                    out.insert(sub_key, sub_value);
                }
            }
            scalar => {
                out.insert(new_key, scalar);
            }
        }
    }
    out
}

/// Apply the sequence disambiguation policy for one key.
fn flatten_sequence(items: Vec<Value>, new_key: String, separator: char, out: &mut FlatRow) {
    if !items.is_empty() && items.iter().all(is_joinable) {
        let joined = items.iter().map(stringify).collect::<Vec<_>>().join(", ");
        out.insert(new_key, Value::String(joined));
        return;
    }

    let mut saw_mapping = false;
    for item in &items {
        let Value::Object(element) = item else {
            // Skipped outright; only a sequence with no mappings at all
            // survives verbatim below.
            continue;
        };
        saw_mapping = true;
        for (sub_key, sub_value) in element {
            let sub_new_key = format!("{new_key}{separator}{sub_key}");
            match out.entry(sub_new_key) {
                Entry::Occupied(mut entry) => {
                    // The accumulated value is re-stringified on every
                    // repeat, not appended to a list.
                    let merged = format!("{}, {}", stringify(entry.get()), stringify(sub_value));
                    entry.insert(Value::String(merged));
                }
                Entry::Vacant(entry) => {
                    entry.insert(sub_value.clone());
                }
            }
        }
    }

    if !saw_mapping {
        out.insert(new_key, Value::Array(items));
    }
}

fn is_joinable(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_))
}

/// String form used for joined sequences and repeated-subkey merges:
/// strings verbatim, everything else as compact JSON text.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
