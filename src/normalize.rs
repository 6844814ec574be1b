//! Carriage-return normalization for JSON value trees

use serde_json::{Map, Value};

/// Recursively rewrite carriage returns in strings to newlines.
///
/// Strings are rewritten one character for one; mappings and sequences are
/// rebuilt with every element normalized, order preserved. All other
/// values are returned unchanged.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.replace('\r', "\n")),
        Value::Object(map) => {
            let normalized: Map<String, Value> = map
                .iter()
                .map(|(key, value)| (key.clone(), normalize(value)))
                .collect();
            Value::Object(normalized)
        }
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_replaces_carriage_returns() {
        assert_eq!(
            normalize(&json!("line one\rline two")),
            json!("line one\nline two")
        );
    }

    #[test]
    fn test_replacement_preserves_length() {
        let input = "a\r\rb\r";
        let normalized = normalize(&json!(input));
        let Value::String(s) = normalized else {
            panic!("expected a string");
        };
        assert_eq!(s.len(), input.len());
        assert!(!s.contains('\r'));
    }

    #[test]
    fn test_walks_nested_structure() {
        let input = json!({
            "note": "a\rb",
            "nested": { "lines": ["x\r", "y"] },
            "count": 3
        });
        let expected = json!({
            "note": "a\nb",
            "nested": { "lines": ["x\n", "y"] },
            "count": 3
        });
        assert_eq!(normalize(&input), expected);
    }

    #[test]
    fn test_leaves_non_strings_untouched() {
        for value in [json!(1), json!(2.5), json!(true), json!(null)] {
            assert_eq!(normalize(&value), value);
        }
    }

    #[test]
    fn test_idempotent() {
        let input = json!({ "a": "x\ry", "b": ["\r", { "c": "z\r" }] });
        let once = normalize(&input);
        assert_eq!(normalize(&once), once);
    }
}
