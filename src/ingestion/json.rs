//! Loading filter inputs from JSON.
//!
//! Supported inputs:
//! - A single JSON document of any shape: `{"hosts": [...]}`, `[1, 2]`, `"text"`
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`, collected into a sequence

use std::fs;
use std::path::Path;

use crate::error::{FilterError, FilterResult};
use crate::types::Value;

/// Read a filter input [`Value`] from a JSON or NDJSON file.
pub fn read_value_from_path(path: impl AsRef<Path>) -> FilterResult<Value> {
    let text = fs::read_to_string(path)?;
    parse_value_from_str(&text)
}

/// Parse a filter input [`Value`] from JSON or NDJSON text.
pub fn parse_value_from_str(input: &str) -> FilterResult<Value> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FilterError::invalid_argument("json input is empty"));
    }

    // First try parsing as a single JSON document.
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return Ok(Value::from(v));
    }

    // Fall back to NDJSON.
    let mut values = Vec::new();
    for (i, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
            FilterError::invalid_argument(format!("invalid ndjson at line {}: {}", i + 1, e))
        })?;
        values.push(Value::from(v));
    }
    Ok(Value::Sequence(values))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::parse_value_from_str;
    use crate::error::FilterError;
    use crate::types::Value;

    #[test]
    fn parses_single_document() {
        let v = parse_value_from_str(r#"{"a": {"b": 5}}"#).unwrap();
        assert_eq!(v, Value::from(json!({"a": {"b": 5}})));
    }

    #[test]
    fn parses_ndjson_into_sequence() {
        let v = parse_value_from_str("{\"k\":1}\n\n{\"k\":2}\n").unwrap();
        assert_eq!(v, Value::from(json!([{"k": 1}, {"k": 2}])));
    }

    #[test]
    fn reports_empty_and_malformed_input() {
        assert!(matches!(parse_value_from_str("  \n"), Err(FilterError::InvalidArgument { .. })));
        let err = parse_value_from_str("{\"k\":1}\n{oops").unwrap_err();
        assert!(err.to_string().contains("invalid ndjson at line 2"));
    }
}
