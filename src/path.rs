//! Dotted key-path resolution.
//!
//! A key path is either a direct key (`"name"`) or a dot-separated chain of nested keys
//! (`"properties.type"`). Resolution never fails: a missing segment, or an intermediate value
//! that is not a [`Value::Record`], yields `None`.

use crate::types::Value;

/// Resolve `path` against `value`.
///
/// - If `value` is not a record, returns `None`.
/// - A literal key equal to `path` wins over dotted traversal, even when it contains `.`.
/// - Otherwise each `.`-separated segment descends one record level.
///
/// ```rust
/// use rust_data_filters::path::resolve;
/// use rust_data_filters::Value;
///
/// let host = Value::from(serde_json::json!({"name": "rserv1", "properties": {"type": "rserver"}}));
/// assert_eq!(resolve(&host, "properties.type"), Some(&Value::from("rserver")));
/// assert_eq!(resolve(&host, "properties.size"), None);
/// ```
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let root = value.as_record()?;

    if let Some(direct) = root.get(path) {
        return Some(direct);
    }
    if !path.contains('.') {
        return None;
    }

    path.split('.').try_fold(value, |current, segment| match current {
        Value::Record(map) => map.get(segment),
        _ => None,
    })
}

/// Like [`resolve`], but maps absence to [`Value::Null`].
///
/// This is the position an absent key takes in membership tests and ordering.
pub fn resolve_or_null(value: &Value, path: &str) -> Value {
    resolve(value, path).cloned().unwrap_or(Value::Null)
}
