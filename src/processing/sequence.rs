//! Sequence and string utilities.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FilterResult;
use crate::types::{Record, Value};

static TRAILING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^.*[^0-9]([0-9]+)$").expect("Invalid regex pattern"));

/// Concatenate nested sequences one level deep.
///
/// Elements that are not sequences are kept as they are.
pub fn flatten(items: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Sequence(inner) => out.extend(inner.iter().cloned()),
            other => out.push(other.clone()),
        }
    }
    out
}

/// Prepend `prefix` to every string in `items`.
pub fn map_prefix(items: &[Value], prefix: &str) -> FilterResult<Vec<Value>> {
    map_strings(items, |s| format!("{prefix}{s}"))
}

/// Append `suffix` to every string in `items`.
pub fn map_suffix(items: &[Value], suffix: &str) -> FilterResult<Vec<Value>> {
    map_strings(items, |s| format!("{s}{suffix}"))
}

fn map_strings<F>(items: &[Value], f: F) -> FilterResult<Vec<Value>>
where
    F: Fn(&str) -> String,
{
    items
        .iter()
        .map(|item| item.expect_str().map(|s| Value::Utf8(f(s))))
        .collect()
}

/// Pair every element of `items` with an element of `over`, cycling `over` when it is shorter.
///
/// Returns no pairs when `over` is empty.
pub fn distribute_over(items: &[Value], over: &[Value]) -> Vec<(Value, Value)> {
    items
        .iter()
        .cloned()
        .zip(over.iter().cloned().cycle())
        .collect()
}

/// `base` followed by `items`.
pub fn list_merge(items: &[Value], base: &[Value]) -> Vec<Value> {
    base.iter().chain(items).cloned().collect()
}

/// The run of ASCII digits ending `text`, or `""`.
///
/// At least one non-digit must precede the run, so an all-digit string yields `""`.
pub fn trailing_digits(text: &str) -> &str {
    TRAILING_DIGITS
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Whether every element of `first` also appears in `second`.
pub fn is_subset(first: &[Value], second: &[Value]) -> bool {
    first
        .iter()
        .all(|a| second.iter().any(|b| a.loosely_equals(b)))
}

/// Render a tag record as `"key=value, key2=value2"` in key order.
pub fn tags_to_string(tags: &Record) -> String {
    tags.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{
        distribute_over, flatten, is_subset, list_merge, map_prefix, map_suffix, tags_to_string,
        trailing_digits,
    };
    use crate::error::FilterError;
    use crate::types::Value;

    fn seq(j: serde_json::Value) -> Vec<Value> {
        match Value::from(j) {
            Value::Sequence(s) => s,
            other => panic!("not a sequence: {other:?}"),
        }
    }

    #[test]
    fn flatten_one_level() {
        assert_eq!(flatten(&seq(json!([[1, 2], [3], []]))), seq(json!([1, 2, 3])));
        assert_eq!(flatten(&seq(json!([[1, [2]], "ab"]))), seq(json!([1, [2], "ab"])));
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn prefix_and_suffix_map_every_string() {
        let items = seq(json!(["a", "b"]));
        assert_eq!(map_prefix(&items, "x").unwrap(), seq(json!(["xa", "xb"])));
        assert_eq!(map_suffix(&items, ".conf").unwrap(), seq(json!(["a.conf", "b.conf"])));
        assert!(map_prefix(&[], "x").unwrap().is_empty());
    }

    #[test]
    fn prefix_rejects_non_string_elements() {
        let err = map_prefix(&seq(json!(["a", 1])), "x").unwrap_err();
        assert!(matches!(err, FilterError::TypeMismatch { expected: "string", found: "int" }));
    }

    #[test]
    fn distribute_over_cycles_shorter_list() {
        let pairs = distribute_over(&seq(json!([1, 2, 3, 4])), &seq(json!(["x", "y"])));
        assert_eq!(
            pairs,
            vec![
                (Value::Int64(1), Value::from("x")),
                (Value::Int64(2), Value::from("y")),
                (Value::Int64(3), Value::from("x")),
                (Value::Int64(4), Value::from("y")),
            ]
        );
        assert!(distribute_over(&seq(json!([1])), &[]).is_empty());
        assert_eq!(distribute_over(&seq(json!([1])), &seq(json!(["x", "y", "z"]))).len(), 1);
    }

    #[test]
    fn list_merge_prepends_base() {
        assert_eq!(
            list_merge(&seq(json!([3, 4])), &seq(json!([1, 2]))),
            seq(json!([1, 2, 3, 4]))
        );
    }

    #[rstest]
    #[case("server42", "42")]
    #[case("server", "")]
    #[case("web-01", "01")]
    #[case("a1b22", "22")]
    #[case("42", "")]
    #[case("", "")]
    #[case("x\n7", "7")]
    fn trailing_digits_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(trailing_digits(input), expected);
    }

    #[test]
    fn subset_compares_by_value() {
        assert!(is_subset(&seq(json!([1, "a"])), &seq(json!(["a", 1.0, 2]))));
        assert!(is_subset(&[], &seq(json!([1]))));
        assert!(!is_subset(&seq(json!([3])), &seq(json!([1, 2]))));
    }

    #[test]
    fn tags_render_in_key_order() {
        let tags = match Value::from(json!({"role": "web", "env": "prod", "tier": 2})) {
            Value::Record(r) => r,
            _ => unreachable!(),
        };
        assert_eq!(tags_to_string(&tags), "env=prod, role=web, tier=2");
        assert_eq!(tags_to_string(&Default::default()), "");
    }
}
