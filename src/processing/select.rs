//! Selecting records out of a sequence.
//!
//! All selectors keep the input order and return clones of the kept elements; the input is
//! never modified. Every element of a record sequence must be a [`Value::Record`].

use regex::{Regex, RegexBuilder};

use crate::error::FilterResult;
use crate::path::{resolve, resolve_or_null};
use crate::types::{mismatch, Value};

/// Options for [`select_by_membership`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MembershipOptions {
    /// Keep records whose value is *not* in the accepted list.
    pub inverted: bool,
}

/// Options for [`select_by_pattern`] and [`filter_matches_in_list`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternOptions {
    /// Keep records that do *not* match.
    pub reverse: bool,
    /// Match case-insensitively.
    pub ignore_case: bool,
}

/// Keep records whose value at `key_path` is a member of `accepted`.
///
/// An absent key resolves to [`Value::Null`], so it is a member exactly when `accepted`
/// contains `null`. Numbers compare by value (`1` matches `1.0`).
pub fn select_by_membership(
    records: &[Value],
    key_path: &str,
    accepted: &[Value],
    options: MembershipOptions,
) -> FilterResult<Vec<Value>> {
    keep_records(records, |record| {
        let resolved = resolve_or_null(record, key_path);
        let member = accepted.iter().any(|candidate| candidate.loosely_equals(&resolved));
        member != options.inverted
    })
}

/// Keep records whose value at `key_path`, rendered as text, matches `pattern` at its start.
///
/// Absent and `null` values render as the empty string.
pub fn select_by_pattern(
    records: &[Value],
    key_path: &str,
    pattern: &str,
    options: PatternOptions,
) -> FilterResult<Vec<Value>> {
    let re = compile_anchored(pattern, options.ignore_case)?;
    keep_records(records, |record| {
        let text = resolve(record, key_path).map(Value::to_string).unwrap_or_default();
        re.is_match(&text) != options.reverse
    })
}

/// Keep records whose direct `key` equals `value`. Records without the key are dropped.
///
/// `key` is a literal key; dots are not traversed. Numbers compare by value (`1` matches `1.0`).
pub fn select_keyval(records: &[Value], key: &str, value: &Value) -> FilterResult<Vec<Value>> {
    keep_records(records, |record| {
        record
            .as_record()
            .and_then(|r| r.get(key))
            .is_some_and(|found| found.loosely_equals(value))
    })
}

/// Keep the strings in `items` that match `pattern` at their start.
pub fn filter_matches_in_list(
    items: &[Value],
    pattern: &str,
    options: PatternOptions,
) -> FilterResult<Vec<Value>> {
    let re = compile_anchored(pattern, options.ignore_case)?;
    let mut out = Vec::new();
    for item in items {
        if re.is_match(item.expect_str()?) != options.reverse {
            out.push(item.clone());
        }
    }
    Ok(out)
}

fn keep_records<F>(records: &[Value], mut predicate: F) -> FilterResult<Vec<Value>>
where
    F: FnMut(&Value) -> bool,
{
    let mut out = Vec::new();
    for item in records {
        if item.as_record().is_none() {
            return Err(mismatch("record", item));
        }
        if predicate(item) {
            out.push(item.clone());
        }
    }
    Ok(out)
}

fn compile_anchored(pattern: &str, ignore_case: bool) -> FilterResult<Regex> {
    Ok(RegexBuilder::new(&format!("^(?:{pattern})"))
        .case_insensitive(ignore_case)
        .build()?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        filter_matches_in_list, select_by_membership, select_by_pattern, select_keyval,
        MembershipOptions, PatternOptions,
    };
    use crate::error::FilterError;
    use crate::types::Value;

    fn seq(j: serde_json::Value) -> Vec<Value> {
        match Value::from(j) {
            Value::Sequence(s) => s,
            other => panic!("not a sequence: {other:?}"),
        }
    }

    fn hosts() -> Vec<Value> {
        seq(json!([
            {"name": "web1", "properties": {"type": "web", "zone": "a"}},
            {"name": "db1", "properties": {"type": "db"}},
            {"name": "web2", "properties": {"type": "web", "zone": "b"}},
            {"name": "bastion"},
        ]))
    }

    #[test]
    fn membership_selects_and_inverts() {
        let records = seq(json!([{"k": 1}, {"k": 2}, {"k": 3}]));
        let accepted = seq(json!([1, 3]));

        let kept = select_by_membership(&records, "k", &accepted, MembershipOptions::default()).unwrap();
        assert_eq!(kept, seq(json!([{"k": 1}, {"k": 3}])));

        let kept = select_by_membership(&records, "k", &accepted, MembershipOptions { inverted: true }).unwrap();
        assert_eq!(kept, seq(json!([{"k": 2}])));
    }

    #[test]
    fn membership_resolves_dotted_paths_and_treats_absent_as_null() {
        let records = hosts();
        let kept = select_by_membership(
            &records,
            "properties.zone",
            &seq(json!(["b", null])),
            MembershipOptions::default(),
        )
        .unwrap();
        let names: Vec<_> = kept.iter().map(|r| r.as_record().unwrap()["name"].clone()).collect();
        assert_eq!(names, vec![Value::from("db1"), Value::from("web2"), Value::from("bastion")]);
    }

    #[test]
    fn membership_compares_large_integers_exactly() {
        let records = seq(json!([{"k": 9007199254740993_i64}]));
        let kept = select_by_membership(
            &records,
            "k",
            &[Value::Float64(9007199254740992.0)],
            MembershipOptions::default(),
        )
        .unwrap();
        assert!(kept.is_empty());

        let kept = select_by_membership(
            &records,
            "k",
            &[Value::Int64(9007199254740993)],
            MembershipOptions::default(),
        )
        .unwrap();
        assert_eq!(kept, records);
    }

    #[test]
    fn membership_rejects_non_record_elements() {
        let err = select_by_membership(&seq(json!([{"k": 1}, 2])), "k", &[], MembershipOptions::default())
            .unwrap_err();
        assert!(matches!(err, FilterError::TypeMismatch { expected: "record", found: "int" }));
    }

    #[test]
    fn pattern_is_anchored_at_start() {
        let records = hosts();
        let kept = select_by_pattern(&records, "properties.type", "we", PatternOptions::default()).unwrap();
        assert_eq!(kept.len(), 2);

        let kept = select_by_pattern(&records, "properties.type", "eb", PatternOptions::default()).unwrap();
        assert!(kept.is_empty());
    }

    #[test]
    fn pattern_reverse_and_absent_as_empty_string() {
        let records = hosts();
        // Only the record without `properties` renders as "".
        let kept = select_by_pattern(&records, "properties.type", "$", PatternOptions::default()).unwrap();
        assert_eq!(kept, seq(json!([{"name": "bastion"}])));

        let kept = select_by_pattern(
            &records,
            "properties.type",
            "web",
            PatternOptions { reverse: true, ..Default::default() },
        )
        .unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn pattern_ignore_case_and_invalid_pattern() {
        let records = hosts();
        let kept = select_by_pattern(
            &records,
            "name",
            "WEB",
            PatternOptions { ignore_case: true, ..Default::default() },
        )
        .unwrap();
        assert_eq!(kept.len(), 2);

        let err = select_by_pattern(&records, "name", "(", PatternOptions::default()).unwrap_err();
        assert!(matches!(err, FilterError::InvalidPattern(_)));
    }

    #[test]
    fn keyval_uses_literal_key() {
        let records = seq(json!([
            {"role": "web", "n": 1},
            {"role": "db", "n": 2},
            {"n": 3},
            {"a.b": 1, "a": {"b": 2}},
        ]));
        assert_eq!(
            select_keyval(&records, "role", &Value::from("web")).unwrap(),
            seq(json!([{"role": "web", "n": 1}]))
        );
        assert_eq!(
            select_keyval(&records, "a.b", &Value::Int64(1)).unwrap(),
            seq(json!([{"a.b": 1, "a": {"b": 2}}]))
        );
        assert!(select_keyval(&records, "a.b", &Value::Int64(2)).unwrap().is_empty());
    }

    #[test]
    fn keyval_compares_numbers_by_value() {
        let records = seq(json!([{"n": 1.0}, {"n": 2}, {"n": "1"}]));
        assert_eq!(
            select_keyval(&records, "n", &Value::Int64(1)).unwrap(),
            seq(json!([{"n": 1.0}]))
        );
        assert_eq!(
            select_keyval(&records, "n", &Value::Float64(2.0)).unwrap(),
            seq(json!([{"n": 2}]))
        );
    }

    #[test]
    fn matches_in_list_filters_strings() {
        let items = seq(json!(["eth0", "eth1", "lo", "ETH2"]));
        assert_eq!(
            filter_matches_in_list(&items, r"eth\d", PatternOptions::default()).unwrap(),
            seq(json!(["eth0", "eth1"]))
        );
        assert_eq!(
            filter_matches_in_list(&items, "eth", PatternOptions { ignore_case: true, ..Default::default() })
                .unwrap()
                .len(),
            3
        );
        assert!(filter_matches_in_list(&seq(json!([1])), "1", PatternOptions::default()).is_err());
    }
}
