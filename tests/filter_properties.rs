use rust_data_filters::path::resolve;
use rust_data_filters::processing::{
    dict_merge, dict_nonoverwriting_merge, distribute_over, flatten, map_prefix,
    select_by_membership, trailing_digits, MembershipOptions,
};
use rust_data_filters::{FilterError, Record, Value};
use serde_json::json;

fn record(j: serde_json::Value) -> Record {
    match Value::from(j) {
        Value::Record(r) => r,
        other => panic!("not a record: {other:?}"),
    }
}

fn seq(j: serde_json::Value) -> Vec<Value> {
    match Value::from(j) {
        Value::Sequence(s) => s,
        other => panic!("not a sequence: {other:?}"),
    }
}

#[test]
fn merge_with_nothing_is_identity() {
    let a = record(json!({"x": 1, "nested": {"y": [1, 2]}}));
    let none: Vec<&Record> = Vec::new();
    assert_eq!(dict_merge(&a, none), a);
}

#[test]
fn disjoint_merges_equal_key_union() {
    let a = record(json!({"x": 1}));
    let b = record(json!({"y": {"z": 2}}));
    let union = record(json!({"x": 1, "y": {"z": 2}}));

    assert_eq!(dict_merge(&a, [&b]), union);
    assert_eq!(dict_nonoverwriting_merge(&a, [&b]).unwrap(), union);
}

#[test]
fn shared_key_conflicts() {
    let a = record(json!({"x": 1, "y": 2}));
    let b = record(json!({"y": 3}));
    let err = dict_nonoverwriting_merge(&a, [&b]).unwrap_err();
    assert!(matches!(err, FilterError::KeyConflict { ref keys } if keys == &["y"]));
    assert!(err.to_string().contains("keys conflict"));
}

#[test]
fn resolve_examples() {
    assert_eq!(resolve(&Value::from(json!({"a": {"b": 5}})), "a.b"), Some(&Value::Int64(5)));
    assert_eq!(resolve(&Value::from(json!({"a": 1})), "a.b"), None);
    assert_eq!(
        resolve(&Value::from(json!({"a.b": 9, "a": {"b": 5}})), "a.b"),
        Some(&Value::Int64(9))
    );
}

#[test]
fn membership_examples() {
    let records = seq(json!([{"k": 1}, {"k": 2}, {"k": 3}]));
    let accepted = seq(json!([1, 3]));
    assert_eq!(
        select_by_membership(&records, "k", &accepted, MembershipOptions::default()).unwrap(),
        seq(json!([{"k": 1}, {"k": 3}]))
    );
    assert_eq!(
        select_by_membership(&records, "k", &accepted, MembershipOptions { inverted: true }).unwrap(),
        seq(json!([{"k": 2}]))
    );
}

#[test]
fn sequence_examples() {
    assert_eq!(flatten(&seq(json!([[1, 2], [3], []]))), seq(json!([1, 2, 3])));
    assert_eq!(map_prefix(&seq(json!(["a", "b"])), "x").unwrap(), seq(json!(["xa", "xb"])));

    let pairs = distribute_over(&seq(json!([1, 2, 3, 4])), &seq(json!(["x", "y"])));
    let expected: Vec<(Value, Value)> = [(1, "x"), (2, "y"), (3, "x"), (4, "y")]
        .into_iter()
        .map(|(a, b)| (Value::Int64(a), Value::from(b)))
        .collect();
    assert_eq!(pairs, expected);

    assert_eq!(trailing_digits("server42"), "42");
    assert_eq!(trailing_digits("server"), "");
}
