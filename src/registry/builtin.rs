//! Adapters from registry calls to the typed operations in [`crate::processing`].
//!
//! Each adapter checks the shapes of its input and arguments, then delegates.

use crate::error::{FilterError, FilterResult};
use crate::processing::{
    distribute_over, filter_matches_in_list, flatten, ip_offset, is_subset, list_merge, map_prefix,
    map_suffix, merge_values, nonoverwriting_merge_values, select_by_membership, select_by_pattern,
    select_keyval, sort_by_key, tags_to_string, trailing_digits, MembershipOptions, PatternOptions,
};
use crate::types::{mismatch, Value};

use super::{FilterArgs, FilterFn};

/// Every built-in filter, under its registered name.
pub(super) const BUILTIN_FILTERS: &[(&str, FilterFn)] = &[
    ("dict_merge", dict_merge),
    ("dict_nonoverwriting_merge", dict_nonoverwriting_merge),
    ("select_dicts_for_key_with_value_in_list", select_in_list),
    ("select_dicts_for_key_with_value_not_in_list", select_not_in_list),
    ("select_dicts_for_key_matching", select_matching),
    ("select_keyval", select_keyval_filter),
    ("filter_matches_in_list", filter_matches),
    ("sort_dicts_by_key", sort_dicts_by_key),
    ("flatten_list", flatten_list),
    ("map_prefix", map_prefix_filter),
    ("map_suffix", map_suffix_filter),
    ("distribute_over", distribute_over_filter),
    ("list_merge", list_merge_filter),
    ("get_ending_digits", get_ending_digits),
    ("is_subset", is_subset_filter),
    ("tags_dict_to_string", tags_dict_to_string),
    ("ip_offset", ip_offset_filter),
];

fn dict_merge(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    merge_values(input, &args.positional)
}

fn dict_nonoverwriting_merge(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    nonoverwriting_merge_values(input, &args.positional)
}

fn select_in_list(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    select_membership(
        "select_dicts_for_key_with_value_in_list",
        input,
        args,
        args.flag("inverted"),
    )
}

fn select_not_in_list(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    select_membership("select_dicts_for_key_with_value_not_in_list", input, args, true)
}

fn select_membership(
    filter: &'static str,
    input: &Value,
    args: &FilterArgs,
    inverted: bool,
) -> FilterResult<Value> {
    let Some(records) = sequence_or_empty(input)? else {
        return Ok(Value::Sequence(Vec::new()));
    };
    let key = required_str(filter, args, 0, "the key")?;
    let accepted = required_sequence(filter, args, 1, "the list of values to match")?;
    select_by_membership(records, key, accepted, MembershipOptions { inverted }).map(Value::Sequence)
}

fn select_matching(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    const NAME: &str = "select_dicts_for_key_matching";
    let Some(records) = sequence_or_empty(input)? else {
        return Ok(Value::Sequence(Vec::new()));
    };
    let key = required_str(NAME, args, 0, "the key")?;
    let pattern = required_str(NAME, args, 1, "the pattern")?;
    let options = PatternOptions {
        reverse: args.flag("reverse"),
        ignore_case: args.flag("ignorecase"),
    };
    select_by_pattern(records, key, pattern, options).map(Value::Sequence)
}

fn select_keyval_filter(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    const NAME: &str = "select_keyval";
    let Some(records) = sequence_or_empty(input)? else {
        return Ok(input.clone());
    };
    let key = match args.keyword("key").or_else(|| args.arg(0)) {
        Some(Value::Utf8(key)) => key.as_str(),
        _ => return Err(FilterError::missing_argument(NAME, "a string 'key' is required")),
    };
    let value = args
        .keyword("value")
        .or_else(|| args.arg(1))
        .ok_or_else(|| FilterError::missing_argument(NAME, "a 'value' is required"))?;
    select_keyval(records, key, value).map(Value::Sequence)
}

fn filter_matches(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    let items = input.expect_sequence()?;
    let pattern = match args.keyword("pattern").or_else(|| args.arg(0)) {
        Some(Value::Utf8(p)) => p.as_str(),
        None => "",
        Some(other) => return Err(mismatch("string", other)),
    };
    let options = PatternOptions {
        reverse: false,
        ignore_case: args.flag("ignorecase"),
    };
    filter_matches_in_list(items, pattern, options).map(Value::Sequence)
}

fn sort_dicts_by_key(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    let records = input.expect_sequence()?;
    let key = required_str("sort_dicts_by_key", args, 0, "the key")?;
    sort_by_key(records, key).map(Value::Sequence)
}

fn flatten_list(input: &Value, _args: &FilterArgs) -> FilterResult<Value> {
    match sequence_or_empty(input)? {
        Some(items) => Ok(Value::Sequence(flatten(items))),
        None => Ok(input.clone()),
    }
}

fn map_prefix_filter(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    let prefix = required_str("map_prefix", args, 0, "a string prefix")?;
    map_prefix(input.expect_sequence()?, prefix).map(Value::Sequence)
}

fn map_suffix_filter(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    let suffix = required_str("map_suffix", args, 0, "a string suffix")?;
    map_suffix(input.expect_sequence()?, suffix).map(Value::Sequence)
}

fn distribute_over_filter(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    let over = required_sequence("distribute_over", args, 0, "a list of items to iterate over")?;
    let items = input.expect_sequence()?;
    let pairs = distribute_over(items, over)
        .into_iter()
        .map(|(a, b)| Value::Sequence(vec![a, b]))
        .collect();
    Ok(Value::Sequence(pairs))
}

fn list_merge_filter(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    let base = required_sequence("list_merge", args, 0, "the base list")?;
    let items = sequence_or_empty(input)?.unwrap_or_default();
    Ok(Value::Sequence(list_merge(items, base)))
}

fn get_ending_digits(input: &Value, _args: &FilterArgs) -> FilterResult<Value> {
    if input.is_null() {
        return Ok(Value::from(""));
    }
    Ok(Value::from(trailing_digits(input.expect_str()?)))
}

fn is_subset_filter(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    let subset = match (input.as_sequence(), args.arg(0).and_then(Value::as_sequence)) {
        (Some(first), Some(second)) => is_subset(first, second),
        _ => false,
    };
    Ok(Value::Bool(subset))
}

fn tags_dict_to_string(input: &Value, _args: &FilterArgs) -> FilterResult<Value> {
    if input.is_null() {
        return Ok(Value::Null);
    }
    Ok(Value::Utf8(tags_to_string(input.expect_record()?)))
}

fn ip_offset_filter(input: &Value, args: &FilterArgs) -> FilterResult<Value> {
    let Some(offset) = args.arg(0) else {
        return Ok(input.clone());
    };
    let offset = integral_offset(offset)
        .ok_or_else(|| FilterError::missing_argument("ip_offset", "specified offset isn't numeric"))?;
    ip_offset(input.expect_str()?, offset).map(Value::Utf8)
}

fn integral_offset(v: &Value) -> Option<i64> {
    match v {
        Value::Int64(n) => Some(*n),
        Value::Float64(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Some(*f as i64),
        Value::Utf8(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `Ok(None)` for a `null` input, the sequence for a sequence, otherwise a type mismatch.
fn sequence_or_empty(input: &Value) -> FilterResult<Option<&[Value]>> {
    match input {
        Value::Null => Ok(None),
        other => other.expect_sequence().map(Some),
    }
}

fn required_str<'a>(
    filter: &'static str,
    args: &'a FilterArgs,
    index: usize,
    what: &str,
) -> FilterResult<&'a str> {
    match args.arg(index) {
        Some(Value::Utf8(s)) => Ok(s.as_str()),
        Some(other) => Err(FilterError::missing_argument(
            filter,
            format!("expected {what} as a string, found {}", other.type_name()),
        )),
        None => Err(FilterError::missing_argument(filter, format!("expected {what}"))),
    }
}

fn required_sequence<'a>(
    filter: &'static str,
    args: &'a FilterArgs,
    index: usize,
    what: &str,
) -> FilterResult<&'a [Value]> {
    match args.arg(index) {
        Some(v) => v.expect_sequence(),
        None => Err(FilterError::missing_argument(filter, format!("expected {what}"))),
    }
}
