//! Record merging.

use crate::error::{FilterError, FilterResult};
use crate::types::{Record, Value};

/// Merge `others` into a copy of `base`; later records overwrite earlier keys.
///
/// With no `others`, returns a copy of `base`.
pub fn dict_merge<'a, I>(base: &Record, others: I) -> Record
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut result = base.clone();
    for item in others {
        result.extend(item.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    result
}

/// Merge `others` into a copy of `base`, refusing to overwrite.
///
/// Fails with [`FilterError::KeyConflict`] listing every key of the first offending record that
/// already exists in the accumulated result.
pub fn dict_nonoverwriting_merge<'a, I>(base: &Record, others: I) -> FilterResult<Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut result = base.clone();
    for item in others {
        let colliding: Vec<String> = item
            .keys()
            .filter(|k| result.contains_key(*k))
            .cloned()
            .collect();
        if !colliding.is_empty() {
            return Err(FilterError::KeyConflict { keys: colliding });
        }
        result.extend(item.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    Ok(result)
}

/// [`dict_merge`] over dynamic values; every input must be a record.
pub fn merge_values(base: &Value, others: &[Value]) -> FilterResult<Value> {
    let (base, others) = records(base, others)?;
    Ok(Value::Record(dict_merge(base, others)))
}

/// [`dict_nonoverwriting_merge`] over dynamic values; every input must be a record.
pub fn nonoverwriting_merge_values(base: &Value, others: &[Value]) -> FilterResult<Value> {
    let (base, others) = records(base, others)?;
    dict_nonoverwriting_merge(base, others).map(Value::Record)
}

fn records<'a>(base: &'a Value, others: &'a [Value]) -> FilterResult<(&'a Record, Vec<&'a Record>)> {
    let base = base.expect_record()?;
    let others = others
        .iter()
        .map(Value::expect_record)
        .collect::<FilterResult<Vec<_>>>()?;
    Ok((base, others))
}
