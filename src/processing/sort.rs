//! Sorting records by a resolved key.

use crate::error::FilterResult;
use crate::path::resolve;
use crate::types::{mismatch, Value};

/// Returns a copy of `records` sorted ascending by the value at `key_path`.
///
/// Ordering follows [`Value::total_cmp`]. Records where the key is absent sort as
/// [`Value::Null`]: tied with explicit nulls, ahead of everything else. The sort is stable.
pub fn sort_by_key(records: &[Value], key_path: &str) -> FilterResult<Vec<Value>> {
    if let Some(bad) = records.iter().find(|r| r.as_record().is_none()) {
        return Err(mismatch("record", bad));
    }

    let null = Value::Null;
    let mut out = records.to_vec();
    out.sort_by(|a, b| {
        let a = resolve(a, key_path).unwrap_or(&null);
        let b = resolve(b, key_path).unwrap_or(&null);
        a.total_cmp(b)
    });
    Ok(out)
}
