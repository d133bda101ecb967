//! Core data model for filter inputs and outputs.
//!
//! Filters operate on a small dynamic value tree: scalars, [`Sequence`]s and [`Record`]s.
//! Shapes are checked structurally at each filter boundary and reported as
//! [`crate::FilterError::TypeMismatch`].

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

/// A string-keyed mapping with unique keys (a "dictionary").
pub type Record = BTreeMap<String, Value>;

/// An ordered list of values.
pub type Sequence = Vec<Value>;

/// A single value flowing through a filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    /// Missing/empty value. Also the position absent keys take when sorting or comparing.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// Ordered list of values.
    Sequence(Sequence),
    /// String-keyed mapping.
    Record(Record),
}

impl Value {
    /// Short name of the value's shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int64(_) => "int",
            Value::Float64(_) => "float",
            Value::Utf8(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Record(_) => "record",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the record, or a [`FilterError::TypeMismatch`].
    pub fn expect_record(&self) -> FilterResult<&Record> {
        self.as_record().ok_or_else(|| mismatch("record", self))
    }

    /// Returns the sequence, or a [`FilterError::TypeMismatch`].
    pub fn expect_sequence(&self) -> FilterResult<&[Value]> {
        self.as_sequence().ok_or_else(|| mismatch("sequence", self))
    }

    /// Returns the string, or a [`FilterError::TypeMismatch`].
    pub fn expect_str(&self) -> FilterResult<&str> {
        self.as_str().ok_or_else(|| mismatch("string", self))
    }

    /// Total order over values.
    ///
    /// Shapes rank `Null < Bool < numbers < Utf8 < Sequence < Record`. Integers and floats
    /// compare numerically with each other; sequences compare element-wise; records compare
    /// by their key-ordered entries.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Float64(a), Value::Float64(b)) => a.total_cmp(b),
            (Value::Int64(a), Value::Float64(b)) => cmp_int_float(*a, *b),
            (Value::Float64(a), Value::Int64(b)) => cmp_int_float(*b, *a).reverse(),
            (Value::Utf8(a), Value::Utf8(b)) => a.cmp(b),
            (Value::Sequence(a), Value::Sequence(b)) => cmp_iter(a.iter(), b.iter()),
            (Value::Record(a), Value::Record(b)) => {
                let mut lhs = a.iter();
                let mut rhs = b.iter();
                loop {
                    match (lhs.next(), rhs.next()) {
                        (None, None) => return Ordering::Equal,
                        (None, Some(_)) => return Ordering::Less,
                        (Some(_), None) => return Ordering::Greater,
                        (Some((ka, va)), Some((kb, vb))) => {
                            let ord = ka.cmp(kb).then_with(|| va.total_cmp(vb));
                            if ord != Ordering::Equal {
                                return ord;
                            }
                        }
                    }
                }
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Equality used for membership tests: numbers compare by value across int/float.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        self.total_cmp(other) == Ordering::Equal
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int64(_) | Value::Float64(_) => 2,
            Value::Utf8(_) => 3,
            Value::Sequence(_) => 4,
            Value::Record(_) => 5,
        }
    }
}

/// Exact comparison of an integer with a float; no rounding of `int` through `f64`.
///
/// NaN is placed as `f64::total_cmp` places it: negative NaN below everything, positive above.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, exactly representable.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= LIMIT {
        return Ordering::Less;
    }
    if float < -LIMIT {
        return Ordering::Greater;
    }

    let floor = float.floor();
    int.cmp(&(floor as i64)).then(if float > floor {
        Ordering::Less
    } else {
        Ordering::Equal
    })
}

fn cmp_iter<'a>(
    mut lhs: impl Iterator<Item = &'a Value>,
    mut rhs: impl Iterator<Item = &'a Value>,
) -> Ordering {
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a), Some(b)) => {
                let ord = a.total_cmp(b);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

pub(crate) fn mismatch(expected: &'static str, found: &Value) -> FilterError {
    FilterError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

/// Renders the value as text: strings bare, `null` empty, containers as JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int64(n) => write!(f, "{n}"),
            Value::Float64(n) => write!(f, "{n}"),
            Value::Utf8(s) => f.write_str(s),
            Value::Sequence(_) | Value::Record(_) => {
                write!(f, "{}", serde_json::Value::from(self.clone()))
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int64(i),
                None => n.as_f64().map(Value::Float64).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::Utf8(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Record(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int64(n) => serde_json::Value::from(n),
            // Non-finite floats have no JSON form.
            Value::Float64(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Utf8(s) => serde_json::Value::String(s),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Record(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

impl From<Sequence> for Value {
    fn from(v: Sequence) -> Self {
        Value::Sequence(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}
