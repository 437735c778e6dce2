//! Value introspection: emptiness, length and integer coercion.
//!
//! These are total functions. Kinds without a length or integer meaning
//! answer "undetermined" (`None`, or [`UNDETERMINED_LENGTH`] where an
//! integer is required) instead of failing.
//!
//! Integer "length" is the number of characters of the decimal text, sign
//! included: `1000` has length 4 and `-7` has length 2. Size rules on
//! integers depend on this.

use crate::foundation::value::Value;

/// Length reported for kinds that have none. Distinct from a zero length.
pub const UNDETERMINED_LENGTH: i64 = -1;

/// Returns true if the value is empty for its kind.
///
/// | kind                  | empty when                       |
/// |-----------------------|----------------------------------|
/// | string                | no bytes                         |
/// | sequence, mapping     | no elements                      |
/// | bool                  | `false`                          |
/// | any numeric kind      | equal to zero                    |
/// | nullable              | unset                            |
/// | other                 | equal to its type's zero value   |
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Seq(items) => items.is_empty(),
        Value::Map(map) => map.is_empty(),
        Value::Bool(b) => !b,
        Value::Int(i) => *i == 0,
        Value::Uint(u) => *u == 0,
        Value::Float(f) => *f == 0.0,
        Value::Nullable(inner) => inner.is_none(),
        Value::Other(opaque) => opaque.is_zero(),
    }
}

/// Returns the length of a value, or `None` when its kind has no length.
///
/// Strings count bytes, sequences and mappings count elements, and
/// integers count the characters of their decimal text. Character counts
/// are left to the `stringLength` rule.
pub fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.len()),
        Value::Seq(items) => Some(items.len()),
        Value::Map(map) => Some(map.len()),
        Value::Int(i) => Some(usize::from(*i < 0) + decimal_digits(i.unsigned_abs())),
        Value::Uint(u) => Some(decimal_digits(*u)),
        _ => None,
    }
}

/// [`length`] with [`UNDETERMINED_LENGTH`] in place of `None`.
pub fn length_or_undetermined(value: &Value) -> i64 {
    length(value).map_or(UNDETERMINED_LENGTH, |n| n as i64)
}

/// Returns the integer magnitude of a numeric value.
///
/// Floats truncate toward zero. Unsigned values above `i64::MAX` wrap.
pub fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Uint(u) => Some(*u as i64),
        Value::Float(f) => Some(*f as i64),
        _ => None,
    }
}

/// Element count for containers and strings, the value itself for numbers.
///
/// This lets one bound rule express either "how many" or "how large".
/// Every other kind yields 0.
pub fn length_or_integer(value: &Value) -> i64 {
    match value {
        Value::String(_) | Value::Seq(_) | Value::Map(_) => length_or_undetermined(value),
        _ => integer_value(value).unwrap_or(0),
    }
}

fn decimal_digits(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
