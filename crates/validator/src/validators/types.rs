//! Kind checks and membership.
//!
//! Kind checks look through set references, so `Some(5)` is an integer.
//! The unset reference is none of these kinds.

use crate::foundation::{Kind, Value};
use crate::invoke::Rest;

fn target(value: &Value) -> &Value {
    match value {
        Value::Nullable(Some(inner)) => target(inner),
        other => other,
    }
}

/// Signed or unsigned integer.
pub fn integer(value: Value) -> bool {
    target(&value).kind().is_integer()
}

/// Any numeric kind.
pub fn number(value: Value) -> bool {
    target(&value).kind().is_numeric()
}

/// Text.
pub fn string(value: Value) -> bool {
    target(&value).kind() == Kind::String
}

/// Any mapping shape.
pub fn mapping(value: Value) -> bool {
    target(&value).kind() == Kind::Mapping
}

/// A sequence.
pub fn array(value: Value) -> bool {
    target(&value).kind() == Kind::Sequence
}

/// Equality for membership tests: integers compare by value across
/// signedness, everything else representationally.
fn same(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(i), Value::Uint(u)) | (Value::Uint(u), Value::Int(i)) => {
            i128::from(*i) == i128::from(*u)
        }
        _ => a == b,
    }
}

/// The value is one of `options`.
///
/// A single sequence option is treated as the option list, so both
/// `enum(v, "a", "b")` and `enum(v, ["a", "b"])` work.
pub fn one_of(value: Value, options: Rest<Value>) -> bool {
    let options = match options.0.as_slice() {
        [Value::Seq(list)] => list.as_slice(),
        list => list,
    };
    let value = target(&value);
    options.iter().any(|option| same(value, option))
}
