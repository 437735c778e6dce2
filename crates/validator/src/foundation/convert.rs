//! Conversions from Rust values into [`Value`].

use indexmap::IndexMap;

use crate::foundation::mapping::{KeyedMap, Mapping, Object, StringMap};
use crate::foundation::value::Value;

macro_rules! from_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn from(v: $t) -> Self {
                    Value::Int(v as i64)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn from(v: $t) -> Self {
                    Value::Uint(v as u64)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    #[inline]
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Value::Nullable(v.map(|inner| Box::new(inner.into())))
    }
}

impl From<Mapping> for Value {
    fn from(v: Mapping) -> Self {
        Value::Map(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Value::Map(Mapping::Object(v))
    }
}

impl From<StringMap> for Value {
    fn from(v: StringMap) -> Self {
        Value::Map(Mapping::Strings(v))
    }
}

impl From<KeyedMap> for Value {
    fn from(v: KeyedMap) -> Self {
        Value::Map(Mapping::Keyed(v))
    }
}

/// Builds an [`Object`] from `(key, value)` pairs.
pub fn object<I, K, V>(entries: I) -> Object
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect::<IndexMap<_, _>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widths_keep_signedness() {
        assert_eq!(Value::from(-1i16), Value::Int(-1));
        assert_eq!(Value::from(7usize), Value::Uint(7));
    }

    #[test]
    fn option_becomes_nullable() {
        assert_eq!(Value::from(None::<i32>), Value::Nullable(None));
        assert_eq!(
            Value::from(Some("x")),
            Value::Nullable(Some(Box::new(Value::from("x"))))
        );
    }

    #[test]
    fn object_builder() {
        let obj = object([("a", 1), ("b", 2)]);
        assert_eq!(obj.get("b"), Some(&Value::Int(2)));
    }
}
