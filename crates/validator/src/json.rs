//! Conversions from decoded JSON.
//!
//! JSON objects become string-keyed [`Mapping::Object`]s, `null` becomes
//! the unset reference, and numbers keep the narrowest of `i64`, `u64`,
//! `f64` that represents them.
//!
//! ```
//! use rulekit_validator::{Value, resolve_path};
//! use serde_json::json;
//!
//! let Value::Map(map) = Value::from(json!({"a": {"b": [1, 2]}})) else { unreachable!() };
//! let found = resolve_path("a.b", map.as_lookup()).map(|v| v.into_owned());
//! assert_eq!(found, Some(Value::seq([1, 2])));
//! ```

use crate::foundation::{Mapping, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::null(),
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::Seq(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => Self::Map(Mapping::Object(
                map.into_iter().map(|(k, v)| (k, Self::from(v))).collect(),
            )),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Self::from(value.clone())
    }
}
