//! Conversions from decoded YAML.
//!
//! YAML mapping keys can be any value, so mappings become
//! [`Mapping::Keyed`]. Path lookups still match their string keys.
//! Tags are dropped and the tagged value kept.

use crate::foundation::{KeyedMap, Mapping, Value};

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Self::null(),
            serde_yaml::Value::Bool(b) => Self::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Uint(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yaml::Value::String(s) => Self::String(s),
            serde_yaml::Value::Sequence(items) => Self::Seq(items.into_iter().map(Self::from).collect()),
            serde_yaml::Value::Mapping(map) => Self::Map(Mapping::Keyed(
                map.into_iter()
                    .map(|(k, v)| (Self::from(k), Self::from(v)))
                    .collect::<KeyedMap>(),
            )),
            serde_yaml::Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}
