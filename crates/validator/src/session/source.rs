//! Data a session validates: field values and, optionally, rule methods.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::{Object, RegistryError, Value, resolve_path};
use crate::invoke::{FieldSource, Handle, IntoCallable, NoFields};
use crate::registry::Registry;

/// The data under validation.
///
/// Field access comes from [`FieldSource`]. A source may also carry its own
/// rules, which take precedence over every registry tier.
pub trait DataSource: FieldSource + fmt::Debug + Send + Sync {
    /// Rule named `name` owned by the data itself.
    fn method_named(&self, _name: &str) -> Option<Handle> {
        None
    }
}

impl DataSource for NoFields {}

/// Fields held in a string-keyed mapping. Dotted field names descend into
/// nested mappings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapData {
    fields: Object,
}

impl MapData {
    /// Wraps a mapping.
    pub fn new(fields: Object) -> Self {
        Self { fields }
    }

    /// Wraps a decoded JSON object. Anything but an object yields `None`.
    #[cfg(feature = "json")]
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Object(map) => Some(Self::new(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            )),
            _ => None,
        }
    }

    /// Sets a top-level field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// The underlying mapping.
    pub const fn fields(&self) -> &Object {
        &self.fields
    }
}

impl From<Object> for MapData {
    fn from(fields: Object) -> Self {
        Self::new(fields)
    }
}

impl FieldSource for MapData {
    fn get(&self, field: &str) -> Option<Value> {
        resolve_path(field, &self.fields).map(Cow::into_owned)
    }
}

impl DataSource for MapData {}

/// Fields of a record together with rules defined on it.
///
/// Methods go through the same checks as any registered rule.
#[derive(Debug, Clone)]
pub struct StructData {
    fields: MapData,
    methods: Registry,
}

impl StructData {
    /// Wraps the record's fields.
    pub fn new(fields: Object) -> Self {
        Self {
            fields: MapData::new(fields),
            methods: Registry::new("method"),
        }
    }

    /// Adds a method, builder style.
    ///
    /// # Errors
    ///
    /// [`RegistryError`] if the rule does not return exactly one bool.
    pub fn with_method<M>(
        mut self,
        name: impl Into<String>,
        rule: impl IntoCallable<M>,
    ) -> Result<Self, RegistryError> {
        self.register_method(name, rule)?;
        Ok(self)
    }

    /// Adds a method.
    ///
    /// # Errors
    ///
    /// [`RegistryError`] if the rule does not return exactly one bool.
    pub fn register_method<M>(
        &mut self,
        name: impl Into<String>,
        rule: impl IntoCallable<M>,
    ) -> Result<(), RegistryError> {
        self.methods.register(name, rule)
    }

    /// Sets a top-level field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.set(field, value);
    }
}

impl FieldSource for StructData {
    fn get(&self, field: &str) -> Option<Value> {
        self.fields.get(field)
    }
}

impl DataSource for StructData {
    fn method_named(&self, name: &str) -> Option<Handle> {
        self.methods.handle(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::object;

    #[test]
    fn map_data_resolves_paths() {
        let data = MapData::new(object([(
            "user",
            Value::from(object([("name", "ann")])),
        )]));
        assert_eq!(data.get("user.name"), Some(Value::from("ann")));
        assert_eq!(data.get("user.age"), None);
    }

    #[test]
    fn struct_data_methods_are_checked() {
        let err = StructData::new(Object::new())
            .with_method("bad", |_: Value| "no".to_string())
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidReturn { .. }));

        let data = StructData::new(object([("n", 2)]))
            .with_method("isTwo", |v: i64| v == 2)
            .unwrap();
        assert!(data.method_named("isTwo").is_some());
        assert!(data.method_named("isThree").is_none());
        assert_eq!(data.get("n"), Some(Value::from(2)));
    }

    #[cfg(feature = "json")]
    #[test]
    fn map_data_from_json_object_only() {
        let data = MapData::from_json(serde_json::json!({"a": {"b": 1}})).unwrap();
        assert_eq!(data.get("a.b"), Some(Value::from(1)));
        assert!(MapData::from_json(serde_json::json!([1])).is_none());
    }
}
