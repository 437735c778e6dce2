//! Nested mapping shapes.
//!
//! Decoders disagree on what a "map" is. A plain string table, a JSON/TOML
//! object (string keys, opaque values) and a YAML mapping (opaque keys,
//! opaque values) all look like nested maps to the caller. Each shape gets
//! its own [`NestedLookup`] implementation and [`Mapping`] dispatches on its
//! tag.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::foundation::value::Value;

/// String keys to opaque values, as produced by JSON and TOML decoders.
pub type Object = IndexMap<String, Value>;

/// String keys to string values.
pub type StringMap = IndexMap<String, String>;

/// Key lookup shared by every mapping shape.
pub trait NestedLookup {
    /// Looks up a single (non-dotted) key.
    fn lookup(&self, key: &str) -> Option<Cow<'_, Value>>;

    /// Number of entries.
    fn entry_count(&self) -> usize;
}

impl NestedLookup for Object {
    fn lookup(&self, key: &str) -> Option<Cow<'_, Value>> {
        self.get(key).map(Cow::Borrowed)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl NestedLookup for StringMap {
    fn lookup(&self, key: &str) -> Option<Cow<'_, Value>> {
        self.get(key).map(|s| Cow::Owned(Value::String(s.clone())))
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// Opaque keys to opaque values, as produced by YAML decoders.
///
/// Keys are not required to be hashable, so entries are kept in insertion
/// order and searched linearly. Only string keys can match a path segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedMap {
    entries: Vec<(Value, Value)>,
}

impl KeyedMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, replacing the value of an equal key.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up an entry by an arbitrary key.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for KeyedMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl NestedLookup for KeyedMap {
    fn lookup(&self, key: &str) -> Option<Cow<'_, Value>> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| Cow::Borrowed(v))
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// A nested mapping in one of the recognized shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapping {
    /// Uniform string-to-string table.
    Strings(StringMap),
    /// String-keyed, opaque-valued object.
    Object(Object),
    /// Opaque-keyed, opaque-valued mapping.
    Keyed(KeyedMap),
}

impl Mapping {
    /// The lookup capability for this shape.
    pub fn as_lookup(&self) -> &dyn NestedLookup {
        match self {
            Self::Strings(map) => map,
            Self::Object(map) => map,
            Self::Keyed(map) => map,
        }
    }

    /// Looks up a single (non-dotted) key.
    pub fn lookup(&self, key: &str) -> Option<Cow<'_, Value>> {
        self.as_lookup().lookup(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.as_lookup().entry_count()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Mapping {
    fn default() -> Self {
        Self::Object(Object::new())
    }
}
