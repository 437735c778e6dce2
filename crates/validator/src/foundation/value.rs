//! The opaque value model.
//!
//! Every argument a rule receives, every field a session returns and every
//! entry of a nested mapping is a [`Value`]. A value always classifies into
//! exactly one [`Kind`], which is what the introspector, the path resolver
//! and the argument adapters dispatch on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::mapping::Mapping;
use crate::foundation::opaque::{Opaque, Structural};

// ============================================================================
// KIND
// ============================================================================

/// Classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Text.
    String,
    /// `true` / `false`.
    Bool,
    /// Signed integer of any width.
    SignedInt,
    /// Unsigned integer of any width.
    UnsignedInt,
    /// Floating point.
    Float,
    /// Arrays, slices, vectors.
    Sequence,
    /// Any of the nested mapping shapes.
    Mapping,
    /// A reference that may be unset.
    Nullable,
    /// Anything else, compared structurally against its zero value.
    Other,
}

impl Kind {
    /// Lower-case name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::SignedInt => "signed integer",
            Self::UnsignedInt => "unsigned integer",
            Self::Float => "float",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Nullable => "nullable",
            Self::Other => "other",
        }
    }

    /// Returns true for the integer and float kinds.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::SignedInt | Self::UnsignedInt | Self::Float)
    }

    /// Returns true for the integer kinds.
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::SignedInt | Self::UnsignedInt)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A runtime value of unknown static type.
///
/// Integers keep their signedness but not their width: every signed width
/// widens to `i64`, every unsigned width to `u64`, `f32` to `f64`.
///
/// Equality is representational: `Int(5)` and `Uint(5)` are different
/// values, as are `Float(1.0)` and `Int(1)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text.
    String(String),
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point.
    Float(f64),
    /// Ordered elements.
    Seq(Vec<Value>),
    /// Nested mapping in one of the recognized shapes.
    Map(Mapping),
    /// A reference that is either set (`Some`) or unset (`None`).
    Nullable(Option<Box<Value>>),
    /// A user value with no dedicated kind.
    Other(Opaque),
}

/// The unset reference. Missing arguments are adapted from this value.
pub const NULL: Value = Value::Nullable(None);

impl Value {
    /// Returns the unset reference.
    #[must_use]
    pub const fn null() -> Self {
        NULL
    }

    /// Wraps a user value with no dedicated kind.
    #[must_use]
    pub fn opaque<T: Structural>(value: T) -> Self {
        Self::Other(Opaque::new(value))
    }

    /// Wraps a value in a set reference.
    #[must_use]
    pub fn some(value: impl Into<Value>) -> Self {
        Self::Nullable(Some(Box::new(value.into())))
    }

    /// Builds a sequence from anything convertible.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Classifies the value.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::String(_) => Kind::String,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::SignedInt,
            Self::Uint(_) => Kind::UnsignedInt,
            Self::Float(_) => Kind::Float,
            Self::Seq(_) => Kind::Sequence,
            Self::Map(_) => Kind::Mapping,
            Self::Nullable(_) => Kind::Nullable,
            Self::Other(_) => Kind::Other,
        }
    }

    /// Returns true for the unset reference.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Nullable(None))
    }

    /// Returns the text if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the mapping if this is one.
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        NULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_of_each_variant() {
        assert_eq!(Value::from("a").kind(), Kind::String);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from(-3i8).kind(), Kind::SignedInt);
        assert_eq!(Value::from(3u16).kind(), Kind::UnsignedInt);
        assert_eq!(Value::from(1.5f32).kind(), Kind::Float);
        assert_eq!(Value::seq([1, 2]).kind(), Kind::Sequence);
        assert_eq!(Value::null().kind(), Kind::Nullable);
        assert_eq!(Value::opaque(()).kind(), Kind::Other);
    }

    #[test]
    fn equality_is_representational() {
        assert_ne!(Value::Int(5), Value::Uint(5));
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::from("x"), Value::String("x".into()));
    }
}
