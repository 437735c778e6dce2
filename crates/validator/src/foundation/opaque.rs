//! Values with no dedicated kind.
//!
//! Anything that is `Default + PartialEq` can travel through the engine as
//! [`Value::Other`](crate::Value::Other). Emptiness for such a value is
//! equality with `T::default()`; equality between two opaque values requires
//! the same concrete type.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Structural comparison capability of an opaque value.
///
/// Implemented for every `Any + Debug + Default + PartialEq + Send + Sync`
/// type; there is nothing to implement by hand.
pub trait Structural: Any + fmt::Debug + Send + Sync {
    /// Returns true if the value equals its type's zero value.
    fn is_zero(&self) -> bool;

    /// Compares against another opaque value of possibly different type.
    fn dyn_eq(&self, other: &dyn Structural) -> bool;

    /// Upcast for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T> Structural for T
where
    T: Any + fmt::Debug + Default + PartialEq + Send + Sync,
{
    fn is_zero(&self) -> bool {
        *self == T::default()
    }

    fn dyn_eq(&self, other: &dyn Structural) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Shared handle to a user value.
#[derive(Clone)]
pub struct Opaque(Arc<dyn Structural>);

impl Opaque {
    /// Wraps a user value.
    pub fn new<T: Structural>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns true if the wrapped value equals its zero value.
    pub fn is_zero(&self) -> bool {
        (*self.0).is_zero()
    }

    /// Name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        (*self.0).type_name()
    }

    /// Borrows the wrapped value as `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        (*self.0).dyn_eq(&*other.0)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
