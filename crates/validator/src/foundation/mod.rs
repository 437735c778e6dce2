//! Value model and the operations every rule is built on.
//!
//! - [`Value`] / [`Kind`]: tagged runtime values
//! - [`Mapping`] and its shapes: nested lookup targets
//! - [`inspect`]: emptiness, length, integer coercion
//! - [`resolve_path`]: dotted-key lookup
//! - error types shared by the registry and the invoker

mod convert;
mod error;
pub mod inspect;
mod mapping;
mod opaque;
mod path;
mod value;

pub use convert::object;
pub use error::{AdaptError, CallError, Error, InvokeError, RegistryError, Result};
pub use inspect::{
    UNDETERMINED_LENGTH, integer_value, is_empty, length, length_or_integer,
    length_or_undetermined,
};
pub use mapping::{KeyedMap, Mapping, NestedLookup, Object, StringMap};
pub use opaque::{Opaque, Structural};
pub use path::{PATH_SEPARATOR, resolve_path};
pub use value::{Kind, NULL, Value};
