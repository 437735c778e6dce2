//! Prelude module for convenient imports.
//!
//! ```
//! use rulekit_validator::prelude::*;
//!
//! let session = Session::builder()
//!     .source(MapData::new(object([("age", 30)])))
//!     .global(std::sync::Arc::new(GlobalRegistry::new()))
//!     .build()
//!     .unwrap();
//! assert_eq!(session.validate("min", &args![30, 18]), Ok(true));
//! ```

// ============================================================================
// FOUNDATION: values, introspection, errors
// ============================================================================

pub use crate::foundation::{
    Error, InvokeError, Kind, Mapping, NULL, Object, RegistryError, Value, integer_value,
    is_empty, length, length_or_integer, object, resolve_path,
};

// ============================================================================
// INVOCATION AND REGISTRIES
// ============================================================================

pub use crate::invoke::{Callable, FieldSource, FromValue, Handle, Rest, invoke};
pub use crate::registry::{GlobalRegistry, Registry, validator_name};
pub use crate::session::{DataSource, MapData, Session, SessionBuilder, StructData};

pub use crate::{args, rules};
