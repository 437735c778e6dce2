//! # rulekit-validator
//!
//! A runtime rule engine: validators are registered by name and evaluated
//! over values whose types are only known at run time.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use rulekit_validator::prelude::*;
//!
//! let global = Arc::new(GlobalRegistry::new());
//! global.register("even", |n: i64| n % 2 == 0).unwrap();
//!
//! let session = Session::builder()
//!     .source(MapData::new(object([("pass", "s3cret"), ("confirm", "s3cret")])))
//!     .global(global)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(session.validate("even", &args![4]), Ok(true));
//! assert_eq!(session.validate("minLen", &args!["abc", 5]), Ok(false));
//! assert_eq!(session.validate("eqField", &args!["s3cret", "confirm"]), Ok(true));
//! assert!(session.validate("nope", &args![1]).is_err());
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Value`] model, the introspector
//!   ([`is_empty`], [`length`], [`integer_value`], [`length_or_integer`]) and
//!   the path resolver ([`resolve_path`])
//! - [`invoke`]: typed functions as type-erased [`Callable`](invoke::Callable)s
//! - [`registry`]: named tiers, aliases and the [`GlobalRegistry`]
//! - [`session`]: per-run rule tier and data source, field rules
//! - [`validators`]: the built-in rules
//!
//! ## Failure model
//!
//! A rule that does not hold is `Ok(false)`. An `Err` always means misuse:
//! a malformed registration, an unknown name, an argument that cannot be
//! adapted, a wrong return shape. Absent fields and undetermined lengths
//! are ordinary `false` / `None` results.

pub mod foundation;
pub mod invoke;
mod macros;
pub mod prelude;
pub mod registry;
pub mod session;
pub mod validators;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "yaml")]
mod yaml;

pub use foundation::{
    AdaptError, CallError, Error, InvokeError, KeyedMap, Kind, Mapping, NULL, NestedLookup,
    Object, Opaque, RegistryError, Result, StringMap, Structural, UNDETERMINED_LENGTH, Value,
    integer_value, is_empty, length, length_or_integer, length_or_undetermined, object,
    resolve_path,
};
pub use invoke::invoke;
pub use registry::{GlobalRegistry, Registry, validator_name};
pub use session::{DataSource, MapData, Session, SessionBuilder, StructData};
