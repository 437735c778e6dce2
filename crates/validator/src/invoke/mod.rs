//! Dynamic invocation of rule functions.
//!
//! Typed Rust functions become [`Callable`]s: their parameters are bound
//! from runtime [`Value`](crate::Value)s through [`FromValue`], their results
//! reported as [`Kind`](crate::Kind)s through [`IntoReturn`]. A [`Handle`]
//! is a callable that passed registration checks.
//!
//! ```
//! use rulekit_validator::{args, invoke::{Callable, Handle, invoke}};
//!
//! let even = Handle::new("even", Callable::new(|n: i64| n % 2 == 0)).unwrap();
//! assert_eq!(invoke(&even, &args![4]), Ok(true));
//! assert!(invoke(&even, &args!["four"]).is_err());
//! ```

mod adapt;
mod callable;
mod handle;
mod signature;

pub use adapt::{ArgCursor, FromValue, Rest, RuleArg};
pub use callable::{Callable, FieldSource, IntoCallable, NoFields};
pub use handle::{Handle, invoke};
pub use signature::{IntoReturn, Param, Returned, Signature};
