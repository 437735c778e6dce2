//! Macros for building argument lists and rule tables.
//!
//! # Available Macros
//!
//! - [`args!`]: a `Vec<Value>` from heterogeneous literals
//! - [`rules!`]: a `(name, Callable)` table for bulk registration
//!
//! # Examples
//!
//! ```
//! use rulekit_validator::{args, rules, GlobalRegistry};
//!
//! let registry = GlobalRegistry::new();
//! registry
//!     .register_all(rules! {
//!         "even" => |n: i64| n % 2 == 0,
//!         "short" => |s: String| s.len() < 4,
//!     })
//!     .unwrap();
//!
//! let even = registry.resolve("even").unwrap();
//! assert_eq!(even.call(&args![10]), Ok(true));
//! ```

// ============================================================================
// ARGS MACRO
// ============================================================================

/// Builds a `Vec<Value>` by converting each expression with `Value::from`.
///
/// ```
/// use rulekit_validator::{args, Value};
///
/// let a = args!["x", 3, true];
/// assert_eq!(a, vec![Value::from("x"), Value::from(3), Value::from(true)]);
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}

// ============================================================================
// RULES MACRO
// ============================================================================

/// Builds a table of named rules for `register_all`.
///
/// Each right-hand side is anything convertible into a
/// [`Callable`](crate::invoke::Callable): a closure with annotated
/// parameter types, a function path, or a prebuilt callable.
#[macro_export]
macro_rules! rules {
    ($($name:expr => $rule:expr),* $(,)?) => {
        ::std::vec![$(($name, $crate::invoke::Callable::new($rule))),*]
    };
}
