//! Named rule storage.
//!
//! Rules live in tiers. A [`Registry`] is one tier; [`GlobalRegistry`]
//! pairs the fixed built-ins with process-wide custom rules. Sessions add
//! their own tier on top, see [`Session`](crate::Session).

mod alias;
mod global;
mod table;

pub use alias::{ALIASES, validator_name};
pub use global::GlobalRegistry;
pub use table::Registry;
