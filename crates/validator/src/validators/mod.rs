//! Built-in rules.
//!
//! Every rule is an ordinary Rust function, usable directly or by name
//! through a registry.
//!
//! # Categories
//!
//! - **Size**: `min`, `max`, `minLength`, `maxLength`, `byteLength`,
//!   `runeLength`, `stringLength`
//! - **Kind**: `integer`, `number`, `string`, `mapping`, `array`, `enum`
//! - **Field**: `required`, `eqField`, `neField`, `gtField`, `gteField`,
//!   `ltField`, `lteField`
//! - **String** (feature `builtins`): `isEmpty`, `isNull`, `isInt`, `isUint`,
//!   `isBool`, `isFloat`, `isASCII`, `isBase64`, `isAlpha`, `isAlphaNum`,
//!   `isEmail`, `regexp`
//! - **Network** (feature `network`): `isIP`, `isIPv4`, `isIPv6`, `isMAC`,
//!   `isCIDR`, `isCIDRv4`, `isCIDRv6`
//! - **JSON** (feature `json`): `isJSON`

pub mod field;
pub mod size;
pub mod types;

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "network")]
pub mod network;
#[cfg(feature = "builtins")]
pub mod patterns;
#[cfg(feature = "builtins")]
pub mod string;

pub use field::{
    Operator, UnknownOperator, compare_int, eq_field, gt_field, gte_field, lt_field, lte_field,
    ne_field, required,
};
pub use size::{byte_length, max, max_length, min, min_length, string_length};
pub use types::{array, integer, mapping, number, one_of, string};

use crate::foundation::{RegistryError, Value};
use crate::registry::Registry;

/// Builds the built-in tier.
pub(crate) fn builtin_registry() -> Registry {
    let mut registry = Registry::new("builtin");
    register_builtins(&mut registry).expect("built-in validators return a single bool");
    registry
}

fn register_builtins(reg: &mut Registry) -> Result<(), RegistryError> {
    // field
    reg.register("required", |v: Value| required(&v))?;
    for (name, rule) in field::FIELD_RULES {
        reg.register_callable(*name, field::field_rule(*rule))?;
    }

    // size
    reg.register("min", min)?;
    reg.register("max", max)?;
    reg.register("minLength", min_length)?;
    reg.register("maxLength", max_length)?;
    reg.register("byteLength", byte_length)?;
    reg.register("runeLength", string_length)?;
    reg.register("stringLength", string_length)?;

    // kind
    reg.register("integer", integer)?;
    reg.register("number", number)?;
    reg.register("string", types::string)?;
    reg.register("mapping", mapping)?;
    reg.register("array", array)?;
    reg.register("enum", one_of)?;

    #[cfg(feature = "builtins")]
    {
        reg.register("isEmpty", string::is_empty)?;
        reg.register("isNull", string::is_null)?;
        reg.register("isInt", string::is_int)?;
        reg.register("isUint", string::is_uint)?;
        reg.register("isBool", string::is_bool)?;
        reg.register("isFloat", string::is_float)?;
        reg.register("isASCII", string::is_ascii)?;
        reg.register("isBase64", string::is_base64)?;
        reg.register("isAlpha", string::is_alpha)?;
        reg.register("isAlphaNum", string::is_alpha_num)?;
        reg.register("isEmail", string::is_email)?;
        reg.register("regexp", string::regexp)?;
    }

    #[cfg(feature = "network")]
    {
        reg.register("isIP", network::is_ip)?;
        reg.register("isIPv4", network::is_ipv4)?;
        reg.register("isIPv6", network::is_ipv6)?;
        reg.register("isMAC", network::is_mac)?;
        reg.register("isCIDR", network::is_cidr)?;
        reg.register("isCIDRv4", network::is_cidr_v4)?;
        reg.register("isCIDRv6", network::is_cidr_v6)?;
    }

    #[cfg(feature = "json")]
    reg.register("isJSON", json::is_json)?;

    Ok(())
}
