//! Short alternate names for validators.

/// Canonical name for `name`, or `name` itself if it is not an alias.
///
/// | alias                 | canonical   |
/// |-----------------------|-------------|
/// | `in`                  | `enum`      |
/// | `int`                 | `integer`   |
/// | `num`                 | `number`    |
/// | `str`                 | `string`    |
/// | `map`                 | `mapping`   |
/// | `arr`                 | `array`     |
/// | `regex`               | `regexp`    |
/// | `minLen`, `minSize`   | `minLength` |
/// | `maxLen`, `maxSize`   | `maxLength` |
///
/// ```
/// use rulekit_validator::validator_name;
///
/// assert_eq!(validator_name("minLen"), "minLength");
/// assert_eq!(validator_name("required"), "required");
/// ```
pub fn validator_name(name: &str) -> &str {
    match name {
        "in" => "enum",
        "int" => "integer",
        "num" => "number",
        "str" => "string",
        "map" => "mapping",
        "arr" => "array",
        "regex" => "regexp",
        "minLen" | "minSize" => "minLength",
        "maxLen" | "maxSize" => "maxLength",
        other => other,
    }
}

/// Every alias paired with its canonical name.
pub const ALIASES: &[(&str, &str)] = &[
    ("in", "enum"),
    ("int", "integer"),
    ("num", "number"),
    ("str", "string"),
    ("map", "mapping"),
    ("arr", "array"),
    ("regex", "regexp"),
    ("minLen", "minLength"),
    ("maxLen", "maxLength"),
    ("minSize", "minLength"),
    ("maxSize", "maxLength"),
];
