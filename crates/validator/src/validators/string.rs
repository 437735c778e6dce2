//! Rules over string arguments.
//!
//! Each takes one `string` parameter; a non-string argument is an
//! adaptation error at invocation, not a failed check.

use regex::Regex;

use crate::validators::patterns;

/// The string has no characters.
pub fn is_empty(s: String) -> bool {
    s.is_empty()
}

/// The string is null, meaning it has zero bytes.
pub fn is_null(s: String) -> bool {
    s.is_empty()
}

/// Parses as a 32-bit signed decimal integer.
pub fn is_int(s: String) -> bool {
    s.parse::<i32>().is_ok()
}

/// Parses as a 32-bit unsigned decimal integer. No sign is accepted.
pub fn is_uint(s: String) -> bool {
    !s.starts_with('+') && s.parse::<u32>().is_ok()
}

/// One of the accepted boolean spellings.
pub fn is_bool(s: String) -> bool {
    matches!(
        s.as_str(),
        "1" | "t" | "T" | "true" | "TRUE" | "True" | "0" | "f" | "F" | "false" | "FALSE" | "False"
    )
}

/// A decimal float: optional sign, digits, fraction, exponent.
///
/// Every part is optional, so the empty string matches.
pub fn is_float(s: String) -> bool {
    patterns::FLOAT.is_match(&s)
}

/// Non-empty and entirely 7-bit ASCII.
pub fn is_ascii(s: String) -> bool {
    patterns::ASCII.is_match(&s)
}

/// Padded standard base64.
pub fn is_base64(s: String) -> bool {
    patterns::BASE64.is_match(&s)
}

/// Non-empty, ASCII letters only.
pub fn is_alpha(s: String) -> bool {
    patterns::ALPHA.is_match(&s)
}

/// Non-empty, ASCII letters and digits only.
pub fn is_alpha_num(s: String) -> bool {
    patterns::ALPHA_NUM.is_match(&s)
}

/// An email address.
pub fn is_email(s: String) -> bool {
    patterns::EMAIL.is_match(&s)
}

/// `s` matches `pattern`.
///
/// An uncompilable pattern fails the check and is logged.
pub fn regexp(s: String, pattern: String) -> bool {
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(&s),
        Err(err) => {
            tracing::warn!(%pattern, error = %err, "invalid regexp rule pattern");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[rstest]
    #[case("12", true)]
    #[case("-12", true)]
    #[case("+12", true)]
    #[case("2147483648", false)]
    #[case("1.0", false)]
    #[case("", false)]
    fn ints(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_int(s(input)), expected);
    }

    #[test]
    fn uints() {
        assert!(is_uint(s("4294967295")));
        assert!(!is_uint(s("-1")));
        assert!(!is_uint(s("+1")));
    }

    #[rstest]
    #[case("true", true)]
    #[case("T", true)]
    #[case("0", true)]
    #[case("yes", false)]
    #[case("tRUE", false)]
    fn bools(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_bool(s(input)), expected);
    }

    #[rstest]
    #[case("1.5", true)]
    #[case(".5", true)]
    #[case("1e10", true)]
    #[case("12", true)]
    #[case("", true)]
    #[case("1.5.1", false)]
    #[case("abc", false)]
    fn floats(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_float(s(input)), expected);
    }

    #[test]
    fn character_classes() {
        assert!(is_ascii(s("hello!")));
        assert!(!is_ascii(s("héllo")));
        assert!(!is_ascii(s("")));
        assert!(is_alpha(s("abcXYZ")));
        assert!(!is_alpha(s("abc1")));
        assert!(is_alpha_num(s("abc1")));
        assert!(!is_alpha_num(s("abc 1")));
        assert!(is_base64(s("aGVsbG8=")));
        assert!(!is_base64(s("aGVsbG8")));
        assert!(is_empty(s("")));
        assert!(is_null(s("")));
        assert!(!is_null(s(" ")));
    }

    #[test]
    fn emails() {
        assert!(is_email(s("user@example.com")));
        assert!(!is_email(s("user@")));
        assert!(!is_email(s("@example.com")));
    }

    #[test]
    fn regexp_rule() {
        assert!(regexp(s("abc123"), s(r"^[a-z]+\d+$")));
        assert!(!regexp(s("abc"), s(r"^\d+$")));
        assert!(!regexp(s("abc"), s("(")));
    }
}
