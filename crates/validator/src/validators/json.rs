//! JSON well-formedness.

use serde::de::IgnoredAny;

/// `s` is one well-formed JSON value of any type.
pub fn is_json(s: String) -> bool {
    serde_json::from_str::<IgnoredAny>(&s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_json_value() {
        for ok in [r#"{"a": [1, 2]}"#, "[]", "12", r#""s""#, "null", " true "] {
            assert!(is_json(ok.to_string()), "{ok}");
        }
        for bad in ["", "{", "{'a': 1}", "1 2", "nul"] {
            assert!(!is_json(bad.to_string()), "{bad}");
        }
    }
}
