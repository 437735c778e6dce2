//! Property-based tests for the value introspector and size rules.

use proptest::prelude::*;
use rulekit_validator::prelude::*;
use rulekit_validator::validators::{max, max_length, min, min_length};

// ============================================================================
// INTROSPECTION
// ============================================================================

proptest! {
    #[test]
    fn integer_empty_iff_zero(n in any::<i64>()) {
        prop_assert_eq!(is_empty(&Value::from(n)), n == 0);
    }

    #[test]
    fn string_empty_iff_no_chars(s in ".{0,8}") {
        prop_assert_eq!(is_empty(&Value::from(s.as_str())), s.is_empty());
    }

    #[test]
    fn integer_length_is_rendered_width(n in any::<i64>()) {
        prop_assert_eq!(length(&Value::from(n)), Some(n.to_string().len()));
    }

    #[test]
    fn unsigned_length_is_rendered_width(n in any::<u64>()) {
        prop_assert_eq!(length(&Value::from(n)), Some(n.to_string().len()));
    }

    #[test]
    fn string_length_counts_bytes(s in "\\PC{0,32}") {
        prop_assert_eq!(length(&Value::from(s.as_str())), Some(s.len()));
    }

    #[test]
    fn float_has_no_length(f in any::<f64>()) {
        prop_assert_eq!(length(&Value::from(f)), None);
    }

    #[test]
    fn integer_value_is_identity_for_signed(n in any::<i64>()) {
        prop_assert_eq!(integer_value(&Value::from(n)), Some(n));
        prop_assert_eq!(length_or_integer(&Value::from(n)), n);
    }
}

// ============================================================================
// SIZE RULES
// ============================================================================

proptest! {
    #[test]
    fn min_and_max_agree_at_bound(n in -10_000i64..10_000, bound in -10_000i64..10_000) {
        let v = Value::from(n);
        prop_assert_eq!(min(v.clone(), bound), n >= bound);
        prop_assert_eq!(max(v, bound), n <= bound);
    }

    #[test]
    fn min_or_max_always_holds(s in ".{0,20}", bound in 0i64..25) {
        let v = Value::from(s.as_str());
        prop_assert!(min(v.clone(), bound) || max(v, bound));
    }

    #[test]
    fn length_bounds_bracket_the_length(s in "[a-z]{0,20}") {
        let n = s.len() as i64;
        let v = Value::from(s.as_str());
        prop_assert!(min_length(v.clone(), n));
        prop_assert!(max_length(v.clone(), n));
        prop_assert!(!min_length(v.clone(), n + 1));
        prop_assert_eq!(max_length(v, n - 1), false);
    }

    #[test]
    fn registered_rule_matches_plain_function(n in any::<i64>(), bound in any::<i64>()) {
        let global = GlobalRegistry::new();
        let handle = global.resolve("min").unwrap();
        prop_assert_eq!(handle.call(&args![n, bound]), Ok(min(Value::from(n), bound)));
    }
}
