//! Size and length bounds.

use crate::foundation::{Value, length_or_integer, length_or_undetermined};
use crate::invoke::Rest;

/// Length or magnitude is at least `min`.
///
/// Strings and containers are measured by length, numbers by value.
pub fn min(value: Value, min: i64) -> bool {
    length_or_integer(&value) >= min
}

/// Length or magnitude is at most `max`.
pub fn max(value: Value, max: i64) -> bool {
    length_or_integer(&value) <= max
}

/// Length is at least `min`. Strings are measured in bytes, integers by
/// digit count.
pub fn min_length(value: Value, min: i64) -> bool {
    length_or_undetermined(&value) >= min
}

/// Length is at most `max`. A value with no length fails.
pub fn max_length(value: Value, max: i64) -> bool {
    match length_or_undetermined(&value) {
        n if n < 0 => false,
        n => n <= max,
    }
}

fn within(len: usize, bounds: &Rest<i64>) -> bool {
    match bounds.0.as_slice() {
        [lo, hi] => {
            let len = len as i64;
            *lo <= len && len <= *hi
        }
        _ => false,
    }
}

/// Byte length of `s` is within `[min, max]`.
///
/// Takes exactly two bounds after the string; any other count fails.
pub fn byte_length(s: String, bounds: Rest<i64>) -> bool {
    within(s.len(), &bounds)
}

/// Character count of `s` is within `[min, max]`.
pub fn string_length(s: String, bounds: Rest<i64>) -> bool {
    within(s.chars().count(), &bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(5), 3, true)]
    #[case(Value::from("ab"), 3, false)]
    #[case(Value::from("abc"), 3, true)]
    #[case(Value::seq([1, 2, 3, 4]), 3, true)]
    #[case(Value::from(2.9), 3, false)]
    #[case(Value::from(true), 0, true)]
    fn min_bound(#[case] value: Value, #[case] bound: i64, #[case] expected: bool) {
        assert_eq!(min(value, bound), expected);
    }

    #[rstest]
    #[case(Value::from(1000), 3, false)]
    #[case(Value::from(3), 3, true)]
    #[case(Value::from("abcd"), 3, false)]
    fn max_bound(#[case] value: Value, #[case] bound: i64, #[case] expected: bool) {
        assert_eq!(max(value, bound), expected);
    }

    #[test]
    fn length_bounds_count_digits() {
        assert!(min_length(Value::from(1000), 4));
        assert!(!min_length(Value::from(999), 4));
        assert!(max_length(Value::from(-7), 2));
        assert!(!max_length(Value::from(true), 10));
        assert!(min_length(Value::from(true), -1));
    }

    #[test]
    fn byte_and_char_lengths_differ() {
        let s = "héllo".to_string();
        assert!(!byte_length(s.clone(), Rest(vec![1, 5])));
        assert!(string_length(s, Rest(vec![1, 5])));
    }

    #[test]
    fn length_bounds_measure_bytes() {
        let accented = || Value::from("héllo");
        assert!(min_length(accented(), 6));
        assert!(min(accented(), 6));
        assert!(!max_length(accented(), 5));
        assert!(!max(accented(), 5));
    }

    #[test]
    fn wrong_bound_count_fails() {
        assert!(!byte_length("ab".into(), Rest(vec![1])));
        assert!(!string_length("ab".into(), Rest(vec![1, 2, 3])));
    }
}
