//! Argument adaptation: turning runtime [`Value`]s into typed parameters.

use crate::foundation::{AdaptError, CallError, Mapping, NULL, Value};
use crate::invoke::signature::Param;

// ============================================================================
// FROM VALUE
// ============================================================================

/// Conversion from a runtime value into a typed rule parameter.
///
/// Conversions are lossless or they fail: a float with a fractional part
/// never becomes an integer and an out-of-range integer never wraps.
/// Numeric parameters also accept their decimal text, so rule arguments
/// that arrive as strings (`"10"`) still bind to `i64` bounds.
pub trait FromValue: Sized {
    /// Name of the parameter type, for signatures and diagnostics.
    fn expected() -> &'static str;

    /// Adapts `value`, or reports why it cannot be adapted.
    fn from_value(value: &Value) -> Result<Self, AdaptError>;

    /// Shorthand for the error this type reports.
    #[doc(hidden)]
    fn mismatch(value: &Value) -> AdaptError {
        AdaptError::new(Self::expected(), value.kind())
    }
}

impl FromValue for Value {
    fn expected() -> &'static str {
        "value"
    }

    fn from_value(value: &Value) -> Result<Self, AdaptError> {
        Ok(value.clone())
    }
}

impl FromValue for bool {
    fn expected() -> &'static str {
        "bool"
    }

    fn from_value(value: &Value) -> Result<Self, AdaptError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => s.parse().map_err(|_| Self::mismatch(value)),
            _ => Err(Self::mismatch(value)),
        }
    }
}

impl FromValue for String {
    fn expected() -> &'static str {
        "string"
    }

    fn from_value(value: &Value) -> Result<Self, AdaptError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => Err(Self::mismatch(value)),
        }
    }
}

macro_rules! integer_from_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromValue for $t {
                fn expected() -> &'static str {
                    stringify!($t)
                }

                fn from_value(value: &Value) -> Result<Self, AdaptError> {
                    let converted = match value {
                        Value::Int(i) => <$t>::try_from(*i).ok(),
                        Value::Uint(u) => <$t>::try_from(*u).ok(),
                        Value::Float(f) if f.fract() == 0.0 => float_to_integer(*f)
                            .and_then(|i| <$t>::try_from(i).ok()),
                        Value::String(s) => s.trim().parse::<$t>().ok(),
                        _ => None,
                    };
                    converted.ok_or_else(|| Self::mismatch(value))
                }
            }
        )*
    };
}

integer_from_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn float_to_integer(f: f64) -> Option<i128> {
    // i128 covers the full range of both i64 and u64.
    (f.is_finite() && f.abs() < 1.8e19).then(|| f as i128)
}

macro_rules! float_from_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromValue for $t {
                fn expected() -> &'static str {
                    stringify!($t)
                }

                #[allow(trivial_numeric_casts, clippy::cast_precision_loss, clippy::cast_possible_truncation)]
                fn from_value(value: &Value) -> Result<Self, AdaptError> {
                    match value {
                        Value::Float(f) => Ok(*f as $t),
                        Value::Int(i) => Ok(*i as $t),
                        Value::Uint(u) => Ok(*u as $t),
                        Value::String(s) => s.trim().parse().map_err(|_| Self::mismatch(value)),
                        _ => Err(Self::mismatch(value)),
                    }
                }
            }
        )*
    };
}

float_from_value!(f32, f64);

impl<T: FromValue> FromValue for Option<T> {
    fn expected() -> &'static str {
        T::expected()
    }

    fn from_value(value: &Value) -> Result<Self, AdaptError> {
        match value {
            Value::Nullable(None) => Ok(None),
            Value::Nullable(Some(inner)) => T::from_value(inner).map(Some),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn expected() -> &'static str {
        "sequence"
    }

    fn from_value(value: &Value) -> Result<Self, AdaptError> {
        match value {
            Value::Seq(items) => items.iter().map(T::from_value).collect(),
            _ => Err(Self::mismatch(value)),
        }
    }
}

impl FromValue for Mapping {
    fn expected() -> &'static str {
        "mapping"
    }

    fn from_value(value: &Value) -> Result<Self, AdaptError> {
        match value {
            Value::Map(m) => Ok(m.clone()),
            _ => Err(Self::mismatch(value)),
        }
    }
}

// ============================================================================
// POSITIONAL ARGUMENTS
// ============================================================================

/// Walks the supplied arguments while a callable binds its parameters.
#[derive(Debug)]
pub struct ArgCursor<'a> {
    args: &'a [Value],
    position: usize,
}

impl<'a> ArgCursor<'a> {
    /// Starts at the first argument.
    pub const fn new(args: &'a [Value]) -> Self {
        Self { args, position: 0 }
    }

    /// Takes the next argument, `None` once the list is exhausted.
    pub fn next_arg(&mut self) -> (usize, Option<&'a Value>) {
        let index = self.position;
        self.position += 1;
        (index, self.args.get(index))
    }

    /// Takes every remaining argument.
    pub fn rest(&mut self) -> (usize, &'a [Value]) {
        let start = self.position.min(self.args.len());
        self.position = self.args.len();
        (start, &self.args[start..])
    }

    /// Fails if arguments were left unconsumed.
    pub fn finish(self) -> Result<(), CallError> {
        if self.position < self.args.len() {
            return Err(CallError::TooManyArguments {
                accepted: self.position,
                supplied: self.args.len(),
            });
        }
        Ok(())
    }
}

/// A parameter slot of a typed rule.
///
/// Every [`FromValue`] type is a positional parameter; [`Rest`] is a
/// variadic tail.
pub trait RuleArg: Sized {
    /// Descriptor recorded in the rule's signature.
    fn param() -> Param;

    /// Binds this parameter from the cursor.
    fn take(cursor: &mut ArgCursor<'_>) -> Result<Self, CallError>;
}

impl<T: FromValue> RuleArg for T {
    fn param() -> Param {
        Param::positional(T::expected())
    }

    fn take(cursor: &mut ArgCursor<'_>) -> Result<Self, CallError> {
        let (index, value) = cursor.next_arg();
        // A missing argument is bound as the unset reference.
        T::from_value(value.unwrap_or(&NULL)).map_err(|source| CallError::Adapt { index, source })
    }
}

/// Variadic tail: binds every remaining argument.
///
/// Must be the last parameter of a rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rest<T>(pub Vec<T>);

impl<T> Rest<T> {
    /// Number of bound arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: FromValue> RuleArg for Rest<T> {
    fn param() -> Param {
        Param::variadic(T::expected())
    }

    fn take(cursor: &mut ArgCursor<'_>) -> Result<Self, CallError> {
        let (start, values) = cursor.rest();
        values
            .iter()
            .enumerate()
            .map(|(offset, value)| {
                T::from_value(value).map_err(|source| CallError::Adapt {
                    index: start + offset,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Kind;
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(3), Ok(3))]
    #[case(Value::from(3u8), Ok(3))]
    #[case(Value::from(3.0), Ok(3))]
    #[case(Value::from("42"), Ok(42))]
    #[case(Value::from(" -7 "), Ok(-7))]
    #[case(Value::from(3.5), Err(Kind::Float))]
    #[case(Value::from(u64::MAX), Err(Kind::UnsignedInt))]
    #[case(Value::from("x"), Err(Kind::String))]
    #[case(Value::from(true), Err(Kind::Bool))]
    #[case(Value::null(), Err(Kind::Nullable))]
    fn i64_adaptation(#[case] value: Value, #[case] expected: Result<i64, Kind>) {
        assert_eq!(
            i64::from_value(&value).map_err(|e| e.found),
            expected
        );
    }

    #[test]
    fn narrow_integers_reject_overflow() {
        assert_eq!(u8::from_value(&Value::from(255)), Ok(255));
        assert!(u8::from_value(&Value::from(256)).is_err());
        assert!(u32::from_value(&Value::from(-1)).is_err());
    }

    #[test]
    fn strings_are_strict() {
        assert_eq!(String::from_value(&Value::from("a")), Ok("a".to_string()));
        let err = String::from_value(&Value::from(1)).unwrap_err();
        assert_eq!(err, AdaptError::new("string", Kind::SignedInt));
    }

    #[test]
    fn option_accepts_null_and_unwraps_some() {
        assert_eq!(Option::<i64>::from_value(&Value::null()), Ok(None));
        assert_eq!(Option::<i64>::from_value(&Value::some(4)), Ok(Some(4)));
        assert_eq!(Option::<i64>::from_value(&Value::from(4)), Ok(Some(4)));
    }

    #[test]
    fn missing_argument_binds_null() {
        let args = [Value::from(1)];
        let mut cursor = ArgCursor::new(&args);
        assert_eq!(<i64 as RuleArg>::take(&mut cursor), Ok(1));
        assert_eq!(<Option<String> as RuleArg>::take(&mut cursor), Ok(None));
        assert_eq!(
            <i64 as RuleArg>::take(&mut cursor),
            Err(CallError::Adapt {
                index: 2,
                source: AdaptError::new("i64", Kind::Nullable),
            })
        );
    }

    #[test]
    fn rest_consumes_tail_and_reports_absolute_index() {
        let args = [Value::from("s"), Value::from(1), Value::from("x")];
        let mut cursor = ArgCursor::new(&args);
        let _ = cursor.next_arg();
        let err = Rest::<i64>::take(&mut cursor).unwrap_err();
        assert!(matches!(err, CallError::Adapt { index: 2, .. }));
    }

    #[test]
    fn finish_rejects_leftovers() {
        let args = [Value::from(1), Value::from(2)];
        let mut cursor = ArgCursor::new(&args);
        let _ = cursor.next_arg();
        assert_eq!(
            cursor.finish(),
            Err(CallError::TooManyArguments {
                accepted: 1,
                supplied: 2
            })
        );
    }
}
