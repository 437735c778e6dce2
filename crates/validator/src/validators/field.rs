//! Rules that compare a value against a sibling field.
//!
//! Sibling fields are read from the [`FieldSource`] the rule is invoked
//! with, normally the [`Session`](crate::Session). An absent sibling always
//! fails the rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::{Kind, Value, is_empty, length_or_undetermined};
use crate::invoke::{ArgCursor, Callable, FieldSource, Param, RuleArg, Signature};

// ============================================================================
// OPERATOR
// ============================================================================

/// Integer comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl Operator {
    /// Tag as written in rule definitions.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
        }
    }

    /// Applies the operator as `lhs <op> rhs`.
    pub const fn apply(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ne => lhs != rhs,
            Self::Lt => lhs < rhs,
            Self::Lte => lhs <= rhs,
            Self::Gt => lhs > rhs,
            Self::Gte => lhs >= rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized operator tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown comparison operator `{0}`")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Self::Eq),
            "ne" => Ok(Self::Ne),
            "lt" => Ok(Self::Lt),
            "lte" => Ok(Self::Lte),
            "gt" => Ok(Self::Gt),
            "gte" => Ok(Self::Gte),
            other => Err(UnknownOperator(other.to_owned())),
        }
    }
}

/// Compares two integers by operator tag. An unknown tag compares false.
pub fn compare_int(lhs: i64, rhs: i64, op: &str) -> bool {
    op.parse::<Operator>().is_ok_and(|op| op.apply(lhs, rhs))
}

// ============================================================================
// RULES
// ============================================================================

/// The value is not empty for its kind.
pub fn required(value: &Value) -> bool {
    !is_empty(value)
}

/// Looks up `field` and applies `check` to the value and the sibling.
pub fn with_sibling(
    fields: &dyn FieldSource,
    value: &Value,
    field: &str,
    check: impl FnOnce(&Value, &Value) -> bool,
) -> bool {
    fields.get(field).is_some_and(|sibling| check(value, &sibling))
}

/// The value equals the sibling field.
pub fn eq_field(fields: &dyn FieldSource, value: &Value, field: &str) -> bool {
    with_sibling(fields, value, field, |a, b| a == b)
}

/// The value differs from the sibling field.
pub fn ne_field(fields: &dyn FieldSource, value: &Value, field: &str) -> bool {
    with_sibling(fields, value, field, |a, b| a != b)
}

/// Compares the lengths of the value and the sibling field.
///
/// Lengths, not magnitudes: `999 gtField 1000` is false because 3 < 4, and
/// a value with no length compares as -1.
pub fn length_field(fields: &dyn FieldSource, value: &Value, field: &str, op: Operator) -> bool {
    with_sibling(fields, value, field, |a, b| {
        op.apply(length_or_undetermined(a), length_or_undetermined(b))
    })
}

/// Length greater than the sibling's.
pub fn gt_field(fields: &dyn FieldSource, value: &Value, field: &str) -> bool {
    length_field(fields, value, field, Operator::Gt)
}

/// Length at least the sibling's.
pub fn gte_field(fields: &dyn FieldSource, value: &Value, field: &str) -> bool {
    length_field(fields, value, field, Operator::Gte)
}

/// Length less than the sibling's.
pub fn lt_field(fields: &dyn FieldSource, value: &Value, field: &str) -> bool {
    length_field(fields, value, field, Operator::Lt)
}

/// Length at most the sibling's.
pub fn lte_field(fields: &dyn FieldSource, value: &Value, field: &str) -> bool {
    length_field(fields, value, field, Operator::Lte)
}

// ============================================================================
// REGISTRATION
// ============================================================================

type FieldRule = fn(&dyn FieldSource, &Value, &str) -> bool;

pub(crate) const FIELD_RULES: &[(&str, FieldRule)] = &[
    ("eqField", eq_field),
    ("neField", ne_field),
    ("gtField", gt_field),
    ("gteField", gte_field),
    ("ltField", lt_field),
    ("lteField", lte_field),
];

/// Wraps a sibling rule as `(value, field: string) -> bool`.
pub(crate) fn field_rule(rule: FieldRule) -> Callable {
    let signature = Signature::new(
        [Param::positional("value"), Param::positional("string")],
        [Kind::Bool],
    );
    Callable::from_parts(signature, move |args, fields| {
        let mut cursor = ArgCursor::new(args);
        let value = <Value as RuleArg>::take(&mut cursor)?;
        let field = <String as RuleArg>::take(&mut cursor)?;
        cursor.finish()?;
        Ok(smallvec::smallvec![Value::Bool(rule(fields, &value, &field))])
    })
}
