//! Declared shape of a callable: parameters and return values.

use std::fmt;

use smallvec::SmallVec;

use crate::foundation::{Kind, Value};

/// One declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// Name of the parameter type.
    pub type_name: &'static str,
    /// True for a tail that absorbs every remaining argument.
    pub variadic: bool,
}

impl Param {
    /// A single positional parameter.
    #[must_use]
    pub const fn positional(type_name: &'static str) -> Self {
        Self {
            type_name,
            variadic: false,
        }
    }

    /// A variadic tail.
    #[must_use]
    pub const fn variadic(type_name: &'static str) -> Self {
        Self {
            type_name,
            variadic: true,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variadic {
            write!(f, "...{}", self.type_name)
        } else {
            f.write_str(self.type_name)
        }
    }
}

/// Parameters and declared return kinds of a callable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    params: SmallVec<[Param; 4]>,
    returns: SmallVec<[Kind; 2]>,
}

impl Signature {
    /// Builds a signature. Use [`check`](Self::check) to validate it.
    pub fn new(
        params: impl IntoIterator<Item = Param>,
        returns: impl IntoIterator<Item = Kind>,
    ) -> Self {
        Self {
            params: params.into_iter().collect(),
            returns: returns.into_iter().collect(),
        }
    }

    /// Checks that only the last parameter is variadic.
    ///
    /// # Errors
    ///
    /// Returns the reason the signature is malformed.
    pub fn check(&self) -> Result<(), String> {
        match self.params.iter().position(|p| p.variadic) {
            Some(pos) if pos + 1 != self.params.len() => {
                Err(format!("variadic parameter {pos} is not last"))
            }
            _ => Ok(()),
        }
    }

    /// Declared parameters in order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Declared return kinds in order.
    pub fn returns(&self) -> &[Kind] {
        &self.returns
    }

    /// Number of positional (non-variadic) parameters.
    pub fn arity(&self) -> usize {
        self.params.iter().filter(|p| !p.variadic).count()
    }

    /// Returns true if the last parameter is a variadic tail.
    pub fn is_variadic(&self) -> bool {
        self.params.last().is_some_and(|p| p.variadic)
    }

    /// Returns true if the callable declares exactly one bool result.
    pub fn returns_single_bool(&self) -> bool {
        self.returns.as_slice() == [Kind::Bool]
    }

    pub(crate) fn returns_display(&self) -> String {
        join(self.returns.iter())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn({}) -> ({})", join(self.params.iter()), self.returns_display())
    }
}

fn join<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

// ============================================================================
// RETURNS
// ============================================================================

/// Values produced by one call.
pub type Returned = SmallVec<[Value; 1]>;

/// Return type of a typed rule.
///
/// Only `bool` passes registration; the other implementations exist so that
/// a wrongly-shaped rule is refused with a descriptive error instead of
/// failing to compile at a distance.
pub trait IntoReturn {
    /// Declared kinds, one per returned value.
    fn kinds() -> SmallVec<[Kind; 2]>;

    /// Converts into runtime values.
    fn into_values(self) -> Returned;
}

macro_rules! single_return {
    ($($t:ty => $kind:expr),* $(,)?) => {
        $(
            impl IntoReturn for $t {
                fn kinds() -> SmallVec<[Kind; 2]> {
                    smallvec::smallvec![$kind]
                }

                fn into_values(self) -> Returned {
                    smallvec::smallvec![Value::from(self)]
                }
            }
        )*
    };
}

single_return! {
    bool => Kind::Bool,
    i64 => Kind::SignedInt,
    u64 => Kind::UnsignedInt,
    f64 => Kind::Float,
    String => Kind::String,
}

impl IntoReturn for () {
    fn kinds() -> SmallVec<[Kind; 2]> {
        SmallVec::new()
    }

    fn into_values(self) -> Returned {
        SmallVec::new()
    }
}

impl<A: IntoReturn, B: IntoReturn> IntoReturn for (A, B) {
    fn kinds() -> SmallVec<[Kind; 2]> {
        let mut kinds = A::kinds();
        kinds.extend(B::kinds());
        kinds
    }

    fn into_values(self) -> Returned {
        let mut values = self.0.into_values();
        values.extend(self.1.into_values());
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variadic_must_be_last() {
        let bad = Signature::new(
            [Param::variadic("i64"), Param::positional("string")],
            [Kind::Bool],
        );
        assert!(bad.check().unwrap_err().contains("not last"));

        let sig = Signature::new(
            [Param::positional("string"), Param::variadic("i64")],
            [Kind::Bool],
        );
        assert_eq!(sig.check(), Ok(()));
        assert_eq!(sig.arity(), 1);
        assert!(sig.is_variadic());
        assert_eq!(sig.to_string(), "fn(string, ...i64) -> (bool)");
    }

    #[test]
    fn return_shapes() {
        assert_eq!(bool::kinds().as_slice(), [Kind::Bool]);
        assert_eq!(<(bool, String)>::kinds().as_slice(), [Kind::Bool, Kind::String]);
        assert!(<()>::kinds().is_empty());
        assert_eq!((true, 1i64).into_values().len(), 2);
    }
}
