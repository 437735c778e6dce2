//! Type-erased rule functions.
//!
//! Every rule, whatever its Rust signature, is stored as a [`Callable`]: a
//! [`Signature`] plus one closure over `(&[Value], &dyn FieldSource)`. The
//! adapter that binds typed parameters is generated once, at registration,
//! so invocation never inspects types.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{CallError, Value};
use crate::invoke::adapt::{ArgCursor, RuleArg};
use crate::invoke::signature::{IntoReturn, Param, Returned, Signature};

/// Read access to sibling fields of the value under validation.
pub trait FieldSource {
    /// Value of `field`, which may be a dotted path.
    fn get(&self, field: &str) -> Option<Value>;
}

/// A field source with no fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFields;

impl FieldSource for NoFields {
    fn get(&self, _field: &str) -> Option<Value> {
        None
    }
}

type Body = dyn Fn(&[Value], &dyn FieldSource) -> Result<Returned, CallError> + Send + Sync;

/// A rule function with its declared signature.
#[derive(Clone)]
pub struct Callable {
    signature: Signature,
    body: Arc<Body>,
}

impl Callable {
    /// Wraps a typed closure or function.
    pub fn new<M>(f: impl IntoCallable<M>) -> Self {
        f.into_callable()
    }

    /// Builds a callable from a hand-written signature and body.
    ///
    /// The body receives the raw arguments and the caller's field source;
    /// it is responsible for honoring `signature`.
    pub fn from_parts<F>(signature: Signature, body: F) -> Self
    where
        F: Fn(&[Value], &dyn FieldSource) -> Result<Returned, CallError> + Send + Sync + 'static,
    {
        Self {
            signature,
            body: Arc::new(body),
        }
    }

    /// Declared signature.
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Runs the body with no field source.
    ///
    /// # Errors
    ///
    /// Returns [`CallError`] if an argument cannot be adapted or too many
    /// were supplied.
    pub fn call(&self, args: &[Value]) -> Result<Returned, CallError> {
        (self.body)(args, &NoFields)
    }

    /// Runs the body against `fields`.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Self::call).
    pub fn call_with(&self, args: &[Value], fields: &dyn FieldSource) -> Result<Returned, CallError> {
        (self.body)(args, fields)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("signature", &self.signature.to_string())
            .finish_non_exhaustive()
    }
}

/// Conversion of a typed function into a [`Callable`].
///
/// Implemented for every `Fn(A1, .., An) -> R` with `n <= 6` where each
/// `Ai` is a [`RuleArg`] and `R` is an [`IntoReturn`]. `M` is an inference
/// marker and never named by callers.
pub trait IntoCallable<M>: Send + Sync + 'static {
    /// Performs the conversion.
    fn into_callable(self) -> Callable;
}

impl IntoCallable<Callable> for Callable {
    fn into_callable(self) -> Callable {
        self
    }
}

macro_rules! impl_into_callable {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg,)*> IntoCallable<fn($($arg,)*) -> Ret> for Func
        where
            Func: Fn($($arg),*) -> Ret + Send + Sync + 'static,
            Ret: IntoReturn,
            $($arg: RuleArg,)*
        {
            #[allow(non_snake_case, unused_mut)]
            fn into_callable(self) -> Callable {
                let params: &[Param] = &[$(<$arg as RuleArg>::param()),*];
                let signature = Signature::new(params.iter().copied(), Ret::kinds());
                Callable::from_parts(signature, move |args: &[Value], _fields: &dyn FieldSource| {
                    let mut cursor = ArgCursor::new(args);
                    $(let $arg = <$arg as RuleArg>::take(&mut cursor)?;)*
                    cursor.finish()?;
                    Ok((self)($($arg),*).into_values())
                })
            }
        }
    };
}

impl_into_callable!();
impl_into_callable!(A1);
impl_into_callable!(A1, A2);
impl_into_callable!(A1, A2, A3);
impl_into_callable!(A1, A2, A3, A4);
impl_into_callable!(A1, A2, A3, A4, A5);
impl_into_callable!(A1, A2, A3, A4, A5, A6);
