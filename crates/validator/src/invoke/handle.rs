//! Named, validated callables and the dynamic invoker.

use std::sync::Arc;

use crate::foundation::{InvokeError, RegistryError, Value};
use crate::invoke::callable::{Callable, FieldSource, NoFields};

/// A callable that passed registration, with the name it was registered as.
///
/// Constructing a handle checks the return shape, so invoking one can only
/// fail on arguments or on a body that breaks its own signature.
#[derive(Debug, Clone)]
pub struct Handle {
    name: Arc<str>,
    callable: Callable,
}

impl Handle {
    /// Validates `callable` as a rule named `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidReturn`] unless the callable declares exactly
    /// one bool result, [`RegistryError::InvalidSignature`] if a variadic
    /// parameter is not last.
    pub fn new(name: impl Into<Arc<str>>, callable: Callable) -> Result<Self, RegistryError> {
        let name = name.into();
        let signature = callable.signature();

        if !signature.returns_single_bool() {
            return Err(RegistryError::InvalidReturn {
                name: name.to_string(),
                declared: signature.returns_display(),
            });
        }
        signature
            .check()
            .map_err(|reason| RegistryError::InvalidSignature {
                name: name.to_string(),
                reason,
            })?;

        Ok(Self { name, callable })
    }

    /// Name the handle was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying callable.
    pub const fn callable(&self) -> &Callable {
        &self.callable
    }

    /// Invokes the rule with no field source.
    ///
    /// # Errors
    ///
    /// See [`call_with`](Self::call_with).
    pub fn call(&self, args: &[Value]) -> Result<bool, InvokeError> {
        self.call_with(args, &NoFields)
    }

    /// Invokes the rule, giving it access to sibling fields.
    ///
    /// Supplying fewer arguments than declared positional parameters is
    /// logged and tolerated; the missing ones are bound as null.
    ///
    /// # Errors
    ///
    /// - [`InvokeError::ArgumentAdaptation`] if an argument cannot become its
    ///   parameter type
    /// - [`InvokeError::TooManyArguments`] if arguments are left over
    /// - [`InvokeError::InvalidReturn`] if the body produced anything but
    ///   one bool
    pub fn call_with(&self, args: &[Value], fields: &dyn FieldSource) -> Result<bool, InvokeError> {
        let declared = self.callable.signature().arity();
        if args.len() < declared {
            tracing::warn!(
                validator = %self.name,
                declared,
                supplied = args.len(),
                "fewer arguments than declared parameters"
            );
        }

        let returned = self
            .callable
            .call_with(args, fields)
            .map_err(|err| InvokeError::from_call(&self.name, err))?;

        match returned.as_slice() {
            [Value::Bool(ok)] => Ok(*ok),
            other => Err(InvokeError::InvalidReturn {
                name: self.name.to_string(),
                found: other
                    .iter()
                    .map(|v| v.kind().name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Calls `handle` with `args` and returns its verdict.
///
/// # Errors
///
/// Same as [`Handle::call`].
pub fn invoke(handle: &Handle, args: &[Value]) -> Result<bool, InvokeError> {
    handle.call(args)
}
