//! Error types.
//!
//! Every error here is a contract violation on the caller's side: a rule
//! registered with the wrong shape, a name that was never registered, an
//! argument that cannot become the declared parameter type. Ordinary
//! validation failure is never an error, it is `Ok(false)`.

use crate::foundation::value::Kind;

/// A single value could not be adapted to a parameter type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {found}")]
pub struct AdaptError {
    /// Name of the target parameter type.
    pub expected: &'static str,
    /// Kind of the value that was supplied.
    pub found: Kind,
}

impl AdaptError {
    /// Creates an adaptation error.
    #[must_use]
    pub const fn new(expected: &'static str, found: Kind) -> Self {
        Self { expected, found }
    }
}

/// Failure inside a type-erased callable, before its name is known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// Argument at `index` could not be adapted.
    #[error("argument {index}: {source}")]
    Adapt { index: usize, source: AdaptError },

    /// More arguments than the callable accepts.
    #[error("accepts {accepted} arguments, {supplied} supplied")]
    TooManyArguments { accepted: usize, supplied: usize },
}

/// Registration was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The callable does not return exactly one bool.
    #[error("validator `{name}` must return exactly one bool, declares ({declared})")]
    InvalidReturn { name: String, declared: String },

    /// The callable's signature is malformed.
    #[error("validator `{name}` has an invalid signature: {reason}")]
    InvalidSignature { name: String, reason: String },
}

impl RegistryError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::InvalidReturn { .. } | Self::InvalidSignature { .. } => "registration",
        }
    }

    /// Name the registration was attempted under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidReturn { name, .. } | Self::InvalidSignature { name, .. } => name,
        }
    }
}

/// Invocation was refused or produced an unusable result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvokeError {
    /// No validator is registered under the name.
    #[error("unknown validator `{name}`")]
    UnknownValidator { name: String },

    /// An argument could not be adapted to its parameter type.
    #[error("validator `{name}`, argument {index}: {source}")]
    ArgumentAdaptation {
        name: String,
        index: usize,
        source: AdaptError,
    },

    /// More arguments than the validator accepts.
    #[error("validator `{name}` accepts {accepted} arguments, {supplied} supplied")]
    TooManyArguments {
        name: String,
        accepted: usize,
        supplied: usize,
    },

    /// The validator returned something other than one bool.
    #[error("validator `{name}` returned ({found}) instead of one bool")]
    InvalidReturn { name: String, found: String },
}

impl InvokeError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::UnknownValidator { .. } => "lookup",
            Self::ArgumentAdaptation { .. } | Self::TooManyArguments { .. } => "arguments",
            Self::InvalidReturn { .. } => "return",
        }
    }

    /// Name of the validator involved.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::UnknownValidator { name }
            | Self::ArgumentAdaptation { name, .. }
            | Self::TooManyArguments { name, .. }
            | Self::InvalidReturn { name, .. } => name,
        }
    }

    pub(crate) fn from_call(name: &str, err: CallError) -> Self {
        match err {
            CallError::Adapt { index, source } => Self::ArgumentAdaptation {
                name: name.to_owned(),
                index,
                source,
            },
            CallError::TooManyArguments { accepted, supplied } => Self::TooManyArguments {
                name: name.to_owned(),
                accepted,
                supplied,
            },
        }
    }
}

/// Any error raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Invoke(#[from] InvokeError),
}

impl Error {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Registry(e) => e.category(),
            Self::Invoke(e) => e.category(),
        }
    }
}

/// Crate result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
