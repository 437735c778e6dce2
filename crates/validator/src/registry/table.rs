//! A single tier of named rules.

use indexmap::IndexMap;

use crate::foundation::RegistryError;
use crate::invoke::{Callable, Handle, IntoCallable};

#[derive(Debug, Clone)]
struct Entry {
    callable: Callable,
    handle: Handle,
}

/// Named rules of one tier.
///
/// Every entry is checked on the way in, so a stored rule always returns
/// exactly one bool. Registering an existing name replaces it.
#[derive(Debug, Clone)]
pub struct Registry {
    tier: &'static str,
    entries: IndexMap<String, Entry>,
}

impl Registry {
    /// Creates an empty tier. `tier` only labels log events.
    #[must_use]
    pub fn new(tier: &'static str) -> Self {
        Self {
            tier,
            entries: IndexMap::new(),
        }
    }

    /// Label of this tier.
    pub const fn tier(&self) -> &'static str {
        self.tier
    }

    /// Registers a typed function under `name`, stored as given.
    ///
    /// # Errors
    ///
    /// See [`register_callable`](Self::register_callable).
    pub fn register<M>(
        &mut self,
        name: impl Into<String>,
        rule: impl IntoCallable<M>,
    ) -> Result<(), RegistryError> {
        self.register_callable(name, rule.into_callable())
    }

    /// Registers a prepared callable under `name`, stored as given.
    ///
    /// # Errors
    ///
    /// [`RegistryError`] if the callable does not declare exactly one bool
    /// result or its signature is malformed. Nothing is stored then.
    pub fn register_callable(
        &mut self,
        name: impl Into<String>,
        callable: Callable,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let handle = Handle::new(name.as_str(), callable.clone())?;

        tracing::debug!(
            validator = %name,
            tier = self.tier,
            arity = callable.signature().arity(),
            "registered validator"
        );

        self.entries.insert(name, Entry { callable, handle });
        Ok(())
    }

    /// Registers every `(name, callable)` pair in order.
    ///
    /// # Errors
    ///
    /// Stops at the first refused entry; earlier entries stay registered.
    pub fn register_all<N, I>(&mut self, rules: I) -> Result<(), RegistryError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Callable)>,
    {
        rules
            .into_iter()
            .try_for_each(|(name, callable)| self.register_callable(name, callable))
    }

    /// Handle registered under exactly `name`.
    pub fn handle(&self, name: &str) -> Option<&Handle> {
        self.entries.get(name).map(|e| &e.handle)
    }

    /// Raw callable registered under exactly `name`.
    pub fn callable(&self, name: &str) -> Option<&Callable> {
        self.entries.get(name).map(|e| &e.callable)
    }

    /// Returns true if `name` is registered here.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
