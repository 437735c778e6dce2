//! The process-wide tier: built-in rules plus user rules shared by every
//! session.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::foundation::{InvokeError, RegistryError};
use crate::invoke::{Callable, Handle, IntoCallable};
use crate::registry::alias::validator_name;
use crate::registry::table::Registry;
use crate::validators;

static SHARED: LazyLock<Arc<GlobalRegistry>> = LazyLock::new(|| Arc::new(GlobalRegistry::new()));

/// Built-in rules and process-wide custom rules.
///
/// Built-ins are fixed at construction. Custom rules are added through a
/// shared reference; register them during start-up, before sessions start
/// validating concurrently, since a session sees the custom tier as it is at
/// resolution time.
#[derive(Debug)]
pub struct GlobalRegistry {
    builtins: Registry,
    custom: RwLock<Registry>,
}

impl GlobalRegistry {
    /// Creates an isolated registry holding the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_builtins(validators::builtin_registry())
    }

    /// Creates an isolated registry with no rules at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_builtins(Registry::new("builtin"))
    }

    fn with_builtins(builtins: Registry) -> Self {
        Self {
            builtins,
            custom: RwLock::new(Registry::new("global")),
        }
    }

    /// The registry shared by the whole process.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Adds a process-wide custom rule, stored under `name` as given.
    ///
    /// # Errors
    ///
    /// [`RegistryError`] if the rule does not return exactly one bool.
    pub fn register<M>(
        &self,
        name: impl Into<String>,
        rule: impl IntoCallable<M>,
    ) -> Result<(), RegistryError> {
        self.custom.write().register(name, rule)
    }

    /// Adds a prepared callable as a process-wide custom rule.
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn register_callable(
        &self,
        name: impl Into<String>,
        callable: Callable,
    ) -> Result<(), RegistryError> {
        self.custom.write().register_callable(name, callable)
    }

    /// Adds several custom rules, stopping at the first refusal.
    ///
    /// # Errors
    ///
    /// The first [`RegistryError`] encountered.
    pub fn register_all<N, I>(&self, rules: I) -> Result<(), RegistryError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Callable)>,
    {
        self.custom.write().register_all(rules)
    }

    /// Resolves `name` after alias normalization: custom rules first, then
    /// built-ins.
    pub fn resolve(&self, name: &str) -> Option<Handle> {
        let name = validator_name(name);
        self.custom(name).or_else(|| self.builtin(name))
    }

    /// Custom rule registered under exactly `name`.
    pub fn custom(&self, name: &str) -> Option<Handle> {
        let hit = self.custom.read().handle(name).cloned();
        if hit.is_some() {
            tracing::trace!(validator = name, tier = "global", "resolved validator");
        }
        hit
    }

    /// Built-in rule registered under exactly `name`.
    pub fn builtin(&self, name: &str) -> Option<Handle> {
        let hit = self.builtins.handle(name).cloned();
        if hit.is_some() {
            tracing::trace!(validator = name, tier = "builtin", "resolved validator");
        }
        hit
    }

    /// Returns true if a custom rule is registered under exactly `name`.
    ///
    /// Built-ins and aliases are not considered.
    pub fn has_validator(&self, name: &str) -> bool {
        self.custom.read().contains(name)
    }

    /// Raw custom function registered under `name`, after alias
    /// normalization.
    ///
    /// # Errors
    ///
    /// [`InvokeError::UnknownValidator`] if there is none.
    pub fn validator_func(&self, name: &str) -> Result<Callable, InvokeError> {
        let name = validator_name(name);
        self.custom
            .read()
            .callable(name)
            .cloned()
            .ok_or_else(|| InvokeError::UnknownValidator {
                name: name.to_owned(),
            })
    }

    /// Names of the built-in rules.
    pub fn builtin_names(&self) -> Vec<String> {
        self.builtins.names().map(str::to_owned).collect()
    }

    /// Names of the custom rules.
    pub fn custom_names(&self) -> Vec<String> {
        self.custom.read().names().map(str::to_owned).collect()
    }
}

impl Default for GlobalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Value, args};

    #[test]
    fn custom_shadows_builtin() {
        let registry = GlobalRegistry::new();
        assert_eq!(registry.resolve("min").unwrap().call(&args![1, 5]), Ok(false));

        registry.register("min", |_: Value, _: i64| true).unwrap();
        assert_eq!(registry.resolve("min").unwrap().call(&args![1, 5]), Ok(true));
    }

    #[test]
    fn has_validator_ignores_builtins_and_aliases() {
        let registry = GlobalRegistry::new();
        assert!(registry.resolve("minLength").is_some());
        assert!(!registry.has_validator("minLength"));

        registry.register("minLength", |_: Value, _: i64| true).unwrap();
        assert!(registry.has_validator("minLength"));
        assert!(!registry.has_validator("minLen"));
    }

    #[test]
    fn resolve_normalizes_aliases() {
        let registry = GlobalRegistry::new();
        let handle = registry.resolve("minLen").unwrap();
        assert_eq!(handle.name(), "minLength");
    }

    #[test]
    fn validator_func_is_custom_only() {
        let registry = GlobalRegistry::new();
        assert_eq!(
            registry.validator_func("min").unwrap_err(),
            InvokeError::UnknownValidator { name: "min".into() }
        );

        registry.register("odd", |n: i64| n % 2 != 0).unwrap();
        let f = registry.validator_func("odd").unwrap();
        assert_eq!(f.call(&args![3]).unwrap().as_slice(), [Value::from(true)]);
    }

    #[test]
    fn empty_has_no_builtins() {
        let registry = GlobalRegistry::empty();
        assert!(registry.resolve("required").is_none());
        assert!(registry.builtin_names().is_empty());
    }
}
