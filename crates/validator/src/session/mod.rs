//! Validation sessions.
//!
//! A [`Session`] binds one [`DataSource`] to the registries. It owns a
//! private rule tier, so rules registered on a session never leak into
//! other sessions or the global registry.
//!
//! Resolution order, after alias normalization:
//!
//! 1. rules owned by the data source ([`DataSource::method_named`])
//! 2. session rules
//! 3. global custom rules
//! 4. built-ins (field rules such as `eqField` read from this session)

mod source;

use std::fmt;
use std::sync::Arc;

pub use source::{DataSource, MapData, StructData};

use crate::foundation::{InvokeError, RegistryError, Value};
use crate::invoke::{Callable, FieldSource, Handle, IntoCallable, NoFields};
use crate::registry::{GlobalRegistry, Registry, validator_name};
use crate::validators;

/// One validation run over one data source.
pub struct Session {
    source: Arc<dyn DataSource>,
    validators: Registry,
    global: Arc<GlobalRegistry>,
}

impl Session {
    /// Creates a session over `source` backed by the shared global registry.
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self::from_parts(Arc::new(source), GlobalRegistry::shared())
    }

    fn from_parts(source: Arc<dyn DataSource>, global: Arc<GlobalRegistry>) -> Self {
        Self {
            source,
            validators: Registry::new("session"),
            global,
        }
    }

    /// Starts a builder.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// The data under validation.
    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    /// The global registry this session falls back to.
    pub const fn global(&self) -> &Arc<GlobalRegistry> {
        &self.global
    }

    /// Value of a field of the data source; dotted names descend.
    pub fn get(&self, field: &str) -> Option<Value> {
        self.source.get(field)
    }

    // ------------------------------------------------------------------
    // registration
    // ------------------------------------------------------------------

    /// Adds a rule visible only to this session, stored under `name` as
    /// given. It shadows global rules of the same name.
    ///
    /// # Errors
    ///
    /// [`RegistryError`] if the rule does not return exactly one bool.
    pub fn register<M>(
        &mut self,
        name: impl Into<String>,
        rule: impl IntoCallable<M>,
    ) -> Result<(), RegistryError> {
        self.validators.register(name, rule)
    }

    /// Adds a prepared callable as a session rule.
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn register_callable(
        &mut self,
        name: impl Into<String>,
        callable: Callable,
    ) -> Result<(), RegistryError> {
        self.validators.register_callable(name, callable)
    }

    /// Adds several session rules, stopping at the first refusal.
    ///
    /// # Errors
    ///
    /// The first [`RegistryError`] encountered.
    pub fn register_all<N, I>(&mut self, rules: I) -> Result<(), RegistryError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Callable)>,
    {
        self.validators.register_all(rules)
    }

    // ------------------------------------------------------------------
    // lookup
    // ------------------------------------------------------------------

    /// Finds the rule `name` resolves to for this session.
    pub fn resolve(&self, name: &str) -> Option<Handle> {
        let name = validator_name(name);

        if let Some(handle) = self.source.method_named(name) {
            tracing::trace!(validator = name, tier = "method", "resolved validator");
            return Some(handle);
        }
        if let Some(handle) = self.validators.handle(name) {
            tracing::trace!(validator = name, tier = "session", "resolved validator");
            return Some(handle.clone());
        }
        self.global.custom(name).or_else(|| self.global.builtin(name))
    }

    /// Returns true if a session or global custom rule is registered under
    /// exactly `name`.
    ///
    /// Aliases are not normalized; built-ins and data-source methods are not
    /// considered.
    pub fn has_validator(&self, name: &str) -> bool {
        self.validators.contains(name) || self.global.has_validator(name)
    }

    /// Raw custom function for `name`: session rules first, then global
    /// custom rules.
    ///
    /// # Errors
    ///
    /// [`InvokeError::UnknownValidator`] if neither tier has it.
    pub fn validator_func(&self, name: &str) -> Result<Callable, InvokeError> {
        let canonical = validator_name(name);
        match self.validators.callable(canonical) {
            Some(callable) => Ok(callable.clone()),
            None => self.global.validator_func(canonical),
        }
    }

    // ------------------------------------------------------------------
    // invocation
    // ------------------------------------------------------------------

    /// Resolves `name` and invokes it with `args`, giving it access to this
    /// session's fields.
    ///
    /// # Errors
    ///
    /// [`InvokeError::UnknownValidator`] if `name` resolves to nothing, plus
    /// every error of [`Handle::call_with`].
    pub fn validate(&self, name: &str, args: &[Value]) -> Result<bool, InvokeError> {
        let handle = self
            .resolve(name)
            .ok_or_else(|| InvokeError::UnknownValidator {
                name: validator_name(name).to_owned(),
            })?;
        handle.call_with(args, self)
    }

    /// Invokes an already resolved handle against this session's fields.
    ///
    /// # Errors
    ///
    /// Same as [`Handle::call_with`].
    pub fn invoke(&self, handle: &Handle, args: &[Value]) -> Result<bool, InvokeError> {
        handle.call_with(args, self)
    }

    // ------------------------------------------------------------------
    // field rules
    // ------------------------------------------------------------------

    /// The value is not empty for its kind.
    pub fn required(&self, value: &Value) -> bool {
        validators::required(value)
    }

    /// The value equals field `field`.
    pub fn eq_field(&self, value: &Value, field: &str) -> bool {
        validators::eq_field(self, value, field)
    }

    /// The value differs from field `field`.
    pub fn ne_field(&self, value: &Value, field: &str) -> bool {
        validators::ne_field(self, value, field)
    }

    /// The value is longer than field `field`.
    pub fn gt_field(&self, value: &Value, field: &str) -> bool {
        validators::gt_field(self, value, field)
    }

    /// The value is at least as long as field `field`.
    pub fn gte_field(&self, value: &Value, field: &str) -> bool {
        validators::gte_field(self, value, field)
    }

    /// The value is shorter than field `field`.
    pub fn lt_field(&self, value: &Value, field: &str) -> bool {
        validators::lt_field(self, value, field)
    }

    /// The value is at most as long as field `field`.
    pub fn lte_field(&self, value: &Value, field: &str) -> bool {
        validators::lte_field(self, value, field)
    }
}

impl FieldSource for Session {
    fn get(&self, field: &str) -> Option<Value> {
        self.source.get(field)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("source", &self.source)
            .field("validators", &self.validators.names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    source: Option<Arc<dyn DataSource>>,
    global: Option<Arc<GlobalRegistry>>,
    validators: Vec<(String, Callable)>,
}

impl SessionBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data under validation. Defaults to no fields.
    pub fn source(mut self, source: impl DataSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Sets a data source that is shared with other owners.
    pub fn shared_source(mut self, source: Arc<dyn DataSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the global registry. Defaults to [`GlobalRegistry::shared`].
    pub fn global(mut self, global: Arc<GlobalRegistry>) -> Self {
        self.global = Some(global);
        self
    }

    /// Adds a session rule.
    pub fn validator<M>(mut self, name: impl Into<String>, rule: impl IntoCallable<M>) -> Self {
        self.validators.push((name.into(), rule.into_callable()));
        self
    }

    /// Builds the session.
    ///
    /// # Errors
    ///
    /// The first [`RegistryError`] among the added rules.
    pub fn build(self) -> Result<Session, RegistryError> {
        let source = self.source.unwrap_or_else(|| Arc::new(NoFields));
        let global = self.global.unwrap_or_else(GlobalRegistry::shared);
        let mut session = Session::from_parts(source, global);
        session.register_all(self.validators)?;
        Ok(session)
    }
}

impl fmt::Debug for SessionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionBuilder")
            .field("source", &self.source)
            .field("has_global", &self.global.is_some())
            .field("validators", &self.validators.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::foundation::object;

    fn session() -> Session {
        Session::builder()
            .source(MapData::new(object([
                ("pass", Value::from("secret")),
                ("confirm", Value::from("secret")),
                ("age", Value::from(30)),
            ])))
            .global(Arc::new(GlobalRegistry::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn field_rules_by_name_read_session_data() {
        let s = session();
        assert_eq!(s.validate("eqField", &args!["secret", "confirm"]), Ok(true));
        assert_eq!(s.validate("neField", &args!["secret", "confirm"]), Ok(false));
        assert_eq!(s.validate("eqField", &args!["secret", "nope"]), Ok(false));
        assert!(s.eq_field(&Value::from(30), "age"));
    }

    #[test]
    fn unknown_validator_is_fatal() {
        let s = session();
        assert_eq!(
            s.validate("noSuchRule", &args![1]),
            Err(InvokeError::UnknownValidator {
                name: "noSuchRule".into()
            })
        );
    }

    #[test]
    fn session_rules_shadow_globals() {
        let mut s = session();
        s.register("min", |_: Value, _: i64| true).unwrap();
        assert_eq!(s.validate("min", &args![0, 10]), Ok(true));
        assert!(s.has_validator("min"));
        assert!(!s.global().has_validator("min"));
    }

    #[test]
    fn builder_refuses_bad_rule() {
        let err = Session::builder()
            .global(Arc::new(GlobalRegistry::empty()))
            .validator("bad", |_: Value| 0u64)
            .build()
            .unwrap_err();
        assert_eq!(err.name(), "bad");
    }

    #[test]
    fn default_source_has_no_fields() {
        let s = Session::builder()
            .global(Arc::new(GlobalRegistry::new()))
            .build()
            .unwrap();
        assert_eq!(s.get("anything"), None);
        assert_eq!(s.validate("eqField", &args![1, "x"]), Ok(false));
    }
}
