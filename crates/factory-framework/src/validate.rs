//! # Validation Capability
//!
//! Each concrete factory type owns a [`Validators`] table mapping its rule
//! keys to per-property predicates. The framework depends on this capability,
//! not on any specific rules: "must be a string" and friends live with the
//! factory, next to the rule that declares the property.
//!
//! Predicates are `Fn` trait objects, so a validator may capture state
//! (shared lookup tables, sibling-value handles) in addition to inspecting
//! the submitted value.
//!
//! A key with no registered validator is a configuration error
//! ([`FrameworkError::MissingValidator`]), reported loudly through `Result`
//! rather than silently treated as an invalid value.

use crate::error::FrameworkError;
use crate::rule::RuleKey;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One property's validation rule: a predicate plus its fixed failure
/// message.
pub struct Validator<V> {
    check: Arc<dyn Fn(&V) -> bool + Send + Sync>,
    message: &'static str,
}

impl<V> Validator<V> {
    pub fn new(check: impl Fn(&V) -> bool + Send + Sync + 'static, message: &'static str) -> Self {
        Self {
            check: Arc::new(check),
            message,
        }
    }

    /// Runs the predicate. No ledger involvement; see
    /// [`merge_error_state`](crate::merge_error_state) for the merging form.
    pub fn check(&self, value: &V) -> bool {
        (self.check)(value)
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl<V> Clone for Validator<V> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
            message: self.message,
        }
    }
}

impl<V> fmt::Debug for Validator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Per-key validator lookup table, owned by a concrete factory type and
/// fixed at type definition time.
#[derive(Debug, Clone)]
pub struct Validators<K: RuleKey, V> {
    table: HashMap<K, Validator<V>>,
}

impl<K: RuleKey, V> Default for Validators<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RuleKey, V> Validators<K, V> {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Registers a validator for `key`. Builder-style so a factory type can
    /// declare its whole table in one expression.
    pub fn with(
        mut self,
        key: K,
        check: impl Fn(&V) -> bool + Send + Sync + 'static,
        message: &'static str,
    ) -> Self {
        self.table.insert(key, Validator::new(check, message));
        self
    }

    /// Looks up the validator registered for `key`.
    ///
    /// A missing entry is a broken factory contract, not bad user data, so it
    /// surfaces as [`FrameworkError::MissingValidator`].
    pub fn get(&self, key: K) -> Result<&Validator<V>, FrameworkError> {
        self.table
            .get(&key)
            .ok_or_else(|| FrameworkError::MissingValidator(format!("{key:?}")))
    }
}
