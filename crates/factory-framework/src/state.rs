//! # State Table & Accessors
//!
//! A [`StateTable`] is the per-instance heart of a factory: it owns the
//! instance's committed values and error ledger, together with the factory
//! type's [`Rule`] and [`Validators`] table, and enforces validate-then-commit
//! on every mutation.
//!
//! # Architecture Note
//! Each factory instance owns its table exclusively: no sharing across
//! instances, so no locking discipline is needed. Setters never return `Err`
//! for invalid *values*; invalidity is reported through the returned ledger.
//! `Err` is reserved for configuration errors (unknown key, missing
//! validator), which indicate a broken factory contract.

use crate::error::FrameworkError;
use crate::ledger::{merge_error_state, ErrorLedger};
use crate::rule::{Rule, RuleKey};
use crate::validate::Validators;
use std::collections::HashMap;
use std::fmt::Debug;
use tracing::{debug, warn};

/// Committed values, ledger, and the declarations they answer to, for one
/// factory instance.
#[derive(Debug, Clone)]
pub struct StateTable<K: RuleKey, V> {
    rule: Rule<K>,
    validators: Validators<K, V>,
    values: HashMap<K, V>,
    ledger: ErrorLedger<V>,
}

impl<K: RuleKey, V: Clone + Debug> StateTable<K, V> {
    /// Creates an empty table for one instance of a factory type.
    pub fn new(rule: Rule<K>, validators: Validators<K, V>) -> Self {
        Self {
            rule,
            validators,
            values: HashMap::new(),
            ledger: ErrorLedger::new(),
        }
    }

    pub fn rule(&self) -> &Rule<K> {
        &self.rule
    }

    pub fn validators(&self) -> &Validators<K, V> {
        &self.validators
    }

    /// Validates `value` for `key` and syncs the instance ledger with the
    /// outcome, keeping the returned boolean and the ledger consistent.
    ///
    /// Fails only on configuration errors: an undeclared key or a key with
    /// no registered validator.
    pub fn is_valid(&mut self, key: K, value: &V) -> Result<bool, FrameworkError> {
        let property = self
            .rule
            .name_of(key)
            .ok_or_else(|| FrameworkError::UnknownKey(format!("{key:?}")))?;
        let validator = self.validators.get(key)?;

        // The instance ledger holds at most one record per property: drop the
        // stale record before merging so a re-failure replaces it.
        let mut ledger = std::mem::take(&mut self.ledger);
        ledger.remove(property);

        let state = merge_error_state(value, property, validator, &ledger);
        if !state.valid {
            warn!(property, message = validator.message(), "Validation failed");
        }
        self.ledger = state.errors;

        Ok(state.valid)
    }

    /// Validates, commits on success, and always returns the current ledger.
    ///
    /// An invalid value is not an `Err`: the value is simply not committed
    /// and the ledger carries the failure.
    pub fn set(&mut self, key: K, value: V) -> Result<&ErrorLedger<V>, FrameworkError> {
        debug!(?key, ?value, "Set");
        if self.is_valid(key, &value)? {
            self.values.insert(key, value);
        }
        Ok(&self.ledger)
    }

    /// Pure read of the committed value for `key`. No validation, no side
    /// effects.
    pub fn get(&self, key: K) -> Option<&V> {
        self.values.get(&key)
    }

    /// The properties currently invalid, each with exactly one record.
    pub fn errors(&self) -> &ErrorLedger<V> {
        &self.ledger
    }

    /// Materializes the committed state as property-name/value pairs, in rule
    /// definition order. Built on demand, never cached; properties that were
    /// never committed are absent.
    pub fn snapshot(&self) -> StateSnapshot<V> {
        let entries = self
            .rule
            .iter()
            .filter_map(|(key, name)| self.values.get(&key).cloned().map(|value| (name, value)))
            .collect();

        StateSnapshot { entries }
    }
}

/// An externally consumable copy of one instance's committed state, keyed by
/// public property name and ordered by rule definition.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot<V> {
    entries: Vec<(&'static str, V)>,
}

impl<V> StateSnapshot<V> {
    pub fn value_of(&self, property: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &V)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Validators;
    use serde_json::{json, Value};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Prop {
        Name,
        Markers,
        Props,
    }

    fn table() -> StateTable<Prop, Value> {
        let rule = Rule::new([(Prop::Name, "name"), (Prop::Markers, "markers")]).unwrap();
        let validators = Validators::new()
            .with(Prop::Name, Value::is_string, "Name must be a string")
            .with(Prop::Markers, Value::is_array, "Markers must be an array");
        StateTable::new(rule, validators)
    }

    #[test]
    fn valid_set_commits_and_leaves_ledger_empty() {
        let mut table = table();

        let ledger = table.set(Prop::Name, json!("Jolene")).unwrap();

        assert!(ledger.is_empty());
        assert_eq!(table.get(Prop::Name), Some(&json!("Jolene")));
    }

    #[test]
    fn invalid_set_records_an_error_without_committing() {
        let mut table = table();

        let ledger = table.set(Prop::Name, json!(9)).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(
            ledger.record_for("name").unwrap().message,
            "Name must be a string"
        );
        assert_eq!(table.get(Prop::Name), None);
    }

    #[test]
    fn invalid_then_valid_set_clears_the_stale_record() {
        let mut table = table();

        table.set(Prop::Name, json!(9)).unwrap();
        assert_eq!(table.errors().len(), 1);

        let ledger = table.set(Prop::Name, json!("Jolene")).unwrap();

        assert!(ledger.is_empty());
        assert_eq!(table.get(Prop::Name), Some(&json!("Jolene")));
    }

    #[test]
    fn repeated_failures_keep_a_single_record_per_property() {
        let mut table = table();

        table.set(Prop::Markers, json!("10")).unwrap();
        table.set(Prop::Markers, json!("11%")).unwrap();

        assert_eq!(table.errors().len(), 1);
        assert_eq!(
            table.errors().record_for("markers").unwrap().value,
            json!("11%")
        );
    }

    #[test]
    fn undeclared_validator_key_is_a_loud_configuration_error() {
        let rule = Rule::new([(Prop::Name, "name"), (Prop::Props, "props")]).unwrap();
        let validators =
            Validators::new().with(Prop::Name, Value::is_string, "Name must be a string");
        let mut table = StateTable::new(rule, validators);

        let result = table.set(Prop::Props, json!({}));

        assert_eq!(
            result.unwrap_err(),
            FrameworkError::MissingValidator("Props".to_string())
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut table = table();

        let result = table.set(Prop::Props, json!({}));

        assert_eq!(
            result.unwrap_err(),
            FrameworkError::UnknownKey("Props".to_string())
        );
    }

    #[test]
    fn snapshot_reflects_committed_values_in_rule_order() {
        let mut table = table();
        table.set(Prop::Markers, json!(["10%"])).unwrap();
        table.set(Prop::Name, json!("bounce")).unwrap();

        let snapshot = table.snapshot();

        let names: Vec<&str> = snapshot.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["name", "markers"]);
        assert_eq!(snapshot.value_of("markers"), Some(&json!(["10%"])));
    }
}
