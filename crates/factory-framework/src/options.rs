//! # Bulk State Synchronizer
//!
//! Applies a whole options object to a [`StateTable`] behind an
//! all-or-nothing gate: the object is deep-validated first, and if *any*
//! field fails, no setter runs and the instance state is untouched. Once the
//! gate passes, each present field commits independently through the ordinary
//! setter path, so one field's failure never blocks its siblings.
//!
//! # Architecture Note
//! "Absent" is a first-class `Option` per property on the typed options
//! struct, not a runtime existence check on a dynamic object. Fields are
//! applied in rule definition order; later setters observe earlier ledger and
//! state changes, which cross-field validators may rely on.

use crate::error::FrameworkError;
use crate::ledger::{merge_error_state, ErrorLedger};
use crate::rule::RuleKey;
use crate::state::StateTable;
use std::fmt::Debug;
use tracing::{debug, info, warn};

/// Typed options object for a factory type.
///
/// Each declared property maps to an optional field; `value_of` returns a
/// copy of the submitted value when the field is present.
pub trait StateOptions {
    type Key: RuleKey;
    type Value: Clone;

    fn value_of(&self, key: Self::Key) -> Option<Self::Value>;
}

impl<K: RuleKey, V: Clone + Debug> StateTable<K, V> {
    /// Deep-validates every present field of `options` into a fresh ledger.
    ///
    /// The instance's own state and ledger are untouched; an empty result
    /// means the object is fully valid. `scope` names the object being
    /// validated in the logs.
    pub fn validate_all<O>(&self, scope: &str, options: &O) -> Result<ErrorLedger<V>, FrameworkError>
    where
        O: StateOptions<Key = K, Value = V>,
    {
        let mut ledger = ErrorLedger::new();

        for (key, property) in self.rule().iter() {
            let Some(value) = options.value_of(key) else {
                continue;
            };
            let validator = self.validators().get(key)?;

            let state = merge_error_state(&value, property, validator, &ledger);
            if !state.valid {
                debug!(scope, property, message = validator.message(), "Deep validation failed");
            }
            ledger = state.errors;
        }

        Ok(ledger)
    }

    /// Validates `options` as a whole, then applies the present fields.
    ///
    /// 1. `None` is a no-op and returns the current ledger.
    /// 2. If deep validation reports any failure, those failures are returned
    ///    immediately: zero setters run and state is unchanged.
    /// 3. Otherwise each present field is applied through [`StateTable::set`]
    ///    in rule definition order, and the final instance ledger is
    ///    returned.
    pub fn apply_options<O>(
        &mut self,
        options: Option<&O>,
    ) -> Result<ErrorLedger<V>, FrameworkError>
    where
        O: StateOptions<Key = K, Value = V>,
    {
        let Some(options) = options else {
            return Ok(self.errors().clone());
        };

        let gate = self.validate_all("options", options)?;
        if !gate.is_empty() {
            warn!(failures = gate.len(), "Options rejected by whole-object validation");
            return Ok(gate);
        }

        let keys: Vec<K> = self.rule().keys().collect();
        let mut applied = 0usize;
        for key in keys {
            if let Some(value) = options.value_of(key) {
                self.set(key, value)?;
                applied += 1;
            }
        }

        info!(applied, "Options applied");
        Ok(self.errors().clone())
    }
}
