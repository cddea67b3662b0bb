//! # Error Ledger
//!
//! The ledger is the per-instance record of *current* validation failures.
//! A previously-invalid property that is set to a valid value disappears
//! from the ledger on the next attempt, so the ledger never carries stale
//! entries for properties that have since recovered.
//!
//! # Architecture Note
//! [`merge_error_state`] is pure: it takes the current ledger by reference
//! and returns a new one inside an [`ErrorState`] value, so the boolean
//! outcome and the ledger it belongs to travel together instead of through
//! hidden shared mutable state. On the valid path it removes the property's
//! related records; on the invalid path it appends a fresh record and leaves
//! earlier records in place. The per-property uniqueness that setter flows
//! guarantee is maintained by [`StateTable`](crate::StateTable), which drops
//! a property's stale record before merging a re-validation.

use crate::validate::Validator;

/// The most recent validation failure for one property.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord<V> {
    /// Public property name, as declared in the owning rule.
    pub property: &'static str,
    /// The value that failed validation.
    pub value: V,
    /// The validator's fixed failure message.
    pub message: String,
}

/// Ordered collection of validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLedger<V> {
    records: Vec<ErrorRecord<V>>,
}

impl<V> Default for ErrorLedger<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ErrorLedger<V> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All current records, in the order their properties failed.
    pub fn records(&self) -> &[ErrorRecord<V>] {
        &self.records
    }

    /// The first record for `property`, if any.
    pub fn record_for(&self, property: &str) -> Option<&ErrorRecord<V>> {
        self.records.iter().find(|r| r.property == property)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorRecord<V>> {
        self.records.iter()
    }

    pub(crate) fn remove(&mut self, property: &str) {
        self.records.retain(|r| r.property != property);
    }

    fn push(&mut self, record: ErrorRecord<V>) {
        self.records.push(record);
    }
}

impl<'a, V> IntoIterator for &'a ErrorLedger<V> {
    type Item = &'a ErrorRecord<V>;
    type IntoIter = std::slice::Iter<'a, ErrorRecord<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Outcome of merging one property's validation into a ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState<V> {
    pub valid: bool,
    pub errors: ErrorLedger<V>,
}

/// Re-validates `property` against `validator` and merges the outcome into a
/// copy of `ledger`.
///
/// When the value is valid, the property's related records are removed; when
/// it is invalid, a fresh record is appended and any earlier records stay in
/// place. Records for other properties are never touched either way.
pub fn merge_error_state<V: Clone>(
    value: &V,
    property: &'static str,
    validator: &Validator<V>,
    ledger: &ErrorLedger<V>,
) -> ErrorState<V> {
    let mut errors = ledger.clone();
    let valid = validator.check(value);

    if valid {
        errors.remove(property);
    } else {
        errors.push(ErrorRecord {
            property,
            value: value.clone(),
            message: validator.message().to_string(),
        });
    }

    ErrorState { valid, errors }
}
