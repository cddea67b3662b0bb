//! # Rule Registry
//!
//! A [`Rule`] is the fixed mapping from a factory type's internal identifiers
//! to its public, semantic property names (e.g. `KeyframeProp::Markers ->
//! "markers"`). One rule is defined per factory type, at type definition
//! time, and shared by every instance of that type; it is pure data and is
//! never mutated after construction.
//!
//! # Architecture Note
//! Getters and setters both resolve property names through the same rule, so
//! they can never disagree about which key a name belongs to. Definition
//! order is preserved and is the canonical order in which the bulk
//! synchronizer applies options, which matters when cross-field validators
//! read the values committed by earlier siblings.

use crate::error::FrameworkError;
use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for rule identifiers.
///
/// In practice this is a small fieldless `enum` per factory type, which gives
/// compile-time exhaustiveness over the declared properties instead of
/// stringly-typed lookup.
pub trait RuleKey: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> RuleKey for T where T: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

/// Immutable, ordered mapping from internal identifier to public property
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<K: RuleKey> {
    entries: Vec<(K, &'static str)>,
}

impl<K: RuleKey> Rule<K> {
    /// Defines a rule from `(identifier, public name)` pairs.
    ///
    /// Fails with [`FrameworkError::DuplicateName`] or
    /// [`FrameworkError::DuplicateKey`] when two entries collide. This is
    /// checked at definition time so that accessor collisions are impossible
    /// later.
    pub fn new(
        entries: impl IntoIterator<Item = (K, &'static str)>,
    ) -> Result<Self, FrameworkError> {
        let entries: Vec<(K, &'static str)> = entries.into_iter().collect();

        for (i, (key, name)) in entries.iter().enumerate() {
            for (earlier_key, earlier_name) in &entries[..i] {
                if key == earlier_key {
                    return Err(FrameworkError::DuplicateKey(format!("{key:?}")));
                }
                if name == earlier_name {
                    return Err(FrameworkError::DuplicateName((*name).to_string()));
                }
            }
        }

        Ok(Self { entries })
    }

    /// Looks up the public name declared for `key`.
    pub fn name_of(&self, key: K) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, name)| *name)
    }

    /// Reverse lookup: the identifier declared for a public name.
    pub fn key_of(&self, name: &str) -> Option<K> {
        self.entries
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(key, _)| *key)
    }

    /// Iterates `(key, name)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterates the declared identifiers in definition order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
