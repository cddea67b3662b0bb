//! # Framework Errors
//!
//! This module defines the configuration errors used throughout the factory
//! framework. These are programmer/setup errors (a broken contract between a
//! factory type and the framework) and are deliberately kept separate from
//! ordinary validation failures, which are never `Err` values and travel only
//! through the [`ErrorLedger`](crate::ErrorLedger).

/// Errors that indicate a misconfigured factory type.
///
/// Every variant here is fatal at definition time or on first use: a rule
/// with colliding names, or a declared rule key with no registered validator,
/// means the factory's contract is broken, not that a caller supplied bad
/// data.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    /// Two rule entries map to the same public property name, which would
    /// make the generated getter/setter pairs collide.
    #[error("Duplicate property name in rule: {0}")]
    DuplicateName(String),

    /// The same internal identifier appears twice in a rule definition.
    #[error("Duplicate rule key: {0}")]
    DuplicateKey(String),

    /// A rule key was validated but no validator is registered for it.
    /// Distinguishable from an ordinary "value is invalid" outcome, which is
    /// reported through the ledger instead.
    #[error("Validator does not exist: {0}")]
    MissingValidator(String),

    /// A key was used against a rule that does not declare it.
    #[error("Unknown rule key: {0}")]
    UnknownKey(String),
}
