//! Error types for the keyframe sample.

use factory_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur while building keyframe factories or exporting
/// their state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyframeError {
    /// A misconfigured rule or validator table in the factory definition.
    #[error(transparent)]
    Framework(#[from] FrameworkError),

    /// A snapshot submitted for export has no committed `name` property, so
    /// it cannot be grouped under an `@keyframes` rule.
    #[error("Keyframe state has no name and cannot be exported")]
    UnnamedState,
}
