//! # Keyframe Factory
//!
//! A concrete consumer of the factory framework: each instance manages one
//! CSS keyframe state with three declared properties (`name`, `markers`,
//! `props`) behind validate-then-commit accessors.
//!
//! ## Structure
//!
//! - [`validators`] - the per-property validator table for this factory type
//! - [`error`] - [`KeyframeError`] for configuration and export failures
//! - [`KeyframeFactory::new()`] - builds the rule, wires the validators, and
//!   returns an empty instance
//!
//! ## Usage
//!
//! ```rust
//! use factory_sample::keyframe::KeyframeFactory;
//! use factory_sample::model::KeyframeOptions;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), factory_sample::keyframe::KeyframeError> {
//! let mut keyframe = KeyframeFactory::new()?;
//!
//! let options = KeyframeOptions {
//!     name: Some(json!("bounce")),
//!     markers: Some(json!(["from", "to"])),
//!     props: Some(json!({ "transform": "translateY(0)" })),
//! };
//! let ledger = keyframe.update(Some(&options))?;
//! assert!(ledger.is_empty());
//! assert_eq!(keyframe.get_name(), Some(&json!("bounce")));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod validators;

pub use error::KeyframeError;

use crate::model::KeyframeOptions;
use factory_framework::{
    factory_accessors, value_at_index, ErrorLedger, FrameworkError, Rule, StateSnapshot,
    StateTable, Validators,
};
use serde_json::Value;
use tracing::instrument;

/// Internal identifiers for the keyframe factory's declared properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyframeProp {
    Name,
    Markers,
    Props,
}

/// The marker sequence assigned to successive steps when a caller builds a
/// series of keyframe states without naming markers explicitly.
pub const DEFAULT_MARKERS: [&str; 3] = ["from", "50%", "to"];

/// Resolves the default marker for an unbounded step index by cycling over
/// [`DEFAULT_MARKERS`].
pub fn marker_for_step(step: usize) -> Option<&'static str> {
    value_at_index(step, &DEFAULT_MARKERS).copied()
}

/// One CSS keyframe state: a name, the markers it applies to, and its CSS
/// properties.
#[derive(Debug, Clone)]
pub struct KeyframeFactory {
    state: StateTable<KeyframeProp, Value>,
}

impl KeyframeFactory {
    /// Creates an empty keyframe factory instance.
    ///
    /// The rule and validator table are fixed for the type; a definition
    /// error here means the declarations themselves are broken.
    pub fn new() -> Result<Self, FrameworkError> {
        let rule = Rule::new([
            (KeyframeProp::Name, "name"),
            (KeyframeProp::Markers, "markers"),
            (KeyframeProp::Props, "props"),
        ])?;
        let validators = Validators::new()
            .with(KeyframeProp::Name, validators::is_name, "Name must be a string")
            .with(
                KeyframeProp::Markers,
                validators::is_markers,
                "Markers must be an array",
            )
            .with(
                KeyframeProp::Props,
                validators::is_props,
                "Props must be an object",
            );

        Ok(Self {
            state: StateTable::new(rule, validators),
        })
    }

    factory_accessors!(state, KeyframeProp, Value, {
        Name => name,
        Markers => markers,
        Props => props,
    });

    /// Applies a whole options object behind the all-or-nothing gate and
    /// returns the resulting error state.
    #[instrument(skip(self, options))]
    pub fn update(
        &mut self,
        options: Option<&KeyframeOptions>,
    ) -> Result<ErrorLedger<Value>, FrameworkError> {
        self.state.apply_options(options)
    }

    /// The properties currently invalid for this instance.
    pub fn errors(&self) -> &ErrorLedger<Value> {
        self.state.errors()
    }

    /// Materializes the committed state for export.
    pub fn snapshot(&self) -> StateSnapshot<Value> {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_markers_cycle_over_steps() {
        assert_eq!(marker_for_step(0), Some("from"));
        assert_eq!(marker_for_step(1), Some("50%"));
        assert_eq!(marker_for_step(2), Some("to"));
        assert_eq!(marker_for_step(3), Some("from"));
        assert_eq!(marker_for_step(7), Some("50%"));
    }
}
