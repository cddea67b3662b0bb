//! # Factory Framework
//!
//! This crate provides the rule-driven state management layer shared by
//! stateful "factory" objects. A factory type declares its properties once,
//! as a [`Rule`] mapping internal identifiers to public names plus a
//! [`Validators`] table, and every instance gets validate-then-commit
//! setters, pure getters, an always-current [`ErrorLedger`], and an
//! all-or-nothing bulk options synchronizer.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Declaration** ([`Rule`], [`Validators`]) - fixed per factory *type*,
//!    defined once, shared by all instances, never mutated.
//! 2. **Instance state** ([`StateTable`]) - committed values and the error
//!    ledger, owned exclusively by one instance.
//! 3. **Accessors** ([`factory_accessors!`]) - statically declared
//!    `set_<name>` / `get_<name>` pairs generated from the rule table.
//!
//! ## Error Model
//!
//! Two categories, never mixed:
//!
//! - **User-data errors** (an invalid property value) are not `Err` values.
//!   They are merged into the [`ErrorLedger`] (setter flows keep at most one
//!   record per property, and a later valid value removes the record) and
//!   returned from every setter.
//! - **Configuration errors** ([`FrameworkError`]: duplicate names in a
//!   rule, a declared key with no validator) fail loudly through `Result`
//!   at definition time or first use.
//!
//! ## Example
//!
//! ```rust
//! use factory_framework::{factory_accessors, Rule, StateOptions, StateTable, Validators};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum TrackProp {
//!     Title,
//!     Volume,
//! }
//!
//! #[derive(Debug, Default)]
//! struct TrackOptions {
//!     title: Option<String>,
//!     volume: Option<String>,
//! }
//!
//! impl StateOptions for TrackOptions {
//!     type Key = TrackProp;
//!     type Value = String;
//!
//!     fn value_of(&self, key: TrackProp) -> Option<String> {
//!         match key {
//!             TrackProp::Title => self.title.clone(),
//!             TrackProp::Volume => self.volume.clone(),
//!         }
//!     }
//! }
//!
//! struct Track {
//!     state: StateTable<TrackProp, String>,
//! }
//!
//! impl Track {
//!     fn new() -> Result<Self, factory_framework::FrameworkError> {
//!         let rule = Rule::new([(TrackProp::Title, "title"), (TrackProp::Volume, "volume")])?;
//!         let validators = Validators::new()
//!             .with(TrackProp::Title, |t: &String| !t.is_empty(), "Title must not be empty")
//!             .with(TrackProp::Volume, |v: &String| v.ends_with('%'), "Volume must be a percentage");
//!         Ok(Self { state: StateTable::new(rule, validators) })
//!     }
//!
//!     factory_accessors!(state, TrackProp, String, {
//!         Title => title,
//!         Volume => volume,
//!     });
//! }
//!
//! # fn main() -> Result<(), factory_framework::FrameworkError> {
//! let mut track = Track::new()?;
//!
//! // Invalid values are reported through the ledger, not thrown.
//! let ledger = track.set_volume("loud".to_string())?;
//! assert_eq!(ledger.len(), 1);
//!
//! // A later valid value removes the stale record.
//! let ledger = track.set_volume("80%".to_string())?;
//! assert!(ledger.is_empty());
//!
//! // Bulk apply is all-or-nothing at the whole-object gate.
//! let options = TrackOptions { title: Some("Jolene".to_string()), volume: Some("90%".to_string()) };
//! let ledger = track.state.apply_options(Some(&options))?;
//! assert!(ledger.is_empty());
//! assert_eq!(track.state.snapshot().value_of("title"), Some(&"Jolene".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency Model
//!
//! Fully synchronous. Each factory instance owns its [`StateTable`]
//! exclusively, so no locking discipline is required; rules and validator
//! tables are immutable after definition and safe to share.

pub mod cycle;
pub mod error;
pub mod ledger;
pub mod macros;
pub mod options;
pub mod rule;
pub mod state;
pub mod tracing;
pub mod validate;

// Re-export core types for convenience
pub use cycle::value_at_index;
pub use error::FrameworkError;
pub use ledger::{merge_error_state, ErrorLedger, ErrorRecord, ErrorState};
pub use options::StateOptions;
pub use rule::{Rule, RuleKey};
pub use state::{StateSnapshot, StateTable};
pub use validate::{Validator, Validators};

// Used by the expansion of `factory_accessors!`.
#[doc(hidden)]
pub use paste;
