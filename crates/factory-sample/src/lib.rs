//! # Keyframe Sample
//!
//! A concrete consumer of [`factory_framework`]: a CSS keyframe factory with
//! its own rule, validator table, typed options object, and an `@keyframes`
//! exporter reading committed state snapshots.
//!
//! - **[`keyframe`]**: the factory type: rule, validators, generated
//!   accessors, bulk update.
//! - **[`model`]**: pure data structures ([`KeyframeOptions`](model::KeyframeOptions),
//!   [`CssFormat`](model::CssFormat)).
//! - **[`exporter`]**: formatting over already-valid state.

pub mod exporter;
pub mod keyframe;
pub mod model;
