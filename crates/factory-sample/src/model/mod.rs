//! # Data Model
//!
//! Pure data structures for the keyframe sample: the typed options object
//! submitted to the factory and the formatting settings consumed by the CSS
//! exporter.

pub mod format;
pub mod options;

pub use format::CssFormat;
pub use options::KeyframeOptions;
