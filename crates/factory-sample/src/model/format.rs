//! Formatting settings for the CSS exporter.

use serde::{Deserialize, Serialize};

/// Indentation settings for exported `@keyframes` rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssFormat {
    /// Spaces before a marker block (`50% { … }`).
    pub outer_indent: usize,
    /// Spaces before a property line inside a marker block.
    pub inner_indent: usize,
}

impl Default for CssFormat {
    fn default() -> Self {
        Self {
            outer_indent: 2,
            inner_indent: 4,
        }
    }
}
