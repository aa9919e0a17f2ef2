//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies looked ahead from the root (default: 4).
    /// Zero behaves like one: every root move is scored once.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

impl SearchConfig {
    /// Create a config with the default depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Depth actually searched from the root.
    #[must_use]
    pub fn effective_depth(&self) -> u32 {
        self.depth.max(1)
    }
}
