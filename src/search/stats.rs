//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `get_move` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions entered by the search, root children included.
    pub nodes_visited: u64,

    /// Positions evaluated with the heuristic score.
    pub leaves_scored: u64,

    /// Branches cut off by the alpha-beta window.
    pub cutoffs: u64,

    /// Generated moves the game refused to apply.
    pub rejected_moves: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record entry into a node `ply` moves below the root.
    pub fn visit(&mut self, ply: u16) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(ply);
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_visit_tracks_depth() {
        let mut stats = SearchStats::new();
        stats.visit(1);
        stats.visit(3);
        stats.visit(2);
        assert_eq!(stats.nodes_visited, 3);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 1000;
        stats.time_us = 1_000_000; // 1 second

        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 100;
        stats.leaves_scored = 50;

        stats.reset();

        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.leaves_scored, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.cutoffs = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.cutoffs, deserialized.cutoffs);
    }
}
