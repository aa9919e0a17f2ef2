//! Full-width minimax to a fixed depth.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::core::{Game, Move};

use super::{child, forced, leaf, pick_best, SearchConfig, SearchEngine, SearchStats};

/// Plain minimax search.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Minimax with the given depth and defaults otherwise.
    pub fn with_depth(depth: u32) -> Self {
        Self::new(SearchConfig::default().with_depth(depth))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Value of `game` searched `depth` more plies, `ply` below the root.
    fn value(&mut self, game: &Game, depth: u32, ply: u16) -> i32 {
        self.stats.visit(ply);
        if depth == 0 || game.has_ended() {
            return leaf(game, &mut self.stats);
        }

        let player = game.turn();
        let mut best = None;
        for mv in game.available_moves() {
            let Some(next) = child(game, &mv, &mut self.stats) else {
                continue;
            };
            let score = self.value(&next, depth - 1, ply + 1);
            if best.map_or(true, |incumbent| player.prefers(score, incumbent)) {
                best = Some(score);
            }
        }
        match best {
            Some(score) => score,
            None => leaf(game, &mut self.stats),
        }
    }
}

impl SearchEngine for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    #[instrument(skip_all, fields(variant = %game.variant(), turn = %game.turn(), depth = self.config.depth))]
    fn get_move(&mut self, game: &Game) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();

        let moves = game.available_moves();
        if moves.len() <= 1 {
            return forced(self.name(), moves, start, &mut self.stats);
        }

        let depth = self.config.effective_depth();
        let mut scored = Vec::with_capacity(moves.len());
        for mv in moves {
            if let Some(next) = child(game, &mv, &mut self.stats) {
                let score = self.value(&next, depth - 1, 1);
                scored.push((mv, score));
            }
        }
        let best = pick_best(game, scored);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some((mv, score)) = &best {
            debug!(
                %mv,
                score,
                nodes = self.stats.nodes_visited,
                leaves = self.stats.leaves_scored,
                "minimax move chosen"
            );
        }
        best.map(|(mv, _)| mv)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
