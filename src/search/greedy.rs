//! One-ply greedy search.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::core::{Game, Move};

use super::{child, forced, leaf, pick_best, SearchEngine, SearchStats};

/// Plays the move with the best immediate score.
#[derive(Clone, Debug, Default)]
pub struct Greedy {
    stats: SearchStats,
}

impl Greedy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchEngine for Greedy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    #[instrument(skip_all, fields(variant = %game.variant(), turn = %game.turn()))]
    fn get_move(&mut self, game: &Game) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();

        let moves = game.available_moves();
        if moves.len() <= 1 {
            return forced(self.name(), moves, start, &mut self.stats);
        }

        let mut scored = Vec::with_capacity(moves.len());
        for mv in moves {
            self.stats.visit(1);
            if let Some(next) = child(game, &mv, &mut self.stats) {
                let score = leaf(&next, &mut self.stats);
                scored.push((mv, score));
            }
        }
        let best = pick_best(game, scored);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some((mv, score)) = &best {
            debug!(%mv, score, nodes = self.stats.nodes_visited, "greedy move chosen");
        }
        best.map(|(mv, _)| mv)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
