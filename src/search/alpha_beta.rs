//! Minimax with alpha-beta pruning.
//!
//! Returns the same move as [`Minimax`](super::Minimax) at the same depth.
//! Interior nodes only need a bound, so they stop as soon as the window
//! closes. The root is handled separately: it keeps the first move that
//! strictly improves the window, which is the first best move.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::core::{Game, Move};

use super::{child, forced, leaf, SearchConfig, SearchEngine, SearchStats};

/// Alpha-beta search.
#[derive(Clone, Debug, Default)]
pub struct AlphaBeta {
    config: SearchConfig,
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Alpha-beta with the given depth and defaults otherwise.
    pub fn with_depth(depth: u32) -> Self {
        Self::new(SearchConfig::default().with_depth(depth))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn value(&mut self, game: &Game, depth: u32, mut alpha: i32, mut beta: i32, ply: u16) -> i32 {
        self.stats.visit(ply);
        if depth == 0 || game.has_ended() {
            return leaf(game, &mut self.stats);
        }

        let maximizing = game.turn().is_maximizing();
        let mut best = None;
        for mv in game.available_moves() {
            let Some(next) = child(game, &mv, &mut self.stats) else {
                continue;
            };
            let score = self.value(&next, depth - 1, alpha, beta, ply + 1);
            if maximizing {
                let value = best.map_or(score, |b: i32| b.max(score));
                best = Some(value);
                alpha = alpha.max(value);
            } else {
                let value = best.map_or(score, |b: i32| b.min(score));
                best = Some(value);
                beta = beta.min(value);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        match best {
            Some(score) => score,
            None => leaf(game, &mut self.stats),
        }
    }
}

impl SearchEngine for AlphaBeta {
    fn name(&self) -> &'static str {
        "alpha-beta"
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
        let maximizing = game.turn().is_maximizing();
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let Some(next) = child(game, &mv, &mut self.stats) else {
                continue;
            };
            let score = self.value(&next, depth - 1, alpha, beta, 1);
            let improves = if maximizing { score > alpha } else { score < beta };
            if improves || best.is_none() {
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
                best = Some((mv, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Some((mv, score)) = &best {
            debug!(
                %mv,
                score,
                nodes = self.stats.nodes_visited,
                leaves = self.stats.leaves_scored,
                cutoffs = self.stats.cutoffs,
                "alpha-beta move chosen"
            );
        }
        best.map(|(mv, _)| mv)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
