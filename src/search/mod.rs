//! Adversarial search over any variant.
//!
//! ## Overview
//!
//! Every engine works through the same contract: clone the game, apply a
//! candidate move to the clone, and score what comes out. Child positions
//! are independent, so nothing one branch does is visible to its siblings.
//! The player at each node is read from that node's own turn, which keeps
//! checkers jump chains (where the mover keeps the turn) correct.
//!
//! - [`Greedy`]: one ply, best immediate score
//! - [`Minimax`]: full-width search to a fixed depth
//! - [`AlphaBeta`]: minimax with an alpha/beta window
//!
//! Player 1 maximizes the score and player 0 minimizes it. When several
//! moves are equally good the first in generation order is returned.
//!
//! ## Usage
//!
//! ```rust
//! use rust_tpg::core::Game;
//! use rust_tpg::search::{AlphaBeta, SearchConfig, SearchEngine};
//!
//! let mut game = Game::tic_tac_toe();
//! let mut engine = AlphaBeta::new(SearchConfig::default().with_depth(3));
//!
//! if let Some(mv) = engine.get_move(&game) {
//!     game.add_move(&mv).unwrap();
//! }
//! assert_eq!(game.history().len(), 1);
//! ```

pub mod alpha_beta;
pub mod config;
pub mod greedy;
pub mod minimax;
pub mod play;
pub mod stats;

pub use alpha_beta::AlphaBeta;
pub use config::SearchConfig;
pub use greedy::Greedy;
pub use minimax::Minimax;
pub use play::{play_match, MatchConfig, MatchReport};
pub use stats::SearchStats;

use std::time::Instant;

use tracing::{debug, warn};

use crate::core::{Game, Move};

/// A move-picking strategy.
pub trait SearchEngine {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Pick a move for the side to move, or `None` if it has none.
    fn get_move(&mut self, game: &Game) -> Option<Move>;

    /// Statistics from the most recent `get_move` call.
    fn stats(&self) -> &SearchStats;
}

/// Clone `game` and play `mv` on the clone.
///
/// A generated move the game refuses is counted and logged, and yields
/// `None`; the caller skips it.
pub(crate) fn child(game: &Game, mv: &Move, stats: &mut SearchStats) -> Option<Game> {
    let mut next = game.clone();
    match next.apply_move(mv) {
        Ok(_) => Some(next),
        Err(err) => {
            stats.rejected_moves += 1;
            warn!(%mv, %err, variant = %game.variant(), "generated move rejected");
            None
        }
    }
}

/// Finish a search whose root has at most one candidate, which is played
/// without expanding it.
pub(crate) fn forced(
    engine: &'static str,
    mut moves: Vec<Move>,
    start: Instant,
    stats: &mut SearchStats,
) -> Option<Move> {
    let mv = moves.pop();
    stats.time_us = start.elapsed().as_micros() as u64;
    match &mv {
        Some(mv) => debug!(engine, %mv, "only move played without search"),
        None => debug!(engine, "no move available"),
    }
    mv
}

/// Score a position the search will not expand.
pub(crate) fn leaf(game: &Game, stats: &mut SearchStats) -> i32 {
    stats.leaves_scored += 1;
    game.score()
}

/// First move whose score is strictly best for `game.turn()`.
pub(crate) fn pick_best(game: &Game, scored: impl IntoIterator<Item = (Move, i32)>) -> Option<(Move, i32)> {
    let player = game.turn();
    scored.into_iter().fold(None, |best, (mv, score)| match best {
        Some((_, incumbent)) if !player.prefers(score, incumbent) => best,
        _ => Some((mv, score)),
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::{Board, PlayerId, Point};
    use crate::games::tictactoe::{O, X};
    use crate::rules::Variant;

    fn marker(col: i32) -> Move {
        Move::place(X.at(Point::new(0, col)))
    }

    #[test]
    fn test_pick_best_minimizer_keeps_first_tie() {
        let game = Game::tic_tac_toe();
        assert_eq!(game.turn(), PlayerId::MINIMIZING);
        let best = pick_best(&game, [(marker(0), 5), (marker(1), -3), (marker(2), -3)]);
        assert_eq!(best, Some((marker(1), -3)));
    }

    #[test]
    fn test_pick_best_maximizer() {
        let board = Board::new(3, 3);
        let game = Game::from_position(Variant::TicTacToe, board, PlayerId::MAXIMIZING).unwrap();
        let o = |col| Move::place(O.at(Point::new(1, col)));
        let best = pick_best(&game, [(o(0), 2), (o(1), 9), (o(2), 9)]);
        assert_eq!(best, Some((o(1), 9)));
        assert_eq!(pick_best(&game, []), None);
    }

    #[test]
    fn test_child_is_independent() {
        let game = Game::tic_tac_toe();
        let mut stats = SearchStats::new();
        let next = child(&game, &marker(0), &mut stats).unwrap();
        assert_eq!(next.history().len(), 1);
        assert!(game.history().is_empty());
        assert!(game.board().is_empty(Point::new(0, 0)));
    }

    #[test]
    fn test_child_counts_rejections() {
        let game = Game::tic_tac_toe();
        let mut stats = SearchStats::new();
        // O cannot move first.
        let wrong_turn = Move::place(O.at(Point::new(0, 0)));
        assert!(child(&game, &wrong_turn, &mut stats).is_none());
        assert_eq!(stats.rejected_moves, 1);
    }

    #[test]
    fn test_forced_records_time() {
        let start = Instant::now() - Duration::from_millis(5);
        let mut stats = SearchStats::new();
        let only = marker(2);
        assert_eq!(forced("test", vec![only.clone()], start, &mut stats), Some(only));
        assert!(stats.time_us >= 5_000);
        assert_eq!(stats.nodes_visited, 0);

        let mut stats = SearchStats::new();
        assert_eq!(forced("test", Vec::new(), start, &mut stats), None);
        assert!(stats.time_us >= 5_000);
    }

    #[test]
    fn test_single_move_refreshes_stats_for_every_engine() {
        let pieces = [
            X.at(Point::new(0, 0)),
            X.at(Point::new(0, 2)),
            X.at(Point::new(1, 0)),
            X.at(Point::new(2, 1)),
            O.at(Point::new(0, 1)),
            O.at(Point::new(1, 1)),
            O.at(Point::new(2, 0)),
            O.at(Point::new(2, 2)),
        ];
        let board = Board::from_pieces(3, 3, pieces).unwrap();
        let last_cell = Game::from_position(Variant::TicTacToe, board, PlayerId::MINIMIZING).unwrap();
        assert_eq!(last_cell.available_moves().len(), 1);

        let engines: Vec<Box<dyn SearchEngine>> = vec![
            Box::new(Greedy::new()),
            Box::new(Minimax::with_depth(2)),
            Box::new(AlphaBeta::with_depth(2)),
        ];
        for mut engine in engines {
            engine.get_move(&Game::tic_tac_toe()).unwrap();
            assert!(engine.stats().nodes_visited > 0);

            let mv = engine.get_move(&last_cell).unwrap();
            assert_eq!(mv.end(), Point::new(1, 2), "{}", engine.name());
            assert_eq!(engine.stats().nodes_visited, 0, "{}", engine.name());
            assert_eq!(engine.stats().leaves_scored, 0);
        }
    }
}
