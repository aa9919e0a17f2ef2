//! Engine-vs-engine match loop.
//!
//! Drives two engines against each other from a starting position until
//! the game ends, an engine has nothing to play, or the ply limit is hit.

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::core::{Game, Move, MoveResult, PlayerId};
use crate::rules::GameResult;

use super::SearchEngine;

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum moves played before the match is abandoned.
    pub max_plies: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_plies: 500 }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per match.
    pub fn with_max_plies(mut self, max: usize) -> Self {
        self.max_plies = max;
        self
    }
}

/// What happened in a match.
#[derive(Clone, Debug)]
pub struct MatchReport {
    /// Final position.
    pub game: Game,

    /// `None` if the ply limit ran out first.
    pub outcome: Option<GameResult>,

    /// Every move played, in order.
    pub moves: Vec<Move>,
}

impl MatchReport {
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            Some(GameResult::Winner(player)) => Some(player),
            _ => None,
        }
    }
}

/// Play `first` (player 0) against `second` (player 1) from `game`.
///
/// The engine whose side is on turn is asked for every move, so a checkers
/// jump chain is played out by the same engine. Fails only if an engine
/// returns a move the game rejects.
pub fn play_match(
    mut game: Game,
    first: &mut dyn SearchEngine,
    second: &mut dyn SearchEngine,
    config: &MatchConfig,
) -> MoveResult<MatchReport> {
    let _span = info_span!("match", variant = %game.variant(), first = first.name(), second = second.name()).entered();

    let mut moves = Vec::new();
    let mut outcome = game.outcome();

    while outcome.is_none() && moves.len() < config.max_plies {
        let engine: &mut dyn SearchEngine = if game.turn().is_maximizing() {
            &mut *second
        } else {
            &mut *first
        };
        let Some(mv) = engine.get_move(&game) else {
            break;
        };
        let applied = game.add_move(&mv)?;
        debug!(ply = moves.len(), %mv, engine = engine.name(), "move played");
        outcome = applied.outcome;
        moves.push(mv);
    }

    debug!(?outcome, plies = moves.len(), "match finished");
    Ok(MatchReport { game, outcome, moves })
}
