//! The game state machine shared by every variant.
//!
//! A `Game` owns its board, the move history, whose turn it is and the
//! restricted sub-turn state; everything variant-specific is dispatched
//! through the variant's [`VariantRules`] table.
//!
//! ## Turn rule
//!
//! A move with `end_turn == true` hands the turn over. A move with
//! `end_turn == false` keeps the turn and restricts the mover to the piece
//! that just moved; if that piece has no continuation the turn ends anyway.
//!
//! ## Cloning
//!
//! `Clone` is cheap enough for search: rules are shared through an `Arc`,
//! history is an `im::Vector` with structural sharing, and the board is a
//! pair of flat vectors.

use std::sync::Arc;

use im::Vector;
use tracing::{error, trace};

use super::board::Board;
use super::error::{BoardError, MoveError, MoveResult};
use super::geometry::Point;
use super::moves::Move;
use super::piece::Piece;
use super::player::PlayerId;
use crate::games::VariantState;
use crate::rules::{GameResult, Phase, Rules, Variant, VariantRules};

/// What an accepted move did to the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveApplied {
    /// Side to move after the move.
    pub turn: PlayerId,
    pub turn_changed: bool,
    /// Piece that must keep moving, if the turn continues.
    pub restricted: Option<Piece>,
    /// Set once the move finished the game.
    pub outcome: Option<GameResult>,
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    rules: Arc<Rules>,
    board: Board,
    turn: PlayerId,
    history: Vector<Move>,
    restricted: Option<Piece>,
    phase: Phase,
    state: VariantState,
}

impl Game {
    /// Start a game from the variant's default position. Player 0 moves
    /// first.
    ///
    /// A default layout that fails to build is logged at `error!` and the
    /// game starts on an empty board; use [`Game::try_new`] to observe the
    /// error instead.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self::try_new(variant).unwrap_or_else(|err| {
            error!(%variant, %err, "default position failed to build");
            let rules = Arc::new(Rules::for_variant(variant));
            let board = Board::new(rules.rows(), rules.cols());
            Self::start(rules, board, PlayerId::MINIMIZING)
        })
    }

    /// Start from the variant's default position, failing if its layout is
    /// inconsistent.
    pub fn try_new(variant: Variant) -> Result<Self, BoardError> {
        let rules = Arc::new(Rules::for_variant(variant));
        let board = rules.default_board()?;
        Ok(Self::start(rules, board, PlayerId::MINIMIZING))
    }

    #[must_use]
    pub fn tic_tac_toe() -> Self {
        Self::new(Variant::TicTacToe)
    }

    #[must_use]
    pub fn connect_four() -> Self {
        Self::new(Variant::ConnectFour)
    }

    #[must_use]
    pub fn checkers() -> Self {
        Self::new(Variant::Checkers)
    }

    #[must_use]
    pub fn chess() -> Self {
        Self::new(Variant::Chess)
    }

    /// Start from an arbitrary position with `turn` to move.
    pub fn from_position(variant: Variant, board: Board, turn: PlayerId) -> Result<Self, BoardError> {
        let rules = Rules::for_variant(variant);
        if board.rows() != rules.rows() || board.cols() != rules.cols() {
            return Err(BoardError::WrongDimensions {
                rows: rules.rows(),
                cols: rules.cols(),
                found_rows: board.rows(),
                found_cols: board.cols(),
            });
        }
        board.validate()?;
        Ok(Self::start(Arc::new(rules), board, turn))
    }

    /// Replay `moves` from the default position, stopping at the first
    /// rejected move.
    pub fn from_moves(variant: Variant, moves: impl IntoIterator<Item = Move>) -> MoveResult<Self> {
        let mut game = Self::try_new(variant)?;
        for mv in moves {
            game.apply_move(&mv)?;
        }
        Ok(game)
    }

    fn start(rules: Arc<Rules>, board: Board, turn: PlayerId) -> Self {
        let behavior = rules.variant().behavior();
        let state = behavior.initial_state(&board);
        let mut game = Self {
            rules,
            board,
            turn,
            history: Vector::new(),
            restricted: None,
            phase: Phase::Opening,
            state,
        };
        game.phase = behavior.phase(&game);
        game
    }

    fn behavior(&self) -> &'static dyn VariantRules {
        self.rules.variant().behavior()
    }

    // === Queries ===

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.rules.variant()
    }

    /// Stable numeric game id.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.variant().id()
    }

    #[must_use]
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Every accepted move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Move> {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Piece that must keep moving this turn.
    #[must_use]
    pub fn restricted_piece(&self) -> Option<&Piece> {
        self.restricted.as_ref()
    }

    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.restricted.is_some()
    }

    /// Phase cached after the last accepted move.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> &VariantState {
        &self.state
    }

    /// Legal moves for the side to move, honouring any restriction.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Move> {
        match &self.restricted {
            Some(piece) => self.behavior().restricted_moves(self, piece),
            None => self.behavior().legal_moves(self),
        }
    }

    /// Continuations for the restricted piece; empty when unrestricted.
    #[must_use]
    pub fn available_moves_restricted(&self) -> Vec<Move> {
        match &self.restricted {
            Some(piece) => self.behavior().restricted_moves(self, piece),
            None => Vec::new(),
        }
    }

    /// Legal moves starting from `piece`'s cell.
    #[must_use]
    pub fn moves_for_piece(&self, piece: &Piece) -> Vec<Move> {
        if self.board.piece_at(piece.position) != Some(piece) {
            return Vec::new();
        }
        self.available_moves()
            .into_iter()
            .filter(|mv| mv.start == Some(piece.position))
            .collect()
    }

    /// Resolve an origin/destination pair to a legal move.
    ///
    /// `start` is `None` for placements. Where pieces drop by gravity any
    /// cell of the target column names the drop.
    #[must_use]
    pub fn find_move(&self, start: Option<Point>, end: Point) -> Option<Move> {
        let moves = self.available_moves();
        if let Some(mv) = moves.iter().find(|mv| mv.start == start && mv.end() == end) {
            return Some(mv.clone());
        }
        if start.is_none() && self.behavior().drops_by_column() {
            return moves.into_iter().find(|mv| mv.end().col == end.col);
        }
        None
    }

    /// `None` while the game continues.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.behavior().outcome(self)
    }

    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.outcome().is_some()
    }

    /// Heuristic value of the position; positive favours player 1.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.behavior().score(self)
    }

    // === Mutation ===

    /// Apply a move and report the new turn and any outcome.
    ///
    /// On `Err` the game is unchanged.
    pub fn add_move(&mut self, mv: &Move) -> MoveResult<MoveApplied> {
        let turn_changed = self.apply_move(mv)?;
        Ok(MoveApplied {
            turn: self.turn,
            turn_changed,
            restricted: self.restricted,
            outcome: self.outcome(),
        })
    }

    /// Apply a move without evaluating the outcome. Returns whether the
    /// turn passed to the other side.
    ///
    /// This is what search uses; terminal checks are left to the caller.
    pub fn apply_move(&mut self, mv: &Move) -> MoveResult<bool> {
        match self.make_move(mv) {
            Ok(turn_changed) => {
                self.history.push_back(mv.clone());
                self.phase = self.behavior().phase(self);
                trace!(%mv, turn = %self.turn, "move applied");
                Ok(turn_changed)
            }
            Err(err) => {
                trace!(%mv, %err, "move rejected");
                Err(err)
            }
        }
    }

    fn make_move(&mut self, mv: &Move) -> MoveResult<bool> {
        if mv.mover() != self.turn {
            return Err(MoveError::NotYourTurn {
                turn: self.turn,
                mover: mv.mover(),
            });
        }
        if let Some(piece) = self.restricted {
            if mv.start != Some(piece.position) || !mv.is_capture() {
                return Err(MoveError::Restricted(piece));
            }
        }
        if !self.rules.is_valid_move(&self.board, mv) {
            return Err(MoveError::Rejected(mv.piece));
        }

        self.board.make_move(mv)?;
        let behavior = self.behavior();
        behavior.record_move(&mut self.state, mv);

        if mv.end_turn {
            self.end_turn();
            return Ok(true);
        }

        self.restricted = Some(mv.piece);
        if self.available_moves_restricted().is_empty() {
            self.end_turn();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn end_turn(&mut self) {
        self.restricted = None;
        self.turn = self.turn.opponent();
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
