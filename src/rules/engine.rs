//! Per-variant rules: static configuration plus the behaviour table.
//!
//! `Rules` holds what never changes during a game (dimensions, move
//! templates, piece inventory) and is shared by every clone of a `Game`.
//! `VariantRules` is the capability table each variant implements:
//! - what the starting position is
//! - which moves are legal
//! - how a finished game is detected and how positions are scored

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::error::BoardError;
use crate::core::game::Game;
use crate::core::geometry::Vector;
use crate::core::moves::Move;
use crate::core::piece::{Piece, PieceKind};
use crate::core::player::{PlayerId, PlayerMap};
use crate::games::{self, VariantState};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// Terminal bonus used by the line games and checkers: a win is worth
    /// `win` to the winner's side, a draw is worth `draw` to the maximizer.
    #[must_use]
    pub fn bonus(&self, win: i32, draw: i32) -> i32 {
        match self {
            GameResult::Winner(p) if p.is_maximizing() => win,
            GameResult::Winner(_) => -win,
            GameResult::Draw => draw,
        }
    }
}

/// Coarse game phase, used to pick scoring tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Opening = 0,
    Middle = 1,
    Ending = 2,
}

/// The supported games. Discriminants are the stable game ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    ConnectFour = 0,
    TicTacToe = 1,
    Checkers = 2,
    Chess = 3,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::ConnectFour,
        Variant::TicTacToe,
        Variant::Checkers,
        Variant::Chess,
    ];

    /// Stable numeric id.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::ConnectFour => "connect-four",
            Variant::TicTacToe => "tic-tac-toe",
            Variant::Checkers => "checkers",
            Variant::Chess => "chess",
        }
    }

    /// The behaviour table for this variant.
    #[must_use]
    pub fn behavior(self) -> &'static dyn VariantRules {
        games::behavior(self)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable per-variant configuration.
#[derive(Clone, Debug)]
pub struct Rules {
    variant: Variant,
    rows: i32,
    cols: i32,
    templates: FxHashMap<PieceKind, Vec<Vector>>,
    inventory: PlayerMap<Vec<PieceKind>>,
}

impl Rules {
    /// Start an empty ruleset. Add pieces with [`Rules::with_piece`].
    #[must_use]
    pub fn new(variant: Variant, rows: i32, cols: i32) -> Self {
        Self {
            variant,
            rows,
            cols,
            templates: FxHashMap::default(),
            inventory: PlayerMap::with_default(),
        }
    }

    /// Register a piece kind and its move templates.
    #[must_use]
    pub fn with_piece(mut self, kind: PieceKind, templates: &[Vector]) -> Self {
        self.inventory[kind.owner].push(kind);
        self.templates.insert(kind, templates.to_vec());
        self
    }

    /// Build the ruleset for a variant.
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        variant.behavior().rules()
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Move templates for a kind; empty for unknown kinds.
    #[must_use]
    pub fn templates(&self, kind: PieceKind) -> &[Vector] {
        self.templates.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Kinds a player may own.
    #[must_use]
    pub fn inventory(&self, player: PlayerId) -> &[PieceKind] {
        &self.inventory[player]
    }

    #[must_use]
    pub fn owns(&self, kind: PieceKind) -> bool {
        self.inventory[kind.owner].contains(&kind)
    }

    /// Starting position.
    pub fn default_board(&self) -> Result<Board, BoardError> {
        self.variant.behavior().default_board(self)
    }

    /// Geometric legality check, independent of the move generator.
    #[must_use]
    pub fn is_valid_move(&self, board: &Board, mv: &Move) -> bool {
        self.owns(mv.piece.kind) && self.variant.behavior().is_valid_move(self, board, mv)
    }
}

/// Behaviour table implemented once per variant.
///
/// ## Implementation Notes
///
/// - `legal_moves`: all moves for the side to move, ignoring restriction
/// - `restricted_moves`: continuations for the piece that must keep moving;
///   only checkers has any
/// - `outcome`: `None` while the game continues
/// - `score`: positive favours the maximizing player
pub trait VariantRules: Send + Sync {
    fn variant(&self) -> Variant;

    /// Build the immutable configuration.
    fn rules(&self) -> Rules;

    /// Starting position; an `Err` means the layout collides with itself.
    fn default_board(&self, rules: &Rules) -> Result<Board, BoardError>;

    /// Per-variant state for a game starting from `board`.
    fn initial_state(&self, _board: &Board) -> VariantState {
        VariantState::for_variant(self.variant())
    }

    fn is_valid_move(&self, rules: &Rules, board: &Board, mv: &Move) -> bool;

    fn legal_moves(&self, game: &Game) -> Vec<Move>;

    fn restricted_moves(&self, _game: &Game, _piece: &Piece) -> Vec<Move> {
        Vec::new()
    }

    fn outcome(&self, game: &Game) -> Option<GameResult>;

    fn score(&self, game: &Game) -> i32;

    fn phase(&self, game: &Game) -> Phase;

    /// True if a placement may be named by its column alone.
    fn drops_by_column(&self) -> bool {
        false
    }

    /// Update per-variant state after `mv` has been applied to the board.
    fn record_move(&self, _state: &mut VariantState, _mv: &Move) {}
}
