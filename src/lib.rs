//! # rust-tpg
//!
//! A two-player board game model with adversarial search engines.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Core**: `Board`, `Move` and `Game` know nothing
//!    about any particular game. Variants plug in through a capability
//!    table (`VariantRules`) rather than by subclassing.
//!
//! 2. **Explicit Results**: Applying a move returns a `Result` carrying the
//!    new turn and any outcome. A rejected move leaves the game untouched.
//!
//! 3. **Cheap Branching**: Rules are shared behind an `Arc` and move history
//!    is an `im::Vector`, so search can clone a game per branch.
//!
//! ## Variants
//!
//! - Tic-tac-toe (3x3, three in a row)
//! - Connect-four (6x7, gravity drops, four in a row)
//! - Checkers (compulsory jumps, multi-jump chains, kings)
//! - Simplified chess (castling, queen promotion, king capture wins)
//!
//! ## Modules
//!
//! - `core`: Points, players, pieces, boards, moves, the game state machine
//! - `rules`: Per-variant rules configuration and the `VariantRules` trait
//! - `games`: The four variant implementations
//! - `search`: Greedy, minimax and alpha-beta engines plus match play

pub mod core;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardError, Game, Move, MoveApplied, MoveError, MoveResult,
    Piece, PieceKind, PlayerId, PlayerMap, Point, Vector,
};

pub use crate::rules::{GameResult, Phase, Rules, Variant, VariantRules};

pub use crate::games::VariantState;

pub use crate::search::{
    play_match, AlphaBeta, Greedy, MatchConfig, MatchReport, Minimax,
    SearchConfig, SearchEngine, SearchStats,
};
