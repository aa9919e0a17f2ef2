//! Core model types: coordinates, players, pieces, boards, moves, games.
//!
//! Everything here is variant-agnostic. Variants plug in through
//! [`crate::rules::VariantRules`] rather than by extending these types.

pub mod board;
pub mod error;
pub mod game;
pub mod geometry;
pub mod moves;
pub mod piece;
pub mod player;

pub use board::Board;
pub use error::{BoardError, MoveError, MoveResult};
pub use game::{Game, MoveApplied};
pub use geometry::{Point, Vector};
pub use moves::{Affected, Move};
pub use piece::{Piece, PieceKind};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
