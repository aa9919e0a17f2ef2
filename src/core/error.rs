//! Error types for board mutation and move application.
//!
//! A rejected move is an expected outcome, not a crash: every variant here
//! is returned before any state is touched.

use thiserror::Error;

use super::geometry::Point;
use super::piece::{Piece, PieceKind};
use super::player::PlayerId;

/// Errors raised by direct board edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0} is outside the board")]
    OutOfBounds(Point),

    #[error("cell {cell} is already occupied by {occupant}")]
    Occupied { cell: Point, occupant: PieceKind },

    #[error("piece {0} is already on the board")]
    DuplicatePiece(Piece),

    #[error("piece {0} is not on the board")]
    MissingPiece(Piece),

    #[error("board is {found_rows}x{found_cols}, expected {rows}x{cols}")]
    WrongDimensions {
        rows: i32,
        cols: i32,
        found_rows: i32,
        found_cols: i32,
    },

    #[error("cell {0} disagrees with the piece list")]
    Inconsistent(Point),
}

/// Reasons a move can be refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("it is {turn}'s turn, move belongs to {mover}")]
    NotYourTurn { turn: PlayerId, mover: PlayerId },

    #[error("turn is restricted to {0} and further captures")]
    Restricted(Piece),

    #[error("move of {0} rejected by the variant rules")]
    Rejected(Piece),

    #[error("no matching piece to move at {0}")]
    EmptyStart(Point),

    #[error("destination {0} is blocked")]
    Blocked(Point),

    #[error("affected piece {0} is not on the board")]
    MissingAffected(Piece),

    #[error("affected piece {0} is listed more than once")]
    DuplicateAffected(Piece),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Result type for move application.
pub type MoveResult<T> = Result<T, MoveError>;
