//! Move records.
//!
//! A `Move` carries the piece *after* the move (its position is the
//! destination), the origin cell if any, and the other pieces it touches.
//! Moves are built once by a generator or input adapter and never mutated
//! afterwards; the builder methods consume `self`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::geometry::Point;
use super::piece::Piece;
use super::player::PlayerId;

/// Pieces affected by a move. Never more than two in practice.
pub type Affected = SmallVec<[Piece; 2]>;

/// A single move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The moving piece as it stands after the move.
    pub piece: Piece,

    /// Origin cell, `None` for a newly placed piece.
    pub start: Option<Point>,

    /// Captured pieces, or the castling rook.
    pub affected: Affected,

    /// Destination for the first affected piece instead of removal
    /// (castling rook).
    pub relocation: Option<Point>,

    /// False for a capture leg that may be continued by the same piece.
    pub end_turn: bool,

    /// The piece changed rank on arrival.
    pub promotion: bool,
}

impl Move {
    /// Place a new piece on an empty cell.
    #[must_use]
    pub fn place(piece: Piece) -> Self {
        Self {
            piece,
            start: None,
            affected: SmallVec::new(),
            relocation: None,
            end_turn: true,
            promotion: false,
        }
    }

    /// Move the piece from `start` to `piece.position`.
    #[must_use]
    pub fn translate(start: Point, piece: Piece) -> Self {
        Self {
            start: Some(start),
            ..Self::place(piece)
        }
    }

    /// Remove `captured` as part of this move.
    #[must_use]
    pub fn capturing(mut self, captured: Piece) -> Self {
        self.affected.push(captured);
        self
    }

    /// Keep the turn with the mover after this move.
    #[must_use]
    pub fn continuing(mut self) -> Self {
        self.end_turn = false;
        self
    }

    /// Mark the move as a promotion. `piece` should already carry the new kind.
    #[must_use]
    pub fn promoting(mut self) -> Self {
        self.promotion = true;
        self
    }

    /// Move `rook` to `rook_to` alongside the king.
    #[must_use]
    pub fn castling(mut self, rook: Piece, rook_to: Point) -> Self {
        self.affected.push(rook);
        self.relocation = Some(rook_to);
        self
    }

    /// Destination cell.
    #[must_use]
    pub const fn end(&self) -> Point {
        self.piece.position
    }

    #[must_use]
    pub const fn mover(&self) -> PlayerId {
        self.piece.kind.owner
    }

    /// True if the move removes at least one piece.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.relocation.is_none() && !self.affected.is_empty()
    }

    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.relocation.is_some()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.start {
            Some(start) => write!(f, "{} {} -> {}", self.piece.kind, start, self.end())?,
            None => write!(f, "{} -> {}", self.piece.kind, self.end())?,
        }
        if self.is_castle() {
            write!(f, " castle")?;
        } else {
            for captured in &self.affected {
                write!(f, " x{}", captured)?;
            }
        }
        if self.promotion {
            write!(f, " promote")?;
        }
        Ok(())
    }
}
