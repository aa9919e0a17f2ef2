//! Piece identity.
//!
//! `PieceKind` is the positionless key (tag + owner) used to look up move
//! templates. `Piece` is a kind standing on a concrete cell.

use serde::{Deserialize, Serialize};

use super::geometry::Point;
use super::player::PlayerId;

/// A piece type as seen by the rules: its tag and its owner.
///
/// The tag is a single character whose case encodes side or rank
/// (`'r'`/`'R'` are a red pawn/king in checkers, white/black rooks in chess).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceKind {
    pub tag: char,
    pub owner: PlayerId,
}

impl PieceKind {
    #[must_use]
    pub const fn new(tag: char, owner: PlayerId) -> Self {
        Self { tag, owner }
    }

    /// Place this kind on a cell.
    #[must_use]
    pub const fn at(self, position: Point) -> Piece {
        Piece::new(self, position)
    }

    /// Same kind with a different tag, keeping the owner.
    #[must_use]
    pub const fn with_tag(self, tag: char) -> Self {
        Self { tag, owner: self.owner }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag)
    }
}

/// A piece on the board.
///
/// Equality compares kind and position; `in_play` is bookkeeping only.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub position: Point,
    pub in_play: bool,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, position: Point) -> Self {
        Self {
            kind,
            position,
            in_play: true,
        }
    }

    #[must_use]
    pub const fn tag(&self) -> char {
        self.kind.tag
    }

    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.kind.owner
    }

    /// The same piece moved to another cell.
    #[must_use]
    pub const fn moved_to(self, position: Point) -> Piece {
        Piece {
            kind: self.kind,
            position,
            in_play: self.in_play,
        }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.position == other.position
    }
}

impl Eq for Piece {}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.position)
    }
}
