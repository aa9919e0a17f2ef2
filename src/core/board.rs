//! The board: a cell grid plus the list of pieces standing on it.
//!
//! Both views are kept in lockstep. Every mutation goes through
//! `add_piece`/`remove_piece`, and `make_move` validates a whole move before
//! touching either view, so a rejected move leaves the board unchanged.

use serde::{Deserialize, Serialize};
use tracing::error;

use super::error::{BoardError, MoveError, MoveResult};
use super::geometry::{Point, Vector};
use super::moves::Move;
use super::piece::{Piece, PieceKind};
use super::player::PlayerId;

/// A rectangular game board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: i32,
    cols: i32,
    /// Row-major cell contents.
    cells: Vec<Option<PieceKind>>,
    pieces: Vec<Piece>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; (rows.max(0) * cols.max(0)) as usize],
            pieces: Vec::new(),
        }
    }

    /// Create a board holding `pieces`.
    pub fn from_pieces(
        rows: i32,
        cols: i32,
        pieces: impl IntoIterator<Item = Piece>,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(rows, cols);
        for piece in pieces {
            board.add_piece(piece)?;
        }
        Ok(board)
    }

    #[must_use]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    #[must_use]
    pub const fn in_bounds(&self, cell: Point) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    fn index(&self, cell: Point) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| (cell.row * self.cols + cell.col) as usize)
    }

    /// Kind standing on `cell`, `None` if empty or off the board.
    #[must_use]
    pub fn kind_at(&self, cell: Point) -> Option<PieceKind> {
        self.index(cell).and_then(|i| self.cells[i])
    }

    /// Piece standing on `cell`.
    #[must_use]
    pub fn piece_at(&self, cell: Point) -> Option<&Piece> {
        self.kind_at(cell)?;
        self.pieces.iter().find(|p| p.position == cell)
    }

    /// True if `cell` is on the board and unoccupied.
    #[must_use]
    pub fn is_empty(&self, cell: Point) -> bool {
        self.index(cell).is_some_and(|i| self.cells[i].is_none())
    }

    /// True if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All pieces, in insertion order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Pieces owned by `player`.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.owner() == player)
    }

    /// Number of pieces with the given tag.
    #[must_use]
    pub fn count_tag(&self, tag: char) -> usize {
        self.pieces.iter().filter(|p| p.tag() == tag).count()
    }

    /// Put a piece on an empty cell.
    pub fn add_piece(&mut self, piece: Piece) -> Result<(), BoardError> {
        let index = self
            .index(piece.position)
            .ok_or(BoardError::OutOfBounds(piece.position))?;
        if self.pieces.contains(&piece) {
            return Err(BoardError::DuplicatePiece(piece));
        }
        if let Some(occupant) = self.cells[index] {
            return Err(BoardError::Occupied {
                cell: piece.position,
                occupant,
            });
        }
        self.cells[index] = Some(piece.kind);
        self.pieces.push(piece);
        Ok(())
    }

    /// Take a piece off the board and return it.
    pub fn remove_piece(&mut self, piece: &Piece) -> Result<Piece, BoardError> {
        let slot = self
            .pieces
            .iter()
            .position(|p| p == piece)
            .ok_or(BoardError::MissingPiece(*piece))?;
        if let Some(index) = self.index(piece.position) {
            self.cells[index] = None;
        }
        Ok(self.pieces.remove(slot))
    }

    /// Count contiguous cells holding `kind`, starting one step from `start`
    /// in `direction`. Stops at the first other cell or the board edge.
    #[must_use]
    pub fn crawl(&self, start: Point, direction: Vector, kind: PieceKind) -> usize {
        let mut count = 0;
        let mut cell = start + direction;
        while self.kind_at(cell) == Some(kind) {
            count += 1;
            cell = cell + direction;
        }
        count
    }

    /// First occupied cell strictly beyond `start` in `direction`.
    #[must_use]
    pub fn first_piece_along(&self, start: Point, direction: Vector) -> Option<&Piece> {
        let mut cell = start + direction;
        while self.in_bounds(cell) {
            if self.kind_at(cell).is_some() {
                return self.piece_at(cell);
            }
            cell = cell + direction;
        }
        None
    }

    /// Check that the grid and the piece list agree.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen = vec![false; self.cells.len()];
        for piece in &self.pieces {
            let index = self
                .index(piece.position)
                .ok_or(BoardError::OutOfBounds(piece.position))?;
            if seen[index] || self.cells[index] != Some(piece.kind) {
                return Err(BoardError::Inconsistent(piece.position));
            }
            seen[index] = true;
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Point::new(row, col);
                if let Some(index) = self.index(cell) {
                    if self.cells[index].is_some() != seen[index] {
                        return Err(BoardError::Inconsistent(cell));
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply the side effects of `mv`.
    ///
    /// Affected pieces are removed (or relocated for castling), the mover
    /// leaves `start` and the post-move piece lands on the destination. The
    /// move is checked in full first; on `Err` nothing has changed.
    pub fn make_move(&mut self, mv: &Move) -> MoveResult<()> {
        self.check_move(mv)?;

        for (i, affected) in mv.affected.iter().enumerate() {
            let removed = self.remove_piece(affected)?;
            if i == 0 {
                if let Some(to) = mv.relocation {
                    self.add_piece(removed.moved_to(to))?;
                }
            }
        }
        if let Some(start) = mv.start {
            if let Some(mover) = self.piece_at(start).copied() {
                self.remove_piece(&mover)?;
            }
        }
        self.add_piece(mv.piece)?;
        Ok(())
    }

    fn check_move(&self, mv: &Move) -> MoveResult<()> {
        let end = mv.end();
        if !self.in_bounds(end) {
            return Err(BoardError::OutOfBounds(end).into());
        }

        if let Some(start) = mv.start {
            match self.kind_at(start) {
                Some(kind)
                    if kind.owner == mv.mover() && (mv.promotion || kind == mv.piece.kind) => {}
                _ => return Err(MoveError::EmptyStart(start)),
            }
        }

        for (i, affected) in mv.affected.iter().enumerate() {
            if mv.affected[..i].contains(affected) {
                return Err(MoveError::DuplicateAffected(*affected));
            }
            if self.piece_at(affected.position) != Some(affected) {
                error!(piece = %affected, "move references a piece that is not on the board");
                return Err(MoveError::MissingAffected(*affected));
            }
        }

        let freed = |cell: Point| {
            mv.start == Some(cell)
                || mv
                    .affected
                    .iter()
                    .enumerate()
                    .any(|(i, p)| p.position == cell && !(i == 0 && mv.relocation.is_some()))
        };

        if self.kind_at(end).is_some() && !freed(end) {
            return Err(MoveError::Blocked(end));
        }

        if let Some(to) = mv.relocation {
            if !self.in_bounds(to) {
                return Err(BoardError::OutOfBounds(to).into());
            }
            if to == end || (self.kind_at(to).is_some() && !freed(to)) {
                return Err(MoveError::Blocked(to));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Board {
    /// One line per row; each cell is its tag or `_`, followed by a space.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                match self.kind_at(Point::new(row, col)) {
                    Some(kind) => write!(f, "{} ", kind.tag)?,
                    None => write!(f, "_ ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
