//! Connect-four on a 6x7 board.
//!
//! Red (player 0) and yellow (player 1) drop discs into columns; a disc
//! lands on the lowest empty cell. Four in a row wins, a full board draws.

use crate::core::{Board, BoardError, Game, Move, PieceKind, PlayerId, Point};
use crate::rules::{GameResult, Phase, Rules, Variant, VariantRules};

use super::lines;

pub const RED: PieceKind = PieceKind::new('R', PlayerId::MINIMIZING);
pub const YELLOW: PieceKind = PieceKind::new('Y', PlayerId::MAXIMIZING);

/// Number of cells through which a four can be made from each position.
const POSITION_SCORE: [[i32; 7]; 6] = [
    [3, 4, 5, 7, 5, 4, 3],
    [4, 6, 8, 10, 8, 6, 4],
    [5, 8, 11, 13, 11, 8, 5],
    [5, 8, 11, 13, 11, 8, 5],
    [4, 6, 8, 10, 8, 6, 4],
    [3, 4, 5, 7, 5, 4, 3],
];

const LINE_EXTRA: usize = 3;

/// Moves played before the game counts as an endgame.
pub const OPENING_DEPTH: usize = 15;

/// Connect-four behaviour table.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFour;

impl ConnectFour {
    #[must_use]
    pub const fn disc(player: PlayerId) -> PieceKind {
        if player.is_maximizing() {
            YELLOW
        } else {
            RED
        }
    }

    /// Lowest empty cell of `col`, if the column is not full.
    #[must_use]
    pub fn landing_cell(board: &Board, col: i32) -> Option<Point> {
        (0..board.rows())
            .rev()
            .map(|row| Point::new(row, col))
            .find(|&cell| board.is_empty(cell))
    }
}

impl VariantRules for ConnectFour {
    fn variant(&self) -> Variant {
        Variant::ConnectFour
    }

    fn rules(&self) -> Rules {
        Rules::new(Variant::ConnectFour, 6, 7)
            .with_piece(RED, &[])
            .with_piece(YELLOW, &[])
    }

    fn default_board(&self, rules: &Rules) -> Result<Board, BoardError> {
        Ok(Board::new(rules.rows(), rules.cols()))
    }

    /// The target is empty and everything below it is filled.
    fn is_valid_move(&self, _rules: &Rules, board: &Board, mv: &Move) -> bool {
        let end = mv.end();
        mv.start.is_none()
            && mv.affected.is_empty()
            && board.is_empty(end)
            && (end.row + 1..board.rows()).all(|row| !board.is_empty(Point::new(row, end.col)))
    }

    fn legal_moves(&self, game: &Game) -> Vec<Move> {
        let board = game.board();
        let disc = Self::disc(game.turn());
        (0..board.cols())
            .filter_map(|col| Self::landing_cell(board, col))
            .map(|cell| Move::place(disc.at(cell)))
            .collect()
    }

    fn outcome(&self, game: &Game) -> Option<GameResult> {
        lines::line_outcome(game, LINE_EXTRA)
    }

    fn score(&self, game: &Game) -> i32 {
        lines::line_score(game, &POSITION_SCORE, LINE_EXTRA)
    }

    fn phase(&self, game: &Game) -> Phase {
        if game.history().len() < OPENING_DEPTH {
            Phase::Opening
        } else {
            Phase::Ending
        }
    }

    fn drops_by_column(&self) -> bool {
        true
    }
}
