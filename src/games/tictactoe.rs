//! Tic-tac-toe on a 3x3 board.
//!
//! X (player 0) and O (player 1) take turns placing a mark on any empty
//! cell. Three in a row on any line wins; a full board without a line is a
//! draw.

use crate::core::{Board, BoardError, Game, Move, PieceKind, PlayerId, Point};
use crate::rules::{GameResult, Phase, Rules, Variant, VariantRules};

use super::lines;

pub const X: PieceKind = PieceKind::new('X', PlayerId::MINIMIZING);
pub const O: PieceKind = PieceKind::new('O', PlayerId::MAXIMIZING);

/// Centre beats corners beats edges.
const POSITION_SCORE: [[i32; 3]; 3] = [[3, 2, 3], [2, 4, 2], [3, 2, 3]];

/// Marks beyond the placed one needed for a line.
const LINE_EXTRA: usize = 2;

/// Tic-tac-toe behaviour table.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl TicTacToe {
    /// The mark placed by `player`.
    #[must_use]
    pub const fn mark(player: PlayerId) -> PieceKind {
        if player.is_maximizing() {
            O
        } else {
            X
        }
    }
}

impl VariantRules for TicTacToe {
    fn variant(&self) -> Variant {
        Variant::TicTacToe
    }

    fn rules(&self) -> Rules {
        Rules::new(Variant::TicTacToe, 3, 3)
            .with_piece(X, &[])
            .with_piece(O, &[])
    }

    fn default_board(&self, rules: &Rules) -> Result<Board, BoardError> {
        Ok(Board::new(rules.rows(), rules.cols()))
    }

    fn is_valid_move(&self, _rules: &Rules, board: &Board, mv: &Move) -> bool {
        mv.start.is_none() && mv.affected.is_empty() && board.is_empty(mv.end())
    }

    fn legal_moves(&self, game: &Game) -> Vec<Move> {
        let board = game.board();
        let mark = Self::mark(game.turn());
        let mut moves = Vec::new();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let cell = Point::new(row, col);
                if board.is_empty(cell) {
                    moves.push(Move::place(mark.at(cell)));
                }
            }
        }
        moves
    }

    fn outcome(&self, game: &Game) -> Option<GameResult> {
        lines::line_outcome(game, LINE_EXTRA)
    }

    fn score(&self, game: &Game) -> i32 {
        lines::line_score(game, &POSITION_SCORE, LINE_EXTRA)
    }

    /// The whole game fits in a search, so it is always an endgame.
    fn phase(&self, _game: &Game) -> Phase {
        Phase::Ending
    }
}
