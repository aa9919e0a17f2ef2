//! Helpers shared by the placement games (tic-tac-toe, connect-four).

use crate::core::{Board, Game, Piece, Vector};
use crate::rules::GameResult;

/// Score for a won game, from the winner's side.
pub const WIN_SCORE: i32 = 1000;

/// Score for a drawn game. Positive: the maximizer at least did not lose.
pub const DRAW_SCORE: i32 = 250;

const AXES: [Vector; 4] = [
    Vector::new(0, 1),
    Vector::new(1, 0),
    Vector::new(1, 1),
    Vector::new(1, -1),
];

/// Longest same-kind run through `piece`, not counting the piece itself.
#[must_use]
pub fn run_through(board: &Board, piece: &Piece) -> usize {
    AXES.iter()
        .map(|&axis| {
            board.crawl(piece.position, axis, piece.kind)
                + board.crawl(piece.position, axis.reversed(), piece.kind)
        })
        .max()
        .unwrap_or(0)
}

/// Win if the last placed piece completes a line of `extra + 1`, draw on a
/// full board. A game with no history checks every piece instead.
#[must_use]
pub fn line_outcome(game: &Game, extra: usize) -> Option<GameResult> {
    let board = game.board();
    let winner = match game.last_move() {
        Some(mv) => (run_through(board, &mv.piece) >= extra).then_some(mv.mover()),
        None => board
            .pieces()
            .iter()
            .find(|p| run_through(board, p) >= extra)
            .map(Piece::owner),
    };
    match winner {
        Some(player) => Some(GameResult::Winner(player)),
        None if board.is_full() => Some(GameResult::Draw),
        None => None,
    }
}

/// Sum a positional table over the board, signed by owner.
#[must_use]
pub fn table_score<const C: usize>(board: &Board, table: &[[i32; C]]) -> i32 {
    board
        .pieces()
        .iter()
        .map(|p| {
            let value = table[p.position.row as usize][p.position.col as usize];
            if p.owner().is_maximizing() {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Positional score plus the terminal bonus.
#[must_use]
pub fn line_score<const C: usize>(game: &Game, table: &[[i32; C]], extra: usize) -> i32 {
    let bonus = line_outcome(game, extra).map_or(0, |result| result.bonus(WIN_SCORE, DRAW_SCORE));
    table_score(game.board(), table) + bonus
}
