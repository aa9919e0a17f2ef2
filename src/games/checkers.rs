//! Checkers (draughts) on an 8x8 board.
//!
//! Red (player 0) starts on rows 0-2 and moves down the board; black
//! (player 1) starts on rows 5-7 and moves up. Captures are compulsory: if
//! any jump exists only jumps are offered, and a piece that has jumped must
//! keep jumping while it can (the restricted sub-turn). A pawn reaching the
//! far row is crowned. The side left without a move loses; two lone kings
//! draw.

use crate::core::{Board, BoardError, Game, Move, Piece, PieceKind, PlayerId, Point, Vector};
use crate::rules::{GameResult, Phase, Rules, Variant, VariantRules};

pub const RED_PAWN: PieceKind = PieceKind::new('r', PlayerId::MINIMIZING);
pub const RED_KING: PieceKind = PieceKind::new('R', PlayerId::MINIMIZING);
pub const BLACK_PAWN: PieceKind = PieceKind::new('b', PlayerId::MAXIMIZING);
pub const BLACK_KING: PieceKind = PieceKind::new('B', PlayerId::MAXIMIZING);

const RED_PAWN_MOVES: [Vector; 4] = [
    Vector::new(2, -2),
    Vector::new(2, 2),
    Vector::new(1, -1),
    Vector::new(1, 1),
];

const BLACK_PAWN_MOVES: [Vector; 4] = [
    Vector::new(-2, -2),
    Vector::new(-2, 2),
    Vector::new(-1, -1),
    Vector::new(-1, 1),
];

const KING_MOVES: [Vector; 8] = [
    Vector::new(2, -2),
    Vector::new(2, 2),
    Vector::new(-2, 2),
    Vector::new(-2, -2),
    Vector::new(1, -1),
    Vector::new(1, 1),
    Vector::new(-1, 1),
    Vector::new(-1, -1),
];

const WIN_SCORE: i32 = 1000;
const PAWN_SCORE: i32 = 15;
const KING_SCORE: i32 = 30;
const ADVANCE_SCORE_MULTIPLIER: i32 = 2;

/// Checkers behaviour table.
#[derive(Clone, Copy, Debug, Default)]
pub struct Checkers;

impl Checkers {
    /// Kind a piece becomes on arriving at `row`.
    #[must_use]
    pub fn promoted(kind: PieceKind, row: i32, rows: i32) -> PieceKind {
        match kind {
            RED_PAWN if row == rows - 1 => RED_KING,
            BLACK_PAWN if row == 0 => BLACK_KING,
            other => other,
        }
    }

    #[must_use]
    pub fn is_king(kind: PieceKind) -> bool {
        kind.tag.is_ascii_uppercase()
    }

    /// Jumps and steps available to one piece.
    fn piece_moves(rules: &Rules, board: &Board, piece: &Piece, jumps: &mut Vec<Move>, steps: &mut Vec<Move>) {
        for &v in rules.templates(piece.kind) {
            let end = piece.position + v;
            if !board.is_empty(end) {
                continue;
            }
            let kind = Self::promoted(piece.kind, end.row, board.rows());
            let mut mv = Move::translate(piece.position, kind.at(end));
            if kind != piece.kind {
                mv = mv.promoting();
            }

            match v.magnitude() {
                1 => steps.push(mv),
                2 => {
                    let mid = piece.position.midpoint(end);
                    if let Some(captured) = board.piece_at(mid) {
                        if captured.owner() != piece.owner() {
                            jumps.push(mv.capturing(*captured).continuing());
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

impl VariantRules for Checkers {
    fn variant(&self) -> Variant {
        Variant::Checkers
    }

    fn rules(&self) -> Rules {
        Rules::new(Variant::Checkers, 8, 8)
            .with_piece(RED_PAWN, &RED_PAWN_MOVES)
            .with_piece(RED_KING, &KING_MOVES)
            .with_piece(BLACK_PAWN, &BLACK_PAWN_MOVES)
            .with_piece(BLACK_KING, &KING_MOVES)
    }

    /// Pawns on the dark squares of the three rows nearest each side.
    fn default_board(&self, rules: &Rules) -> Result<Board, BoardError> {
        let cols = rules.cols();
        let pieces = (0..rules.rows()).flat_map(move |row| {
            let kind = match row {
                0..=2 => Some(RED_PAWN),
                5..=7 => Some(BLACK_PAWN),
                _ => None,
            };
            kind.into_iter().flat_map(move |kind| {
                (row % 2..cols)
                    .step_by(2)
                    .map(move |col| kind.at(Point::new(row, col)))
            })
        });
        Board::from_pieces(rules.rows(), cols, pieces)
    }

    /// Diagonal step onto an empty cell, or a jump over exactly one enemy
    /// piece standing on the midpoint. Steps end the turn and jumps never
    /// do; the promotion flag must match the crowning.
    fn is_valid_move(&self, rules: &Rules, board: &Board, mv: &Move) -> bool {
        let Some(start) = mv.start else {
            return false;
        };
        let Some(origin) = board.kind_at(start) else {
            return false;
        };
        let end = mv.end();
        let delta = start.delta_to(end);
        if !delta.is_diagonal()
            || !rules.templates(origin).contains(&delta)
            || !board.is_empty(end)
            || mv.piece.kind != Self::promoted(origin, end.row, board.rows())
            || mv.promotion != (mv.piece.kind != origin)
        {
            return false;
        }

        match delta.magnitude() {
            1 => mv.affected.is_empty() && mv.end_turn,
            2 if mv.end_turn => false,
            2 => match mv.affected.as_slice() {
                [captured] => {
                    captured.position == start.midpoint(end) && captured.owner() != origin.owner
                }
                _ => false,
            },
            _ => false,
        }
    }

    fn legal_moves(&self, game: &Game) -> Vec<Move> {
        let board = game.board();
        let mut jumps = Vec::new();
        let mut steps = Vec::new();
        for piece in board.pieces_of(game.turn()) {
            Self::piece_moves(game.rules(), board, piece, &mut jumps, &mut steps);
        }
        if jumps.is_empty() {
            steps
        } else {
            jumps
        }
    }

    /// Further jumps for the piece that just jumped.
    fn restricted_moves(&self, game: &Game, piece: &Piece) -> Vec<Move> {
        let board = game.board();
        let Some(current) = board.piece_at(piece.position) else {
            return Vec::new();
        };
        let mut jumps = Vec::new();
        let mut steps = Vec::new();
        Self::piece_moves(game.rules(), board, current, &mut jumps, &mut steps);
        jumps
    }

    fn outcome(&self, game: &Game) -> Option<GameResult> {
        if game.available_moves().is_empty() {
            return Some(GameResult::Winner(game.turn().opponent()));
        }
        let pieces = game.board().pieces();
        if let [a, b] = pieces {
            if Self::is_king(a.kind) && Self::is_king(b.kind) && a.owner() != b.owner() {
                return Some(GameResult::Draw);
            }
        }
        None
    }

    /// Material plus a small bonus for pawns past the middle of the board.
    fn score(&self, game: &Game) -> i32 {
        let mut score = self
            .outcome(game)
            .map_or(0, |result| result.bonus(WIN_SCORE, 0));

        let half = game.board().rows() / 2;
        for piece in game.board().pieces() {
            let row = piece.position.row;
            let value = match piece.kind {
                RED_PAWN => PAWN_SCORE + ADVANCE_SCORE_MULTIPLIER * (row - (half - 1)).max(0),
                BLACK_PAWN => PAWN_SCORE + ADVANCE_SCORE_MULTIPLIER * (half - row).max(0),
                _ => KING_SCORE,
            };
            if piece.owner().is_maximizing() {
                score += value;
            } else {
                score -= value;
            }
        }
        score
    }

    fn phase(&self, _game: &Game) -> Phase {
        Phase::Opening
    }
}
