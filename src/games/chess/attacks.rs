//! Square attack detection, used to gate castling.
//!
//! Probes outward from the target square: knight offsets for knights, the
//! eight rays for sliders, adjacent cells for the king, and the two cells a
//! pawn would capture from. Running off the board just means nothing
//! attacks from that side.

use crate::core::{Board, PlayerId, Point, Vector};

use super::{forward, Role, KNIGHT_JUMPS, ROOK_DIRECTIONS, BISHOP_DIRECTIONS};

/// True if any piece of `attacker` could capture on `square`.
#[must_use]
pub fn is_square_attacked(board: &Board, square: Point, attacker: PlayerId) -> bool {
    let is = |cell: Point, role: Role| board.kind_at(cell) == Some(role.kind(attacker));

    if KNIGHT_JUMPS.iter().any(|&v| is(square + v, Role::Knight)) {
        return true;
    }

    let rays = ROOK_DIRECTIONS
        .iter()
        .map(|&v| (v, Role::Rook))
        .chain(BISHOP_DIRECTIONS.iter().map(|&v| (v, Role::Bishop)));
    for (direction, slider) in rays {
        if is(square + direction, Role::King) {
            return true;
        }
        if let Some(piece) = board.first_piece_along(square, direction) {
            if piece.owner() == attacker
                && matches!(Role::of(piece.kind), Some(role) if role == slider || role == Role::Queen)
            {
                return true;
            }
        }
    }

    // A pawn attacks diagonally forward, so look one row behind `square`
    // from the attacker's point of view.
    let back = -forward(attacker);
    [Vector::new(back, -1), Vector::new(back, 1)]
        .into_iter()
        .any(|v| is(square + v, Role::Pawn))
}
