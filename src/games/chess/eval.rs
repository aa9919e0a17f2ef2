//! Static chess evaluation: material, piece-square tables, castling and
//! minor-piece pairs. Positive favours black (the maximizer).

use crate::core::{Game, Piece, PlayerId};
use crate::rules::Phase;

use super::{CastlingRights, Role};

type Table = [[i32; 8]; 8];

// Tables are from white's side of the board. Black pieces read them at
// row `7 - r`.

const PAWN_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const QUEEN_TABLE: Table = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

/// King safety for the opening and middle game.
const KING_TABLE: Table = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

/// King activity once the board has thinned out.
const KING_END_TABLE: Table = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10, 0, 0, -10, -20, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -30, 0, 0, 0, 0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

const EDGE_PAWN_PENALTY: i32 = 15;
const ENDGAME_BISHOP_BONUS: i32 = 10;
const PAIR_BONUS: i32 = 10;
const NO_CASTLING_PENALTY: i32 = 50;
const HALF_CASTLING_PENALTY: i32 = 20;

impl Role {
    /// Material value in centipawns.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Role::Pawn => 100,
            Role::Knight => 320,
            Role::Bishop => 325,
            Role::Rook => 500,
            Role::Queen => 975,
            Role::King => 32767,
        }
    }
}

fn lookup(table: &Table, piece: &Piece) -> i32 {
    let row = if piece.owner().is_maximizing() {
        7 - piece.position.row
    } else {
        piece.position.row
    };
    usize::try_from(row)
        .ok()
        .zip(usize::try_from(piece.position.col).ok())
        .and_then(|(r, c)| table.get(r).and_then(|cells| cells.get(c)))
        .copied()
        .unwrap_or(0)
}

/// Value of one piece from its owner's point of view.
fn piece_value(role: Role, piece: &Piece, ending: bool) -> i32 {
    let square = match role {
        Role::Pawn => {
            let edge = piece.position.col == 0 || piece.position.col == 7;
            lookup(&PAWN_TABLE, piece) - if edge { EDGE_PAWN_PENALTY } else { 0 }
        }
        Role::Knight => lookup(&KNIGHT_TABLE, piece),
        Role::Bishop => lookup(&BISHOP_TABLE, piece) + if ending { ENDGAME_BISHOP_BONUS } else { 0 },
        Role::Rook => lookup(&ROOK_TABLE, piece),
        Role::Queen => lookup(&QUEEN_TABLE, piece),
        Role::King if ending => lookup(&KING_END_TABLE, piece),
        Role::King => lookup(&KING_TABLE, piece),
    };
    role.value() + square
}

/// Penalty a side pays for having given up castling without castling.
fn castling_penalty(rights: &CastlingRights, player: PlayerId) -> i32 {
    if rights.castled[player] {
        return 0;
    }
    match (rights.king_side[player], rights.queen_side[player]) {
        (false, false) => NO_CASTLING_PENALTY,
        (true, true) => 0,
        _ => HALF_CASTLING_PENALTY,
    }
}

pub(super) fn score(game: &Game) -> i32 {
    let ending = game.phase() == Phase::Ending;
    let sign = |player: PlayerId| if player.is_maximizing() { 1 } else { -1 };

    let mut total = 0;
    let mut bishops = [0usize; 2];
    let mut knights = [0usize; 2];

    for piece in game.board().pieces() {
        let Some(role) = Role::of(piece.kind) else {
            continue;
        };
        let owner = piece.owner();
        match role {
            Role::Bishop => bishops[owner.index()] += 1,
            Role::Knight => knights[owner.index()] += 1,
            _ => {}
        }
        total += sign(owner) * piece_value(role, piece, ending);
    }

    for player in PlayerId::all() {
        // Penalties count against the side that pays them.
        if let Some(rights) = game.state().castling() {
            total -= sign(player) * castling_penalty(rights, player);
        }
        let pairs = i32::from(bishops[player.index()] >= 2) + i32::from(knights[player.index()] >= 2);
        total += sign(player) * PAIR_BONUS * pairs;
    }
    total
}
