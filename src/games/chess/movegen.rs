//! Move generation for simplified chess.

use crate::core::{Board, Game, Move, Piece, PlayerId, Point, Vector};

use super::attacks::is_square_attacked;
use super::{forward, home_rank, pawn_rank, CastlingRights, Role, KING_COL};

/// Every move for the side to move, piece by piece in board order.
pub(super) fn legal_moves(game: &Game) -> Vec<Move> {
    let board = game.board();
    let rules = game.rules();
    let mut moves = Vec::new();

    for piece in board.pieces_of(game.turn()) {
        let Some(role) = Role::of(piece.kind) else {
            continue;
        };
        let templates = rules.templates(piece.kind);
        match role {
            Role::Pawn => pawn_moves(board, piece, &mut moves),
            Role::Knight => leaper_moves(board, piece, templates, &mut moves),
            Role::King => {
                leaper_moves(board, piece, templates, &mut moves);
                if let Some(rights) = game.state().castling() {
                    castling_moves(board, piece, rights, &mut moves);
                }
            }
            _ => {
                for &direction in templates {
                    slide(board, piece, direction, &mut moves);
                }
            }
        }
    }
    moves
}

/// Move or capture onto `end` if it is not held by a friendly piece.
fn step_to(board: &Board, piece: &Piece, end: Point) -> Option<Move> {
    if !board.in_bounds(end) {
        return None;
    }
    let mv = Move::translate(piece.position, piece.moved_to(end));
    match board.piece_at(end) {
        None => Some(mv),
        Some(target) if target.owner() != piece.owner() => Some(mv.capturing(*target)),
        Some(_) => None,
    }
}

fn leaper_moves(board: &Board, piece: &Piece, templates: &[Vector], out: &mut Vec<Move>) {
    out.extend(templates.iter().filter_map(|&v| step_to(board, piece, piece.position + v)));
}

/// Every empty square along `direction`, plus the first enemy piece.
fn slide(board: &Board, piece: &Piece, direction: Vector, out: &mut Vec<Move>) {
    let mut cell = piece.position + direction;
    while board.is_empty(cell) {
        out.push(Move::translate(piece.position, piece.moved_to(cell)));
        cell = cell + direction;
    }
    if let Some(target) = board.piece_at(cell) {
        if target.owner() != piece.owner() {
            out.push(Move::translate(piece.position, piece.moved_to(cell)).capturing(*target));
        }
    }
}

fn pawn_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    let owner = piece.owner();
    let f = forward(owner);
    let start = piece.position;
    let last_rank = home_rank(owner.opponent());

    let arrive = |end: Point| {
        if end.row == last_rank {
            Move::translate(start, Role::Queen.kind(owner).at(end)).promoting()
        } else {
            Move::translate(start, piece.moved_to(end))
        }
    };

    let one = start + Vector::new(f, 0);
    if board.is_empty(one) {
        out.push(arrive(one));
        let two = one + Vector::new(f, 0);
        if start.row == pawn_rank(owner) && board.is_empty(two) {
            out.push(arrive(two));
        }
    }

    for side in [-1, 1] {
        let end = start + Vector::new(f, side);
        if let Some(target) = board.piece_at(end) {
            if target.owner() != owner {
                out.push(arrive(end).capturing(*target));
            }
        }
    }
}

/// King-side and queen-side castles still open to `king`'s side.
fn castling_moves(board: &Board, king: &Piece, rights: &CastlingRights, out: &mut Vec<Move>) {
    let player = king.owner();
    let rank = home_rank(player);
    if king.position != Point::new(rank, KING_COL) {
        return;
    }

    // (allowed, rook column, king lands, rook lands, must be empty, must be safe)
    let sides: [(bool, i32, i32, i32, &[i32], [i32; 2]); 2] = [
        (rights.king_side[player], 7, 6, 5, &[5, 6], [5, 6]),
        (rights.queen_side[player], 0, 2, 3, &[1, 2, 3], [2, 3]),
    ];
    for (allowed, rook_col, king_to, rook_to, empty, safe) in sides {
        if !allowed {
            continue;
        }
        let rook = Role::Rook.kind(player).at(Point::new(rank, rook_col));
        if board.piece_at(rook.position) != Some(&rook) {
            continue;
        }
        if !empty.iter().all(|&col| board.is_empty(Point::new(rank, col))) {
            continue;
        }
        if is_castle_through_check(board, player, king.position, rank, safe) {
            continue;
        }
        out.push(
            Move::translate(king.position, king.moved_to(Point::new(rank, king_to)))
                .castling(rook, Point::new(rank, rook_to)),
        );
    }
}

fn is_castle_through_check(board: &Board, player: PlayerId, king: Point, rank: i32, cols: [i32; 2]) -> bool {
    let enemy = player.opponent();
    std::iter::once(king)
        .chain(cols.iter().map(|&col| Point::new(rank, col)))
        .any(|square| is_square_attacked(board, square, enemy))
}
