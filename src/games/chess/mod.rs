//! Simplified chess.
//!
//! White (lowercase tags, player 0) starts on rows 6-7 and moves up the
//! board; black (uppercase, player 1) starts on rows 0-1. The rules differ
//! from standard chess in a few deliberate ways:
//!
//! - moving into or staying in check is allowed; the king is simply capturable
//! - the game is won by capturing the enemy king
//! - a side with no moves while both kings stand draws
//! - no en passant, no repetition or fifty-move rules
//! - pawns always promote to a queen
//!
//! Castling is supported and gated on [`CastlingRights`], the squares
//! between king and rook being empty, and none of the king's squares being
//! attacked.

mod attacks;
mod eval;
mod movegen;

pub use attacks::is_square_attacked;

use serde::{Deserialize, Serialize};

use crate::core::{Board, BoardError, Game, Move, PieceKind, PlayerId, PlayerMap, Point, Vector};
use crate::rules::{GameResult, Phase, Rules, Variant, VariantRules};

use super::VariantState;

/// Moves played before the game leaves the opening.
pub const OPENING_MOVES: usize = 20;

/// Fewer pieces than this on the board is an endgame.
pub const ENDGAME_PIECES: usize = 6;

const PAWN_WHITE: [Vector; 4] = [
    Vector::new(-1, 0),
    Vector::new(-2, 0),
    Vector::new(-1, -1),
    Vector::new(-1, 1),
];

const PAWN_BLACK: [Vector; 4] = [
    Vector::new(1, 0),
    Vector::new(2, 0),
    Vector::new(1, -1),
    Vector::new(1, 1),
];

const ROOK_DIRECTIONS: [Vector; 4] = [
    Vector::new(0, -1),
    Vector::new(0, 1),
    Vector::new(-1, 0),
    Vector::new(1, 0),
];

const BISHOP_DIRECTIONS: [Vector; 4] = [
    Vector::new(-1, -1),
    Vector::new(1, -1),
    Vector::new(-1, 1),
    Vector::new(1, 1),
];

const KNIGHT_JUMPS: [Vector; 8] = [
    Vector::new(-2, 1),
    Vector::new(-1, 2),
    Vector::new(1, 2),
    Vector::new(2, 1),
    Vector::new(2, -1),
    Vector::new(1, -2),
    Vector::new(-1, -2),
    Vector::new(-2, -1),
];

const ALL_DIRECTIONS: [Vector; 8] = [
    Vector::new(-1, -1),
    Vector::new(1, -1),
    Vector::new(-1, 1),
    Vector::new(1, 1),
    Vector::new(0, -1),
    Vector::new(0, 1),
    Vector::new(-1, 0),
    Vector::new(1, 0),
];

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Column the king starts on.
pub const KING_COL: i32 = 4;

/// What a chess piece is, independent of colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    #[must_use]
    pub fn of(kind: PieceKind) -> Option<Role> {
        let letter = kind.tag.to_ascii_lowercase();
        Self::ALL.into_iter().find(|role| role.letter() == letter)
    }

    /// The piece kind for this role and colour.
    #[must_use]
    pub const fn kind(self, owner: PlayerId) -> PieceKind {
        let letter = self.letter();
        let tag = if owner.is_maximizing() {
            letter.to_ascii_uppercase()
        } else {
            letter
        };
        PieceKind::new(tag, owner)
    }

    fn templates(self, owner: PlayerId) -> &'static [Vector] {
        match self {
            Role::Pawn if owner.is_maximizing() => &PAWN_BLACK,
            Role::Pawn => &PAWN_WHITE,
            Role::Knight => &KNIGHT_JUMPS,
            Role::Bishop => &BISHOP_DIRECTIONS,
            Role::Rook => &ROOK_DIRECTIONS,
            Role::Queen | Role::King => &ALL_DIRECTIONS,
        }
    }
}

/// Row of a player's back rank.
#[must_use]
pub const fn home_rank(player: PlayerId) -> i32 {
    if player.is_maximizing() {
        0
    } else {
        7
    }
}

/// Row a player's pawns start on.
#[must_use]
pub const fn pawn_rank(player: PlayerId) -> i32 {
    if player.is_maximizing() {
        1
    } else {
        6
    }
}

/// Row direction a player's pawns advance in.
#[must_use]
pub const fn forward(player: PlayerId) -> i32 {
    if player.is_maximizing() {
        1
    } else {
        -1
    }
}

/// Castling bookkeeping for both sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub king_side: PlayerMap<bool>,
    pub queen_side: PlayerMap<bool>,
    /// The side has already castled.
    pub castled: PlayerMap<bool>,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self {
            king_side: PlayerMap::with_value(true),
            queen_side: PlayerMap::with_value(true),
            castled: PlayerMap::with_value(false),
        }
    }
}

impl CastlingRights {
    /// Rights implied by a position: king and rook still on their squares.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let on = |cell: Point, role: Role, player: PlayerId| board.kind_at(cell) == Some(role.kind(player));
        let mut rights = Self::default();
        for player in PlayerId::all() {
            let rank = home_rank(player);
            let king_home = on(Point::new(rank, KING_COL), Role::King, player);
            rights.king_side[player] = king_home && on(Point::new(rank, 7), Role::Rook, player);
            rights.queen_side[player] = king_home && on(Point::new(rank, 0), Role::Rook, player);
        }
        rights
    }

    /// Update after `mv` has been played.
    pub fn record(&mut self, mv: &Move) {
        let player = mv.mover();
        let rank = home_rank(player);
        match Role::of(mv.piece.kind) {
            Some(Role::King) => {
                if mv.is_castle() {
                    self.castled[player] = true;
                }
                self.king_side[player] = false;
                self.queen_side[player] = false;
            }
            Some(Role::Rook) => match mv.start {
                Some(start) if start == Point::new(rank, 0) => self.queen_side[player] = false,
                Some(start) if start == Point::new(rank, 7) => self.king_side[player] = false,
                _ => {}
            },
            _ => {}
        }

        if mv.is_capture() {
            for captured in &mv.affected {
                if Role::of(captured.kind) != Some(Role::Rook) {
                    continue;
                }
                let owner = captured.owner();
                let rank = home_rank(owner);
                if captured.position == Point::new(rank, 0) {
                    self.queen_side[owner] = false;
                } else if captured.position == Point::new(rank, 7) {
                    self.king_side[owner] = false;
                }
            }
        }
    }
}

/// Chess behaviour table.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chess;

impl Chess {
    fn is_valid_castle(board: &Board, origin: PieceKind, start: Point, mv: &Move) -> bool {
        let player = origin.owner;
        let rank = home_rank(player);
        let end = mv.end();
        if Role::of(origin) != Some(Role::King)
            || start != Point::new(rank, KING_COL)
            || end.row != rank
            || mv.piece.kind != origin
        {
            return false;
        }
        let (rook_col, rook_to, between) = match end.col {
            6 => (7, 5, 5..7),
            2 => (0, 3, 1..4),
            _ => return false,
        };
        let rook = Role::Rook.kind(player).at(Point::new(rank, rook_col));
        mv.affected.as_slice() == [rook]
            && mv.relocation == Some(Point::new(rank, rook_to))
            && board.piece_at(rook.position) == Some(&rook)
            && between.into_iter().all(|col| board.is_empty(Point::new(rank, col)))
    }
}

impl VariantRules for Chess {
    fn variant(&self) -> Variant {
        Variant::Chess
    }

    fn rules(&self) -> Rules {
        let mut rules = Rules::new(Variant::Chess, 8, 8);
        for player in PlayerId::all() {
            for role in Role::ALL {
                rules = rules.with_piece(role.kind(player), role.templates(player));
            }
        }
        rules
    }

    fn default_board(&self, rules: &Rules) -> Result<Board, BoardError> {
        let cols = rules.cols();
        let pieces = PlayerId::all().flat_map(move |player| {
            let pawn = Role::Pawn.kind(player);
            let pawns = (0..cols).map(move |col| pawn.at(Point::new(pawn_rank(player), col)));
            let back = (0..)
                .zip(BACK_RANK)
                .map(move |(col, role)| role.kind(player).at(Point::new(home_rank(player), col)));
            pawns.chain(back)
        });
        Board::from_pieces(rules.rows(), cols, pieces)
    }

    fn initial_state(&self, board: &Board) -> VariantState {
        VariantState::Chess(CastlingRights::from_board(board))
    }

    /// Re-derives legality from geometry: template membership (reduced for
    /// sliders), clear paths, capture consistency and promotion.
    fn is_valid_move(&self, rules: &Rules, board: &Board, mv: &Move) -> bool {
        let Some(start) = mv.start else {
            return false;
        };
        let Some(origin) = board.kind_at(start) else {
            return false;
        };
        let Some(role) = Role::of(origin) else {
            return false;
        };
        let end = mv.end();
        if !board.in_bounds(end) || start == end {
            return false;
        }
        if mv.is_castle() {
            return Self::is_valid_castle(board, origin, start, mv);
        }

        // Capture must be exactly the enemy piece on the destination.
        match board.piece_at(end) {
            Some(target) => {
                if target.owner() == origin.owner || mv.affected.as_slice() != [*target] {
                    return false;
                }
            }
            None => {
                if !mv.affected.is_empty() {
                    return false;
                }
            }
        }

        // Pawns reaching the last rank must become a queen.
        let last_rank = home_rank(origin.owner.opponent());
        let promotes = role == Role::Pawn && end.row == last_rank;
        let expected = if promotes {
            Role::Queen.kind(origin.owner)
        } else {
            origin
        };
        if mv.piece.kind != expected || mv.promotion != promotes {
            return false;
        }

        let delta = start.delta_to(end);
        let templates = rules.templates(origin);
        match role {
            Role::Pawn => {
                let f = forward(origin.owner);
                let capture = !mv.affected.is_empty();
                if delta == Vector::new(f, 0) {
                    !capture
                } else if delta == Vector::new(2 * f, 0) {
                    !capture && start.row == pawn_rank(origin.owner) && board.is_empty(start + Vector::new(f, 0))
                } else {
                    capture && delta.d_row == f && delta.d_col.abs() == 1
                }
            }
            Role::Knight | Role::King => templates.contains(&delta),
            _ => {
                let step = delta.reduced();
                if !templates.contains(&step) {
                    return false;
                }
                let mut cell = start + step;
                while cell != end {
                    if !board.is_empty(cell) {
                        return false;
                    }
                    cell = cell + step;
                }
                true
            }
        }
    }

    fn legal_moves(&self, game: &Game) -> Vec<Move> {
        movegen::legal_moves(game)
    }

    fn outcome(&self, game: &Game) -> Option<GameResult> {
        let board = game.board();
        let white_king = board.count_tag(Role::King.kind(PlayerId::MINIMIZING).tag) > 0;
        let black_king = board.count_tag(Role::King.kind(PlayerId::MAXIMIZING).tag) > 0;
        if !black_king {
            return Some(GameResult::Winner(PlayerId::MINIMIZING));
        }
        if !white_king {
            return Some(GameResult::Winner(PlayerId::MAXIMIZING));
        }
        if game.available_moves().is_empty() {
            return Some(GameResult::Draw);
        }
        None
    }

    fn score(&self, game: &Game) -> i32 {
        eval::score(game)
    }

    fn phase(&self, game: &Game) -> Phase {
        if game.history().len() < OPENING_MOVES {
            Phase::Opening
        } else if game.board().pieces().len() < ENDGAME_PIECES {
            Phase::Ending
        } else {
            Phase::Middle
        }
    }

    fn record_move(&self, state: &mut VariantState, mv: &Move) {
        if let VariantState::Chess(rights) = state {
            rights.record(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    const WHITE: PlayerId = PlayerId::MINIMIZING;
    const BLACK: PlayerId = PlayerId::MAXIMIZING;

    fn at(role: Role, owner: PlayerId, row: i32, col: i32) -> Piece {
        role.kind(owner).at(Point::new(row, col))
    }

    fn position(pieces: &[Piece], turn: PlayerId) -> Game {
        let board = Board::from_pieces(8, 8, pieces.iter().copied()).unwrap();
        Game::from_position(Variant::Chess, board, turn).unwrap()
    }

    #[test]
    fn test_default_board() {
        let game = Game::chess();
        let text = game.board().to_string();
        let rows: Vec<_> = text.lines().collect();
        assert_eq!(rows[0], "R N B Q K B N R ");
        assert_eq!(rows[1], "P P P P P P P P ");
        assert_eq!(rows[2], "_ _ _ _ _ _ _ _ ");
        assert_eq!(rows[6], "p p p p p p p p ");
        assert_eq!(rows[7], "r n b q k b n r ");
        assert_eq!(game.board().pieces().len(), 32);
    }

    #[test]
    fn test_default_board_reports_layout_errors() {
        // Seven files leave no room for the king-side rook.
        let narrow = Rules::new(Variant::Chess, 8, 7);
        let err = Chess.default_board(&narrow).unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds(Point::new(7, 7)));
    }

    #[test]
    fn test_role_kinds() {
        assert_eq!(Role::Queen.kind(WHITE), PieceKind::new('q', WHITE));
        assert_eq!(Role::Queen.kind(BLACK), PieceKind::new('Q', BLACK));
        assert_eq!(Role::of(PieceKind::new('N', BLACK)), Some(Role::Knight));
        assert_eq!(Role::of(PieceKind::new('x', WHITE)), None);
    }

    #[test]
    fn test_opening_move_count() {
        let game = Game::chess();
        // 16 pawn moves and 4 knight moves.
        assert_eq!(game.available_moves().len(), 20);
        assert_eq!(game.phase(), Phase::Opening);
    }

    #[test]
    fn test_king_capture_wins() {
        let mut game = position(
            &[at(Role::King, WHITE, 7, 4), at(Role::Rook, WHITE, 0, 0), at(Role::King, BLACK, 0, 7)],
            WHITE,
        );
        let capture = game.find_move(Some(Point::new(0, 0)), Point::new(0, 7)).unwrap();
        assert!(capture.is_capture());
        let applied = game.add_move(&capture).unwrap();
        assert_eq!(applied.outcome, Some(GameResult::Winner(WHITE)));
    }

    #[test]
    fn test_no_moves_is_draw() {
        // Black king walled in by its own pawns, which have nowhere to go.
        let game = position(
            &[
                at(Role::King, WHITE, 0, 0),
                at(Role::King, BLACK, 7, 7),
                at(Role::Pawn, BLACK, 7, 6),
                at(Role::Pawn, BLACK, 6, 6),
                at(Role::Pawn, BLACK, 6, 7),
            ],
            BLACK,
        );
        assert!(game.available_moves().is_empty());
        assert_eq!(game.outcome(), Some(GameResult::Draw));
    }

    #[test]
    fn test_phase_classification() {
        let game = position(&[at(Role::King, WHITE, 7, 4), at(Role::King, BLACK, 0, 4)], WHITE);
        assert_eq!(game.phase(), Phase::Opening);

        let mut game = Game::chess();
        let shuffle = [
            (Point::new(7, 1), Point::new(5, 2)),
            (Point::new(0, 1), Point::new(2, 2)),
            (Point::new(5, 2), Point::new(7, 1)),
            (Point::new(2, 2), Point::new(0, 1)),
        ];
        for _ in 0..5 {
            for (from, to) in shuffle {
                let mv = game.find_move(Some(from), to).unwrap();
                game.add_move(&mv).unwrap();
            }
        }
        assert_eq!(game.history().len(), 20);
        assert_eq!(game.phase(), Phase::Middle);
    }

    #[test]
    fn test_rights_lost_on_king_and_rook_moves() {
        let mut rights = CastlingRights::default();
        let rook_move = Move::translate(Point::new(7, 7), at(Role::Rook, WHITE, 5, 7));
        rights.record(&rook_move);
        assert!(!rights.king_side[WHITE]);
        assert!(rights.queen_side[WHITE]);

        let king_move = Move::translate(Point::new(0, 4), at(Role::King, BLACK, 1, 4));
        rights.record(&king_move);
        assert!(!rights.king_side[BLACK]);
        assert!(!rights.queen_side[BLACK]);
        assert!(!rights.castled[BLACK]);
    }

    #[test]
    fn test_rights_lost_when_rook_captured_at_home() {
        let mut rights = CastlingRights::default();
        let capture = Move::translate(Point::new(2, 2), at(Role::Bishop, WHITE, 0, 0))
            .capturing(at(Role::Rook, BLACK, 0, 0));
        rights.record(&capture);
        assert!(!rights.queen_side[BLACK]);
        assert!(rights.king_side[BLACK]);
        assert!(rights.king_side[WHITE] && rights.queen_side[WHITE]);
    }

    #[test]
    fn test_rights_from_board() {
        let rights = CastlingRights::from_board(Game::chess().board());
        assert_eq!(rights, CastlingRights::default());

        let board = Board::from_pieces(
            8,
            8,
            [at(Role::King, WHITE, 7, 4), at(Role::Rook, WHITE, 7, 0), at(Role::King, BLACK, 0, 3)],
        )
        .unwrap();
        let rights = CastlingRights::from_board(&board);
        assert!(rights.queen_side[WHITE]);
        assert!(!rights.king_side[WHITE]);
        assert!(!rights.queen_side[BLACK] && !rights.king_side[BLACK]);
    }

    #[test]
    fn test_validator_sliders_and_pawns() {
        let game = Game::chess();
        let rules = game.rules();
        let board = game.board();

        let pawn_two = Move::translate(Point::new(6, 4), at(Role::Pawn, WHITE, 4, 4));
        assert!(rules.is_valid_move(board, &pawn_two));

        let pawn_three = Move::translate(Point::new(6, 4), at(Role::Pawn, WHITE, 3, 4));
        assert!(!rules.is_valid_move(board, &pawn_three));

        // Bishop blocked by its own pawn.
        let bishop = Move::translate(Point::new(7, 2), at(Role::Bishop, WHITE, 5, 4));
        assert!(!rules.is_valid_move(board, &bishop));

        let knight = Move::translate(Point::new(7, 6), at(Role::Knight, WHITE, 5, 5));
        assert!(rules.is_valid_move(board, &knight));

        let knight_bad = Move::translate(Point::new(7, 6), at(Role::Knight, WHITE, 5, 6));
        assert!(!rules.is_valid_move(board, &knight_bad));
    }
}
