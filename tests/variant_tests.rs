//! Cross-variant integration tests through the public API.

use rust_tpg::core::{Board, Game, Move, MoveError, PlayerId, Point};
use rust_tpg::games::checkers::{BLACK_PAWN, RED_KING, RED_PAWN};
use rust_tpg::games::connect_four::RED;
use rust_tpg::games::tictactoe::{O, X};
use rust_tpg::rules::{GameResult, Phase, Rules, Variant};

fn play(game: &mut Game, start: Option<(i32, i32)>, end: (i32, i32)) {
    let mv = game
        .find_move(start.map(|(r, c)| Point::new(r, c)), Point::new(end.0, end.1))
        .unwrap_or_else(|| panic!("no move to {end:?} in\n{game}"));
    game.add_move(&mv).unwrap();
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_variant_ids_are_stable() {
    let ids: Vec<_> = Variant::ALL.iter().map(|v| (v.name(), v.id())).collect();
    assert_eq!(
        ids,
        vec![("connect-four", 0), ("tic-tac-toe", 1), ("checkers", 2), ("chess", 3)]
    );
    for variant in Variant::ALL {
        assert_eq!(Variant::from_id(variant.id()), Some(variant));
        assert_eq!(Game::new(variant).id(), variant.id());
    }
    assert_eq!(Variant::from_id(9), None);
}

#[test]
fn test_default_positions() {
    for variant in Variant::ALL {
        let rules = Rules::for_variant(variant);
        let game = Game::new(variant);
        assert_eq!(game.turn(), PlayerId::MINIMIZING);
        assert!(game.history().is_empty());
        assert!(!game.is_restricted());
        assert_eq!(game.board().rows(), rules.rows());
        assert_eq!(game.board().cols(), rules.cols());
        assert!(game.board().validate().is_ok());
        assert_eq!(game.outcome(), None, "{variant} should not start finished");
        assert!(!game.available_moves().is_empty());
    }
}

#[test]
fn test_board_text_rendering() {
    let mut game = Game::tic_tac_toe();
    play(&mut game, None, (1, 1));
    play(&mut game, None, (0, 2));
    assert_eq!(game.board().to_string(), "_ _ O \n_ X _ \n_ _ _ \n");

    let checkers = Game::checkers().to_string();
    let rows: Vec<_> = checkers.lines().collect();
    assert_eq!(rows[0], "r _ r _ r _ r _ ");
    assert_eq!(rows[1], "_ r _ r _ r _ r ");
    assert_eq!(rows[3], "_ _ _ _ _ _ _ _ ");
    assert_eq!(rows[7], "_ b _ b _ b _ b ");
}

#[test]
fn test_from_moves_replays_history() {
    let moves = [
        Move::place(X.at(Point::new(0, 0))),
        Move::place(O.at(Point::new(1, 1))),
        Move::place(X.at(Point::new(2, 2))),
    ];
    let game = Game::from_moves(Variant::TicTacToe, moves.clone()).unwrap();
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.turn(), PlayerId::MAXIMIZING);
    assert_eq!(game.last_move(), Some(&moves[2]));

    let wrong_turn = [Move::place(O.at(Point::new(0, 0)))];
    let err = Game::from_moves(Variant::TicTacToe, wrong_turn).unwrap_err();
    assert!(matches!(err, MoveError::NotYourTurn { .. }));
}

// =============================================================================
// Move Application Tests
// =============================================================================

#[test]
fn test_rejected_move_leaves_game_unchanged() {
    let mut game = Game::connect_four();
    let before = game.clone();
    // Floating disc: nothing below (4,3).
    let err = game.add_move(&Move::place(RED.at(Point::new(4, 3)))).unwrap_err();
    assert_eq!(err, MoveError::Rejected(RED.at(Point::new(4, 3))));
    assert_eq!(game.board(), before.board());
    assert_eq!(game.turn(), before.turn());
    assert!(game.history().is_empty());
}

#[test]
fn test_connect_four_column_input() {
    let mut game = Game::connect_four();
    // Any cell of the column names the drop.
    play(&mut game, None, (0, 4));
    play(&mut game, None, (2, 4));
    let discs: Vec<_> = game.board().pieces().iter().map(|p| (p.tag(), p.position)).collect();
    assert_eq!(discs, vec![('R', Point::new(5, 4)), ('Y', Point::new(4, 4))]);
}

#[test]
fn test_checkers_double_jump_through_public_api() {
    let board = Board::from_pieces(
        8,
        8,
        [
            RED_PAWN.at(Point::new(2, 1)),
            BLACK_PAWN.at(Point::new(3, 2)),
            BLACK_PAWN.at(Point::new(5, 4)),
            BLACK_PAWN.at(Point::new(7, 0)),
        ],
    )
    .unwrap();
    let mut game = Game::from_position(Variant::Checkers, board, PlayerId::MINIMIZING).unwrap();

    let moves = game.available_moves();
    assert_eq!(moves.len(), 1);
    let first = game.add_move(&moves[0]).unwrap();
    assert!(!first.turn_changed);
    assert_eq!(first.turn, PlayerId::MINIMIZING);
    assert_eq!(first.restricted, Some(RED_PAWN.at(Point::new(4, 3))));

    let follow_up = game.available_moves();
    assert_eq!(follow_up.len(), 1);
    assert_eq!(follow_up[0].end(), Point::new(6, 5));
    let second = game.add_move(&follow_up[0]).unwrap();
    assert!(second.turn_changed);
    assert_eq!(second.turn, PlayerId::MAXIMIZING);
    assert_eq!(second.restricted, None);
    assert_eq!(second.outcome, None);
    assert_eq!(game.board().pieces().len(), 2);
}

#[test]
fn test_checkers_promotion_through_public_api() {
    let board = Board::from_pieces(
        8,
        8,
        [RED_PAWN.at(Point::new(6, 1)), BLACK_PAWN.at(Point::new(7, 6))],
    )
    .unwrap();
    let mut game = Game::from_position(Variant::Checkers, board, PlayerId::MINIMIZING).unwrap();
    play(&mut game, Some((6, 1)), (7, 2));
    assert_eq!(game.board().kind_at(Point::new(7, 2)), Some(RED_KING));
    assert!(game.last_move().is_some_and(|mv| mv.promotion));
}

#[test]
fn test_moves_for_piece() {
    let game = Game::chess();
    let knight = *game.board().piece_at(Point::new(7, 1)).unwrap();
    let ends: Vec<_> = game.moves_for_piece(&knight).iter().map(Move::end).collect();
    assert_eq!(ends, vec![Point::new(5, 2), Point::new(5, 0)]);

    let rook = *game.board().piece_at(Point::new(7, 0)).unwrap();
    assert!(game.moves_for_piece(&rook).is_empty());
}

// =============================================================================
// Outcome And Phase Tests
// =============================================================================

#[test]
fn test_tic_tac_toe_win_reported_by_add_move() {
    let mut game = Game::tic_tac_toe();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        play(&mut game, None, (row, col));
    }
    let mv = game.find_move(None, Point::new(0, 2)).unwrap();
    let applied = game.add_move(&mv).unwrap();
    assert_eq!(applied.outcome, Some(GameResult::Winner(PlayerId::MINIMIZING)));
    assert!(game.has_ended());
}

#[test]
fn test_phases_per_variant() {
    assert_eq!(Game::tic_tac_toe().phase(), Phase::Ending);
    assert_eq!(Game::connect_four().phase(), Phase::Opening);
    assert_eq!(Game::checkers().phase(), Phase::Opening);
    assert_eq!(Game::chess().phase(), Phase::Opening);
}

#[test]
fn test_opening_scores_are_balanced() {
    assert_eq!(Game::tic_tac_toe().score(), 0);
    assert_eq!(Game::connect_four().score(), 0);
    assert_eq!(Game::checkers().score(), 0);
    assert_eq!(Game::chess().score(), 0);
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_move_and_board_serialization() {
    let game = Game::chess();
    let mv = game.find_move(Some(Point::new(6, 4)), Point::new(4, 4)).unwrap();
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(mv, back);

    let json = serde_json::to_string(game.board()).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(game.board(), &back);

    let json = serde_json::to_string(&Variant::Checkers).unwrap();
    assert_eq!(serde_json::from_str::<Variant>(&json).unwrap(), Variant::Checkers);
}
