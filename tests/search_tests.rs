//! Search engine integration tests.

use rust_tpg::core::{Board, Game, PlayerId, Point};
use rust_tpg::games::checkers::{BLACK_PAWN, RED_PAWN};
use rust_tpg::games::tictactoe::{O, X};
use rust_tpg::rules::{GameResult, Variant};
use rust_tpg::search::{
    play_match, AlphaBeta, Greedy, MatchConfig, Minimax, SearchConfig, SearchEngine,
};

fn tic_tac_toe(xs: &[(i32, i32)], os: &[(i32, i32)], turn: PlayerId) -> Game {
    let pieces = xs
        .iter()
        .map(|&(r, c)| X.at(Point::new(r, c)))
        .chain(os.iter().map(|&(r, c)| O.at(Point::new(r, c))));
    let board = Board::from_pieces(3, 3, pieces).unwrap();
    Game::from_position(Variant::TicTacToe, board, turn).unwrap()
}

fn engines(depth: u32) -> Vec<Box<dyn SearchEngine>> {
    let config = SearchConfig::default().with_depth(depth);
    vec![
        Box::new(Minimax::new(config.clone())),
        Box::new(AlphaBeta::new(config)),
    ]
}

// =============================================================================
// Agreement Tests
// =============================================================================

#[test]
fn test_minimax_and_alpha_beta_agree_on_tic_tac_toe() {
    let positions = [
        tic_tac_toe(&[], &[], PlayerId::MINIMIZING),
        tic_tac_toe(&[(1, 1)], &[], PlayerId::MAXIMIZING),
        tic_tac_toe(&[(0, 0), (2, 2)], &[(1, 1)], PlayerId::MAXIMIZING),
        tic_tac_toe(&[(0, 1), (1, 0)], &[(1, 1), (2, 2)], PlayerId::MINIMIZING),
    ];
    for depth in 1..=4 {
        for game in &positions {
            let mut minimax = Minimax::with_depth(depth);
            let mut alpha_beta = AlphaBeta::with_depth(depth);
            assert_eq!(
                minimax.get_move(game),
                alpha_beta.get_move(game),
                "depth {depth}\n{game}"
            );
        }
    }
}

#[test]
fn test_minimax_and_alpha_beta_agree_on_connect_four() {
    let mut game = Game::connect_four();
    for col in [3, 3, 2, 4] {
        let mv = game.find_move(None, Point::new(0, col)).unwrap();
        game.add_move(&mv).unwrap();
    }
    let mut minimax = Minimax::with_depth(3);
    let mut alpha_beta = AlphaBeta::with_depth(3);
    assert_eq!(minimax.get_move(&game), alpha_beta.get_move(&game));
    assert!(alpha_beta.stats().nodes_visited <= minimax.stats().nodes_visited);
}

#[test]
fn test_minimax_and_alpha_beta_agree_through_jump_chains() {
    // Red chooses between a single jump and the start of a double jump;
    // the chain keeps red on turn for one more ply.
    let board = Board::from_pieces(
        8,
        8,
        [
            RED_PAWN.at(Point::new(2, 1)),
            RED_PAWN.at(Point::new(2, 5)),
            RED_PAWN.at(Point::new(0, 7)),
            BLACK_PAWN.at(Point::new(3, 2)),
            BLACK_PAWN.at(Point::new(3, 6)),
            BLACK_PAWN.at(Point::new(5, 4)),
            BLACK_PAWN.at(Point::new(6, 1)),
            BLACK_PAWN.at(Point::new(7, 6)),
        ],
    )
    .unwrap();
    let game = Game::from_position(Variant::Checkers, board, PlayerId::MINIMIZING).unwrap();
    assert_eq!(game.available_moves().len(), 2);
    for depth in 1..=4 {
        let mut minimax = Minimax::with_depth(depth);
        let mut alpha_beta = AlphaBeta::with_depth(depth);
        assert_eq!(minimax.get_move(&game), alpha_beta.get_move(&game));
    }
}

// =============================================================================
// Tactics Tests
// =============================================================================

#[test]
fn test_one_move_from_win_detected() {
    // O to move wins on (2,2).
    let game = tic_tac_toe(&[(0, 1), (0, 2), (1, 0)], &[(0, 0), (1, 1)], PlayerId::MAXIMIZING);
    for depth in 2..=4 {
        for mut engine in engines(depth) {
            let mv = engine.get_move(&game).unwrap();
            assert_eq!(mv.end(), Point::new(2, 2), "{} at depth {depth}", engine.name());
        }
    }
}

#[test]
fn test_forced_block_for_minimizer() {
    // O threatens the anti-diagonal; X must take (2,0).
    let game = tic_tac_toe(&[(0, 0), (2, 2)], &[(0, 2), (1, 1)], PlayerId::MINIMIZING);
    for mut engine in engines(2) {
        let mv = engine.get_move(&game).unwrap();
        assert_eq!(mv.end(), Point::new(2, 0), "{}", engine.name());
    }
}

#[test]
fn test_engines_return_none_without_moves() {
    let full = tic_tac_toe(
        &[(0, 0), (0, 2), (1, 0), (2, 1), (1, 2)],
        &[(0, 1), (1, 1), (2, 0), (2, 2)],
        PlayerId::MAXIMIZING,
    );
    assert!(full.available_moves().is_empty());
    for mut engine in engines(3) {
        assert!(engine.get_move(&full).is_none());
    }
    assert!(Greedy::new().get_move(&full).is_none());
}

#[test]
fn test_deterministic_results() {
    let game = Game::connect_four();
    let first = AlphaBeta::with_depth(4).get_move(&game);
    let second = AlphaBeta::with_depth(4).get_move(&game);
    assert_eq!(first, second);
}

// =============================================================================
// Match Tests
// =============================================================================

#[test]
fn test_alpha_beta_beats_greedy_at_connect_four() {
    let mut strong = AlphaBeta::with_depth(4);
    let mut weak = Greedy::new();
    let report = play_match(Game::connect_four(), &mut strong, &mut weak, &MatchConfig::default()).unwrap();
    assert!(report.outcome.is_some());
    assert_ne!(report.outcome, Some(GameResult::Winner(PlayerId::MAXIMIZING)));
}

#[test]
fn test_checkers_match_respects_chains() {
    let mut red = AlphaBeta::with_depth(2);
    let mut black = Greedy::new();
    let config = MatchConfig::new().with_max_plies(60);
    let report = play_match(Game::checkers(), &mut red, &mut black, &config).unwrap();
    assert_eq!(report.plies(), report.game.history().len());
    assert!(report.game.board().validate().is_ok());
}

#[test]
fn test_chess_search_runs() {
    let game = Game::chess();
    let mut engine = AlphaBeta::with_depth(2);
    let mv = engine.get_move(&game).unwrap();
    assert!(game.available_moves().contains(&mv));
    assert_eq!(engine.stats().rejected_moves, 0);
    assert!(engine.stats().cutoffs > 0);
}
