//! Search and baseline selector tests.

use rand::prelude::*;

use super::{board_from, EMPTY_ROW};
use crate::board::search::{negamax, DRAW_SCORE, MATE_SCORE};
use crate::board::{
    greedy_move, random_choice, search_at_depth, select_move, select_move_at_depth, Board, Move,
    Square,
};

/// Unpruned full-width negamax used as the reference for pruning tests
fn plain_negamax(board: &mut Board, moves: &[Move], depth: u32, sign: i32) -> i32 {
    if depth == 0 {
        return sign * board.evaluate();
    }
    let mut best = -MATE_SCORE * 2;
    for &mv in moves {
        board.make_move(mv);
        let replies = board.generate_moves();
        let score = if board.is_checkmate() {
            MATE_SCORE
        } else if board.is_stalemate() {
            DRAW_SCORE
        } else {
            -plain_negamax(board, &replies, depth - 1, -sign)
        };
        board.undo_move();
        best = best.max(score);
    }
    best
}

fn capture_position() -> Board {
    board_from(
        [
            "----------------bK",
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
            "bR------wR--------",
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
            "----------------wK",
        ],
        'w',
    )
}

fn mate_in_one_position() -> Board {
    board_from(
        [
            "----------------bK",
            EMPTY_ROW,
            "----------------wK",
            "wR----------------",
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
        ],
        'w',
    )
}

#[test]
fn test_negamax_depth_zero_is_signed_eval() {
    // Materially imbalanced so the sign multiplier is observable.
    let mut board = board_from(
        [
            "----------------bK",
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
            "--------wR--------",
            EMPTY_ROW,
            EMPTY_ROW,
            EMPTY_ROW,
            "----------------wK",
        ],
        'w',
    );
    let moves = board.generate_moves();
    assert_ne!(board.evaluate(), 0);
    let history_len = board.history().len();

    let result = negamax(&mut board, &moves, 0, -MATE_SCORE, MATE_SCORE, 1);
    assert_eq!(result.score, board.evaluate());
    assert_eq!(result.best_move, None);

    let result = negamax(&mut board, &moves, 0, -MATE_SCORE, MATE_SCORE, -1);
    assert_eq!(result.score, -board.evaluate());

    assert_eq!(board.history().len(), history_len);
}

#[test]
fn test_depth_one_search_takes_winning_capture() {
    for seed in [0u64, 7, 99] {
        let mut board = capture_position();
        let moves = board.generate_moves();
        let mut rng = StdRng::seed_from_u64(seed);
        let chosen =
            select_move_at_depth(&mut board, &moves, 1, &mut rng).expect("a move is selected");
        assert_eq!(chosen.from(), Square(4, 4));
        assert_eq!(chosen.to(), Square(4, 0));
        assert!(chosen.is_capture());
    }
}

#[test]
fn test_search_finds_mate_in_one() {
    let mut board = mate_in_one_position();
    let moves = board.generate_moves();
    let mut rng = StdRng::seed_from_u64(3);
    let result = search_at_depth(&mut board, &moves, 2, &mut rng);
    let chosen = result.best_move.expect("a move is selected");
    assert_eq!(chosen.from(), Square(3, 0));
    assert_eq!(chosen.to(), Square(0, 0));
    assert_eq!(result.score, MATE_SCORE);
}

#[test]
fn test_select_move_is_deterministic_for_fixed_seed() {
    let mut board = Board::new();
    let moves = board.generate_moves();

    let mut rng = StdRng::seed_from_u64(42);
    let first = select_move(&mut board, &moves, &mut rng);
    let mut rng = StdRng::seed_from_u64(42);
    let second = select_move(&mut board, &moves, &mut rng);

    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn test_select_move_returns_candidate_and_restores_board() {
    let mut board = Board::new();
    let before = board.to_grid();
    let moves = board.generate_moves();
    let mut rng = StdRng::seed_from_u64(1);

    let chosen = select_move(&mut board, &moves, &mut rng).expect("a move is selected");
    assert!(moves.contains(&chosen));
    assert_eq!(board.to_grid(), before);
    assert!(board.history().is_empty());
}

#[test]
fn test_select_move_on_empty_list_returns_none() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(select_move(&mut board, &[], &mut rng), None);
}

#[test]
fn test_pruning_preserves_search_value() {
    let positions = [Board::new(), capture_position(), mate_in_one_position()];
    for mut board in positions {
        let moves = board.generate_moves();
        let sign = if board.side_to_move() == crate::board::Color::White {
            1
        } else {
            -1
        };
        for depth in [1, 2] {
            let pruned = negamax(&mut board, &moves, depth, -MATE_SCORE, MATE_SCORE, sign).score;
            let plain = plain_negamax(&mut board, &moves, depth, sign);
            assert_eq!(pruned, plain, "depth {depth} value diverged");
        }
    }
}

#[test]
fn test_greedy_takes_winning_capture() {
    let mut board = capture_position();
    let moves = board.generate_moves();
    let chosen = greedy_move(&mut board, &moves).expect("a move is selected");
    assert_eq!(chosen.to(), Square(4, 0));
    assert_eq!(board.to_grid(), capture_position().to_grid());
}

#[test]
fn test_greedy_on_empty_list_returns_none() {
    let mut board = Board::new();
    assert_eq!(greedy_move(&mut board, &[]), None);
}

#[test]
fn test_random_choice_draws_from_list() {
    let mut board = Board::new();
    let moves = board.generate_moves();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..10 {
        let chosen = random_choice(&moves, &mut rng).expect("non-empty list");
        assert!(moves.contains(&chosen));
    }
    assert_eq!(random_choice(&[], &mut rng), None);
}
