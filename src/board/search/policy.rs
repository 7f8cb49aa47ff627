//! Baseline move selectors.
//!
//! Reference strategies kept alongside the real search: both use the same
//! scoring convention, so they double as fixtures when testing it.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{DRAW_SCORE, MATE_SCORE};
use crate::board::state::Board;
use crate::board::types::Move;

/// Uniform-random choice from the legal move set
pub fn random_choice<R: Rng>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}

/// One-ply greedy selector: applies each candidate, scores the resulting
/// board under the mover's sign (terminal positions score as mate/draw),
/// undoes it, and keeps the argmax. First match wins ties.
pub fn greedy_move(board: &mut Board, moves: &[Move]) -> Option<Move> {
    let sign = board.side_to_move().sign();
    let mut best_score = -MATE_SCORE * 2;
    let mut best_move = None;
    for &mv in moves {
        board.make_move(mv);
        // The flags are only valid after a legality pass for the reply side.
        let _ = board.generate_moves();
        let score = if board.is_checkmate() {
            MATE_SCORE
        } else if board.is_stalemate() {
            DRAW_SCORE
        } else {
            sign * board.evaluate()
        };
        board.undo_move();
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
    }
    best_move
}
