//! Negamax search with alpha-beta pruning.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{SearchResult, DEFAULT_DEPTH, DRAW_SCORE, MATE_SCORE};
use crate::board::state::Board;
use crate::board::types::Move;

/// Pick a move for the side to move at the default depth.
///
/// See [`select_move_at_depth`].
pub fn select_move<R: Rng>(board: &mut Board, moves: &[Move], rng: &mut R) -> Option<Move> {
    select_move_at_depth(board, moves, DEFAULT_DEPTH, rng)
}

/// Pick a move for the side to move by searching `depth` plies.
pub fn select_move_at_depth<R: Rng>(
    board: &mut Board,
    moves: &[Move],
    depth: u32,
    rng: &mut R,
) -> Option<Move> {
    search_at_depth(board, moves, depth, rng).best_move
}

/// Run a full root search `depth` plies deep and report both the chosen
/// move and its score (from the mover's perspective).
///
/// `moves` is the caller's current legal move set; an empty slice yields
/// no move (the driver is expected to have checked the terminal flags
/// first). The root order is shuffled through `rng` for opening variety.
/// Pruning never changes the best *score*, only which of several
/// equal-score moves gets recorded, so a seeded `rng` makes the choice
/// reproducible. The board always comes back exactly as it went in.
pub fn search_at_depth<R: Rng>(
    board: &mut Board,
    moves: &[Move],
    depth: u32,
    rng: &mut R,
) -> SearchResult {
    let mut ordered = moves.to_vec();
    ordered.shuffle(rng);
    let sign = board.side_to_move().sign();
    let result = negamax(board, &ordered, depth, -MATE_SCORE, MATE_SCORE, sign);
    #[cfg(feature = "logging")]
    match result.best_move {
        Some(mv) => log::debug!(
            "search depth {} selected {} (score {})",
            depth,
            mv,
            result.score
        ),
        None => log::debug!("search depth {} had no candidates", depth),
    }
    result
}

/// Depth-limited negamax over the mutable board.
///
/// `sign` is +1 when White is to move in this node and -1 for Black, so a
/// leaf scores as `sign * evaluate()` and every level negates its child.
/// A move whose reply set comes back empty is scored terminally (mate for
/// the mover, or the draw score) instead of recursing into a position
/// with no moves.
pub(crate) fn negamax(
    board: &mut Board,
    moves: &[Move],
    depth: u32,
    mut alpha: i32,
    beta: i32,
    sign: i32,
) -> SearchResult {
    if depth == 0 {
        return SearchResult {
            best_move: None,
            score: sign * board.evaluate(),
        };
    }

    let mut best_score = -MATE_SCORE * 2;
    let mut best_move = None;

    for &mv in moves {
        board.make_move(mv);
        let replies = board.generate_moves();
        let score = if board.is_checkmate() {
            MATE_SCORE
        } else if board.is_stalemate() {
            DRAW_SCORE
        } else {
            -negamax(board, &replies, depth - 1, -beta, -alpha, -sign).score
        };
        board.undo_move();

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(best_score);
        if alpha >= beta {
            break;
        }
    }

    SearchResult {
        best_move,
        score: best_score,
    }
}
