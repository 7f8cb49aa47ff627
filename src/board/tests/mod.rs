//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - per-piece pseudo-legal generation and promotion flags
//! - `make_unmake.rs` - make/undo correctness and the legality filter
//! - `attacks.rs` - square-attack and check detection
//! - `eval.rs` - material evaluation
//! - `search.rs` - negamax, pruning, and the baseline selectors
//! - `proptest.rs` - property-based round-trip and legality laws

mod search;

use crate::board::{Board, Move, Square};

/// Empty grid row, used to assemble test positions
pub(crate) const EMPTY_ROW: &str = "------------------";

/// Assemble a grid string from nine rows plus the side to move
pub(crate) fn grid(rows: [&str; 9], side: char) -> String {
    format!("{} {side}", rows.join("/"))
}

pub(crate) fn board_from(rows: [&str; 9], side: char) -> Board {
    Board::try_from_grid(&grid(rows, side)).expect("test grid is valid")
}

/// Find the legal move between two squares, panicking if absent
pub(crate) fn find_move(board: &mut Board, from: Square, to: Square) -> Move {
    board
        .generate_moves()
        .into_iter()
        .find(|m| m.from() == from && m.to() == to)
        .expect("expected move not found")
}
