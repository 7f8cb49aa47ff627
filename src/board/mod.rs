//! Board representation and game logic for a 9x9 Shogi-like game.
//!
//! The grid is a plain 9x9 array of owned-piece cells. Move generation is
//! per-piece rule tables, legality is simulated-move check testing, and
//! the search is a fixed-depth negamax with alpha-beta pruning mutating
//! one board in place through paired make/undo.
//!
//! # Example
//! ```
//! use shogi_engine::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("starting position has {} legal moves", moves.len());
//! ```
//!
//! Captured pieces leave the game entirely; there is no drop/hand
//! mechanic.

mod attacks;
mod error;
mod eval;
mod grid;
mod make_unmake;
mod movegen;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{GridError, MoveError};
pub use state::{Board, Cell};
pub use types::{Color, Move, Piece, Square, BOARD_SIZE};

// Public API - move selection
pub use search::{
    greedy_move, random_choice, search_at_depth, select_move, select_move_at_depth, SearchResult,
    DEFAULT_DEPTH,
};
