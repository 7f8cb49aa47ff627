//! Core game types.
//!
//! - `Piece` and `Color` - piece kinds and owners
//! - `Square` - (row, col) board coordinate
//! - `Move` - per-ply value with identity-key equality

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::{Square, BOARD_SIZE};
