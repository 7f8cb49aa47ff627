//! Board squares.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board side length.
pub const BOARD_SIZE: usize = 9;

/// A square on the board, represented as (row, col). Row 0 is the rank
/// farthest from White; column 0 is the leftmost file from White's seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// The square `(dr, dc)` away, or `None` if that lands off the board.
    /// All move generation goes through this so no offset can ever index
    /// out of range.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.0 as isize + dr;
        let col = self.1 as isize + dc;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    /// Shogi-style coordinates: files count 1-9 from White's right, ranks
    /// run a-i from Black's back rank, so (0, 0) prints as "9a".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = BOARD_SIZE - self.1;
        let rank = (b'a' + self.0 as u8) as char;
        write!(f, "{file}{rank}")
    }
}
