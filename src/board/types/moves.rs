//! The per-ply move value type.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::MoveError;
use crate::board::state::Board;

use super::piece::{Color, Piece};
use super::square::Square;

/// A single ply, snapshotted from the board it was constructed against.
///
/// `moved` records the origin cell before the move (the pre-promotion kind)
/// and `captured` the destination cell, so the pair is exactly what
/// `undo_move` needs to reverse the application. `promotion` carries the
/// kind written to the destination when the move enters the mover's
/// promotion zone.
///
/// Two moves compare equal iff their four coordinates match; the snapshot
/// payload is carried data, not identity. This lets a move built from two
/// selected squares be matched against the current legal move list.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    moved: (Color, Piece),
    captured: Option<(Color, Piece)>,
    promotion: Option<Piece>,
}

impl Move {
    /// Build a move from its origin snapshot. The promotion kind is derived
    /// here, once, from the destination row: a promotable piece entering
    /// the mover's zone always promotes.
    #[must_use]
    pub(crate) fn new(
        from: Square,
        to: Square,
        moved: (Color, Piece),
        captured: Option<(Color, Piece)>,
    ) -> Self {
        let (owner, piece) = moved;
        let promotion = match piece.promotes_to() {
            Some(promoted) if owner.in_promotion_zone(to.row()) => Some(promoted),
            _ => None,
        };
        Move {
            from,
            to,
            moved,
            captured,
            promotion,
        }
    }

    /// Build a candidate move from two raw coordinates and the current
    /// board, for callers that take square selections from outside the
    /// engine. The result is meant to be matched against the legal move
    /// list (or handed to [`Board::apply`]); it has not been validated
    /// beyond bounds and origin occupancy.
    pub fn from_coords(
        from: (usize, usize),
        to: (usize, usize),
        board: &Board,
    ) -> Result<Move, MoveError> {
        let from = Square::new(from.0, from.1).ok_or(MoveError::OutOfBounds {
            row: from.0,
            col: from.1,
        })?;
        let to = Square::new(to.0, to.1).ok_or(MoveError::OutOfBounds {
            row: to.0,
            col: to.1,
        })?;
        let moved = board
            .piece_at(from)
            .ok_or(MoveError::EmptyOrigin { at: from })?;
        Ok(Move::new(from, to, moved, board.piece_at(to)))
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The owner and pre-move kind of the piece being moved
    #[inline]
    #[must_use]
    pub const fn moved(self) -> (Color, Piece) {
        self.moved
    }

    /// The destination cell as it was before the move
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<(Color, Piece)> {
        self.captured
    }

    /// The kind written to the destination, when this move promotes
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Identity key packing the four coordinates decimally
    /// (start row, start col, end row, end col).
    #[inline]
    #[must_use]
    pub const fn key(self) -> u32 {
        (self.from.0 as u32) * 1000
            + (self.from.1 as u32) * 100
            + (self.to.0 as u32) * 10
            + (self.to.1 as u32)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if self.promotion.is_some() {
            write!(f, "+")?;
        }
        Ok(())
    }
}
