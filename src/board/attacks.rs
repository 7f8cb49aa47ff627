//! Square-attack and check detection.

use super::state::Board;
use super::types::{Color, Square};

impl Board {
    /// Whether any of `attacker`'s pieces could move onto `sq` right now.
    ///
    /// Runs a full pseudo-legal generation for the attacker over the
    /// current grid; nothing is mutated and nothing touches the move
    /// history. Quadratic when called per candidate move, which the
    /// shallow search depths keep affordable.
    #[must_use]
    pub fn square_attacked_by(&self, sq: Square, attacker: Color) -> bool {
        self.pseudo_moves_for(attacker)
            .iter()
            .any(|m| m.to() == sq)
    }

    /// Whether `color`'s King is currently attacked
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.square_attacked_by(self.king_square(color), color.opponent())
    }
}
