//! Static material evaluation.

use super::state::Board;

impl Board {
    /// Signed material sum over the grid: White-owned pieces add their
    /// value, Black-owned subtract. No positional, mobility, or
    /// king-safety terms; Kings contribute nothing.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;
        for row in &self.squares {
            for cell in row.iter().flatten() {
                let (owner, piece) = *cell;
                score += owner.sign() * piece.value();
            }
        }
        score
    }
}
