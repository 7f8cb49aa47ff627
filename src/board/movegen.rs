//! Pseudo-legal move generation.
//!
//! Generation ignores check entirely; the legality filter in
//! `make_unmake.rs` is responsible for discarding moves that leave the
//! mover's King attacked.
//!
//! Step tables are written from the mover's perspective: a positive row
//! delta is a step toward the opponent. Scaling the row delta by
//! `Color::forward()` orients a single table for both sides.

use super::state::Board;
use super::types::{Color, Move, Piece, Square, BOARD_SIZE};

const ROOK_DIRS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const BISHOP_DIRS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight neighboring squares
const KING_STEPS: [(isize, isize); 8] = [
    (1, 0),
    (1, -1),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
];
/// Forward and the forward diagonals, sideways, straight back
const GOLD_STEPS: [(isize, isize); 6] = [(1, 0), (1, -1), (1, 1), (0, -1), (0, 1), (-1, 0)];
/// Forward and the forward diagonals, plus the backward diagonals
const SILVER_STEPS: [(isize, isize); 5] = [(1, 0), (1, -1), (1, 1), (-1, -1), (-1, 1)];
/// Two squares forward, one sideways; the only jumps on the board
const KNIGHT_STEPS: [(isize, isize); 2] = [(2, -1), (2, 1)];

impl Board {
    /// Every pseudo-legal move for the side to move, scanning the grid in
    /// row-major order.
    #[must_use]
    pub(crate) fn generate_pseudo_moves(&self) -> Vec<Move> {
        self.pseudo_moves_for(self.side_to_move())
    }

    /// Every pseudo-legal move for `color` over the current grid. Used
    /// directly by attack testing, which asks about the side not on move.
    #[must_use]
    pub(crate) fn pseudo_moves_for(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if let Some((owner, piece)) = self.squares[r][c] {
                    if owner == color {
                        self.piece_moves(Square(r, c), color, piece, &mut moves);
                    }
                }
            }
        }
        moves
    }

    fn piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut Vec<Move>) {
        match piece {
            Piece::Pawn => self.pawn_moves(from, color, moves),
            Piece::Rook => self.sliding_moves(from, color, piece, &ROOK_DIRS, moves),
            Piece::Bishop => self.sliding_moves(from, color, piece, &BISHOP_DIRS, moves),
            Piece::Lance => {
                self.sliding_moves(from, color, piece, &[(color.forward(), 0)], moves);
            }
            Piece::Knight => self.step_moves(from, color, piece, &KNIGHT_STEPS, moves),
            Piece::Silver => self.step_moves(from, color, piece, &SILVER_STEPS, moves),
            Piece::Gold => self.step_moves(from, color, piece, &GOLD_STEPS, moves),
            Piece::King => self.step_moves(from, color, piece, &KING_STEPS, moves),
            Piece::PromotedRook => {
                self.sliding_moves(from, color, piece, &ROOK_DIRS, moves);
                self.step_moves(from, color, piece, &BISHOP_DIRS, moves);
            }
            Piece::PromotedBishop => {
                self.sliding_moves(from, color, piece, &BISHOP_DIRS, moves);
                self.step_moves(from, color, piece, &ROOK_DIRS, moves);
            }
        }
    }

    /// Walk each direction ray one square at a time: through empties,
    /// capturing onto the first enemy, stopping at own pieces and edges.
    /// `dirs` entries are absolute row/col deltas; the Lance passes its
    /// single forward direction already oriented.
    fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        dirs: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in dirs {
            let mut sq = from;
            while let Some(to) = sq.offset(dr, dc) {
                match self.squares[to.0][to.1] {
                    None => {
                        moves.push(Move::new(from, to, (color, piece), None));
                        sq = to;
                    }
                    Some(target) if target.0 != color => {
                        moves.push(Move::new(from, to, (color, piece), Some(target)));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }

    /// Fixed one-step (or jump) offsets; any on-board destination not held
    /// by an own piece is included.
    fn step_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        steps: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in steps {
            if let Some(to) = from.offset(dr * color.forward(), dc) {
                match self.squares[to.0][to.1] {
                    None => moves.push(Move::new(from, to, (color, piece), None)),
                    Some(target) if target.0 != color => {
                        moves.push(Move::new(from, to, (color, piece), Some(target)));
                    }
                    Some(_) => {}
                }
            }
        }
    }

    /// A single forward step, onto an empty square or capturing an enemy.
    /// There is no diagonal pawn capture.
    fn pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        if let Some(to) = from.offset(color.forward(), 0) {
            match self.squares[to.0][to.1] {
                None => moves.push(Move::new(from, to, (color, Piece::Pawn), None)),
                Some(target) if target.0 != color => {
                    moves.push(Move::new(from, to, (color, Piece::Pawn), Some(target)));
                }
                Some(_) => {}
            }
        }
    }
}
