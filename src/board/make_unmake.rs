//! Move application, reversal, and the legality filter.
//!
//! `make_move`/`undo_move` are strictly stack-disciplined: every make
//! during a simulation or search is paired with exactly one undo before
//! the caller returns, so at most one speculative branch is ever
//! materialized on the board.

use super::error::MoveError;
use super::state::Board;
use super::types::{Move, Piece};

impl Board {
    /// Apply `mv` unconditionally. No legality check is performed here;
    /// callers must have validated against `generate_moves` (or use
    /// [`Board::apply`]).
    ///
    /// A promoting move writes the promoted kind to the destination. The
    /// move itself keeps the pre-move kind, which is what `undo_move`
    /// restores.
    pub fn make_move(&mut self, mv: Move) {
        let (owner, piece) = mv.moved();
        let from = mv.from();
        let to = mv.to();
        self.squares[from.0][from.1] = None;
        self.squares[to.0][to.1] = Some((owner, mv.promotion().unwrap_or(piece)));
        if piece == Piece::King {
            self.king_squares[owner.index()] = to;
        }
        self.history.push(mv);
        self.white_to_move = !self.white_to_move;
    }

    /// Reverse the most recent not-yet-undone move; a no-op when the
    /// history is empty. Both terminal flags are cleared either way; only
    /// the next legality pass may set them again.
    pub fn undo_move(&mut self) {
        self.checkmate = false;
        self.stalemate = false;
        if let Some(mv) = self.history.pop() {
            let (owner, piece) = mv.moved();
            let from = mv.from();
            let to = mv.to();
            self.squares[from.0][from.1] = Some((owner, piece));
            self.squares[to.0][to.1] = mv.captured();
            if piece == Piece::King {
                self.king_squares[owner.index()] = from;
            }
            self.white_to_move = !self.white_to_move;
        }
    }

    /// The true legal move set for the side to move.
    ///
    /// Each pseudo-legal candidate is simulated; any that leaves the
    /// mover's own King attacked is discarded. As a side effect this is
    /// the one place the terminal flags are computed: an empty result
    /// means checkmate when the mover is in check, stalemate otherwise.
    pub fn generate_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move();
        let pseudo = self.generate_pseudo_moves();
        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            self.make_move(mv);
            if !self.in_check(mover) {
                legal.push(mv);
            }
            self.undo_move();
        }
        if legal.is_empty() {
            if self.in_check(mover) {
                self.checkmate = true;
            } else {
                self.stalemate = true;
            }
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        legal
    }

    /// Validate `mv` against the current legal move set and apply it.
    ///
    /// Matching uses move identity (the four coordinates), so a candidate
    /// built with [`Move::from_coords`] from raw square selections works;
    /// the matched move from the generator is what actually gets applied.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let legal = self.generate_moves();
        match legal.into_iter().find(|m| *m == mv) {
            Some(matched) => {
                self.make_move(matched);
                Ok(())
            }
            None => Err(MoveError::Illegal { mv }),
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`. Exercises
    /// generation and make/undo together; used by tests and benches.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
