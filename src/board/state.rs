//! Board state: the 9x9 grid, side to move, king squares, move history,
//! and the terminal flags maintained by the legality pass.

use once_cell::sync::Lazy;

use super::types::{Color, Move, Piece, Square, BOARD_SIZE};

/// One cell of the grid: empty, or an owned piece.
pub type Cell = Option<(Color, Piece)>;

/// Starting layout: lances, knights, silvers, golds and king on each back
/// rank, rook and bishop on the second rank, nine pawns on the third.
const START_GRID: &str = "bLbNbSbGbKbGbSbNbL/\
                          --bR----------bB--/\
                          bpbpbpbpbpbpbpbpbp/\
                          ------------------/\
                          ------------------/\
                          ------------------/\
                          wpwpwpwpwpwpwpwpwp/\
                          --wB----------wR--/\
                          wLwNwSwGwKwGwSwNwL w";

static START_POSITION: Lazy<Board> =
    Lazy::new(|| Board::try_from_grid(START_GRID).expect("start position grid is well-formed"));

/// The full game state. There is one live `Board` per game session; the
/// search mutates it in place through strictly paired make/undo calls.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) white_to_move: bool,
    /// Always the actual position of each side's King, indexed by
    /// `Color::index`. Updated by every make/undo that moves a King.
    pub(crate) king_squares: [Square; 2],
    /// Applied-but-not-undone moves, strictly a stack.
    pub(crate) history: Vec<Move>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Board {
    /// A fresh game in the starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        START_POSITION.clone()
    }

    /// The cell at `sq`
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Cell {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Read access to the whole grid, row-major from Black's back rank
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Where `color`'s King currently stands
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Checkmate flag from the most recent legality pass. Only meaningful
    /// after `generate_moves`; cleared by every undo.
    #[inline]
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Stalemate flag from the most recent legality pass. Only meaningful
    /// after `generate_moves`; cleared by every undo.
    #[inline]
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// The applied-move stack, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recently applied move, if any
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
