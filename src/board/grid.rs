//! Grid-diagram notation.
//!
//! A position is written as nine `/`-separated rows of nine two-character
//! cell codes followed by a side-to-move token, e.g. the empty-board corner
//! `"bK----...---- w"`. The first code letter is the owner (`w`/`b`), the
//! second the piece kind; `--` marks an empty cell. Row 0 is written first,
//! matching the grid's row-major order.

use std::fmt;

use super::error::GridError;
use super::state::{Board, Cell};
use super::types::{Color, Piece, Square, BOARD_SIZE};

const EMPTY_CELL: &str = "--";

fn parse_cell(code: &str) -> Result<Cell, GridError> {
    if code == EMPTY_CELL {
        return Ok(None);
    }
    let mut chars = code.chars();
    let owner = chars.next().and_then(Color::from_char);
    let piece = chars.next().and_then(Piece::from_char);
    match (owner, piece) {
        (Some(owner), Some(piece)) => Ok(Some((owner, piece))),
        _ => Err(GridError::InvalidCell {
            code: code.to_string(),
        }),
    }
}

impl Board {
    /// Parse a position from grid-diagram notation.
    ///
    /// Rejects malformed shapes and unknown codes, and requires exactly one
    /// King per side so the king-square invariant holds from the start.
    pub fn try_from_grid(grid: &str) -> Result<Self, GridError> {
        let parts: Vec<&str> = grid.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(GridError::TooFewParts { found: parts.len() });
        }

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(GridError::WrongRowCount { found: rows.len() });
        }

        let mut squares = [[None; BOARD_SIZE]; BOARD_SIZE];
        let mut kings: [Option<Square>; 2] = [None, None];
        for (r, row_str) in rows.iter().enumerate() {
            let codes: Vec<char> = row_str.chars().collect();
            if codes.len() != BOARD_SIZE * 2 {
                return Err(GridError::WrongRowWidth {
                    row: r,
                    found: codes.len() / 2,
                });
            }
            for c in 0..BOARD_SIZE {
                let code: String = codes[c * 2..c * 2 + 2].iter().collect();
                let cell = parse_cell(&code)?;
                if let Some((owner, Piece::King)) = cell {
                    if kings[owner.index()].is_some() {
                        return Err(GridError::DuplicateKing { color: owner });
                    }
                    kings[owner.index()] = Some(Square(r, c));
                }
                squares[r][c] = cell;
            }
        }

        let white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(GridError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut king_squares = [Square(0, 0); 2];
        for color in Color::BOTH {
            king_squares[color.index()] =
                kings[color.index()].ok_or(GridError::MissingKing { color })?;
        }

        Ok(Board {
            squares,
            white_to_move,
            king_squares,
            history: Vec::new(),
            checkmate: false,
            stalemate: false,
        })
    }

    /// Render the position back into grid-diagram notation.
    #[must_use]
    pub fn to_grid(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE * 2 + 1) + 1);
        for (r, row) in self.squares.iter().enumerate() {
            if r > 0 {
                out.push('/');
            }
            for cell in row {
                match cell {
                    Some((owner, piece)) => {
                        out.push(owner.to_char());
                        out.push(piece.to_char());
                    }
                    None => out.push_str(EMPTY_CELL),
                }
            }
        }
        out.push(' ');
        out.push(self.side_to_move().to_char());
        out
    }
}

impl fmt::Display for Board {
    /// Human-readable diagram: one row per line, cells space-separated,
    /// followed by the side to move.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some((owner, piece)) => {
                        write!(f, "{}{}", owner.to_char(), piece.to_char())?;
                    }
                    None => write!(f, "{EMPTY_CELL}")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.side_to_move())
    }
}
