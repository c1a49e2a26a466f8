//! Board coordinates and square notation.
//!
//! A `Square` is a validated row/column pair on the 8x8 board. Pieces only
//! ever occupy dark squares (exactly one of row and column is even); the
//! same parity rule seeds the opening position and gates move legality.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Board side length.
pub const BOARD_SIZE: u8 = 8;

/// Errors from constructing or parsing a square.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("coordinates ({0}, {1}) are off the board")]
    OutOfRange(u8, u8),

    #[error("malformed square notation '{0}'")]
    BadNotation(String),
}

/// A coordinate on the 8x8 board, validated at construction.
///
/// Notation maps the row to a letter `A`-`H` and the column to a digit
/// `1`-`8`, so row 5, column 0 reads `F1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, rejecting coordinates outside `[0,8)`.
    pub fn new(row: u8, col: u8) -> Result<Square, SquareError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(SquareError::OutOfRange(row, col));
        }
        Ok(Square { row, col })
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Whether pieces may ever occupy this square.
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// The square offset from this one by a row/column delta, if on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The square midway between this one and `other`. Only meaningful for
    /// jump moves, where the two squares are two rows and two columns apart.
    pub(crate) fn midpoint(self, other: Square) -> Square {
        Square {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses `<letter A-H><digit 1-8>` notation, case-insensitively.
    fn from_str(s: &str) -> Result<Square, SquareError> {
        let mut chars = s.chars();
        let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(l), Some(d), None) => (l.to_ascii_uppercase(), d),
            _ => return Err(SquareError::BadNotation(s.to_string())),
        };
        if !letter.is_ascii_uppercase() || letter > 'H' || !('1'..='8').contains(&digit) {
            return Err(SquareError::BadNotation(s.to_string()));
        }
        Ok(Square {
            row: letter as u8 - b'A',
            col: digit as u8 - b'1',
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row) as char, self.col + 1)
    }
}
