//! The 8x8 board grid.
//!
//! A plain value type holding one optional piece per cell. The rules engine
//! owns the only mutable copy during play; collaborators read it through
//! the engine's queries or the hardware code map.

use super::piece::{Piece, Player};
use super::square::{Square, SquareError, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// An 8x8 grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    /// A board with no pieces, for building custom positions.
    pub fn empty() -> Board {
        Board {
            cells: [[None; SIZE]; SIZE],
        }
    }

    /// The standard opening position: twelve men per side on dark squares,
    /// player one on rows 5-7, player two on rows 0-2.
    pub fn opening() -> Board {
        let mut board = Board::empty();
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            if sq.row() >= 5 {
                board.set(sq, Some(Piece::man(Player::One)));
            } else if sq.row() <= 2 {
                board.set(sq, Some(Piece::man(Player::Two)));
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    pub fn set(&mut self, square: Square, cell: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = cell;
    }

    /// The number of pieces the player has on the board.
    pub fn count(&self, player: Player) -> u8 {
        Square::all()
            .filter(|&sq| matches!(self.get(sq), Some(p) if p.player == player))
            .count() as u8
    }

    /// Raw-coordinate cell code, for collaborators that index the physical
    /// matrix directly.
    pub fn code_at(&self, row: u8, col: u8) -> Result<u8, SquareError> {
        let square = Square::new(row, col)?;
        Ok(self.get(square).map_or(0, Piece::code))
    }

    /// The full board as hardware cell codes, the layout the LED matrix
    /// driver consumes.
    pub fn codes(&self) -> [[u8; SIZE]; SIZE] {
        let mut map = [[0u8; SIZE]; SIZE];
        for sq in Square::all() {
            if let Some(piece) = self.get(sq) {
                map[sq.row() as usize][sq.col() as usize] = piece.code();
            }
        }
        map
    }
}
