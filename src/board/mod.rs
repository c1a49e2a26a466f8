//! Board representation and piece types.
//!
//! Contains the coordinate, piece, and grid value types shared by the
//! rules engine and the rendering collaborators.

pub mod grid;
pub mod piece;
pub mod square;

pub use grid::Board;
pub use piece::{Piece, Player, Rank};
pub use square::{Square, SquareError, BOARD_SIZE};
