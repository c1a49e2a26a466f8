//! Rendering support for the LED matrix and the console.
//!
//! The physical board drives three MAX-chip LED drivers, one per color
//! channel; [`channels`] gives the per-cell channel states the drivers
//! latch. [`frame`] renders the same state as a text grid for the console
//! front end, and [`indicator`] is the turn/winner indicator line.

use crate::board::{Piece, Player, Rank, Square};
use crate::game::Game;

/// Per-cell states for the red, green, and blue driver chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

/// The channel states lighting a cell: player one red, player two blue,
/// kings add the green channel, empty cells stay dark.
pub fn channels(cell: Option<Piece>) -> Channels {
    match cell {
        None => Channels {
            red: false,
            green: false,
            blue: false,
        },
        Some(piece) => Channels {
            red: piece.player == Player::One,
            green: piece.rank == Rank::King,
            blue: piece.player == Player::Two,
        },
    }
}

/// One character per cell for the console frame.
fn glyph(cell: Option<Piece>) -> char {
    match cell {
        None => '.',
        Some(Piece {
            player: Player::One,
            rank: Rank::Man,
        }) => 'o',
        Some(Piece {
            player: Player::One,
            rank: Rank::King,
        }) => 'O',
        Some(Piece {
            player: Player::Two,
            rank: Rank::Man,
        }) => 'x',
        Some(Piece {
            player: Player::Two,
            rank: Rank::King,
        }) => 'X',
    }
}

/// Renders the board as a text grid with row letters and column digits.
pub fn frame(game: &Game) -> String {
    let mut out = String::from("  1 2 3 4 5 6 7 8\n");
    for sq in Square::all() {
        if sq.col() == 0 {
            out.push((b'A' + sq.row()) as char);
        }
        out.push(' ');
        out.push(glyph(game.cell(sq)));
        if sq.col() == 7 {
            out.push('\n');
        }
    }
    out
}

/// The turn-indicator line shown under the frame.
pub fn indicator(game: &Game) -> String {
    match game.winner() {
        Some(winner) => format!("winner: player {}", winner.number()),
        None => match game.chain_square() {
            Some(square) => format!(
                "player {} to continue from {}",
                game.active_player().number(),
                square
            ),
            None => format!("player {} to move", game.active_player().number()),
        },
    }
}
