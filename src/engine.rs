//! Session state for the control loop.
//!
//! Dispatches parsed commands against the rules engine and writes responses
//! to any `io::Write`, so tests can capture output without a real console.

use std::io::Write;

use crate::board::{Player, Square};
use crate::display;
use crate::game::{Game, TurnOutcome};
use crate::selfplay::{run_playouts, PlayoutConfig};

/// Holds the game between commands.
pub struct Session {
    game: Game,
}

impl Session {
    /// Creates a session at the opening position.
    pub fn new() -> Session {
        Session { game: Game::new() }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Resets to the opening position.
    pub fn new_game(&mut self) {
        self.game = Game::new();
    }

    /// Handles `move <from> <to>`: one line per result, `ok ...` or
    /// `invalid: ...`.
    pub fn handle_move<W: Write>(&mut self, from: Square, to: Square, out: &mut W) {
        match self.game.turn(from, to) {
            Ok(TurnOutcome::Stepped) => writeln!(out, "ok").unwrap(),
            Ok(TurnOutcome::Captured) => writeln!(out, "ok capture").unwrap(),
            Ok(TurnOutcome::CaptureChain(square)) => {
                writeln!(out, "ok chain {}", square).unwrap()
            }
            Ok(TurnOutcome::Won(winner)) => {
                writeln!(out, "ok winner {}", winner.number()).unwrap()
            }
            Err(e) => writeln!(out, "invalid: {}", e).unwrap(),
        }
        out.flush().unwrap();
    }

    /// Handles `board`: the text frame followed by the turn indicator.
    pub fn handle_board<W: Write>(&self, out: &mut W) {
        write!(out, "{}", display::frame(&self.game)).unwrap();
        writeln!(out, "{}", display::indicator(&self.game)).unwrap();
        out.flush().unwrap();
    }

    /// Handles `status`: piece counts and the turn indicator.
    pub fn handle_status<W: Write>(&self, out: &mut W) {
        writeln!(out, "count 1 {}", self.game.piece_count(Player::One)).unwrap();
        writeln!(out, "count 2 {}", self.game.piece_count(Player::Two)).unwrap();
        writeln!(out, "{}", display::indicator(&self.game)).unwrap();
        out.flush().unwrap();
    }

    /// Handles `legal`: one accepted move per line, or `none`.
    pub fn handle_legal<W: Write>(&self, out: &mut W) {
        let moves = self.game.legal_moves();
        if moves.is_empty() {
            writeln!(out, "none").unwrap();
        } else {
            for mv in moves {
                writeln!(out, "{}", mv).unwrap();
            }
        }
        out.flush().unwrap();
    }

    /// Handles `playout <games>`: one JSON record per game.
    pub fn handle_playout<W: Write>(&self, games: usize, out: &mut W) {
        let config = PlayoutConfig {
            num_games: games,
            ..PlayoutConfig::default()
        };
        run_playouts(&config, out);
        out.flush().unwrap();
    }
}
