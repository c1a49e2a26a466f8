//! Kingrow -- a checkers rules engine with a console control loop.
//!
//! Reads commands from stdin and writes responses to stdout. The physical
//! board's input and LED collaborators speak the same command surface, so
//! the console loop doubles as a bench harness for the hardware.

use std::io::{self, BufRead};

use kingrow::engine::Session;
use kingrow::protocol::parser::{parse_command, Command};

/// Runs the control loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::NewGame => {
                session.new_game();
            }
            Command::Move { from, to } => {
                session.handle_move(from, to, &mut out);
            }
            Command::Board => {
                session.handle_board(&mut out);
            }
            Command::Status => {
                session.handle_status(&mut out);
            }
            Command::Legal => {
                session.handle_legal(&mut out);
            }
            Command::Playout { games } => {
                session.handle_playout(games, &mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
