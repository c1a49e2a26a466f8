//! Control-loop command parser.
//!
//! Parses one line of console input into a structured [`Command`] the
//! session loop can dispatch on. Malformed input is logged to stderr and
//! dropped, so garbage coordinates never reach the rules engine.

use crate::board::Square;

/// A parsed control-loop command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reset to the opening position.
    NewGame,

    /// Apply one move (or one leg of a capture chain).
    Move { from: Square, to: Square },

    /// Render the current frame and turn indicator.
    Board,

    /// Report piece counts and the turn indicator.
    Status,

    /// List every move the engine would accept.
    Legal,

    /// Run random playouts and emit one JSON record per game.
    Playout { games: usize },

    /// Terminate the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines and unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => None,
        ["newgame"] => Some(Command::NewGame),
        ["board"] => Some(Command::Board),
        ["status"] => Some(Command::Status),
        ["legal"] => Some(Command::Legal),
        ["quit"] => Some(Command::Quit),
        ["move", from, to] => parse_move(from, to),
        ["playout", games] => parse_playout(games),
        _ => {
            eprintln!("unknown command: {}", line.trim());
            None
        }
    }
}

/// Parses the two squares of `move <from> <to>`.
fn parse_move(from: &str, to: &str) -> Option<Command> {
    let from = match from.parse::<Square>() {
        Ok(sq) => sq,
        Err(e) => {
            eprintln!("malformed move: {}", e);
            return None;
        }
    };
    let to = match to.parse::<Square>() {
        Ok(sq) => sq,
        Err(e) => {
            eprintln!("malformed move: {}", e);
            return None;
        }
    };
    Some(Command::Move { from, to })
}

/// Parses the game count of `playout <games>`.
fn parse_playout(games: &str) -> Option<Command> {
    match games.parse::<usize>() {
        Ok(games) if games > 0 => Some(Command::Playout { games }),
        _ => {
            eprintln!("invalid playout count: '{}'", games);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("board"), Some(Command::Board));
        assert_eq!(parse_command("status"), Some(Command::Status));
        assert_eq!(parse_command("legal"), Some(Command::Legal));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("castle"), None);
        assert_eq!(parse_command("newgame now"), None);
    }

    #[test]
    fn parse_move_command() {
        assert_eq!(
            parse_command("move F1 E2"),
            Some(Command::Move {
                from: sq(5, 0),
                to: sq(4, 1),
            })
        );
        assert_eq!(
            parse_command("move f1 e2"),
            Some(Command::Move {
                from: sq(5, 0),
                to: sq(4, 1),
            })
        );
    }

    #[test]
    fn parse_move_suppresses_bad_squares() {
        assert_eq!(parse_command("move Z1 E2"), None);
        assert_eq!(parse_command("move F0 E2"), None);
        assert_eq!(parse_command("move F1 E9"), None);
        assert_eq!(parse_command("move F1"), None);
        assert_eq!(parse_command("move F1 E2 D3"), None);
    }

    #[test]
    fn parse_playout_command() {
        assert_eq!(
            parse_command("playout 5"),
            Some(Command::Playout { games: 5 })
        );
        assert_eq!(parse_command("playout 0"), None);
        assert_eq!(parse_command("playout many"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  quit  "), Some(Command::Quit));
        assert_eq!(
            parse_command(" move F1 E2 "),
            Some(Command::Move {
                from: sq(5, 0),
                to: sq(4, 1),
            })
        );
    }
}
