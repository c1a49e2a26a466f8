//! Console protocol handling.
//!
//! The physical board's input collaborators (button array, voice command
//! link) and the console front end all feed the session the same line
//! protocol; this module parses it.

pub mod parser;

pub use parser::{parse_command, Command};
