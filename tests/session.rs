//! Integration tests for the kingrow binary.
//!
//! Tests the full console session flow by spawning the binary, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the binary and collects stdout lines.
fn run_session(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_kingrow");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start kingrow");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

#[test]
fn status_reports_the_opening_position() {
    let lines = run_session(&["status", "quit"]);
    assert_eq!(
        lines,
        vec!["count 1 12", "count 2 12", "player 1 to move"]
    );
}

#[test]
fn accepted_move_passes_the_turn() {
    let lines = run_session(&["move F1 E2", "status", "quit"]);
    assert_eq!(lines[0], "ok");
    assert!(lines.contains(&"player 2 to move".to_string()));
}

#[test]
fn rejected_move_reports_invalid_and_changes_nothing() {
    let lines = run_session(&["move F1 D3", "status", "quit"]);
    assert!(lines[0].starts_with("invalid:"), "got {:?}", lines[0]);
    assert!(lines.contains(&"player 1 to move".to_string()));
    assert!(lines.contains(&"count 2 12".to_string()));
}

#[test]
fn board_renders_a_frame() {
    let lines = run_session(&["board", "quit"]);
    assert_eq!(lines[0], "  1 2 3 4 5 6 7 8");
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[6], "F o . o . o . o .");
    assert_eq!(lines[9], "player 1 to move");
}

#[test]
fn legal_lists_the_seven_opening_steps() {
    let lines = run_session(&["legal", "quit"]);
    assert_eq!(lines.len(), 7);
    assert!(lines.contains(&"F1 E2".to_string()));
    assert!(lines.contains(&"F7 E8".to_string()));
}

#[test]
fn malformed_input_is_suppressed() {
    // None of these may reach the engine or produce stdout output.
    let lines = run_session(&["jibberish", "move Z9 A1", "move F1", "quit"]);
    assert!(lines.is_empty(), "got {:?}", lines);
}

#[test]
fn newgame_resets_a_session_in_progress() {
    let lines = run_session(&["move F1 E2", "newgame", "status", "quit"]);
    assert_eq!(lines[0], "ok");
    assert!(lines.contains(&"player 1 to move".to_string()));
    assert!(lines.contains(&"count 1 12".to_string()));
}

#[test]
fn playout_emits_json_records() {
    let lines = run_session(&["playout 2", "quit"]);
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.starts_with('{') && line.ends_with('}'), "{}", line);
    }
}
