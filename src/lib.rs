//! Kingrow engine library.
//!
//! Exposes the board representation, rules engine, rendering, and protocol
//! modules for use by integration tests and the binary entry point.

pub mod board;
pub mod display;
pub mod engine;
pub mod game;
pub mod protocol;
pub mod selfplay;
