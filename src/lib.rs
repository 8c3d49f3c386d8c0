//! Party Tetris: a falling-block puzzle with 15 shapes and a 10-color palette.
//!
//! `core` holds the pure, deterministic simulation (board, shape catalog,
//! spawning, scoring, game state machine). `term` draws it into a terminal
//! framebuffer, `input` maps key events to commands, and the binary wires
//! the three together.

pub mod core;
pub mod input;
pub mod log;
pub mod term;
pub mod types;
