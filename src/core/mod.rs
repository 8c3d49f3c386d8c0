//! Core module - pure, deterministic game logic
//!
//! This module contains the board, the shape catalog, spawning, scoring,
//! and the game state machine. It has zero dependencies on UI or I/O.

pub mod board;
pub mod catalog;
pub mod events;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use catalog::{ShapeGrid, ShapeKind};
pub use events::{GameEvent, StatsSnapshot};
pub use game::Game;
pub use piece::Piece;
pub use rng::{Lcg, PieceSpawner};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_points};
