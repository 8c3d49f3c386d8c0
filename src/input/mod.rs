//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`]. Held-key
//! movement rides on the terminal's own key repeat (Press and Repeat event
//! kinds), so no repeat state is tracked here.

pub mod map;

pub use map::{handle_key_event, should_quit};
