//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: game state is drawn into a plain
//! framebuffer (`GameView`), and the framebuffer is flushed to the terminal
//! by `Screen`. Keeping the two apart leaves `core` and the view
//! deterministic and testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Attr, FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{block_color_rgb, GameView, Viewport};
pub use renderer::Screen;
