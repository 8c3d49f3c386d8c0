//! Flushes a framebuffer to the terminal.
//!
//! Draws the full frame every time. The frame is small, so there is no
//! glyph diffing between frames.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::term::fb::{Attr, FrameBuffer, Rgb, Style};

/// Owns stdout for the lifetime of the game and restores the terminal
/// state on the way out.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    /// Raw mode on the alternate screen with the cursor hidden and line
    /// wrapping off.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Undo everything `enter` did, in reverse order.
    pub fn exit(&mut self) -> Result<()> {
        queue!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a full frame. Style escapes are only emitted when the style
    /// changes between neighboring glyphs.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;

        let mut active: Option<Style> = None;
        for (i, row) in fb.rows().enumerate() {
            if i > 0 {
                queue!(self.out, Print("\r\n"))?;
            }
            for glyph in row {
                if active != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    active = Some(glyph.style);
                }
                queue!(self.out, Print(glyph.ch))?;
            }
        }

        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        Ok(())
    }

    // Reset must come first: it clears colors along with attributes.
    fn apply_style(&mut self, style: Style) -> Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_color(style.fg)),
            SetBackgroundColor(to_color(style.bg))
        )?;
        match style.attr {
            Attr::Plain => {}
            Attr::Bold => queue!(self.out, SetAttribute(Attribute::Bold))?,
            Attr::Dim => queue!(self.out, SetAttribute(Attribute::Dim))?,
        }
        Ok(())
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}
