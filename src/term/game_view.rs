//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Game;
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{BlockColor, GamePhase, BOARD_HEIGHT, BOARD_WIDTH};

/// Preview box edge length, in board cells.
const PREVIEW_DIM: u16 = 4;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Frame geometry, computed once per render: where the bordered board
/// sits in the viewport and how many glyphs one board cell spans.
#[derive(Debug, Clone, Copy)]
struct Layout {
    cell_w: u16,
    cell_h: u16,
    left: u16,
    top: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    fn fit(view: &GameView, viewport: Viewport) -> Self {
        let frame_w = u16::from(BOARD_WIDTH) * view.cell_w + 2;
        let frame_h = u16::from(BOARD_HEIGHT) * view.cell_h + 2;
        Self {
            cell_w: view.cell_w,
            cell_h: view.cell_h,
            left: viewport.width.saturating_sub(frame_w) / 2,
            top: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Glyph position of board cell (x, y), inside the border.
    fn cell(&self, x: u16, y: u16) -> (u16, u16) {
        (
            self.left + 1 + x * self.cell_w,
            self.top + 1 + y * self.cell_h,
        )
    }

    /// Column that centers `text` on the frame.
    fn centered(&self, text: &str) -> u16 {
        let text_w = text.chars().count() as u16;
        self.left
            .saturating_add(self.frame_w.saturating_sub(text_w) / 2)
    }
}

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    ///
    /// `status` is a transient message line (level ups, big clears) shown
    /// under the board frame.
    pub fn render(&self, game: &Game, viewport: Viewport, status: Option<&str>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let l = Layout::fit(self, viewport);

        let bg = Style::new(Rgb(80, 80, 90), Rgb(30, 30, 40));
        fb.rect(l.left + 1, l.top + 1, l.frame_w - 2, l.frame_h - 2, ' ', bg);
        draw_box(
            &mut fb,
            l.left,
            l.top,
            l.frame_w,
            l.frame_h,
            Style::new(Rgb(200, 200, 200), Rgb(0, 0, 0)),
        );

        if l.top > 0 {
            let title = Style::new(Rgb(255, 62, 157), Rgb(0, 0, 0)).bold();
            fb.text(l.centered("PARTY TETRIS"), l.top - 1, "PARTY TETRIS", title);
        }

        // Locked cells first, then the falling piece over them.
        let empty = Style::new(Rgb(90, 90, 100), Rgb(30, 30, 40)).dim();
        for y in 0..u16::from(BOARD_HEIGHT) {
            for x in 0..u16::from(BOARD_WIDTH) {
                match game.board().get(x as i8, y as i8).flatten() {
                    Some(color) => draw_cell(&mut fb, &l, x, y, '█', block_style(color)),
                    None => draw_cell(&mut fb, &l, x, y, '·', empty),
                }
            }
        }

        if let Some(piece) = game.current_piece() {
            let style = block_style(piece.color).bold();
            for (x, y) in piece.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    draw_cell(&mut fb, &l, x as u16, y as u16, '█', style);
                }
            }
        }

        draw_side_panel(&mut fb, &l, game, viewport);

        match game.phase() {
            GamePhase::Idle => draw_overlay(&mut fb, &l, 0, "PRESS S TO START"),
            GamePhase::Paused => draw_overlay(&mut fb, &l, 0, "PAUSED"),
            GamePhase::GameOver => {
                draw_overlay(&mut fb, &l, 0, "GAME OVER");
                draw_overlay(&mut fb, &l, 1, "PRESS S TO RESTART");
            }
            GamePhase::Running => {}
        }

        // Transient status line under the frame.
        if let Some(text) = status {
            let style = Style::new(Rgb(255, 222, 89), Rgb(0, 0, 0)).bold();
            fb.text(l.centered(text), l.top.saturating_add(l.frame_h), text, style);
        }

        fb
    }
}

/// One board cell worth of glyphs.
fn draw_cell(fb: &mut FrameBuffer, l: &Layout, x: u16, y: u16, ch: char, style: Style) {
    let (px, py) = l.cell(x, y);
    fb.rect(px, py, l.cell_w, l.cell_h, ch, style);
}

fn block_style(color: BlockColor) -> Style {
    Style::new(block_color_rgb(color), Rgb(30, 30, 40))
}

fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }
    fb.rect(x + 1, y, w - 2, 1, '─', style);
    fb.rect(x + 1, y + h - 1, w - 2, 1, '─', style);
    fb.rect(x, y + 1, 1, h - 2, '│', style);
    fb.rect(x + w - 1, y + 1, 1, h - 2, '│', style);
    for (cx, cy, corner) in [
        (x, y, '┌'),
        (x + w - 1, y, '┐'),
        (x, y + h - 1, '└'),
        (x + w - 1, y + h - 1, '┘'),
    ] {
        fb.paint(cx, cy, corner, style);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, l: &Layout, game: &Game, viewport: Viewport) {
    let panel_x = l.left.saturating_add(l.frame_w).saturating_add(2);
    if viewport.width.saturating_sub(panel_x) < 12 {
        return;
    }

    let label = Style::new(Rgb(220, 220, 220), Rgb(0, 0, 0)).bold();
    let value = Style::new(Rgb(200, 200, 200), Rgb(0, 0, 0));

    let mut y = l.top;
    for (name, val) in [
        ("SCORE", game.score()),
        ("LEVEL", game.level()),
        ("LINES", game.lines()),
    ] {
        fb.text(panel_x, y, name, label);
        fb.text(panel_x, y.saturating_add(1), &val.to_string(), value);
        y = y.saturating_add(3);
    }

    fb.text(panel_x, y, "NEXT", label);
    draw_next_preview(fb, l, game, panel_x, y.saturating_add(1));
    y = y
        .saturating_add(PREVIEW_DIM * l.cell_h)
        .saturating_add(4);

    let keys = Style::new(Rgb(140, 140, 150), Rgb(0, 0, 0)).dim();
    for line in [
        "←/→ move  ↑ rotate",
        "↓ soft  space drop",
        "p pause  s start",
        "r reset  q quit",
    ] {
        fb.text(panel_x, y, line, keys);
        y = y.saturating_add(1);
    }
}

fn draw_next_preview(fb: &mut FrameBuffer, l: &Layout, game: &Game, x: u16, y: u16) {
    let box_w = PREVIEW_DIM * l.cell_w + 2;
    let box_h = PREVIEW_DIM * l.cell_h + 2;
    draw_box(fb, x, y, box_w, box_h, Style::new(Rgb(120, 120, 130), Rgb(0, 0, 0)));

    let Some(piece) = game.next_piece() else {
        return;
    };

    // Center the shape matrix inside the preview area.
    let off_x = (PREVIEW_DIM - u16::from(piece.shape.width())) / 2;
    let off_y = (PREVIEW_DIM - u16::from(piece.shape.height())) / 2;
    let style = Style::new(block_color_rgb(piece.color), Rgb(0, 0, 0)).bold();
    for (dx, dy) in piece.shape.filled_cells() {
        let px = x + 1 + (off_x + dx as u16) * l.cell_w;
        let py = y + 1 + (off_y + dy as u16) * l.cell_h;
        fb.rect(px, py, l.cell_w, l.cell_h, '█', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, l: &Layout, line: u16, text: &str) {
    let y = l.top.saturating_add(l.frame_h / 2).saturating_add(line);
    let style = Style::new(Rgb(255, 255, 255), Rgb(0, 0, 0)).bold();
    fb.text(l.centered(text), y, text, style);
}

/// Render color for each palette entry.
pub fn block_color_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Pink => Rgb(255, 62, 157),
        BlockColor::Cyan => Rgb(12, 242, 255),
        BlockColor::Yellow => Rgb(255, 222, 89),
        BlockColor::Violet => Rgb(123, 97, 255),
        BlockColor::Red => Rgb(255, 82, 82),
        BlockColor::Green => Rgb(0, 230, 118),
        BlockColor::Orange => Rgb(255, 145, 0),
        BlockColor::Aqua => Rgb(24, 255, 255),
        BlockColor::Orchid => Rgb(234, 128, 252),
        BlockColor::Lime => Rgb(118, 255, 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameCommand;

    fn fb_text(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for row in fb.rows() {
            out.extend(row.iter().map(|g| g.ch));
            out.push('\n');
        }
        out
    }

    #[test]
    fn idle_screen_shows_start_prompt() {
        let game = Game::new(7);
        let fb = GameView::default().render(&game, Viewport::new(80, 24), None);
        let text = fb_text(&fb);
        assert!(text.contains("PRESS S TO START"));
        assert!(text.contains("SCORE"));
    }

    #[test]
    fn running_screen_shows_current_piece_color() {
        let mut game = Game::new(7);
        game.apply(GameCommand::Start);
        let color = game.current_piece().unwrap().color;
        let fb = GameView::default().render(&game, Viewport::new(80, 24), None);

        let expected = block_color_rgb(color);
        let found = fb
            .rows()
            .flatten()
            .any(|g| g.ch == '█' && g.style.fg == expected);
        assert!(found, "current piece should be drawn in its palette color");
    }

    #[test]
    fn status_line_is_rendered() {
        let mut game = Game::new(7);
        game.apply(GameCommand::Start);
        let fb = GameView::default().render(&game, Viewport::new(80, 24), Some("LEVEL 2!"));
        assert!(fb_text(&fb).contains("LEVEL 2!"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut game = Game::new(7);
        game.apply(GameCommand::Start);
        let fb = GameView::default().render(&game, Viewport::new(10, 5), None);
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 5);
    }

    #[test]
    fn palette_colors_are_distinct() {
        for (i, a) in BlockColor::ALL.iter().enumerate() {
            for b in BlockColor::ALL.iter().skip(i + 1) {
                assert_ne!(block_color_rgb(*a), block_color_rgb(*b));
            }
        }
    }
}
