//! The play field: a 10x20 grid of optional colored blocks.
//!
//! Rows are stored as fixed arrays, top row first, so full-row checks and
//! the downward shift after a clear work on whole rows at a time. No
//! allocation anywhere. Coordinates are (x, y), left to right and top to
//! bottom; row 0 is the spawn row.

use crate::core::catalog::ShapeGrid;
use crate::types::{BlockColor, Cell, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

type Row = [Cell; W];

const EMPTY_ROW: Row = [None; W];

/// The board grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: [Row; H],
}

impl Board {
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; H],
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < W && y >= 0 && (y as usize) < H
    }

    /// Cell at (x, y); `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::in_bounds(x, y).then(|| self.rows[y as usize][x as usize])
    }

    /// Write a cell. Out-of-bounds writes return false and change nothing.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    /// In bounds and holding a block.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).flatten().is_some()
    }

    /// Collision predicate: does the shape placed with its top-left corner
    /// at (origin_x, origin_y) overlap a wall, the floor, or a filled cell?
    ///
    /// Cells above the top edge (y < 0) never collide with board content;
    /// only the wall and floor checks apply to them.
    pub fn collides(&self, shape: &ShapeGrid, origin_x: i8, origin_y: i8) -> bool {
        shape.filled_cells().any(|(dx, dy)| {
            let x = origin_x + dx;
            let y = origin_y + dy;
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Write a shape's filled cells into the grid with the given color.
    /// Cells above the top edge are silently dropped.
    pub fn commit(&mut self, shape: &ShapeGrid, origin_x: i8, origin_y: i8, color: BlockColor) {
        for (dx, dy) in shape.filled_cells() {
            self.set(origin_x + dx, origin_y + dy, Some(color));
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Drop row y out of the grid: rows above it shift down one, and a
    /// fresh empty row enters at the top.
    fn remove_row(&mut self, y: usize) {
        debug_assert!(y < H);
        self.rows.copy_within(0..y, 1);
        self.rows[0] = EMPTY_ROW;
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans bottom-up. After removing a row the same index is examined
    /// again, because the row that just shifted into it may also be full.
    /// Handles any number of simultaneous clears, adjacent or not, and
    /// preserves the relative order of the surviving rows.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = H - 1;

        loop {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
                continue;
            }
            if y == 0 {
                break;
            }
            y -= 1;
        }

        cleared
    }

    /// Empty the whole grid.
    pub fn clear(&mut self) {
        self.rows = [EMPTY_ROW; H];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
