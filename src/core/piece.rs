//! Active piece - a shape matrix anchored on the board with a color

use arrayvec::ArrayVec;

use crate::core::catalog::{ShapeGrid, ShapeKind};
use crate::types::{BlockColor, BOARD_WIDTH};

/// Most blocks any catalog shape carries (the 2x3 block)
pub const MAX_PIECE_BLOCKS: usize = 6;

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub shape: ShapeGrid,
    /// Board position of the matrix's top-left corner. Signed: wall kicks
    /// can push the anchor outside the board while every filled cell stays
    /// inside.
    pub x: i8,
    pub y: i8,
    pub color: BlockColor,
}

impl Piece {
    /// Place a shape at its spawn position: horizontally centered on row 0
    pub fn spawn(kind: ShapeKind, color: BlockColor) -> Self {
        let shape = kind.grid();
        let x = (BOARD_WIDTH as i8 - shape.width() as i8) / 2;
        Self {
            shape,
            x,
            y: 0,
            color,
        }
    }

    /// Board coordinates of the piece's filled cells
    pub fn cells(&self) -> ArrayVec<(i8, i8), MAX_PIECE_BLOCKS> {
        self.shape
            .filled_cells()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centering() {
        assert_eq!(Piece::spawn(ShapeKind::I, BlockColor::Cyan).x, 3);
        assert_eq!(Piece::spawn(ShapeKind::T, BlockColor::Cyan).x, 3);
        assert_eq!(Piece::spawn(ShapeKind::O, BlockColor::Cyan).x, 4);
        assert_eq!(Piece::spawn(ShapeKind::Dot, BlockColor::Cyan).x, 4);
    }

    #[test]
    fn test_spawn_row_is_zero() {
        for kind in ShapeKind::ALL {
            assert_eq!(Piece::spawn(kind, BlockColor::Pink).y, 0);
        }
    }

    #[test]
    fn test_cells_offset_by_anchor() {
        let mut piece = Piece::spawn(ShapeKind::O, BlockColor::Lime);
        piece.x = 2;
        piece.y = 5;

        let cells: Vec<(i8, i8)> = piece.cells().into_iter().collect();
        assert_eq!(cells, vec![(2, 5), (3, 5), (2, 6), (3, 6)]);
    }

    #[test]
    fn test_cells_fit_capacity_for_all_shapes() {
        for kind in ShapeKind::ALL {
            let piece = Piece::spawn(kind, BlockColor::Red);
            assert!(piece.cells().len() <= MAX_PIECE_BLOCKS);
        }
    }
}
