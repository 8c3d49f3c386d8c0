//! Shape catalog - the fifteen falling shapes and their rotation
//!
//! A shape is a small `width x height` matrix stored row-major in a fixed
//! array. Filled entries are blocks; empty entries are padding that still
//! takes part in rotation, so shapes with asymmetric padding shift exactly
//! as the matrix math dictates.

/// Maximum matrix span in either direction
pub const MAX_SHAPE_DIM: usize = 4;
const GRID_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// A shape matrix. Width and height are at most [`MAX_SHAPE_DIM`]; cells
/// beyond `width * height` are unused padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    width: u8,
    height: u8,
    cells: [u8; GRID_CELLS],
}

impl ShapeGrid {
    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix entry at (x, y) is a block
    pub fn filled(&self, x: u8, y: u8) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[(y as usize) * (self.width as usize) + (x as usize)] != 0
    }

    /// Iterate the (dx, dy) offsets of all filled entries, row by row
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| {
                if self.filled(x, y) {
                    Some((x as i8, y as i8))
                } else {
                    None
                }
            })
        })
    }

    /// Number of filled entries
    pub fn block_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Clockwise 90-degree rotation. A `w x h` matrix becomes `h x w` with
    /// `out[x][h-1-y] = in[y][x]`; four rotations return the original.
    pub fn rotated_cw(&self) -> ShapeGrid {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut out = ShapeGrid {
            width: self.height,
            height: self.width,
            cells: [0; GRID_CELLS],
        };

        for y in 0..h {
            for x in 0..w {
                out.cells[x * h + (h - 1 - y)] = self.cells[y * w + x];
            }
        }

        out
    }
}

/// The fifteen shape kinds: seven standard tetrominoes plus eight party
/// extras
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
    Cross,
    U,
    W,
    V,
    Corner,
    SmallT,
    Dot,
    Block,
}

impl ShapeKind {
    /// The seven standard shapes, favored by the spawn weighting
    pub const STANDARD: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// The eight party extras
    pub const EXTRA: [ShapeKind; 8] = [
        ShapeKind::Cross,
        ShapeKind::U,
        ShapeKind::W,
        ShapeKind::V,
        ShapeKind::Corner,
        ShapeKind::SmallT,
        ShapeKind::Dot,
        ShapeKind::Block,
    ];

    /// Every shape, standard first
    pub const ALL: [ShapeKind; 15] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
        ShapeKind::Cross,
        ShapeKind::U,
        ShapeKind::W,
        ShapeKind::V,
        ShapeKind::Corner,
        ShapeKind::SmallT,
        ShapeKind::Dot,
        ShapeKind::Block,
    ];

    /// The spawn-orientation matrix for this kind
    pub fn grid(self) -> ShapeGrid {
        match self {
            ShapeKind::I => ShapeGrid {
                width: 4,
                height: 4,
                cells: [
                    0, 0, 0, 0, //
                    1, 1, 1, 1, //
                    0, 0, 0, 0, //
                    0, 0, 0, 0, //
                ],
            },
            ShapeKind::J => ShapeGrid {
                width: 3,
                height: 3,
                cells: [
                    1, 0, 0, //
                    1, 1, 1, //
                    0, 0, 0, //
                    0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::L => ShapeGrid {
                width: 3,
                height: 3,
                cells: [
                    0, 0, 1, //
                    1, 1, 1, //
                    0, 0, 0, //
                    0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::O => ShapeGrid {
                width: 2,
                height: 2,
                cells: [
                    1, 1, //
                    1, 1, //
                    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::S => ShapeGrid {
                width: 3,
                height: 3,
                cells: [
                    0, 1, 1, //
                    1, 1, 0, //
                    0, 0, 0, //
                    0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::T => ShapeGrid {
                width: 3,
                height: 3,
                cells: [
                    0, 1, 0, //
                    1, 1, 1, //
                    0, 0, 0, //
                    0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::Z => ShapeGrid {
                width: 3,
                height: 3,
                cells: [
                    1, 1, 0, //
                    0, 1, 1, //
                    0, 0, 0, //
                    0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::Cross => ShapeGrid {
                width: 3,
                height: 3,
                cells: [
                    0, 1, 0, //
                    1, 1, 1, //
                    0, 1, 0, //
                    0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::U => ShapeGrid {
                width: 3,
                height: 3,
                cells: [
                    1, 0, 1, //
                    1, 1, 1, //
                    0, 0, 0, //
                    0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::W => ShapeGrid {
                width: 3,
                height: 3,
                cells: [
                    1, 0, 0, //
                    1, 1, 0, //
                    0, 1, 1, //
                    0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::V => ShapeGrid {
                width: 3,
                height: 3,
                cells: [
                    1, 0, 0, //
                    1, 0, 0, //
                    1, 1, 1, //
                    0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::Corner => ShapeGrid {
                width: 2,
                height: 2,
                cells: [
                    1, 0, //
                    1, 1, //
                    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::SmallT => ShapeGrid {
                width: 3,
                height: 2,
                cells: [
                    1, 1, 1, //
                    0, 1, 0, //
                    0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::Dot => ShapeGrid {
                width: 1,
                height: 1,
                cells: [
                    1, //
                    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                ],
            },
            ShapeKind::Block => ShapeGrid {
                width: 2,
                height: 3,
                cells: [
                    1, 1, //
                    1, 1, //
                    1, 1, //
                    0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_rotations_restore_every_shape() {
        for kind in ShapeKind::ALL {
            let base = kind.grid();
            let rotated = base
                .rotated_cw()
                .rotated_cw()
                .rotated_cw()
                .rotated_cw();
            assert_eq!(base, rotated, "four rotations changed {:?}", kind);
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let small_t = ShapeKind::SmallT.grid();
        assert_eq!((small_t.width(), small_t.height()), (3, 2));

        let rotated = small_t.rotated_cw();
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
    }

    #[test]
    fn test_i_rotation_fills_a_column() {
        // Spawn I occupies row 1; one clockwise turn moves it to column 2.
        let rotated = ShapeKind::I.grid().rotated_cw();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(rotated.filled(x, y), x == 2, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_small_t_rotation_points_left() {
        // 111 / 010 becomes 01 / 11 / 01 after one clockwise turn.
        let rotated = ShapeKind::SmallT.grid().rotated_cw();
        let cells: Vec<(i8, i8)> = rotated.filled_cells().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_block_counts() {
        assert_eq!(ShapeKind::I.grid().block_count(), 4);
        assert_eq!(ShapeKind::Cross.grid().block_count(), 5);
        assert_eq!(ShapeKind::Dot.grid().block_count(), 1);
        assert_eq!(ShapeKind::Block.grid().block_count(), 6);
        assert_eq!(ShapeKind::Corner.grid().block_count(), 3);
    }

    #[test]
    fn test_catalog_split() {
        assert_eq!(ShapeKind::STANDARD.len() + ShapeKind::EXTRA.len(), ShapeKind::ALL.len());
        for kind in ShapeKind::STANDARD {
            assert!(ShapeKind::ALL.contains(&kind));
        }
        for kind in ShapeKind::EXTRA {
            assert!(ShapeKind::ALL.contains(&kind));
        }
    }
}
