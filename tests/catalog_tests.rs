//! Catalog tests - the fifteen shapes and their rotation geometry

use std::collections::HashSet;

use party_tetris::core::{Piece, ShapeKind};
use party_tetris::types::{BlockColor, BOARD_WIDTH};

#[test]
fn test_catalog_has_fifteen_distinct_shapes() {
    assert_eq!(ShapeKind::STANDARD.len(), 7);
    assert_eq!(ShapeKind::EXTRA.len(), 8);
    assert_eq!(ShapeKind::ALL.len(), 15);

    let unique: HashSet<ShapeKind> = ShapeKind::ALL.into_iter().collect();
    assert_eq!(unique.len(), 15);
}

#[test]
fn test_shape_dimensions_within_bounds() {
    for kind in ShapeKind::ALL {
        let grid = kind.grid();
        assert!((1..=4).contains(&grid.width()), "{:?} width", kind);
        assert!((1..=4).contains(&grid.height()), "{:?} height", kind);
        assert!((1..=6).contains(&grid.block_count()), "{:?} blocks", kind);
    }
}

#[test]
fn test_rotation_preserves_block_count() {
    for kind in ShapeKind::ALL {
        let mut grid = kind.grid();
        let blocks = grid.block_count();
        for turn in 1..=4 {
            grid = grid.rotated_cw();
            assert_eq!(grid.block_count(), blocks, "{:?} after {} turns", kind, turn);
        }
    }
}

#[test]
fn test_symmetric_shapes_rotate_onto_themselves() {
    // Full squares and the cross are unchanged by a single quarter turn.
    for kind in [ShapeKind::O, ShapeKind::Cross, ShapeKind::Dot] {
        assert_eq!(kind.grid().rotated_cw(), kind.grid(), "{:?}", kind);
    }

    // The 2x3 block needs a half turn.
    let block = ShapeKind::Block.grid();
    assert_ne!(block.rotated_cw(), block);
    assert_eq!(block.rotated_cw().rotated_cw(), block);
}

#[test]
fn test_spawn_anchors_are_centered() {
    for kind in ShapeKind::ALL {
        let piece = Piece::spawn(kind, BlockColor::Pink);
        let expected_x = (BOARD_WIDTH as i8 - kind.grid().width() as i8) / 2;
        assert_eq!(piece.x, expected_x, "{:?}", kind);
        assert_eq!(piece.y, 0, "{:?}", kind);
    }

    // Spot checks against the sizes in the shape table.
    assert_eq!(Piece::spawn(ShapeKind::I, BlockColor::Red).x, 3);
    assert_eq!(Piece::spawn(ShapeKind::O, BlockColor::Red).x, 4);
    assert_eq!(Piece::spawn(ShapeKind::Dot, BlockColor::Red).x, 4);
}

#[test]
fn test_classic_matrices_spot_checks() {
    let i = ShapeKind::I.grid();
    for x in 0..4 {
        assert!(i.filled(x, 1));
        assert!(!i.filled(x, 0));
    }

    let u = ShapeKind::U.grid();
    assert!(u.filled(0, 0));
    assert!(!u.filled(1, 0));
    assert!(u.filled(2, 0));
    for x in 0..3 {
        assert!(u.filled(x, 1));
    }

    let corner = ShapeKind::Corner.grid();
    assert!(corner.filled(0, 0));
    assert!(!corner.filled(1, 0));
    assert!(corner.filled(0, 1));
    assert!(corner.filled(1, 1));
}
