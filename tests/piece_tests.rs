//! Piece tests - shape matrices and rotation

use termtris::core::{shape_matrix, ActivePiece, PieceMatrix};
use termtris::types::{Position, ShapeKind};

#[test]
fn test_square_rotation_is_identity() {
    let square = shape_matrix(ShapeKind::O);
    assert_eq!(square.rotated_cw(), square);
    assert_eq!(square.rotated_cw().rotated_cw(), square);
}

#[test]
fn test_asymmetric_rotation_changes_matrix() {
    let t = shape_matrix(ShapeKind::T);
    assert_ne!(t.rotated_cw(), t);
}

#[test]
fn test_t_rotation_sequence() {
    // One full clockwise cycle of the T piece, matrix by matrix.
    let north = PieceMatrix::from_pattern(&[[1, 1, 1], [0, 1, 0]]);
    let east = PieceMatrix::from_pattern(&[[0, 1], [1, 1], [0, 1]]);
    let south = PieceMatrix::from_pattern(&[[0, 1, 0], [1, 1, 1]]);
    let west = PieceMatrix::from_pattern(&[[1, 0], [1, 1], [1, 0]]);

    let mut m = north;
    m = m.rotated_cw();
    assert_eq!(m, east);
    m = m.rotated_cw();
    assert_eq!(m, south);
    m = m.rotated_cw();
    assert_eq!(m, west);
    m = m.rotated_cw();
    assert_eq!(m, north);
}

#[test]
fn test_i_rotation_swaps_bounding_box() {
    let i = shape_matrix(ShapeKind::I);
    let vertical = i.rotated_cw();
    assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
    assert_eq!(vertical.rotated_cw().rotated_cw().rotated_cw(), i);
}

#[test]
fn test_all_shapes_have_four_cells_in_every_rotation() {
    for kind in ShapeKind::ALL {
        let mut m = shape_matrix(kind);
        for _ in 0..4 {
            assert_eq!(m.filled_count(), 4, "{kind:?}");
            m = m.rotated_cw();
        }
    }
}

#[test]
fn test_spawn_positions_are_top_center() {
    for kind in ShapeKind::ALL {
        let piece = ActivePiece::spawn(kind);
        assert_eq!(piece.position.row, 0, "{kind:?}");
        // Centered within a cell of slack for odd widths.
        let cols = piece.matrix.cols() as i8;
        assert_eq!(piece.position.col, (10 - cols) / 2, "{kind:?}");
    }
}

#[test]
fn test_explicit_placement() {
    let piece = ActivePiece::at(ShapeKind::S, Position::new(2, 7));
    assert_eq!(piece.position, Position::new(2, 7));
    assert_eq!(piece.matrix, shape_matrix(ShapeKind::S));
}
