//! Shape catalog tests - templates and spawn geometry

use gridfall::core::{get_shape, FallingShape, SPAWN_POSITION};
use gridfall::types::PieceKind;

#[test]
fn test_square_template() {
    assert_eq!(
        get_shape(PieceKind::Square),
        [(0, 0), (1, 0), (0, 1), (1, 1)]
    );
}

#[test]
fn test_tee_template() {
    assert_eq!(get_shape(PieceKind::Tee), [(0, 0), (1, 0), (2, 0), (1, 1)]);
}

#[test]
fn test_bar_template() {
    assert_eq!(get_shape(PieceKind::Bar), [(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_spawn_position() {
    assert_eq!(SPAWN_POSITION, (4, 0));
}

#[test]
fn test_square_spawn_cells() {
    let shape = FallingShape::spawn(PieceKind::Square);
    let mut blocks = shape.blocks();
    blocks.sort();
    assert_eq!(blocks, [(4, 0), (4, 1), (5, 0), (5, 1)]);
}

#[test]
fn test_bar_spawn_cells() {
    let shape = FallingShape::spawn(PieceKind::Bar);
    let mut blocks = shape.blocks();
    blocks.sort();
    assert_eq!(blocks, [(4, 0), (5, 0), (6, 0), (7, 0)]);
}

#[test]
fn test_tee_spawn_cells() {
    let shape = FallingShape::spawn(PieceKind::Tee);
    let mut blocks = shape.blocks();
    blocks.sort();
    assert_eq!(blocks, [(4, 0), (5, 0), (5, 1), (6, 0)]);
}

#[test]
fn test_spawn_area_is_columns_4_to_7_rows_0_to_1() {
    for kind in PieceKind::ALL {
        for (x, y) in FallingShape::spawn(kind).blocks() {
            assert!((4..=7).contains(&x), "{:?} spawns outside 4..=7: x={}", kind, x);
            assert!((0..=1).contains(&y), "{:?} spawns outside 0..=1: y={}", kind, y);
        }
    }
}

#[test]
fn test_translated_is_a_pure_copy() {
    let shape = FallingShape::spawn(PieceKind::Square);
    let moved = shape.translated(0, 1);

    // The original is untouched.
    assert_eq!(shape.y, 0);
    assert_eq!(moved.y, 1);
    assert_eq!(moved.kind, shape.kind);
    assert_eq!(moved.x, shape.x);
}
