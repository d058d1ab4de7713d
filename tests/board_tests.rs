//! Board tests - grid storage, row detection, clearing and compaction

use gridfall::core::Board;
use gridfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_free(x, y), "cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::Tee)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::Tee)));

    assert!(board.set(0, 0, Some(PieceKind::Bar)));
    assert_eq!(board.get(0, 0), Some(Some(PieceKind::Bar)));

    // Clear a cell
    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::Tee)));
    assert!(!board.set(0, -1, Some(PieceKind::Tee)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::Tee)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::Tee)));
}

#[test]
fn test_board_is_free_collision_rule() {
    let mut board = Board::new();

    // Outside the horizontal extent is never free.
    assert!(!board.is_free(-1, 5));
    assert!(!board.is_free(BOARD_WIDTH as i8, 5));

    // Below the bottom is never free.
    assert!(!board.is_free(3, BOARD_HEIGHT as i8));

    // Above the visible top is always free, even over an occupied column.
    board.set(3, 0, Some(PieceKind::Square));
    assert!(board.is_free(3, -2));

    // In-bounds occupied cell is not free.
    board.set(3, 5, Some(PieceKind::Square));
    assert!(!board.is_free(3, 5));

    // In-bounds empty cell is free.
    assert!(board.is_free(4, 5));
}

#[test]
fn test_board_is_occupied() {
    let mut board = Board::new();

    assert!(!board.is_occupied(5, 10));

    board.set(5, 10, Some(PieceKind::Tee));
    assert!(board.is_occupied(5, 10));

    // Out of bounds reads as not occupied
    assert!(!board.is_occupied(-1, 0));
    assert!(!board.is_occupied(5, -1));
}

#[test]
fn test_board_lock_blocks_round_trip() {
    let mut board = Board::new();

    let blocks = [(3, 5), (4, 5), (3, 6), (4, 6)];
    board.lock_blocks(&blocks, PieceKind::Square);

    for &(x, y) in &blocks {
        assert!(board.is_occupied(x, y));
    }

    // Every other cell stays empty.
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            if !blocks.contains(&(x, y)) {
                assert_eq!(board.get(x, y), Some(None), "spurious fill at ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn test_board_lock_blocks_skips_rows_above_top() {
    let mut board = Board::new();

    board.lock_blocks(&[(4, -1), (4, 0)], PieceKind::Bar);

    assert!(board.is_occupied(4, 0));
    // The above-top block is simply not stored.
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();

    assert!(!board.is_row_full(5));

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::Tee));
    }
    assert!(board.is_row_full(5));

    // Exactly one missing cell means not full.
    for x in 0..BOARD_WIDTH - 1 {
        board.set(x as i8, 6, Some(PieceKind::Bar));
    }
    assert!(!board.is_row_full(6));

    // Out of range rows are never full.
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_board_clear_row_shifts_rows_down() {
    let mut board = Board::new();

    // Fill row 5, then place markers above it.
    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::Tee));
    }
    board.set(0, 3, Some(PieceKind::Bar));
    board.set(1, 4, Some(PieceKind::Square));

    board.clear_row(5);

    // Row 4's content lands at row 5, row 3's at row 4.
    assert_eq!(board.get(1, 5), Some(Some(PieceKind::Square)));
    assert_eq!(board.get(0, 4), Some(Some(PieceKind::Bar)));

    // The cleared row's own content is gone.
    assert_eq!(board.get(2, 5), Some(None));

    // Row 0 ends up empty.
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.get(x, 0), Some(None));
    }
}

#[test]
fn test_board_clear_full_rows_bottom_pair() {
    let mut board = Board::new();

    // Rows 18 and 19 full, everything else empty.
    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 18, Some(PieceKind::Bar));
        board.set(x as i8, 19, Some(PieceKind::Square));
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);
    assert!(cleared.contains(&18));
    assert!(cleared.contains(&19));

    // One pass empties both; nothing is spuriously filled anywhere.
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {}) not empty", x, y);
        }
    }
}

#[test]
fn test_board_clear_full_rows_non_adjacent() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::Tee));
        board.set(x as i8, 10, Some(PieceKind::Bar));
        board.set(x as i8, 15, Some(PieceKind::Square));
    }

    // Markers above each full row.
    board.set(0, 4, Some(PieceKind::Square)); // above row 5
    board.set(0, 9, Some(PieceKind::Tee)); // above row 10
    board.set(0, 14, Some(PieceKind::Bar)); // above row 15

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 3);

    // Each marker drops by the number of full rows below it.
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::Square)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::Tee)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::Bar)));
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();

    for x in 0..BOARD_WIDTH {
        board.set(x as i8, 5, Some(PieceKind::Tee));
    }

    board.clear();

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}
