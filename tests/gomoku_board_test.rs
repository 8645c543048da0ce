//! Tests for the sparse, write-once board.

use strictly_gomoku_cli::{Board, BoardError, Coordinate, MarkKind};

#[test]
fn test_lookup_is_total() {
    let board = Board::new();
    for cell in [(0, 0), (i32::MIN, i32::MAX), (-12, 40)] {
        assert_eq!(board.mark_at(cell.into()), None);
    }
}

#[test]
fn test_placed_mark_persists() {
    let mut board = Board::new();
    let cell = Coordinate::new(-3, 8);
    board.place(cell, MarkKind::Second).unwrap();

    // Unrelated placements never disturb an earlier mark.
    for x in 0..20 {
        board.place(Coordinate::new(x, 0), MarkKind::First).unwrap();
        assert_eq!(board.mark_at(cell), Some(MarkKind::Second));
    }
}

#[test]
fn test_write_once_for_both_kinds() {
    let mut board = Board::new();
    let cell = Coordinate::new(2, 2);
    board.place(cell, MarkKind::Second).unwrap();

    assert_eq!(
        board.place(cell, MarkKind::Second),
        Err(BoardError::AlreadyOccupied(cell))
    );
    assert_eq!(
        board.place(cell, MarkKind::First),
        Err(BoardError::AlreadyOccupied(cell))
    );
    assert_eq!(board.mark_at(cell), Some(MarkKind::Second));
    assert_eq!(board.len(), 1);
}

#[test]
fn test_extreme_coordinates() {
    let mut board = Board::new();
    let corners = [
        Coordinate::new(i32::MIN, i32::MIN),
        Coordinate::new(i32::MAX, i32::MAX),
    ];
    for cell in corners {
        board.place(cell, MarkKind::First).unwrap();
    }
    assert_eq!(board.bounds(), Some((corners[0], corners[1])));
}
