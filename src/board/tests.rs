use super::*;
use crate::error::{GameError, InvalidReason};

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Black.opponent(), Side::White);
    assert_eq!(Side::White.opponent(), Side::Black);
}

#[test]
fn test_cell_side() {
    assert_eq!(Cell::Empty.side(), None);
    assert_eq!(Cell::from(Side::Black).side(), Some(Side::Black));
    assert_eq!(Cell::from(Side::White).side(), Some(Side::White));
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);
    assert_eq!(Pos::from_index(112), pos);
    assert_eq!(Pos::center(), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));

    assert_eq!(Pos::checked(3, 4), Some(Pos::new(3, 4)));
    assert_eq!(Pos::checked(-1, 4), None);
    assert!(!Pos { x: 15, y: 0 }.in_bounds());
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new();
    assert!(board.is_board_empty());

    board.set(Pos::new(3, 4), Side::Black).unwrap();
    board.set(Pos::new(14, 14), Side::White).unwrap();

    assert_eq!(board.get(Pos::new(3, 4)), Cell::Black);
    assert_eq!(board.get(Pos::new(14, 14)), Cell::White);
    assert_eq!(board.get(Pos::new(4, 3)), Cell::Empty);
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn test_set_rejects_occupied_and_off_board() {
    let mut board = Board::new();
    let pos = Pos::new(7, 7);
    board.set(pos, Side::Black).unwrap();

    assert_eq!(
        board.set(pos, Side::White),
        Err(GameError::InvalidMove(pos, InvalidReason::Occupied))
    );
    // The original stone is untouched
    assert_eq!(board.get(pos), Cell::Black);

    let off = Pos { x: 15, y: 2 };
    assert_eq!(
        board.set(off, Side::White),
        Err(GameError::InvalidMove(off, InvalidReason::OffBoard))
    );
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        let side = if idx % 2 == 0 { Side::Black } else { Side::White };
        board.set(Pos::from_index(idx), side).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_empty_cells_order() {
    let mut board = Board::new();
    board.set(Pos::new(0, 0), Side::Black).unwrap();

    let mut cells = board.empty_cells();
    assert_eq!(cells.next(), Some(Pos::new(0, 1)));
    assert_eq!(cells.next(), Some(Pos::new(0, 2)));
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS - 1);
}

#[test]
fn test_bitboard_iter_ones() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(14, 14));
    bb.set(Pos::new(0, 3));
    bb.set(Pos::new(4, 4));

    let ones: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(ones, vec![Pos::new(0, 3), Pos::new(4, 4), Pos::new(14, 14)]);
    assert_eq!(bb.count(), 3);
}

#[test]
fn test_board_display() {
    let mut board = Board::new();
    board.set(Pos::new(1, 0), Side::Black).unwrap();
    board.set(Pos::new(0, 1), Side::White).unwrap();

    let text = board.to_string();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), BOARD_SIZE);
    assert_eq!(rows[0], ".X.............");
    assert_eq!(rows[1], "O..............");
}
