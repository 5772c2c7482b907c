//! Board structure

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Pos, Side, BOARD_SIZE, TOTAL_CELLS};
use crate::error::{GameError, InvalidReason};

/// Game board
///
/// Stones are only ever added: a cell that leaves `Empty` never returns to it.
/// Starting over means building a fresh `Board`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get cell state at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        debug_assert!(pos.in_bounds());
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone for `side`.
    ///
    /// Fails if `pos` is off the board or already holds a stone.
    pub fn set(&mut self, pos: Pos, side: Side) -> Result<(), GameError> {
        if !pos.in_bounds() {
            return Err(GameError::InvalidMove(pos, InvalidReason::OffBoard));
        }
        if !self.is_empty(pos) {
            return Err(GameError::InvalidMove(pos, InvalidReason::Occupied));
        }
        self.stones_mut(side).set(pos);
        Ok(())
    }

    /// True once every cell holds a stone
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Bitboard for a color
    #[inline]
    pub fn stones(&self, side: Side) -> &Bitboard {
        match side {
            Side::Black => &self.black,
            Side::White => &self.white,
        }
    }

    #[inline]
    fn stones_mut(&mut self, side: Side) -> &mut Bitboard {
        match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Empty cells, column by column (x-major, then y)
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }
}

impl fmt::Display for Board {
    /// One text row per `y`, `X` for black, `O` for white, `.` for empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            let row: String = (0..BOARD_SIZE)
                .map(|x| match self.get(Pos::new(x as u8, y as u8)) {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
