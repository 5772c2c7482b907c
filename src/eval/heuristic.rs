//! Heuristic scoring of candidate moves
//!
//! A candidate empty cell is scored by looking at every window that contains
//! it, along all four axes. Each window contributes according to the run of
//! stones it already holds:
//! - `10^n` for a run of `n` stones
//! - a bonus when the run belongs to the side about to move
//! - a penalty for empty cells separating the candidate from the run
//!
//! Window scores are summed per direction and direction scores are summed per
//! cell. Nothing is maxed: a cell touching several runs collects them all.

use crate::board::{Board, Cell, Pos, Side};
use crate::rules::{windows, Direction, Window};

use super::patterns::run_score;

/// What a single window holds, as seen from a candidate cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowRun {
    /// Stones in the run; 0 when the window is empty or holds both colors
    pub length: u32,
    /// Color of the run
    pub color: Option<Side>,
    /// Empty cells credited as gap next to the candidate
    pub leading_gap: u32,
}

impl WindowRun {
    /// Score of this window for `mover`
    #[inline]
    pub fn score(&self, mover: Side) -> i32 {
        run_score(self.length, self.color == Some(mover), self.leading_gap)
    }
}

/// Read one window from the point of view of `candidate`.
///
/// The candidate cell itself is skipped. Empty cells inside the run do not
/// break it, but a stone of the other color voids the whole window.
///
/// Gap counting: empty cells are counted until a stone is met. Before the
/// candidate has been passed, a stone resets the count; once past it, the first
/// stone freezes the count. Establishing the run also resets the count.
pub fn scan_window(board: &Board, window: Window, candidate: Pos) -> WindowRun {
    let mut reference = Cell::Empty;
    let mut length = 0u32;
    let mut gap = 0u32;
    let mut met_candidate = false;
    let mut counting_gap = true;

    for (j, pos) in window.cells().enumerate() {
        if pos == candidate {
            met_candidate = true;
            continue;
        }

        let cell = board.get(pos);
        if counting_gap {
            if cell.is_empty() {
                gap += 1;
            } else if !met_candidate {
                gap = 0;
            } else {
                counting_gap = false;
            }
        }

        if j == 0 {
            if !cell.is_empty() {
                length += 1;
            }
            reference = cell;
            continue;
        }

        match (reference.side(), cell.side()) {
            (None, Some(_)) => {
                reference = cell;
                length += 1;
                gap = 0;
            }
            (_, None) => {}
            (Some(run), Some(side)) if run == side => length += 1,
            (Some(_), Some(_)) => {
                return WindowRun {
                    length: 0,
                    color: None,
                    leading_gap: gap,
                };
            }
        }
    }

    WindowRun {
        length,
        color: reference.side(),
        leading_gap: gap,
    }
}

/// Sum of window scores for `pos` along one axis
pub fn direction_score(board: &Board, pos: Pos, direction: Direction, mover: Side) -> i32 {
    windows(pos, direction)
        .map(|window| scan_window(board, window, pos).score(mover))
        .sum()
}

/// Total score of playing `mover` at the empty cell `pos`
#[must_use]
pub fn score_cell(board: &Board, pos: Pos, mover: Side) -> i32 {
    Direction::ALL
        .into_iter()
        .map(|direction| direction_score(board, pos, direction, mover))
        .sum()
}
