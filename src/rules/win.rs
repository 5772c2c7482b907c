//! Win and draw detection
//!
//! After each move only the windows through the stone just played can have
//! changed, so the check is local to that stone. A window wins when all five
//! of its cells are on the board and hold the same color. Longer runs win too,
//! since they contain such a window.

use tracing::instrument;

use super::scan::{windows, Direction, Window, WIN_COUNT};
use crate::board::{Board, Move, Pos, Side};

/// State of the game after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Outcome {
    #[display("Game in progress")]
    Ongoing,
    #[display("{_0} wins")]
    WinBy(Side),
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Whether the game is over
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Evaluate the board right after `last_move` was played.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board, last_move: Move) -> Outcome {
    if let Some((side, _)) = winning_window(board, last_move.pos) {
        return Outcome::WinBy(side);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Find the first winning window through `pos`.
///
/// Directions are tried in [`Direction::ALL`] order and windows from the
/// farthest-back start forward. Returns the winner and the five cells.
pub fn winning_window(board: &Board, pos: Pos) -> Option<(Side, [Pos; WIN_COUNT])> {
    Direction::ALL
        .into_iter()
        .flat_map(|dir| windows(pos, dir))
        .find_map(|window| five_in_window(board, window))
}

/// Check one window for five identical stones
fn five_in_window(board: &Board, window: Window) -> Option<(Side, [Pos; WIN_COUNT])> {
    // An empty start cell can never be part of a five
    let side = board.get(window.start()).side()?;

    let mut line = [window.start(); WIN_COUNT];
    let mut count = 0;
    for pos in window.cells() {
        if board.get(pos).side() != Some(side) {
            break;
        }
        line[count] = pos;
        count += 1;
    }

    (count == WIN_COUNT).then_some((side, line))
}
