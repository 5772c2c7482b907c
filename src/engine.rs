//! Move selection for automatic play
//!
//! Every empty cell is scored with [`score_cell`]; the cells sharing the best
//! score form the tie set and one of them is drawn at random. The random source
//! is supplied by the caller, so a seeded generator makes play reproducible.
//!
//! # Example
//!
//! ```
//! use gobang::{engine, Board, Pos, Side};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut board = Board::new();
//! board.set(Pos::center(), Side::Black).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let pos = engine::select_move(&board, Side::White, &mut rng).unwrap();
//! assert!(board.is_empty(pos));
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

use crate::board::{Board, Pos, Side};
use crate::error::GameError;
use crate::eval::score_cell;

/// The best-scoring empty cells of one evaluation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieSet {
    /// Score shared by every position in the set
    pub score: i32,
    /// Positions in scan order (x-major, then y)
    pub positions: Vec<Pos>,
}

impl TieSet {
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.positions.contains(&pos)
    }
}

/// Score every empty cell for `mover` and keep the best ones.
///
/// A cell joins the set when its score is at least the running maximum; a
/// strictly greater score restarts the set. Returns `None` on a full board.
#[must_use]
pub fn tie_set(board: &Board, mover: Side) -> Option<TieSet> {
    let mut best = 0;
    let mut positions = Vec::new();

    for pos in board.empty_cells() {
        let score = score_cell(board, pos, mover);
        if score >= best {
            if score > best {
                best = score;
                positions.clear();
            }
            positions.push(pos);
        }
    }

    if positions.is_empty() {
        None
    } else {
        Some(TieSet {
            score: best,
            positions,
        })
    }
}

/// Pick the move for `mover`, breaking ties uniformly at random with `rng`.
#[instrument(level = "debug", skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    mover: Side,
    rng: &mut R,
) -> Result<Pos, GameError> {
    let ties = tie_set(board, mover).ok_or(GameError::NoLegalMove)?;
    let pos = *ties.positions.choose(rng).ok_or(GameError::NoLegalMove)?;

    debug!(%pos, score = ties.score, ties = ties.positions.len(), "heuristic move");
    Ok(pos)
}
