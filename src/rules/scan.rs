//! Line scanning shared by move scoring and win detection
//!
//! Every cell belongs to five 5-cell windows along each axis: the cell can sit
//! at any of the five positions inside its window. Windows are clipped to the
//! board in two ways:
//! - a window whose first cell is off the board is skipped entirely
//! - a window that runs off the board mid-way yields only its on-board prefix

use crate::board::Pos;

/// Stones in a row needed to win, and the length of every window
pub const WIN_COUNT: usize = 5;

/// The four line axes. A line reads the same in both directions, so these
/// cover all eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Diagonal,
    Vertical,
    AntiDiagonal,
}

impl Direction {
    /// Scan order used by both the heuristic and the outcome detector
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Diagonal,
        Direction::Vertical,
        Direction::AntiDiagonal,
    ];

    /// Unit step `(dx, dy)` along this axis
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::Vertical => (0, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }
}

/// A 5-cell span starting at an on-board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    start: Pos,
    direction: Direction,
}

impl Window {
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cells of the window in order, stopping at the first off-board cell
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        let (dx, dy) = self.direction.step();
        let (x, y) = (self.start.x as i32, self.start.y as i32);
        (0..WIN_COUNT as i32).map_while(move |j| Pos::checked(x + j * dx, y + j * dy))
    }

    /// Whether all five cells fit on the board
    pub fn is_complete(self) -> bool {
        self.cells().count() == WIN_COUNT
    }
}

/// The windows containing `center` along `direction`.
///
/// Window `i` starts `4 - i` steps behind `center`, so `center` is its
/// `(4 - i)`-th cell. Windows whose start falls off the board are omitted.
pub fn windows(center: Pos, direction: Direction) -> impl Iterator<Item = Window> {
    let (dx, dy) = direction.step();
    let (x, y) = (center.x as i32, center.y as i32);
    (0..WIN_COUNT as i32).filter_map(move |i| {
        let back = WIN_COUNT as i32 - 1 - i;
        Pos::checked(x - back * dx, y - back * dy).map(|start| Window { start, direction })
    })
}
