//! Game rules for Gobang
//!
//! This module implements:
//! - Line windows shared by scoring and win detection
//! - Outcome detection (five in a row, draw on a full board)

pub mod scan;
pub mod win;

// Re-exports for convenient access
pub use scan::{windows, Direction, Window, WIN_COUNT};
pub use win::{evaluate, winning_window, Outcome};
