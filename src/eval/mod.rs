//! Evaluation module for Gobang moves
//!
//! Scores an empty cell by the runs it would join or block along the four
//! line axes.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{direction_score, scan_window, score_cell, WindowRun};
pub use patterns::{run_score, PatternScore};
