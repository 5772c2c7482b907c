//! Gobang (five in a row) on a 15x15 board
//!
//! Black opens on the center point and is always played by a scoring
//! heuristic. White is played by a human through [`TurnController::submit_move`],
//! or by the heuristic too when auto mode is on.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line windows and outcome detection
//! - [`eval`]: Per-cell move scoring
//! - [`engine`]: Best-move selection with random tie-breaking
//! - [`game`]: Turn controller and the presentation boundary
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gobang::game::{ConsolePresentation, GameConfig, TurnController};
//!
//! // Self-play one game with a fixed seed
//! let config = GameConfig::new().with_auto_mode(true).with_seed(7);
//! let mut game = TurnController::new(config, ConsolePresentation::new(1));
//! game.start();
//!
//! assert!(game.is_finished());
//! assert_eq!(game.presentation().results().len(), 1);
//! ```

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Move, Pos, Side, BOARD_SIZE, TOTAL_CELLS};
pub use error::{GameError, InvalidReason};
pub use game::{GameConfig, Phase, Presentation, TurnController};
pub use rules::Outcome;
