//! Game session management
//!
//! The [`TurnController`] runs a game from the opening move to its outcome,
//! reporting each step to a [`Presentation`].

mod config;
mod controller;
mod presentation;

pub use config::GameConfig;
pub use controller::{Phase, TurnController};
pub use presentation::{ConsolePresentation, Presentation};
