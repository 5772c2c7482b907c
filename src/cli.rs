//! Command-line interface for gobang.

use clap::Parser;

use crate::game::GameConfig;

/// Gobang - five in a row on a 15x15 board
#[derive(Parser, Debug)]
#[command(name = "gobang")]
#[command(about = "Five in a row against a scoring heuristic", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Let the heuristic play both sides
    #[arg(long)]
    pub auto: bool,

    /// Play in the terminal without opening a window (implies --auto)
    #[arg(long)]
    pub headless: bool,

    /// Number of games to play in headless mode
    #[arg(long, default_value = "1")]
    pub games: u32,

    /// Seed for tie-breaking between equally scored moves
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Game settings selected by the flags
    pub fn config(&self) -> GameConfig {
        GameConfig {
            auto_mode: self.auto || self.headless,
            seed: self.seed,
        }
    }
}
