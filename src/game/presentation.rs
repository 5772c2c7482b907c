//! Boundary between the turn controller and whatever shows the game

use tracing::{debug, info};

use crate::board::{Board, Pos, Side};
use crate::rules::Outcome;

/// Receives game events from a [`TurnController`](super::TurnController).
///
/// Calls happen synchronously, in game order. A stone reported through
/// `on_stone_placed` is never taken back.
pub trait Presentation {
    /// A fresh empty board is in play
    fn on_board_reset(&mut self) {}

    /// `side` placed a stone at `pos`
    fn on_stone_placed(&mut self, _pos: Pos, _side: Side) {}

    /// The game ended. Return `true` to start another one straight away.
    fn on_game_finished(&mut self, outcome: Outcome, board: &Board) -> bool;
}

/// Terminal output for headless play.
///
/// Logs every move and prints the final board, then asks for a replay until
/// `games` games have been played.
#[derive(Debug, Clone)]
pub struct ConsolePresentation {
    games: u32,
    played: u32,
    moves: u32,
    results: Vec<Outcome>,
}

impl ConsolePresentation {
    pub fn new(games: u32) -> Self {
        Self {
            games: games.max(1),
            played: 0,
            moves: 0,
            results: Vec::new(),
        }
    }

    /// Outcomes of the finished games, oldest first
    pub fn results(&self) -> &[Outcome] {
        &self.results
    }

    /// Wins for `side` among the finished games
    pub fn wins(&self, side: Side) -> usize {
        self.results
            .iter()
            .filter(|&&outcome| outcome == Outcome::WinBy(side))
            .count()
    }
}

impl Presentation for ConsolePresentation {
    fn on_board_reset(&mut self) {
        self.moves = 0;
        info!(game = self.played + 1, "new board");
    }

    fn on_stone_placed(&mut self, pos: Pos, side: Side) {
        self.moves += 1;
        debug!(n = self.moves, %side, %pos, "stone placed");
    }

    fn on_game_finished(&mut self, outcome: Outcome, board: &Board) -> bool {
        self.played += 1;
        self.results.push(outcome);
        info!(game = self.played, moves = self.moves, %outcome, "game finished");

        println!("{board}");
        println!("Game {}: {outcome}!", self.played);

        self.played < self.games
    }
}
