//! Presentation adapter feeding the GUI

use crate::game::Presentation;
use crate::rules::Outcome;
use crate::{Board, Pos, Side};

/// Keeps what the GUI needs between frames.
///
/// The window cannot block for a replay answer, so `on_game_finished` always
/// declines; the game-over card offers "Play again" instead.
#[derive(Debug, Default)]
pub struct UiPresentation {
    history: Vec<(Pos, Side)>,
    outcome: Option<Outcome>,
}

impl UiPresentation {
    /// Moves of the current game, in order
    pub fn history(&self) -> &[(Pos, Side)] {
        &self.history
    }

    /// Outcome of the current game once it has ended
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl Presentation for UiPresentation {
    fn on_board_reset(&mut self) {
        self.history.clear();
        self.outcome = None;
    }

    fn on_stone_placed(&mut self, pos: Pos, side: Side) {
        self.history.push((pos, side));
    }

    fn on_game_finished(&mut self, outcome: Outcome, _board: &Board) -> bool {
        self.outcome = Some(outcome);
        false
    }
}
