//! Turn state machine
//!
//! `NotStarted -> InProgress -> Finished(outcome)`. Black always moves by
//! heuristic, starting on the center point. White waits for `submit_move`
//! unless auto mode hands White to the heuristic as well.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, instrument, warn};

use super::config::GameConfig;
use super::presentation::Presentation;
use crate::board::{Board, Move, Pos, Side};
use crate::engine;
use crate::error::{GameError, InvalidReason};
use crate::rules::{self, Outcome};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished(Outcome),
}

/// Owns one game session: the board, whose turn it is, and the random source
/// for heuristic tie-breaks.
pub struct TurnController<P> {
    board: Board,
    side_to_move: Side,
    auto_mode: bool,
    phase: Phase,
    last_move: Option<Move>,
    rng: StdRng,
    presentation: P,
}

impl<P: Presentation> TurnController<P> {
    pub fn new(config: GameConfig, presentation: P) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            board: Board::new(),
            side_to_move: Side::Black,
            auto_mode: config.auto_mode,
            phase: Phase::NotStarted,
            last_move: None,
            rng,
            presentation,
        }
    }

    /// Begin a new game on an empty board.
    ///
    /// Black opens on the center point, then play continues automatically
    /// until it is a human's turn or the game ends.
    #[instrument(level = "debug", skip(self), fields(auto = self.auto_mode))]
    pub fn start(&mut self) {
        self.reset();
        self.run_from(Pos::center());
    }

    /// Play a move for the side to move on behalf of an external actor.
    ///
    /// Rejected moves leave the session untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn submit_move(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.phase != Phase::InProgress {
            warn!(%pos, phase = ?self.phase, "move submitted outside a game");
            return Err(GameError::InvalidMove(pos, InvalidReason::NotInProgress));
        }
        if !pos.in_bounds() {
            warn!(%pos, "move submitted off the board");
            return Err(GameError::InvalidMove(pos, InvalidReason::OffBoard));
        }
        if !self.board.is_empty(pos) {
            warn!(%pos, "move submitted on an occupied cell");
            return Err(GameError::InvalidMove(pos, InvalidReason::Occupied));
        }

        self.run_from(pos);
        Ok(())
    }

    /// Current board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once the game has ended and no replay was requested
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    #[inline]
    pub fn auto_mode(&self) -> bool {
        self.auto_mode
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Stones on the board in the current game
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.board.stone_count()
    }

    /// Whether the controller is waiting on `submit_move`
    #[inline]
    pub fn awaiting_input(&self) -> bool {
        self.phase == Phase::InProgress && !self.is_automatic(self.side_to_move)
    }

    #[inline]
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    #[inline]
    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.side_to_move = Side::Black;
        self.phase = Phase::InProgress;
        self.last_move = None;
        self.presentation.on_board_reset();
        info!(auto = self.auto_mode, "game started");
    }

    fn is_automatic(&self, side: Side) -> bool {
        side == Side::Black || self.auto_mode
    }

    /// Apply `pos` and keep applying heuristic moves until input is needed or
    /// play stops. A replay restarts the loop from the opening move.
    fn run_from(&mut self, pos: Pos) {
        let mut next = Some(pos);
        while let Some(pos) = next {
            next = self.apply(pos);
        }
    }

    /// Apply one move and decide what comes after it
    fn apply(&mut self, pos: Pos) -> Option<Pos> {
        let side = self.side_to_move;
        if let Err(err) = self.board.set(pos, side) {
            error!(%err, "move could not be applied");
            return None;
        }

        let mv = Move::new(pos, side);
        self.last_move = Some(mv);
        self.presentation.on_stone_placed(pos, side);
        debug!(%mv, stones = self.board.stone_count(), "move applied");

        match rules::evaluate(&self.board, mv) {
            Outcome::Ongoing => {
                self.side_to_move = side.opponent();
                if self.is_automatic(self.side_to_move) {
                    self.heuristic_move()
                } else {
                    None
                }
            }
            outcome => self.finish(outcome),
        }
    }

    /// End the game; returns the opening move when a replay was requested
    fn finish(&mut self, outcome: Outcome) -> Option<Pos> {
        self.phase = Phase::Finished(outcome);
        info!(%outcome, stones = self.board.stone_count(), "game over");

        if self.presentation.on_game_finished(outcome, &self.board) {
            self.reset();
            Some(Pos::center())
        } else {
            None
        }
    }

    fn heuristic_move(&mut self) -> Option<Pos> {
        match engine::select_move(&self.board, self.side_to_move, &mut self.rng) {
            Ok(pos) => Some(pos),
            Err(err) => {
                error!(%err, "heuristic found no move");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, TOTAL_CELLS};

    /// Records everything the controller reports
    #[derive(Default)]
    struct Recorder {
        resets: u32,
        stones: Vec<(Pos, Side)>,
        outcomes: Vec<Outcome>,
        replays: u32,
    }

    impl Presentation for Recorder {
        fn on_board_reset(&mut self) {
            self.resets += 1;
        }

        fn on_stone_placed(&mut self, pos: Pos, side: Side) {
            self.stones.push((pos, side));
        }

        fn on_game_finished(&mut self, outcome: Outcome, _board: &Board) -> bool {
            self.outcomes.push(outcome);
            if self.replays > 0 {
                self.replays -= 1;
                true
            } else {
                false
            }
        }
    }

    fn controller(auto_mode: bool, seed: u64) -> TurnController<Recorder> {
        let config = GameConfig::new().with_auto_mode(auto_mode).with_seed(seed);
        TurnController::new(config, Recorder::default())
    }

    #[test]
    fn test_not_started_rejects_moves() {
        let mut game = controller(false, 1);
        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(
            game.submit_move(Pos::new(0, 0)),
            Err(GameError::InvalidMove(Pos::new(0, 0), InvalidReason::NotInProgress))
        );
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_start_opens_on_center() {
        let mut game = controller(false, 1);
        game.start();

        assert_eq!(game.board().stone_count(), 1);
        assert_eq!(game.board().get(Pos::new(7, 7)), Cell::Black);
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.phase(), Phase::InProgress);
        assert!(!game.is_finished());
        assert!(game.awaiting_input());
        assert_eq!(game.last_move(), Some(Move::new(Pos::new(7, 7), Side::Black)));

        let rec = game.presentation();
        assert_eq!(rec.resets, 1);
        assert_eq!(rec.stones, vec![(Pos::new(7, 7), Side::Black)]);
    }

    #[test]
    fn test_human_move_gets_heuristic_reply() {
        let mut game = controller(false, 2);
        game.start();

        game.submit_move(Pos::new(8, 8)).unwrap();
        assert_eq!(game.move_count(), 3);
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.board().get(Pos::new(8, 8)), Cell::White);

        let stones = &game.presentation().stones;
        assert_eq!(stones[1], (Pos::new(8, 8), Side::White));
        assert_eq!(stones[2].1, Side::Black);
        assert_eq!(game.board().get(stones[2].0), Cell::Black);
    }

    #[test]
    fn test_rejected_moves_change_nothing() {
        let mut game = controller(false, 3);
        game.start();
        let before = game.board().clone();

        assert_eq!(
            game.submit_move(Pos::new(7, 7)),
            Err(GameError::InvalidMove(Pos::new(7, 7), InvalidReason::Occupied))
        );
        let off = Pos { x: 15, y: 3 };
        assert_eq!(
            game.submit_move(off),
            Err(GameError::InvalidMove(off, InvalidReason::OffBoard))
        );

        assert_eq!(game.board(), &before);
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.presentation().stones.len(), 1);
    }

    #[test]
    fn test_auto_mode_plays_to_the_end() {
        let mut game = controller(true, 4);
        game.start();

        assert!(game.is_finished());
        let Phase::Finished(outcome) = game.phase() else {
            panic!("game should be finished");
        };
        assert!(outcome.is_terminal());

        let rec = game.presentation();
        assert_eq!(rec.outcomes, vec![outcome]);
        assert_eq!(rec.stones.len() as u32, game.move_count());
        assert_eq!(rec.stones[0], (Pos::center(), Side::Black));

        // Sides alternate, starting with Black
        for (i, (_, side)) in rec.stones.iter().enumerate() {
            let expected = if i % 2 == 0 { Side::Black } else { Side::White };
            assert_eq!(*side, expected);
        }

        // The recorded outcome matches a fresh evaluation of the last move
        let last = game.last_move().unwrap();
        assert_eq!(rules::evaluate(game.board(), last), outcome);
        if let Outcome::WinBy(side) = outcome {
            assert_eq!(side, last.side);
        } else {
            assert_eq!(game.move_count() as usize, TOTAL_CELLS);
        }
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut game = controller(true, 5);
        game.start();
        assert!(game.is_finished());

        let empty = game.board().empty_cells().next();
        if let Some(pos) = empty {
            let before = game.board().clone();
            assert_eq!(
                game.submit_move(pos),
                Err(GameError::InvalidMove(pos, InvalidReason::NotInProgress))
            );
            assert_eq!(game.board(), &before);
        }
    }

    #[test]
    fn test_replay_starts_a_new_game() {
        let mut game = controller(true, 6);
        game.presentation_mut().replays = 2;
        game.start();

        let rec = game.presentation();
        assert_eq!(rec.outcomes.len(), 3);
        assert_eq!(rec.resets, 3);
        assert!(game.is_finished());

        // The board only holds the last game's stones
        let last_game_start = rec
            .stones
            .iter()
            .rposition(|&(pos, side)| pos == Pos::center() && side == Side::Black)
            .unwrap();
        assert_eq!(
            (rec.stones.len() - last_game_start) as u32,
            game.move_count()
        );
    }

    #[test]
    fn test_restart_after_finish() {
        let mut game = controller(true, 7);
        game.start();
        assert!(game.is_finished());

        game.start();
        assert!(game.is_finished());
        assert_eq!(game.presentation().resets, 2);
        assert_eq!(game.presentation().outcomes.len(), 2);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = controller(true, 11);
        let mut b = controller(true, 11);
        a.start();
        b.start();

        assert_eq!(a.presentation().stones, b.presentation().stones);
        assert_eq!(a.phase(), b.phase());
    }
}
