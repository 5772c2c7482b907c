//! Construction-time game settings

/// Settings fixed for the lifetime of a [`TurnController`](super::TurnController)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Let the heuristic play White too, so games run without input
    pub auto_mode: bool,
    /// Seed for tie-breaking; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_auto_mode(mut self, auto_mode: bool) -> Self {
        self.auto_mode = auto_mode;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
