//! Pattern scores for Gobang move evaluation

/// Scoring weights for a single window
pub struct PatternScore;

impl PatternScore {
    /// A run of `n` stones is worth `RUN_BASE^n`
    pub const RUN_BASE: i32 = 10;
    /// Extending the mover's own run beats merely sitting next to any run
    pub const OWN_RUN_BONUS: i32 = 5;
    /// Subtracted per empty cell counted as gap next to the candidate
    pub const GAP_PENALTY: i32 = 1;
}

/// Score of a window holding a run of `length` stones.
///
/// `own` tells whether the run belongs to the side about to move and
/// `gap` is the leading gap counted next to the candidate cell.
/// An empty window (`length == 0`) scores nothing.
pub fn run_score(length: u32, own: bool, gap: u32) -> i32 {
    if length == 0 {
        return 0;
    }

    let bonus = if own { PatternScore::OWN_RUN_BONUS } else { 0 };
    PatternScore::RUN_BASE.pow(length) + bonus - PatternScore::GAP_PENALTY * gap as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_score() {
        assert_eq!(run_score(0, true, 3), 0);
        assert_eq!(run_score(1, false, 0), 10);
        assert_eq!(run_score(1, true, 0), 15);
        assert_eq!(run_score(2, true, 2), 103);
        assert_eq!(run_score(4, true, 0), 10_005);
        assert_eq!(run_score(4, false, 1), 9_999);
    }

    #[test]
    fn test_longer_run_always_dominates() {
        // Worst case for a longer run still beats best case for a shorter one
        for length in 1..4 {
            assert!(run_score(length + 1, false, 4) > run_score(length, true, 0));
        }
    }
}
