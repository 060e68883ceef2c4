//! Session score tally.

use crate::types::{Mark, Outcome, ParseTagError};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Per-outcome counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Games won by X.
    wins_x: u32,
    /// Games won by O.
    wins_o: u32,
    /// Drawn games.
    draws: u32,
}

impl ScoreTally {
    /// Counter for the given outcome.
    pub fn count(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Win(Mark::X) => self.wins_x,
            Outcome::Win(Mark::O) => self.wins_o,
            Outcome::Draw => self.draws,
        }
    }

    /// Sum of all counters.
    pub fn total_games(&self) -> u32 {
        self.wins_x
            .saturating_add(self.wins_o)
            .saturating_add(self.draws)
    }
}

/// Aggregated statistics derived from a tally.
#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
pub struct ScoreStats {
    total_games: u32,
    wins_x: u32,
    wins_o: u32,
    draws: u32,
}

impl ScoreStats {
    /// Share of games won by `mark` as a percentage (0.0–100.0).
    #[instrument(skip(self))]
    pub fn win_rate(&self, mark: Mark) -> f64 {
        let wins = match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        };
        percentage(wins, self.total_games)
    }

    /// Share of drawn games as a percentage (0.0–100.0).
    #[instrument(skip(self))]
    pub fn draw_rate(&self) -> f64 {
        percentage(self.draws, self.total_games)
    }
}

impl From<ScoreTally> for ScoreStats {
    fn from(tally: ScoreTally) -> Self {
        Self::new(tally.total_games(), tally.wins_x, tally.wins_o, tally.draws)
    }
}

fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Owns the score tally of one session.
///
/// Lives independently of the game store: resetting a game keeps the
/// scores, and only [`ScoreStore::reset`] clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreStore {
    tally: ScoreTally,
}

impl ScoreStore {
    /// Creates a store with all counters at zero.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current tally.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Increments the counter for `outcome`.
    #[instrument(skip(self))]
    pub fn record_outcome(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Win(Mark::X) => &mut self.tally.wins_x,
            Outcome::Win(Mark::O) => &mut self.tally.wins_o,
            Outcome::Draw => &mut self.tally.draws,
        };
        *counter = counter.saturating_add(1);
        debug!(%outcome, count = *counter, "Outcome recorded");
    }

    /// Records an outcome given as a tag (`"X"`, `"O"` or `"draw"`).
    ///
    /// # Errors
    ///
    /// Returns [`ParseTagError`] for any other tag; no counter changes.
    #[instrument(skip(self))]
    pub fn record_tag(&mut self, tag: &str) -> Result<Outcome, ParseTagError> {
        let outcome = tag.parse::<Outcome>().map_err(|e| {
            warn!(error = %e, "Rejected outcome tag");
            e
        })?;
        self.record_outcome(outcome);
        Ok(outcome)
    }

    /// Sets every counter back to zero.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.tally = ScoreTally::default();
        info!("Scores reset");
    }

    /// Number of finished games recorded.
    pub fn total_games(&self) -> u32 {
        self.tally.total_games()
    }

    /// Share of games won by `mark` as a percentage; 0 when no games.
    pub fn win_rate(&self, mark: Mark) -> f64 {
        self.stats().win_rate(mark)
    }

    /// Aggregated statistics for the current tally.
    pub fn stats(&self) -> ScoreStats {
        ScoreStats::from(self.tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut store = ScoreStore::new();
        store.record_outcome(Outcome::Win(Mark::X));
        store.record_outcome(Outcome::Win(Mark::X));
        store.record_outcome(Outcome::Win(Mark::O));
        store.record_outcome(Outcome::Draw);

        assert_eq!(*store.tally().wins_x(), 2);
        assert_eq!(*store.tally().wins_o(), 1);
        assert_eq!(*store.tally().draws(), 1);
        assert_eq!(store.total_games(), 4);
    }

    #[test]
    fn test_win_rate_zero_without_games() {
        let store = ScoreStore::new();
        assert_eq!(store.win_rate(Mark::X), 0.0);
        assert_eq!(store.stats().draw_rate(), 0.0);
    }

    #[test]
    fn test_win_rate() {
        let mut store = ScoreStore::new();
        store.record_outcome(Outcome::Win(Mark::X));
        store.record_outcome(Outcome::Win(Mark::O));
        store.record_outcome(Outcome::Draw);
        store.record_outcome(Outcome::Draw);

        assert_eq!(store.win_rate(Mark::X), 25.0);
        assert_eq!(store.win_rate(Mark::O), 25.0);
        assert_eq!(store.stats().draw_rate(), 50.0);
    }

    #[test]
    fn test_record_tag_rejects_unknown() {
        let mut store = ScoreStore::new();
        assert_eq!(store.record_tag("draw").unwrap(), Outcome::Draw);
        assert!(store.record_tag("stalemate").is_err());
        assert_eq!(store.total_games(), 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut store = ScoreStore::new();
        store.tally.wins_x = u32::MAX;
        store.tally.draws = 5;
        store.record_outcome(Outcome::Win(Mark::X));
        assert_eq!(*store.tally().wins_x(), u32::MAX);
        assert_eq!(store.total_games(), u32::MAX);
        assert_eq!(store.win_rate(Mark::O), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut store = ScoreStore::new();
        store.record_outcome(Outcome::Win(Mark::O));
        store.reset();
        assert_eq!(store.tally(), &ScoreTally::default());
        assert_eq!(store.win_rate(Mark::O), 0.0);
    }
}
