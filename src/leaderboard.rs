use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of finished games kept in the ranked history.
pub const HISTORY_CAPACITY: usize = 5;

/// Best score plus ranked history, as emitted after every finished game.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub best_score: u32,
    #[serde(default)]
    pub history: Vec<u32>,
}

/// Receives the final score of each finished game.
pub trait ScoreRecorder {
    /// Records `score` and returns the resulting standings.
    fn record_game(&mut self, score: u32) -> Standings;
}

/// Bounded, descending history of final scores and the all-time best.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Leaderboard {
    history: Vec<u32>,
    best_score: u32,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores persisted standings, re-sorting and truncating the history.
    #[must_use]
    pub fn from_standings(standings: Standings) -> Self {
        let mut history = standings.history;
        rank(&mut history);
        let best_score = history
            .first()
            .copied()
            .map_or(standings.best_score, |top| top.max(standings.best_score));

        Self {
            history,
            best_score,
        }
    }

    /// Ranked scores, highest first, at most [`HISTORY_CAPACITY`] long.
    #[must_use]
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    /// Highest score ever recorded, kept even after it falls out of the history.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub fn standings(&self) -> Standings {
        Standings {
            best_score: self.best_score,
            history: self.history.clone(),
        }
    }
}

impl ScoreRecorder for Leaderboard {
    fn record_game(&mut self, score: u32) -> Standings {
        self.best_score = self.best_score.max(score);
        self.history.push(score);
        rank(&mut self.history);
        debug!(score, best = self.best_score, history = ?self.history, "game recorded");
        self.standings()
    }
}

// Stable sort keeps earlier entries ahead of later equal ones.
fn rank(history: &mut Vec<u32>) {
    history.sort_by(|a, b| b.cmp(a));
    history.truncate(HISTORY_CAPACITY);
}
