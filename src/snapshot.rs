use serde::{Deserialize, Serialize};

use crate::leaderboard::Standings;
use crate::snake::Position;

/// Why a game reached its terminal state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum EndReason {
    Collision,
    Won,
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    Idle,
    Running,
    Ended(EndReason),
}

impl GameStatus {
    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    #[must_use]
    pub fn end_reason(self) -> Option<EndReason> {
        match self {
            Self::Ended(reason) => Some(reason),
            Self::Idle | Self::Running => None,
        }
    }
}

/// Read-only view of one game, handed to renderers and stores.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Head first.
    pub snake: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
}

/// Final snapshot of a finished game together with the updated standings.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EndReport {
    pub snapshot: Snapshot,
    pub reason: EndReason,
    pub standings: Standings,
}
