use thiserror::Error;

/// Fatal conditions raised by the simulation core.
///
/// A collision is a normal way for a game to end and is reported through
/// `GameStatus`, never through this type.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum GameError {
    /// Rejection sampling ran out of draws without finding a free cell.
    #[error("no free cell for food after {attempts} draws on a {width}x{height} grid")]
    SpawnExhausted {
        attempts: usize,
        width: u16,
        height: u16,
    },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
