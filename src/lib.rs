//! Tick-driven snake simulation core.
//!
//! [`game::GameEngine`] owns one session: it commits buffered directions,
//! tests collisions, grows the snake, places food through an injected
//! [`random::RandomSource`] and reports each final score to a
//! [`leaderboard::ScoreRecorder`]. The terminal modules are a thin front-end
//! that schedules ticks and draws snapshots.

pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod leaderboard;
pub mod random;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod snapshot;
pub mod terminal_runtime;
pub mod ui;
