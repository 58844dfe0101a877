use tracing::{debug, info, warn};

use crate::collision::CollisionDetector;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::food::FoodSpawner;
use crate::input::{Direction, DirectionBuffer};
use crate::leaderboard::{Leaderboard, ScoreRecorder, Standings};
use crate::random::{PlatformRandom, RandomSource};
use crate::snake::{Position, Snake};
use crate::snapshot::{EndReason, EndReport, GameStatus, Snapshot};

/// What a single call to [`GameEngine::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    /// The engine was not running; nothing changed.
    Idle,
    Moved,
    Ate,
    Ended(EndReason),
}

/// Complete mutable state for one game session plus the leaderboard it reports to.
#[derive(Debug)]
pub struct GameEngine<R = PlatformRandom, L = Leaderboard> {
    config: GameConfig,
    snake: Snake,
    food: Position,
    score: u32,
    status: GameStatus,
    tick_count: u64,
    directions: DirectionBuffer,
    collisions: CollisionDetector,
    spawner: FoodSpawner,
    rng: R,
    recorder: L,
    standings: Option<Standings>,
}

impl GameEngine {
    /// Creates an idle engine with an entropy-seeded RNG and an empty leaderboard.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_parts(config, PlatformRandom::from_entropy(), Leaderboard::new())
    }
}

impl<R: RandomSource, L: ScoreRecorder> GameEngine<R, L> {
    /// Creates an idle engine from explicit collaborators.
    ///
    /// The board already shows the initial layout; when the config has no fixed
    /// first food, one is drawn from `rng` here and again on every `start`.
    pub fn with_parts(config: GameConfig, mut rng: R, recorder: L) -> Result<Self, GameError> {
        config.validate()?;

        let snake = Snake::from_segments(config.initial_snake.clone());
        let spawner = FoodSpawner::new(config.grid);
        let food = match config.initial_food {
            Some(food) => food,
            None => spawner.spawn(&snake, &mut rng)?,
        };

        Ok(Self {
            directions: DirectionBuffer::new(config.initial_direction),
            collisions: CollisionDetector::new(config.grid, config.collision_policy),
            spawner,
            snake,
            food,
            score: 0,
            status: GameStatus::Idle,
            tick_count: 0,
            rng,
            recorder,
            standings: None,
            config,
        })
    }

    /// Resets the board and starts a new game.
    ///
    /// A game still running is discarded without being recorded.
    pub fn start(&mut self) -> Result<(), GameError> {
        let snake = Snake::from_segments(self.config.initial_snake.clone());
        let food = match self.config.initial_food {
            Some(food) => food,
            None => self.spawner.spawn(&snake, &mut self.rng)?,
        };

        self.snake = snake;
        self.food = food;
        self.score = 0;
        self.tick_count = 0;
        self.standings = None;
        self.directions.reset(self.config.initial_direction);
        self.status = GameStatus::Running;

        info!(food.x = food.x, food.y = food.y, "game started");
        Ok(())
    }

    /// Alias for [`GameEngine::start`].
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.start()
    }

    /// Buffers a direction for the next tick; reversals are dropped.
    pub fn request(&mut self, direction: Direction) {
        self.directions.request(direction);
    }

    /// Advances the simulation by one step. Does nothing unless running.
    ///
    /// A `SpawnExhausted` error abandons the game: status drops back to
    /// `Idle` and nothing is recorded.
    pub fn tick(&mut self) -> Result<TickEvent, GameError> {
        if !self.status.is_running() {
            return Ok(TickEvent::Idle);
        }
        self.tick_count += 1;

        let direction = self.directions.commit();
        let candidate = self.config.grid.add(self.snake.head(), direction);
        let eats = candidate == self.food;

        if self.collisions.collides(candidate, &self.snake, eats) {
            return Ok(self.finish(EndReason::Collision));
        }

        self.snake.push_head(candidate);
        if !eats {
            self.snake.drop_tail();
            return Ok(TickEvent::Moved);
        }

        self.score += 1;
        debug!(score = self.score, len = self.snake.len(), "food eaten");

        if self.score == self.config.win_threshold {
            return Ok(self.finish(EndReason::Won));
        }

        match self.spawner.spawn(&self.snake, &mut self.rng) {
            Ok(food) => {
                self.food = food;
                Ok(TickEvent::Ate)
            }
            Err(error) => {
                warn!(%error, score = self.score, "abandoning game");
                self.status = GameStatus::Idle;
                Err(error)
            }
        }
    }

    fn finish(&mut self, reason: EndReason) -> TickEvent {
        self.status = GameStatus::Ended(reason);
        if self.standings.is_none() {
            self.standings = Some(self.recorder.record_game(self.score));
        }
        info!(?reason, score = self.score, ticks = self.tick_count, "game ended");
        TickEvent::Ended(reason)
    }
}

impl<R, L> GameEngine<R, L> {
    /// Copies the current board for renderers and stores.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.to_vec(),
            food: self.food,
            score: self.score,
            status: self.status,
        }
    }

    /// Final snapshot plus the standings returned by the recorder, once ended.
    #[must_use]
    pub fn end_report(&self) -> Option<EndReport> {
        let reason = self.status.end_reason()?;
        let standings = self.standings.clone()?;
        Some(EndReport {
            snapshot: self.snapshot(),
            reason,
            standings,
        })
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Position {
        self.food
    }

    /// Direction applied on the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.directions.committed()
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn recorder(&self) -> &L {
        &self.recorder
    }
}
