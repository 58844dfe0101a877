use crate::error::GameError;
use crate::input::Direction;
use crate::snake::Position;

/// Width and height of the reference canvas in pixels.
pub const CANVAS_PIXELS: u16 = 400;

/// Edge length of one grid cell in pixels.
pub const CELL_PIXELS: u16 = 20;

/// Score that ends the game in the won state.
pub const WIN_THRESHOLD: u32 = 60;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Food draws allowed per grid cell before spawning gives up.
pub const SPAWN_ATTEMPTS_PER_CELL: usize = 64;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Square grid with `cells` cells per side.
    #[must_use]
    pub const fn square(cells: u16) -> Self {
        Self {
            width: cells,
            height: cells,
        }
    }

    /// Derives the grid from a square canvas and a cell edge, both in pixels.
    #[must_use]
    pub const fn from_canvas(canvas_px: u16, cell_px: u16) -> Self {
        Self::square(canvas_px / cell_px)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns true iff both coordinates lie in `[0, size)`.
    #[must_use]
    pub fn in_bounds(self, position: Position) -> bool {
        position.is_within_bounds(self)
    }

    /// Translates `position` one step along `direction`. No clamping.
    #[must_use]
    pub fn add(self, position: Position, direction: Direction) -> Position {
        position.offset(direction)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::from_canvas(CANVAS_PIXELS, CELL_PIXELS)
    }
}

/// How the tail cell is treated when testing a candidate head.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum CollisionPolicy {
    /// Test against the whole pre-tick body, tail included.
    #[default]
    PreTickBody,
    /// Ignore the tail cell when the move does not grow the snake.
    TailVacates,
}

/// Everything `GameEngine::start` resets the board to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    /// Head first.
    pub initial_snake: Vec<Position>,
    pub initial_direction: Direction,
    /// Fixed first food; `None` spawns one at random.
    pub initial_food: Option<Position>,
    pub win_threshold: u32,
    pub collision_policy: CollisionPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            initial_snake: vec![Position { x: 8, y: 7 }, Position { x: 8, y: 8 }],
            initial_direction: Direction::Up,
            initial_food: Some(Position { x: 8, y: 3 }),
            win_threshold: WIN_THRESHOLD,
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Checks that a game built from this config can be played to the win threshold.
    pub fn validate(&self) -> Result<(), GameError> {
        let grid = self.grid;
        let snake = &self.initial_snake;

        if grid.width == 0 || grid.height == 0 {
            return Err(invalid("grid must have at least one cell"));
        }
        if snake.len() < 2 {
            return Err(invalid("initial snake needs at least two segments"));
        }
        if let Some(outside) = snake.iter().find(|p| !grid.in_bounds(**p)) {
            return Err(invalid(format!(
                "initial segment ({}, {}) lies outside the grid",
                outside.x, outside.y
            )));
        }
        for (index, segment) in snake.iter().enumerate() {
            if snake[index + 1..].contains(segment) {
                return Err(invalid(format!(
                    "initial segment ({}, {}) appears twice",
                    segment.x, segment.y
                )));
            }
        }
        if snake.windows(2).any(|pair| !pair[0].is_adjacent(pair[1])) {
            return Err(invalid("initial segments must be contiguous"));
        }
        // The neck must sit directly behind the head, so the buffer's reversal
        // check also rules out every turn that would run into it.
        if grid.add(snake[0], self.initial_direction.opposite()) != snake[1] {
            return Err(invalid("initial direction must point away from the neck"));
        }
        if let Some(food) = self.initial_food {
            if !grid.in_bounds(food) || snake.contains(&food) {
                return Err(invalid(format!(
                    "initial food ({}, {}) must be a free in-grid cell",
                    food.x, food.y
                )));
            }
        }
        if self.win_threshold == 0 {
            return Err(invalid("win threshold must be positive"));
        }

        // Food is still spawned at score `win_threshold - 1`, when the snake holds
        // `initial_len + win_threshold - 1` cells; one more cell must stay free.
        let peak_len = snake.len() + self.win_threshold as usize - 1;
        if peak_len >= grid.total_cells() {
            return Err(invalid(format!(
                "a {}x{} grid cannot hold a snake of {} cells plus food",
                grid.width, grid.height, peak_len
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> GameError {
    GameError::InvalidConfig(message.into())
}

#[cfg(test)]
mod tests {
    use super::{CollisionPolicy, GameConfig, GridSize};
    use crate::error::GameError;
    use crate::input::Direction;
    use crate::snake::Position;

    #[test]
    fn default_grid_matches_reference_canvas() {
        let grid = GridSize::default();

        assert_eq!(grid, GridSize::square(20));
        assert_eq!(grid.total_cells(), 400);
    }

    #[test]
    fn bounds_are_half_open() {
        let grid = GridSize::square(20);

        assert!(grid.in_bounds(Position { x: 0, y: 0 }));
        assert!(grid.in_bounds(Position { x: 19, y: 19 }));
        assert!(!grid.in_bounds(Position { x: -1, y: 5 }));
        assert!(!grid.in_bounds(Position { x: 5, y: 20 }));
    }

    #[test]
    fn add_does_not_clamp() {
        let grid = GridSize::square(20);

        let moved = grid.add(Position { x: 0, y: 4 }, Direction::Left);

        assert_eq!(moved, Position { x: -1, y: 4 });
        assert!(!grid.in_bounds(moved));
    }

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.collision_policy, CollisionPolicy::PreTickBody);
    }

    #[test]
    fn short_snake_is_rejected() {
        let config = GameConfig {
            initial_snake: vec![Position { x: 1, y: 1 }],
            ..GameConfig::default()
        };

        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn reversing_initial_direction_is_rejected() {
        let config = GameConfig {
            initial_direction: Direction::Down,
            ..GameConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn sideways_initial_direction_is_rejected() {
        let config = GameConfig {
            initial_direction: Direction::Left,
            ..GameConfig::default()
        };

        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn food_on_snake_is_rejected() {
        let config = GameConfig {
            initial_food: Some(Position { x: 8, y: 8 }),
            ..GameConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn grid_too_small_for_threshold_is_rejected() {
        let config = GameConfig {
            grid: GridSize::square(4),
            initial_snake: vec![Position { x: 1, y: 1 }, Position { x: 1, y: 2 }],
            initial_food: None,
            win_threshold: 15,
            ..GameConfig::default()
        };

        assert!(config.validate().is_err());

        let config = GameConfig {
            win_threshold: 14,
            ..config
        };
        assert!(config.validate().is_ok());
    }
}
