use tracing::{debug, warn};

use crate::config::{GridSize, SPAWN_ATTEMPTS_PER_CELL};
use crate::error::GameError;
use crate::random::RandomSource;
use crate::snake::{Position, Snake};

/// Places food on free cells by rejection sampling.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodSpawner {
    grid: GridSize,
    max_attempts: usize,
}

impl FoodSpawner {
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            max_attempts: grid.total_cells().saturating_mul(SPAWN_ATTEMPTS_PER_CELL),
        }
    }

    /// Draws random cells until one is not on `body`.
    ///
    /// Each candidate consumes two values from `rng`, `x` first.
    pub fn spawn<R: RandomSource + ?Sized>(
        &self,
        body: &Snake,
        rng: &mut R,
    ) -> Result<Position, GameError> {
        if body.len() >= self.grid.total_cells() {
            return Err(self.exhausted(0));
        }

        for attempt in 1..=self.max_attempts {
            let candidate = Position {
                x: unit_to_cell(rng.next_unit(), self.grid.width),
                y: unit_to_cell(rng.next_unit(), self.grid.height),
            };
            if !body.occupies(candidate) {
                debug!(x = candidate.x, y = candidate.y, attempt, "food spawned");
                return Ok(candidate);
            }
        }

        Err(self.exhausted(self.max_attempts))
    }

    /// Draw budget for one spawn.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn exhausted(&self, attempts: usize) -> GameError {
        warn!(
            attempts,
            width = self.grid.width,
            height = self.grid.height,
            "food spawn exhausted"
        );
        GameError::SpawnExhausted {
            attempts,
            width: self.grid.width,
            height: self.grid.height,
        }
    }
}

/// Scales a unit value onto `[0, cells)`, clamping values outside `[0, 1)`.
fn unit_to_cell(unit: f64, cells: u16) -> i32 {
    let last = i32::from(cells) - 1;
    if unit.is_nan() || unit <= 0.0 {
        return 0;
    }
    // Truncation is the floor here since `unit` is positive.
    ((unit * f64::from(cells)) as i32).min(last)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{FoodSpawner, unit_to_cell};
    use crate::config::GridSize;
    use crate::error::GameError;
    use crate::random::{PlatformRandom, ScriptedRandom};
    use crate::snake::{Position, Snake};

    fn row_snake() -> Snake {
        Snake::from_segments(vec![
            Position { x: 2, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 0, y: 0 },
        ])
    }

    #[test]
    fn unit_values_map_onto_cells() {
        assert_eq!(unit_to_cell(0.0, 20), 0);
        assert_eq!(unit_to_cell(0.42, 20), 8);
        assert_eq!(unit_to_cell(0.999, 20), 19);
        assert_eq!(unit_to_cell(1.0, 20), 19);
        assert_eq!(unit_to_cell(-0.5, 20), 0);
        assert_eq!(unit_to_cell(f64::NAN, 20), 0);
    }

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let spawner = FoodSpawner::new(GridSize {
            width: 8,
            height: 6,
        });
        let mut rng = PlatformRandom::seeded(7);
        let snake = row_snake();

        for _ in 0..100 {
            let food = spawner.spawn(&snake, &mut rng).expect("free cells remain");
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn occupied_draws_are_rejected_in_order() {
        let spawner = FoodSpawner::new(GridSize::square(10));
        // (0.1, 0.0) -> (1,0) on the body, (0.2, 0.0) -> (2,0) on the body, then (5,5).
        let mut rng = ScriptedRandom::new(vec![0.1, 0.0, 0.2, 0.0, 0.55, 0.55]);

        let food = spawner.spawn(&row_snake(), &mut rng).expect("third draw is free");

        assert_eq!(food, Position { x: 5, y: 5 });
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn hostile_source_exhausts_the_budget() {
        let spawner = FoodSpawner::new(GridSize::square(4));
        let mut rng = ScriptedRandom::new(vec![0.0]);

        let error = spawner.spawn(&row_snake(), &mut rng).unwrap_err();

        assert_eq!(
            error,
            GameError::SpawnExhausted {
                attempts: spawner.max_attempts(),
                width: 4,
                height: 4,
            }
        );
    }

    #[test]
    fn full_board_fails_without_drawing() {
        let spawner = FoodSpawner::new(GridSize {
            width: 3,
            height: 1,
        });
        let mut rng = ScriptedRandom::new(vec![0.5]);

        let result = spawner.spawn(&row_snake(), &mut rng);

        assert!(matches!(result, Err(GameError::SpawnExhausted { attempts: 0, .. })));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn spawns_cover_every_free_cell_eventually() {
        let grid = GridSize::square(3);
        let spawner = FoodSpawner::new(grid);
        let snake = row_snake();
        let mut rng = PlatformRandom::seeded(3);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            seen.insert(spawner.spawn(&snake, &mut rng).expect("free cells remain"));
        }

        assert_eq!(seen.len(), grid.total_cells() - snake.len());
    }
}
