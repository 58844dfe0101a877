use crate::config::{CollisionPolicy, GridSize};
use crate::snake::{Position, Snake};

/// Wall and body test for a candidate head.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CollisionDetector {
    grid: GridSize,
    policy: CollisionPolicy,
}

impl CollisionDetector {
    #[must_use]
    pub fn new(grid: GridSize, policy: CollisionPolicy) -> Self {
        Self { grid, policy }
    }

    /// Returns true if `candidate` leaves the grid or lands on `body`.
    ///
    /// `body` is the pre-tick snake. `grows` says whether this move eats food;
    /// it only matters under [`CollisionPolicy::TailVacates`], where the tail
    /// cell counts as free unless the snake is about to grow.
    #[must_use]
    pub fn collides(&self, candidate: Position, body: &Snake, grows: bool) -> bool {
        if !self.grid.in_bounds(candidate) {
            return true;
        }

        match self.policy {
            CollisionPolicy::PreTickBody => body.occupies(candidate),
            CollisionPolicy::TailVacates if grows => body.occupies(candidate),
            CollisionPolicy::TailVacates => body.occupies_excluding_tail(candidate),
        }
    }
}
