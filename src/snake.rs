use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one step along `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True when `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// Ordered snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    ///
    /// # Panics
    ///
    /// Panics on an empty body; the engine never produces one.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Prepends a new head.
    pub fn push_head(&mut self, position: Position) {
        self.body.push_front(position);
    }

    /// Removes and returns the tail segment.
    pub fn drop_tail(&mut self) -> Option<Position> {
        self.body.pop_back()
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if any segment other than the tail occupies `position`.
    #[must_use]
    pub fn occupies_excluding_tail(&self, position: Position) -> bool {
        let keep = self.body.len().saturating_sub(1);
        self.body.iter().take(keep).any(|segment| *segment == position)
    }

    /// Returns true when no two segments share a cell.
    #[must_use]
    pub fn is_self_disjoint(&self) -> bool {
        self.body
            .iter()
            .enumerate()
            .all(|(index, segment)| !self.body.iter().skip(index + 1).any(|other| other == segment))
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Copies the body into a head-first vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }
}
