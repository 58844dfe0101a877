use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step `(dx, dy)`; `y` grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// True when the two unit deltas cancel out.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        let (ax, ay) = self.delta();
        let (bx, by) = other.delta();
        ax + bx == 0 && ay + by == 0
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    !current.is_opposite(next)
}

/// Committed movement vector plus one pending request slot.
///
/// Requests arriving between two ticks overwrite each other; the last one
/// that is not a reversal of the committed direction is applied by the next
/// [`DirectionBuffer::commit`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DirectionBuffer {
    committed: Direction,
    pending: Option<Direction>,
}

impl DirectionBuffer {
    #[must_use]
    pub fn new(initial: Direction) -> Self {
        Self {
            committed: initial,
            pending: None,
        }
    }

    /// Buffers `direction` for the next tick unless it reverses the committed one.
    pub fn request(&mut self, direction: Direction) {
        if !direction_change_is_valid(self.committed, direction) {
            trace!(?direction, committed = ?self.committed, "dropping reversal request");
            return;
        }
        self.pending = Some(direction);
    }

    /// Promotes the pending request (if any) and returns the committed direction.
    pub fn commit(&mut self) -> Direction {
        if let Some(next) = self.pending.take() {
            self.committed = next;
        }
        self.committed
    }

    /// Drops any pending request and commits `direction`.
    pub fn reset(&mut self, direction: Direction) {
        self.committed = direction;
        self.pending = None;
    }

    #[must_use]
    pub fn committed(&self) -> Direction {
        self.committed
    }

    #[must_use]
    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    Quit,
}

/// Maps a terminal key press to a game input.
#[must_use]
pub fn map_key_event(event: KeyEvent) -> Option<GameInput> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match event.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => {
            GameInput::Direction(Direction::Right)
        }
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Confirm,
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => GameInput::Quit,
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Direction, DirectionBuffer, GameInput, direction_change_is_valid, map_key_event};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn opposites_have_cancelling_deltas() {
        let all = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        for a in all {
            for b in all {
                assert_eq!(a.is_opposite(b), b == a.opposite(), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Left, Direction::Right));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn buffer_drops_reversal_silently() {
        let mut buffer = DirectionBuffer::new(Direction::Up);

        buffer.request(Direction::Down);

        assert_eq!(buffer.pending(), None);
        assert_eq!(buffer.commit(), Direction::Up);
    }

    #[test]
    fn buffer_commit_without_request_keeps_direction() {
        let mut buffer = DirectionBuffer::new(Direction::Left);

        assert_eq!(buffer.commit(), Direction::Left);
        assert_eq!(buffer.commit(), Direction::Left);
    }

    #[test]
    fn last_request_before_commit_wins() {
        let mut buffer = DirectionBuffer::new(Direction::Up);

        buffer.request(Direction::Left);
        buffer.request(Direction::Right);

        assert_eq!(buffer.commit(), Direction::Right);
        assert_eq!(buffer.pending(), None);
    }

    #[test]
    fn reversal_is_judged_against_committed_not_pending() {
        let mut buffer = DirectionBuffer::new(Direction::Up);

        // Left is pending; Right reverses Left but not the committed Up.
        buffer.request(Direction::Left);
        buffer.request(Direction::Right);
        assert_eq!(buffer.commit(), Direction::Right);

        // Now Left reverses the committed Right and is dropped.
        buffer.request(Direction::Left);
        assert_eq!(buffer.commit(), Direction::Right);
    }

    #[test]
    fn reset_clears_pending_request() {
        let mut buffer = DirectionBuffer::new(Direction::Up);
        buffer.request(Direction::Left);

        buffer.reset(Direction::Down);

        assert_eq!(buffer.pending(), None);
        assert_eq!(buffer.committed(), Direction::Down);
    }

    #[test]
    fn arrow_and_letter_keys_map_to_directions() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert_eq!(map_key_event(up), Some(GameInput::Direction(Direction::Up)));
        assert_eq!(map_key_event(a), Some(GameInput::Direction(Direction::Left)));
        assert_eq!(map_key_event(ctrl_c), Some(GameInput::Quit));
        assert_eq!(map_key_event(other), None);
    }
}
