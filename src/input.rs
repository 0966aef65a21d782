use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
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

    /// Returns the unit vector `(dx, dy)` for this direction; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Returns the direction the snake takes on the next tick.
///
/// A request for the exact opposite of `current` would turn the head into
/// the neck, so it is ignored and `current` is kept.
#[must_use]
pub fn change_direction(current: Direction, requested: Direction) -> Direction {
    let (cx, cy) = current.delta();
    let (rx, ry) = requested.delta();
    if cx + rx == 0 && cy + ry == 0 {
        current
    } else {
        requested
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    TogglePause,
    Confirm,
    Quit,
}

/// Maps a terminal key event onto a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(GameInput::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char(' ') => Some(GameInput::TogglePause),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(GameInput::Direction(Direction::Up)),
            's' => Some(GameInput::Direction(Direction::Down)),
            'a' => Some(GameInput::Direction(Direction::Left)),
            'd' => Some(GameInput::Direction(Direction::Right)),
            'q' => Some(GameInput::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Reads keyboard events from the terminal.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a recognised key press.
    ///
    /// Unrecognised keys and non-key events (resize, focus) yield `Ok(None)`.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{change_direction, map_key, Direction, GameInput};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn reversal_is_blocked() {
        assert_eq!(change_direction(Direction::Right, Direction::Left), Direction::Right);
        assert_eq!(change_direction(Direction::Left, Direction::Right), Direction::Left);
        assert_eq!(change_direction(Direction::Up, Direction::Down), Direction::Up);
        assert_eq!(change_direction(Direction::Down, Direction::Up), Direction::Down);
    }

    #[test]
    fn perpendicular_and_same_direction_are_adopted() {
        assert_eq!(change_direction(Direction::Right, Direction::Up), Direction::Up);
        assert_eq!(change_direction(Direction::Right, Direction::Down), Direction::Down);
        assert_eq!(change_direction(Direction::Up, Direction::Up), Direction::Up);
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(GameInput::Direction(Direction::Up)));
        assert_eq!(
            map_key(press(KeyCode::Char('W'))),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('s'))),
            Some(GameInput::Direction(Direction::Down))
        );
        assert_eq!(
            map_key(press(KeyCode::Right)),
            Some(GameInput::Direction(Direction::Right))
        );
    }

    #[test]
    fn space_enter_and_quit_keys_map_to_controls() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(GameInput::TogglePause));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(GameInput::Confirm));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(GameInput::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn key_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert_eq!(map_key(release), None);
    }
}
