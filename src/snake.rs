use std::collections::VecDeque;

use crate::config::{BOARD_SIZE, INITIAL_SNAKE_LENGTH};
use crate::input::Direction;

/// Board cell in logical coordinates; `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies on the board.
    #[must_use]
    pub fn is_within_bounds(self) -> bool {
        let size = i32::from(BOARD_SIZE);
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }

    /// Returns the neighbouring cell one step in `direction`.
    ///
    /// The result may lie off the board; callers check bounds.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body as an ordered sequence of cells, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates the starting snake: a horizontal line through the board
    /// centre with the head on the right.
    #[must_use]
    pub fn initial() -> Self {
        let center = i32::from(BOARD_SIZE / 2);
        let body = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|offset| Position::new(center - offset, center))
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the body after moving the head to `new_head`.
    ///
    /// The tail is kept when `grow` is set, so the length increases by one.
    #[must_use]
    pub fn advanced(&self, new_head: Position, grow: bool) -> Self {
        let mut body = self.body.clone();
        body.push_front(new_head);
        if !grow {
            let _ = body.pop_back();
        }

        Self { body }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
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
}
