use std::time::Duration;

use rand::Rng;

use crate::config::{
    BASE_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, POINTS_PER_FOOD, POINTS_PER_SPEED_STEP,
    SPEED_STEP_MS,
};
use crate::food::spawn_food;
use crate::input::{change_direction, Direction};
use crate::snake::{Position, Snake};

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// The snake filled every cell, leaving nowhere to place food.
    BoardFull,
}

/// Snapshot of one game session.
///
/// Transitions never mutate a snapshot in place: each one borrows the
/// current value and returns its successor.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    pub death_reason: Option<DeathReason>,
}

impl GameState {
    /// Creates the starting state with the fixed three-cell snake and random food.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let snake = Snake::initial();
        // The starting snake leaves almost the whole board free.
        let food = spawn_food(rng, &snake).unwrap_or(Position::new(0, 0));

        Self::from_parts(snake, food, Direction::Right)
    }

    /// Creates a running state from explicit parts, with a zero score.
    #[must_use]
    pub fn from_parts(snake: Snake, food: Position, direction: Direction) -> Self {
        Self {
            snake,
            food,
            direction,
            score: 0,
            game_over: false,
            paused: false,
            death_reason: None,
        }
    }

    /// Returns true when ticks advance the game.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Advances the game by one tick.
    ///
    /// Paused and finished states are returned unchanged. A move into a wall
    /// or into the body ends the game without moving the snake.
    #[must_use]
    pub fn step<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        if !self.is_running() {
            return self.clone();
        }

        let new_head = self.snake.head().step(self.direction);

        if !new_head.is_within_bounds() {
            return self.ended(DeathReason::WallCollision);
        }

        if self.snake.occupies(new_head) {
            return self.ended(DeathReason::SelfCollision);
        }

        if new_head != self.food {
            return Self {
                snake: self.snake.advanced(new_head, false),
                ..self.clone()
            };
        }

        let snake = self.snake.advanced(new_head, true);
        let score = self.score + POINTS_PER_FOOD;
        match spawn_food(rng, &snake) {
            Some(food) => Self {
                snake,
                food,
                score,
                ..self.clone()
            },
            None => Self {
                snake,
                score,
                game_over: true,
                death_reason: Some(DeathReason::BoardFull),
                ..self.clone()
            },
        }
    }

    /// Returns the state with `requested` applied as the next heading.
    ///
    /// Reversals are rejected, and headings only change while the game runs.
    #[must_use]
    pub fn with_direction(&self, requested: Direction) -> Self {
        if !self.is_running() {
            return self.clone();
        }

        Self {
            direction: change_direction(self.direction, requested),
            ..self.clone()
        }
    }

    /// Returns the state with the pause flag flipped. Finished games stay as they are.
    #[must_use]
    pub fn toggled_pause(&self) -> Self {
        if self.game_over {
            return self.clone();
        }

        Self {
            paused: !self.paused,
            ..self.clone()
        }
    }

    fn ended(&self, reason: DeathReason) -> Self {
        Self {
            game_over: true,
            death_reason: Some(reason),
            ..self.clone()
        }
    }
}

/// Returns the delay between ticks for the given score.
///
/// Starts at 200ms and drops 20ms per full 50 points, never below 100ms.
#[must_use]
pub fn tick_interval(score: u32) -> Duration {
    let steps = u64::from(score / POINTS_PER_SPEED_STEP);
    let millis = BASE_TICK_INTERVAL_MS
        .saturating_sub(steps.saturating_mul(SPEED_STEP_MS))
        .max(MIN_TICK_INTERVAL_MS);
    Duration::from_millis(millis)
}
