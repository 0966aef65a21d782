use rand::Rng;

use crate::config::{total_cells, BOARD_SIZE};
use crate::snake::{Position, Snake};

/// Picks a uniformly random free cell by rejection sampling.
///
/// Returns `None` only when the snake covers the whole board; otherwise at
/// least one free cell exists and sampling terminates.
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Option<Position> {
    if snake.len() >= total_cells() {
        return None;
    }

    let size = i32::from(BOARD_SIZE);
    loop {
        let candidate = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }
}
