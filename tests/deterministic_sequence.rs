use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use snake_arcade::game::{DeathReason, GameState};
use snake_arcade::input::{Direction, GameInput};
use snake_arcade::score::{HighScoreStore, MemoryStore};
use snake_arcade::session::Session;
use snake_arcade::snake::{Position, Snake};

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut rng = StdRng::seed_from_u64(42);
    let state = GameState::from_parts(Snake::initial(), Position::new(11, 10), Direction::Right);

    let state = state.step(&mut rng);
    assert!(!state.game_over);
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Position::new(11, 10));

    let mut state = state.with_direction(Direction::Up);
    for expected_y in (0..10).rev() {
        state = state.step(&mut rng);
        if state.score == 10 {
            assert_eq!(state.snake.head(), Position::new(11, expected_y));
        }
    }
    let before_wall = state.clone();

    let state = state.step(&mut rng);
    assert!(state.game_over);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(state.snake, before_wall.snake);
    assert_eq!(state.score, before_wall.score);
}

#[test]
fn first_tick_from_initial_state_moves_right() {
    let mut rng = StdRng::seed_from_u64(1);
    let state = GameState::from_parts(Snake::initial(), Position::new(0, 0), Direction::Right);

    let next = state.step(&mut rng);

    let segments: Vec<Position> = next.snake.segments().copied().collect();
    assert_eq!(
        segments,
        vec![
            Position::new(11, 10),
            Position::new(10, 10),
            Position::new(9, 10)
        ]
    );
    assert_eq!(next.score, 0);
}

#[test]
fn session_plays_until_wall_and_keeps_best_score() {
    let start = Instant::now();
    let mut session = Session::new(MemoryStore::with_score(1_000), Some(7));

    session.handle_input(GameInput::Confirm, start);
    session.handle_input(GameInput::Direction(Direction::Left), start);
    assert_eq!(session.state().direction, Direction::Right);

    let mut now = start;
    let mut ticks = 0;
    while !session.state().game_over {
        now += Duration::from_millis(200);
        if session.update(now) {
            ticks += 1;
        }
        assert!(ticks <= 20, "snake heading right must reach the wall");
    }

    assert_eq!(session.state().death_reason, Some(DeathReason::WallCollision));
    assert_eq!(session.store().load(), 1_000);
    assert_eq!(session.high_score(), 1_000);

    session.handle_input(GameInput::Confirm, now);
    assert!(!session.state().game_over);
    assert_eq!(session.state().score, 0);
}
