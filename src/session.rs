use std::time::Instant;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::{tick_interval, GameState};
use crate::input::{Direction, GameInput};
use crate::score::{record_final_score, HighScoreStore};
use crate::scheduler::TickTimer;

/// What the outer loop should do after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Drives one player's games: owns the current state, the tick timer and
/// the high-score store.
///
/// Inputs and timer firings are applied one at a time by the caller, so a
/// direction change is visible to the next tick but never to one already
/// applied.
#[derive(Debug)]
pub struct Session<S: HighScoreStore> {
    state: GameState,
    started: bool,
    high_score: u32,
    high_score_before_game: u32,
    store: S,
    rng: StdRng,
    timer: TickTimer,
}

impl<S: HighScoreStore> Session<S> {
    /// Creates a session on the start screen; `seed` makes food placement reproducible.
    #[must_use]
    pub fn new(store: S, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = GameState::new(&mut rng);
        let high_score = store.load();
        debug!("loaded high score {high_score}");

        Self {
            state,
            started: false,
            high_score,
            high_score_before_game: high_score,
            store,
            rng,
            timer: TickTimer::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// False until the first game begins.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// High score as it stood when the current game began.
    #[must_use]
    pub fn high_score_before_game(&self) -> u32 {
        self.high_score_before_game
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Applies one input event.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) -> Control {
        match input {
            GameInput::Quit => return Control::Quit,
            GameInput::Confirm | GameInput::TogglePause if !self.started => self.start(now),
            GameInput::Confirm if self.state.game_over => self.restart(now),
            GameInput::Confirm => {}
            GameInput::TogglePause => self.toggle_pause(now),
            GameInput::Direction(direction) => self.change_direction(direction, now),
        }

        Control::Continue
    }

    /// Applies a heading change; an accepted turn restarts the tick delay.
    pub fn change_direction(&mut self, direction: Direction, now: Instant) {
        if !self.started {
            return;
        }

        let next = self.state.with_direction(direction);
        if next.direction == self.state.direction {
            return;
        }

        self.state = next;
        self.arm(now);
    }

    /// Begins the first game.
    pub fn start(&mut self, now: Instant) {
        info!("game started");
        self.begin_fresh_game(now);
    }

    /// Discards the current game and begins a new one with a fresh timer.
    pub fn restart(&mut self, now: Instant) {
        info!("game restarted after scoring {}", self.state.score);
        self.begin_fresh_game(now);
    }

    /// Pauses or resumes; pausing suspends the timer without losing state.
    pub fn toggle_pause(&mut self, now: Instant) {
        if !self.started || self.state.game_over {
            return;
        }

        self.state = self.state.toggled_pause();
        if self.state.paused {
            info!("game paused");
            self.timer.cancel();
        } else {
            info!("game resumed");
            self.arm(now);
        }
    }

    /// Applies a tick when the timer is due. Returns whether the state changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.timer.fire_if_due(now) {
            return false;
        }

        let next = self.state.step(&mut self.rng);
        let finished = next.game_over && !self.state.game_over;
        self.state = next;

        if finished {
            self.finish_game();
        } else if self.state.is_running() {
            self.arm(now);
        }

        true
    }

    fn begin_fresh_game(&mut self, now: Instant) {
        self.state = GameState::new(&mut self.rng);
        self.started = true;
        self.high_score_before_game = self.high_score;
        self.timer.cancel();
        self.arm(now);
    }

    fn finish_game(&mut self) {
        let score = self.state.score;
        info!(
            "game over ({:?}) with score {score}",
            self.state.death_reason
        );

        match record_final_score(&mut self.store, score) {
            Ok(true) => info!("new high score {score}"),
            Ok(false) => {}
            Err(error) => warn!("failed to save high score: {error}"),
        }
        self.high_score = self.high_score.max(self.store.load()).max(score);
    }

    fn arm(&mut self, now: Instant) {
        self.timer.arm(now, tick_interval(self.state.score));
    }
}
