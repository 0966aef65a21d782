use std::time::{Duration, Instant};

/// Cancellable tick timer driven by caller-supplied instants.
///
/// The timer fires at most once per arming; the driver re-arms it after
/// each state change with the delay for the new state. No clock is read
/// internally, so tests step time explicitly.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the next firing `delay` after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drops the pending firing, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the pending firing; `None` while disarmed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns true and disarms when the deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
