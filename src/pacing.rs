//! Staged application of automatic steps.
//!
//! A [`Pacer`] lets a viewer see each automatic transition: it arms the step
//! the game reports, waits out the delay, then applies it. Time is supplied
//! by the caller as the elapsed time since any fixed epoch.

use core::time::Duration;

use crate::game::{Game, PendingStep, StepEvent};
use crate::options::GameOptions;
use crate::source::CardSource;

/// Holds at most one deferred step and applies it once its delay has passed.
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
    armed: Option<(PendingStep, Duration)>,
}

impl Pacer {
    /// Creates a pacer that waits `delay` before each step.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, armed: None }
    }

    /// Creates a pacer using [`GameOptions::step_delay`].
    #[must_use]
    pub const fn from_options(options: &GameOptions) -> Self {
        Self::new(options.step_delay)
    }

    /// Returns the configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Advances the pacer to `now`.
    ///
    /// If the game has a pending step that is not armed yet (or differs from
    /// the armed one), it is armed for `now + delay`. An armed step whose due
    /// time has come is applied and its event returned. A step made stale by
    /// some other change is dropped, never applied.
    pub fn poll<S: CardSource>(&mut self, game: &Game<S>, now: Duration) -> Option<StepEvent> {
        let Some(pending) = game.pending_step() else {
            self.armed = None;
            return None;
        };

        match self.armed {
            Some((armed, due)) if armed == pending => {
                if now < due {
                    return None;
                }
                self.armed = None;
                game.apply_step(armed).ok()
            }
            _ => {
                self.armed = Some((pending, now.saturating_add(self.delay)));
                None
            }
        }
    }

    /// Returns whether a step is armed and waiting.
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        self.armed.is_some()
    }

    /// Returns the armed step and its due time.
    #[must_use]
    pub const fn armed(&self) -> Option<(PendingStep, Duration)> {
        self.armed
    }

    /// Drops the armed step, if any.
    pub const fn cancel(&mut self) {
        self.armed = None;
    }
}
