//! Automatic transitions.
//!
//! The engine never schedules anything itself. Whatever should happen next
//! without player input is reported by [`Game::pending_step`] and applied by
//! [`Game::apply_step`], leaving the pacing to the caller.

use tracing::debug;

use crate::card::Card;
use crate::error::StepError;
use crate::hand::BUST_LIMIT;
use crate::result::{RoundOutcome, RoundResult, SessionProgress};
use crate::source::CardSource;

use super::state::Round;
use super::{Game, Turn};

/// Kind of automatic transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// The player was dealt 21 or more; pass the turn to the dealer.
    EndPlayerTurn,
    /// Autoplay: the dealer is below its threshold and draws a card.
    DealerDraw,
    /// Autoplay: the dealer is at its threshold and stands.
    DealerStand,
    /// The round is resolved; record it into the tally.
    RecordOutcome,
}

/// A transition due in a specific game revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingStep {
    /// What will happen.
    pub kind: StepKind,
    /// Revision the step was computed against.
    pub revision: u32,
}

/// What an applied step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// The player's turn ended automatically.
    PlayerStopped {
        /// The player's score.
        score: u8,
    },
    /// The dealer drew a card.
    DealerDrew {
        /// The card drawn.
        card: Card,
        /// The dealer's score after the draw.
        score: u8,
    },
    /// The dealer stood and the round was resolved.
    DealerStood {
        /// The dealer's score.
        score: u8,
    },
    /// The round outcome was added to the tally.
    RoundRecorded {
        /// The recorded round.
        result: RoundResult,
        /// Next round or final tally.
        progress: SessionProgress,
    },
}

impl<S: CardSource> Game<S> {
    pub(super) fn pending_kind(&self, round: &Round, finished: bool) -> Option<StepKind> {
        if finished {
            return None;
        }

        match round.turn {
            Turn::Resolved => Some(StepKind::RecordOutcome),
            Turn::PlayerTurn if round.player.score() >= BUST_LIMIT => {
                Some(StepKind::EndPlayerTurn)
            }
            Turn::PlayerTurn => None,
            Turn::DealerTurn if !self.auto_play() => None,
            Turn::DealerTurn if round.dealer.score() < self.options.dealer_stands_on => {
                Some(StepKind::DealerDraw)
            }
            Turn::DealerTurn => Some(StepKind::DealerStand),
        }
    }

    /// Returns the automatic transition due in the current state, if any.
    pub fn pending_step(&self) -> Option<PendingStep> {
        let round = self.round.lock();
        let finished = self.tally.lock().finished;
        let kind = self.pending_kind(&round, finished)?;

        Some(PendingStep {
            kind,
            revision: self.revision(),
        })
    }

    /// Applies a previously reported step.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Stale`] if the game changed since `pending` was
    /// reported, for example by a manual hit, an autoplay toggle or a reset.
    /// Nothing is applied in that case.
    pub fn apply_step(&self, pending: PendingStep) -> Result<StepEvent, StepError> {
        let mut round = self.round.lock();
        if self.revision() != pending.revision {
            return Err(StepError::Stale);
        }

        let finished = self.tally.lock().finished;
        if self.pending_kind(&round, finished) != Some(pending.kind) {
            return Err(StepError::Stale);
        }

        debug!(round = round.index, kind = ?pending.kind, "applying step");

        let event = match pending.kind {
            StepKind::EndPlayerTurn => {
                round.turn = Turn::DealerTurn;
                self.touch();
                StepEvent::PlayerStopped {
                    score: round.player.score(),
                }
            }
            StepKind::DealerDraw => {
                let card = self.dealer_draw(&mut round);
                self.touch();
                StepEvent::DealerDrew {
                    card,
                    score: round.dealer.score(),
                }
            }
            StepKind::DealerStand => {
                Self::resolve_round(&mut round);
                self.touch();
                StepEvent::DealerStood {
                    score: round.dealer.score(),
                }
            }
            StepKind::RecordOutcome => {
                let outcome = round.outcome.unwrap_or_else(|| {
                    RoundOutcome::decide(round.player.score(), round.dealer.score())
                });
                let (result, progress) = self
                    .record_locked(&mut round, outcome)
                    .map_err(|_| StepError::Stale)?;
                StepEvent::RoundRecorded { result, progress }
            }
        };

        Ok(event)
    }

    /// Applies the pending step immediately, if there is one.
    pub fn step(&self) -> Option<StepEvent> {
        let pending = self.pending_step()?;
        self.apply_step(pending).ok()
    }
}
