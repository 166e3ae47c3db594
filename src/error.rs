//! Error types for game operations.
//!
//! Every operation that returns one of these errors leaves the game exactly as
//! it was, so callers that ignore the error get a no-op.

use thiserror::Error;

/// Errors that can occur during hit and stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is resolved or the session is finished.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this role's turn.
    #[error("not this role's turn")]
    NotYourTurn,
    /// The dealer draws on its own while autoplay is enabled.
    #[error("dealer autoplay is enabled")]
    AutoPlayActive,
}

/// Errors that can occur when reading a round outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The round has not been resolved yet.
    #[error("round is not resolved")]
    NotResolved,
}

/// Errors that can occur while tallying the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The current round has not been resolved yet.
    #[error("round is not resolved")]
    RoundNotResolved,
    /// All rounds have already been recorded.
    #[error("session is finished")]
    Finished,
    /// Rounds remain to be played.
    #[error("session is not finished")]
    NotFinished,
}

/// Errors that can occur when applying a deferred step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The game changed since the step was scheduled.
    #[error("step no longer applies to the current state")]
    Stale,
}

/// Errors that can occur when parsing a card label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The label is not one of the card pool labels.
    #[error("unknown card label")]
    UnknownLabel,
}
