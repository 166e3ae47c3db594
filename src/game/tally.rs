use tracing::info;

use crate::error::SessionError;
use crate::result::{FinalOutcome, RoundOutcome, RoundResult, SessionProgress, SessionResult};
use crate::source::CardSource;

use super::state::{Round, Tally};
use super::{Game, Turn};

impl<S: CardSource> Game<S> {
    /// Records `outcome` for the resolved round and moves the session on.
    ///
    /// A push credits neither side. After the last round the session is
    /// finished; otherwise the next round is dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished or the current round is
    /// not resolved.
    pub fn record_round_outcome(
        &self,
        outcome: RoundOutcome,
    ) -> Result<SessionProgress, SessionError> {
        let mut round = self.round.lock();
        self.record_locked(&mut round, outcome)
            .map(|(_, progress)| progress)
    }

    /// Records with the round lock already held.
    pub(super) fn record_locked(
        &self,
        round: &mut Round,
        outcome: RoundOutcome,
    ) -> Result<(RoundResult, SessionProgress), SessionError> {
        let mut tally = self.tally.lock();
        if tally.finished {
            return Err(SessionError::Finished);
        }
        if round.turn != Turn::Resolved {
            return Err(SessionError::RoundNotResolved);
        }

        let result = round.result(outcome);
        tally.record(result);

        info!(
            round = round.index,
            ?outcome,
            player_wins = tally.player_wins,
            dealer_wins = tally.dealer_wins,
            "round recorded"
        );

        if round.index >= self.options.rounds {
            tally.finished = true;
            let session = tally.session_result();
            drop(tally);

            self.touch();
            info!(outcome = ?session.outcome, "session finished");
            return Ok((result, SessionProgress::Finished(session)));
        }

        drop(tally);
        let next = round.index + 1;
        self.deal_round(round, next);
        Ok((result, SessionProgress::NextRound(next)))
    }

    /// Starts a new session: round 1, no wins, a fresh deal.
    pub fn reset(&self) {
        let mut round = self.round.lock();
        *self.tally.lock() = Tally::default();
        self.deal_round(&mut round, 1);
        info!("session reset");
    }

    /// Returns the overall winner of a finished session.
    ///
    /// # Errors
    ///
    /// Returns an error if rounds remain to be played.
    pub fn final_outcome(&self) -> Result<FinalOutcome, SessionError> {
        self.session_result().map(|result| result.outcome)
    }

    /// Returns the full tally of a finished session.
    ///
    /// # Errors
    ///
    /// Returns an error if rounds remain to be played.
    pub fn session_result(&self) -> Result<SessionResult, SessionError> {
        let tally = self.tally.lock();
        if !tally.finished {
            return Err(SessionError::NotFinished);
        }

        Ok(tally.session_result())
    }
}
