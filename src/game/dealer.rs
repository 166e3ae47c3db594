use alloc::vec::Vec;

use tracing::info;

use crate::card::Card;
use crate::error::{ActionError, OutcomeError};
use crate::result::RoundOutcome;
use crate::source::CardSource;

use super::state::Round;
use super::{Game, Turn};

impl<S: CardSource> Game<S> {
    /// Ends the dealer's turn and fixes the round outcome.
    pub(super) fn resolve_round(round: &mut Round) {
        let player_score = round.player.score();
        let dealer_score = round.dealer.score();
        let outcome = RoundOutcome::decide(player_score, dealer_score);

        round.turn = Turn::Resolved;
        round.outcome = Some(outcome);

        info!(
            round = round.index,
            player_score,
            dealer_score,
            ?outcome,
            "round resolved"
        );
    }

    /// Draws one card for the dealer, resolving the round at the stop
    /// threshold. The caller has checked that it is the dealer's turn.
    pub(super) fn dealer_draw(&self, round: &mut Round) -> Card {
        let card = self.draw();
        round.dealer.add_card(card);
        round.last_card = Some(card);

        if round.dealer.score() >= self.options.dealer_stands_on {
            Self::resolve_round(round);
        }

        card
    }

    /// Dealer plays out the whole turn at once.
    ///
    /// The dealer draws until reaching its stop threshold (17 by default) and
    /// the round is resolved. This is the unstaged form of autoplay and works
    /// whether or not autoplay is enabled.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved or it is still the player's
    /// turn.
    pub fn dealer_play(&self) -> Result<Vec<Card>, ActionError> {
        let mut round = self.round.lock();
        match round.turn {
            Turn::PlayerTurn => return Err(ActionError::NotYourTurn),
            Turn::Resolved => return Err(ActionError::InvalidState),
            Turn::DealerTurn => {}
        }

        let mut drawn_cards = Vec::new();
        while round.turn == Turn::DealerTurn {
            if round.dealer.score() >= self.options.dealer_stands_on {
                Self::resolve_round(&mut round);
                break;
            }
            drawn_cards.push(self.dealer_draw(&mut round));
        }

        self.touch();
        Ok(drawn_cards)
    }

    /// Returns the outcome of the resolved round.
    ///
    /// Precedence: a player bust loses, then a dealer bust loses, then the
    /// higher score wins, and equal scores push.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved.
    pub fn resolve_outcome(&self) -> Result<RoundOutcome, OutcomeError> {
        let round = self.round.lock();
        if round.turn != Turn::Resolved {
            return Err(OutcomeError::NotResolved);
        }

        Ok(round.outcome.unwrap_or_else(|| {
            RoundOutcome::decide(round.player.score(), round.dealer.score())
        }))
    }
}
