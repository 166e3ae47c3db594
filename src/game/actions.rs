use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{BUST_LIMIT, Role};
use crate::source::CardSource;

use super::state::Round;
use super::{Game, Turn};

impl<S: CardSource> Game<S> {
    fn ensure_turn(round: &Round, role: Role) -> Result<(), ActionError> {
        if round.turn == Turn::Resolved {
            return Err(ActionError::InvalidState);
        }

        if round.turn != Turn::of(role) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Hit: draw a card into `role`'s hand.
    ///
    /// A player reaching 21 or more hands the turn to the dealer; this covers
    /// both an exact 21 and a bust. A dealer reaching its stop threshold
    /// resolves the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved, it is not `role`'s turn, or
    /// `role` is the dealer while autoplay is enabled. The game is unchanged
    /// in every error case.
    pub fn hit(&self, role: Role) -> Result<Card, ActionError> {
        let mut round = self.round.lock();
        Self::ensure_turn(&round, role)?;

        if role == Role::Dealer && self.auto_play() {
            return Err(ActionError::AutoPlayActive);
        }

        let card = self.draw();
        let hand = round.hand_mut(role);
        hand.add_card(card);
        let score = hand.score();
        round.last_card = Some(card);

        debug!(round = round.index, ?role, %card, score, "hit");

        match role {
            Role::Player if score >= BUST_LIMIT => {
                round.turn = Turn::DealerTurn;
                debug!(score, "player stopped");
            }
            Role::Dealer if score >= self.options.dealer_stands_on => {
                Self::resolve_round(&mut round);
            }
            _ => {}
        }

        self.touch();
        Ok(card)
    }

    /// Stand: end `role`'s turn.
    ///
    /// The player standing passes the turn to the dealer; the dealer standing
    /// resolves the round. The dealer may stand even with autoplay enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is resolved or it is not `role`'s turn.
    pub fn stand(&self, role: Role) -> Result<(), ActionError> {
        let mut round = self.round.lock();
        Self::ensure_turn(&round, role)?;

        debug!(round = round.index, ?role, "stand");

        match role {
            Role::Player => round.turn = Turn::DealerTurn,
            Role::Dealer => Self::resolve_round(&mut round),
        }

        self.touch();
        Ok(())
    }

    /// Returns whether `role` may hit right now.
    pub fn can_hit(&self, role: Role) -> bool {
        let round = self.round.lock();
        Self::ensure_turn(&round, role).is_ok() && !(role == Role::Dealer && self.auto_play())
    }

    /// Returns whether `role` may stand right now.
    pub fn can_stand(&self, role: Role) -> bool {
        Self::ensure_turn(&self.round.lock(), role).is_ok()
    }
}
