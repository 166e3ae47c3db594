//! Game state types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{Hand, Role};
use crate::result::{FinalOutcome, RoundOutcome, RoundResult, SessionResult};

use super::StepKind;

/// Whose move it is in the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Waiting for the dealer to hit or stand.
    DealerTurn,
    /// Both sides are done and the outcome is known.
    Resolved,
}

impl Turn {
    /// Returns the turn owned by `role`.
    #[must_use]
    pub const fn of(role: Role) -> Self {
        match role {
            Role::Player => Self::PlayerTurn,
            Role::Dealer => Self::DealerTurn,
        }
    }

    /// Returns the role that may act, if any.
    #[must_use]
    pub const fn role(self) -> Option<Role> {
        match self {
            Self::PlayerTurn => Some(Role::Player),
            Self::DealerTurn => Some(Role::Dealer),
            Self::Resolved => None,
        }
    }
}

/// Everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Current round index, starting at 1.
    pub round: u8,
    /// Number of rounds in the session.
    pub rounds: u8,
    /// The player's hand.
    pub player: Hand,
    /// The dealer's hand.
    pub dealer: Hand,
    /// The player's score.
    pub player_score: u8,
    /// The dealer's score.
    pub dealer_score: u8,
    /// Whose move it is.
    pub turn: Turn,
    /// The round outcome, once resolved.
    pub outcome: Option<RoundOutcome>,
    /// The most recent card drawn by a hit or autoplay step.
    pub last_card: Option<Card>,
    /// Rounds won by the player so far.
    pub player_wins: u8,
    /// Rounds won by the dealer so far.
    pub dealer_wins: u8,
    /// Whether every round has been recorded.
    pub finished: bool,
    /// Whether dealer autoplay is enabled.
    pub auto_play: bool,
    /// The automatic step waiting to be applied, if any.
    pub pending: Option<StepKind>,
}

/// State of the round being played.
#[derive(Debug, Clone)]
pub(crate) struct Round {
    pub index: u8,
    pub player: Hand,
    pub dealer: Hand,
    pub turn: Turn,
    pub outcome: Option<RoundOutcome>,
    pub last_card: Option<Card>,
}

impl Round {
    pub const fn new(index: u8) -> Self {
        Self {
            index,
            player: Hand::new(Role::Player),
            dealer: Hand::new(Role::Dealer),
            turn: Turn::PlayerTurn,
            outcome: None,
            last_card: None,
        }
    }

    pub const fn hand_mut(&mut self, role: Role) -> &mut Hand {
        match role {
            Role::Player => &mut self.player,
            Role::Dealer => &mut self.dealer,
        }
    }

    pub fn result(&self, outcome: RoundOutcome) -> RoundResult {
        RoundResult {
            round: self.index,
            outcome,
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
        }
    }
}

/// Running win counts for the session.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tally {
    pub player_wins: u8,
    pub dealer_wins: u8,
    pub finished: bool,
    pub history: Vec<RoundResult>,
}

impl Tally {
    pub fn record(&mut self, result: RoundResult) {
        match result.outcome {
            RoundOutcome::PlayerWin => self.player_wins = self.player_wins.saturating_add(1),
            RoundOutcome::DealerWin => self.dealer_wins = self.dealer_wins.saturating_add(1),
            RoundOutcome::Push => {}
        }
        self.history.push(result);
    }

    pub fn session_result(&self) -> SessionResult {
        SessionResult {
            player_wins: self.player_wins,
            dealer_wins: self.dealer_wins,
            outcome: FinalOutcome::decide(self.player_wins, self.dealer_wins),
            rounds: self.history.clone(),
        }
    }
}
