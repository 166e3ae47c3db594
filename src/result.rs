//! Round and session result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::BUST_LIMIT;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or player has the higher score).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher score).
    DealerWin,
    /// Push (tie). Neither side is credited.
    Push,
}

impl RoundOutcome {
    /// Compares two final scores.
    ///
    /// A player bust is checked first, so the dealer wins even when both
    /// hands are bust.
    #[must_use]
    pub const fn decide(player_score: u8, dealer_score: u8) -> Self {
        if player_score > BUST_LIMIT {
            Self::DealerWin
        } else if dealer_score > BUST_LIMIT {
            Self::PlayerWin
        } else if player_score > dealer_score {
            Self::PlayerWin
        } else if dealer_score > player_score {
            Self::DealerWin
        } else {
            Self::Push
        }
    }
}

/// Overall result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalOutcome {
    /// The player won more rounds.
    PlayerOverall,
    /// The dealer won more rounds.
    DealerOverall,
    /// Both sides won the same number of rounds.
    Tie,
}

impl FinalOutcome {
    /// Compares cumulative round wins.
    #[must_use]
    pub const fn decide(player_wins: u8, dealer_wins: u8) -> Self {
        if player_wins > dealer_wins {
            Self::PlayerOverall
        } else if dealer_wins > player_wins {
            Self::DealerOverall
        } else {
            Self::Tie
        }
    }
}

/// A recorded round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Round index, starting at 1.
    pub round: u8,
    /// The recorded outcome.
    pub outcome: RoundOutcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}

/// Tally of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    /// Rounds won by the player.
    pub player_wins: u8,
    /// Rounds won by the dealer.
    pub dealer_wins: u8,
    /// Overall winner.
    pub outcome: FinalOutcome,
    /// Every recorded round, in order.
    pub rounds: Vec<RoundResult>,
}

/// What happened to the session after a round was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionProgress {
    /// A new round was dealt with this index.
    NextRound(u8),
    /// That was the last round.
    Finished(SessionResult),
}
