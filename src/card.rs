//! Card labels and the card pool.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// A playing card.
///
/// Cards carry no suit and no identity: two `Card::Seven` values are the
/// same card, and drawing duplicates is expected. Every card is worth at
/// least 2 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// King, worth 10.
    King,
    /// Queen, worth 10.
    Queen,
    /// Joker, worth 10.
    Joker,
    /// Ace, always worth 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
}

impl Card {
    /// Returns the numbered card worth `value`, or `None` if `value` is
    /// outside 2..=10.
    #[must_use]
    pub const fn number(value: u8) -> Option<Self> {
        Some(match value {
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            7 => Self::Seven,
            8 => Self::Eight,
            9 => Self::Nine,
            10 => Self::Ten,
            _ => return None,
        })
    }

    /// Returns `true` for the King, Queen, Joker and Ace.
    #[must_use]
    pub const fn is_named(self) -> bool {
        matches!(self, Self::King | Self::Queen | Self::Joker | Self::Ace)
    }

    /// Returns the point value of the card.
    ///
    /// Aces are a fixed 11; there is no soft hand adjustment.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::King | Self::Queen | Self::Joker | Self::Ten => 10,
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
        }
    }

    /// Returns the label of the card as shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::King => "King",
            Self::Queen => "Queen",
            Self::Joker => "Joker",
            Self::Ace => "Ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("king") {
            return Ok(Self::King);
        }
        if s.eq_ignore_ascii_case("queen") {
            return Ok(Self::Queen);
        }
        if s.eq_ignore_ascii_case("joker") {
            return Ok(Self::Joker);
        }
        if s.eq_ignore_ascii_case("ace") {
            return Ok(Self::Ace);
        }

        s.parse::<u8>()
            .ok()
            .and_then(Self::number)
            .ok_or(ParseCardError::UnknownLabel)
    }
}

/// Number of distinct labels in the card pool.
pub const POOL_SIZE: usize = 13;

/// Every label a card source may produce, each with equal weight.
pub const CARD_POOL: [Card; POOL_SIZE] = [
    Card::King,
    Card::Queen,
    Card::Joker,
    Card::Ace,
    Card::Two,
    Card::Three,
    Card::Four,
    Card::Five,
    Card::Six,
    Card::Seven,
    Card::Eight,
    Card::Nine,
    Card::Ten,
];
