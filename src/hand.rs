//! Hands and the roles that hold them.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Scores above this value are bust.
pub const BUST_LIMIT: u8 = 21;

/// Which side of the table a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Player,
    /// The dealer.
    Dealer,
}

/// A hand of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
    /// Owner of the hand.
    role: Role,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self {
            cards: Vec::new(),
            role,
        }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn with_cards(role: Role, cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            role,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the owner of the hand.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Sum of the card values.
    ///
    /// Always recomputed from the cards, saturating at `u8::MAX`.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |total, card| total.saturating_add(card.value()))
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BUST_LIMIT
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
