//! Card sources.
//!
//! The game never runs out of cards: every draw is an independent pick from
//! [`CARD_POOL`], so there is no shoe to deplete or reshuffle.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{CARD_POOL, Card, POOL_SIZE};

/// Produces cards for the game. Drawing never fails.
pub trait CardSource {
    /// Draws the next card.
    fn draw(&mut self) -> Card;
}

/// Uniform draws with replacement from [`CARD_POOL`].
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CardSource for RandomSource {
    fn draw(&mut self) -> Card {
        CARD_POOL[self.rng.random_range(0..POOL_SIZE)]
    }
}

/// Replays a fixed sequence of cards, starting over once it is exhausted.
///
/// An empty script replays [`CARD_POOL`] in order.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<Card>,
    next: usize,
}

impl ScriptedSource {
    /// Creates a source that yields `script` in order, cyclically.
    #[must_use]
    pub fn new(script: Vec<Card>) -> Self {
        let script = if script.is_empty() {
            CARD_POOL.to_vec()
        } else {
            script
        };
        Self { script, next: 0 }
    }

    /// Creates a source from a slice of draws.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        Self::new(draws.to_vec())
    }

    /// Returns how many cards have been drawn so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.next
    }
}

impl CardSource for ScriptedSource {
    fn draw(&mut self) -> Card {
        let card = self.script[self.next % self.script.len()];
        self.next += 1;
        card
    }
}

impl<S: CardSource + ?Sized> CardSource for &mut S {
    fn draw(&mut self) -> Card {
        (**self).draw()
    }
}
