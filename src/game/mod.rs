//! Game engine and state management.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use alloc::vec::Vec;
use tracing::{debug, info};

use crate::sync::Mutex;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::source::{CardSource, RandomSource};

mod actions;
mod dealer;
pub mod state;
mod step;
mod tally;

use state::{Round, Tally};
pub use state::{GameSnapshot, Turn};
pub use step::{PendingStep, StepEvent, StepKind};

/// A blackjack session engine: one player against a scripted dealer over a
/// fixed number of rounds.
///
/// The game owns the card source, the round in progress and the win tally.
/// All methods take `&self`, so a presenter can share one game between an
/// input loop and a pacing timer.
pub struct Game<S = RandomSource> {
    /// Game options.
    pub options: GameOptions,
    /// Where cards come from.
    source: Mutex<S>,
    /// Round in progress.
    round: Mutex<Round>,
    /// Session win counts. Locked after `round` when both are needed.
    tally: Mutex<Tally>,
    /// Whether the dealer draws on its own.
    auto_play: AtomicBool,
    /// Bumped on every state change; tags pending steps.
    revision: AtomicU32,
}

impl Game {
    /// Creates a new session drawing random cards from the given seed.
    ///
    /// The first round is dealt immediately.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use threeround::{Game, GameOptions, Turn};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.turn(), Turn::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_source(options, RandomSource::new(seed))
    }
}

impl<S: CardSource> Game<S> {
    /// Creates a new session drawing cards from `source`.
    #[must_use]
    pub fn with_source(options: GameOptions, source: S) -> Self {
        let auto_play = options.auto_play;
        let game = Self {
            options,
            source: Mutex::new(source),
            round: Mutex::new(Round::new(1)),
            tally: Mutex::new(Tally::default()),
            auto_play: AtomicBool::new(auto_play),
            revision: AtomicU32::new(0),
        };

        let mut round = game.round.lock();
        game.deal_round(&mut round, 1);
        drop(round);

        game
    }

    /// Draws a card from the source.
    fn draw(&self) -> Card {
        self.source.with(CardSource::draw)
    }

    /// Marks the state as changed. Call with the round lock held.
    fn touch(&self) {
        self.revision.fetch_add(1, Ordering::SeqCst);
    }

    /// Clears both hands and deals two cards to each, player first.
    fn deal_round(&self, round: &mut Round, index: u8) {
        *round = Round::new(index);

        for _ in 0..2 {
            let card = self.draw();
            round.player.add_card(card);
            let card = self.draw();
            round.dealer.add_card(card);
        }

        self.touch();
        info!(
            round = index,
            player_score = round.player.score(),
            dealer_score = round.dealer.score(),
            "round dealt"
        );
    }

    /// Re-deals the current round: fresh hands, two cards each, player to act.
    ///
    /// Does nothing once the session is finished; call [`Game::reset`] to
    /// start over.
    pub fn start_round(&self) {
        let mut round = self.round.lock();
        if self.tally.lock().finished {
            debug!("start_round ignored, session finished");
            return;
        }

        let index = round.index;
        self.deal_round(&mut round, index);
    }

    /// Returns the current turn.
    pub fn turn(&self) -> Turn {
        self.round.lock().turn
    }

    /// Returns the current round index, starting at 1.
    pub fn round_index(&self) -> u8 {
        self.round.lock().index
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.round.lock().player.clone()
    }

    /// Returns a clone of the dealer's hand.
    pub fn dealer_hand(&self) -> Hand {
        self.round.lock().dealer.clone()
    }

    /// Returns the most recent card drawn by a hit or autoplay step.
    pub fn last_card(&self) -> Option<Card> {
        self.round.lock().last_card
    }

    /// Returns the number of rounds the player has won.
    pub fn player_wins(&self) -> u8 {
        self.tally.lock().player_wins
    }

    /// Returns the number of rounds the dealer has won.
    pub fn dealer_wins(&self) -> u8 {
        self.tally.lock().dealer_wins
    }

    /// Returns whether every round has been recorded.
    pub fn is_finished(&self) -> bool {
        self.tally.lock().finished
    }

    /// Returns the rounds recorded so far.
    pub fn history(&self) -> Vec<RoundResult> {
        self.tally.lock().history.clone()
    }

    /// Returns whether dealer autoplay is enabled.
    pub fn auto_play(&self) -> bool {
        self.auto_play.load(Ordering::SeqCst)
    }

    /// Enables or disables dealer autoplay.
    pub fn set_auto_play(&self, enabled: bool) {
        let _round = self.round.lock();
        if self.auto_play.swap(enabled, Ordering::SeqCst) != enabled {
            self.touch();
            debug!(enabled, "autoplay toggled");
        }
    }

    /// Returns the state revision. It changes whenever the game does.
    pub fn revision(&self) -> u32 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Returns a consistent view of the whole game.
    pub fn snapshot(&self) -> GameSnapshot {
        let round = self.round.lock();
        let tally = self.tally.lock();
        let pending = self.pending_kind(&round, tally.finished);

        GameSnapshot {
            round: round.index,
            rounds: self.options.rounds,
            player: round.player.clone(),
            dealer: round.dealer.clone(),
            player_score: round.player.score(),
            dealer_score: round.dealer.score(),
            turn: round.turn,
            outcome: round.outcome,
            last_card: round.last_card,
            player_wins: tally.player_wins,
            dealer_wins: tally.dealer_wins,
            finished: tally.finished,
            auto_play: self.auto_play(),
            pending,
        }
    }
}
