//! A three-round blackjack session engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a whole session: the current
//! round's hands and turn, the running win tally, and the card source. Every
//! automatic transition (the player stopping at 21, dealer autoplay, recording
//! a finished round) is exposed as an explicit step, and [`Pacer`] stages those
//! steps behind a fixed delay for presentation layers.
//!
//! # Example
//!
//! ```no_run
//! use threeround::{Game, GameOptions, Role};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! let _ = game.stand(Role::Player);
//! let _ = game.snapshot();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pacing;
pub mod result;
pub mod source;
mod sync;

// Re-export main types
pub use card::{CARD_POOL, Card, POOL_SIZE};
pub use error::{ActionError, OutcomeError, ParseCardError, SessionError, StepError};
pub use game::{Game, GameSnapshot, PendingStep, StepEvent, StepKind, Turn};
pub use hand::{BUST_LIMIT, Hand, Role};
pub use options::GameOptions;
pub use pacing::Pacer;
pub use result::{FinalOutcome, RoundOutcome, RoundResult, SessionProgress, SessionResult};
pub use source::{CardSource, RandomSource, ScriptedSource};
