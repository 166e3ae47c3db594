//! Game configuration options.

use core::time::Duration;

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use threeround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_rounds(5)
///     .with_auto_play(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of rounds in a session.
    pub rounds: u8,
    /// Dealer score at which the dealer's turn ends.
    pub dealer_stands_on: u8,
    /// Whether the dealer draws automatically on its turn.
    pub auto_play: bool,
    /// Delay a presentation layer waits before applying each automatic step.
    pub step_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rounds: 3,
            dealer_stands_on: 17,
            auto_play: false,
            step_delay: Duration::from_secs(2),
        }
    }
}

impl GameOptions {
    /// Sets the number of rounds per session. Zero is treated as one.
    ///
    /// # Example
    ///
    /// ```
    /// use threeround::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds(5);
    /// assert_eq!(options.rounds, 5);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u8) -> Self {
        self.rounds = if rounds == 0 { 1 } else { rounds };
        self
    }

    /// Sets the dealer's stop threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use threeround::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = score;
        self
    }

    /// Sets whether the dealer plays automatically.
    ///
    /// # Example
    ///
    /// ```
    /// use threeround::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_play(true);
    /// assert!(options.auto_play);
    /// ```
    #[must_use]
    pub const fn with_auto_play(mut self, enabled: bool) -> Self {
        self.auto_play = enabled;
        self
    }

    /// Sets the delay between automatic steps.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use threeround::GameOptions;
    ///
    /// let options = GameOptions::default().with_step_delay(Duration::from_millis(500));
    /// assert_eq!(options.step_delay, Duration::from_millis(500));
    /// ```
    #[must_use]
    pub const fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }
}
