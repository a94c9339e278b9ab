//! Match configuration options.

use core::time::Duration;

/// What happens to the hands when a round ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TieRule {
    /// Both hands draw one card from the draw pile (player first, then bot).
    ///
    /// Once the pile runs out, ties no longer replenish.
    #[default]
    DrawFromPile,
    /// Ties only record the draw; the cards left after dealing stay unused.
    NoDraw,
}

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use warrs::{MatchOptions, TieRule};
///
/// let options = MatchOptions::default()
///     .with_hand_size(5)
///     .with_settle_delay(Duration::from_millis(500))
///     .with_tie_rule(TieRule::NoDraw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Cards dealt to each side.
    pub hand_size: usize,
    /// Delay between a round's reveal and the next allowed play.
    pub settle_delay: Duration,
    /// Tie handling.
    pub tie_rule: TieRule,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            hand_size: 7,
            settle_delay: Duration::from_secs(1),
            tie_rule: TieRule::DrawFromPile,
        }
    }
}

impl MatchOptions {
    /// Sets the number of cards dealt to each side.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_hand_size(3);
    /// assert_eq!(options.hand_size, 3);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the settle delay.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use warrs::MatchOptions;
    ///
    /// let options = MatchOptions::default().with_settle_delay(Duration::ZERO);
    /// assert_eq!(options.settle_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Sets the tie rule.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{MatchOptions, TieRule};
    ///
    /// let options = MatchOptions::default().with_tie_rule(TieRule::NoDraw);
    /// assert_eq!(options.tie_rule, TieRule::NoDraw);
    /// ```
    #[must_use]
    pub const fn with_tie_rule(mut self, rule: TieRule) -> Self {
        self.tie_rule = rule;
        self
    }
}
