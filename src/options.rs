//! Table configuration options.

use crate::card::DECK_SIZE;
use crate::error::OptionsError;
use crate::hand::HAND_SIZE;

/// Largest number of hands that can be dealt from one deck.
pub const MAX_HANDS: u8 = (DECK_SIZE / HAND_SIZE) as u8;

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pkhand::TableOptions;
///
/// let options = TableOptions::default()
///     .with_hands(4)
///     .with_shuffle(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of hands dealt each round.
    pub hands: u8,
    /// Whether the deck is shuffled, both before the first round and when
    /// it is restored.
    pub shuffle: bool,
    /// Whether a full deck replaces a deck that is too short for a round.
    pub reshuffle_when_short: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            hands: 3,
            shuffle: true,
            reshuffle_when_short: true,
        }
    }
}

impl TableOptions {
    /// Sets the number of hands dealt each round.
    ///
    /// # Example
    ///
    /// ```
    /// use pkhand::TableOptions;
    ///
    /// let options = TableOptions::default().with_hands(2);
    /// assert_eq!(options.hands, 2);
    /// ```
    #[must_use]
    pub const fn with_hands(mut self, hands: u8) -> Self {
        self.hands = hands;
        self
    }

    /// Sets whether the deck is shuffled.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets whether a short deck is replaced by a full one.
    ///
    /// # Example
    ///
    /// ```
    /// use pkhand::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_when_short(false);
    /// assert!(!options.reshuffle_when_short);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_when_short(mut self, reshuffle: bool) -> Self {
        self.reshuffle_when_short = reshuffle;
        self
    }

    /// Checks that the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidHandCount`] if no hands are dealt or
    /// more hands than a deck can supply.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.hands == 0 || self.hands > MAX_HANDS {
            return Err(OptionsError::InvalidHandCount(self.hands));
        }
        Ok(())
    }
}
