//! Dealing rounds of hands and picking the winners.

extern crate alloc;

use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::{DealError, OptionsError};
use crate::hand::{HAND_SIZE, Hand};
use crate::options::TableOptions;
use crate::result::RoundResult;

/// Returns the indices of the strongest hands.
///
/// All hands tied for the best strength are returned, in input order. An
/// empty input gives no winners.
///
/// # Example
///
/// ```
/// use pkhand::{Hand, showdown};
///
/// let pair: Hand = "2h 2d 7c 9s Kh".parse().unwrap();
/// let flush: Hand = "3c 8c Tc Qc 4c".parse().unwrap();
/// assert_eq!(showdown(&[pair, flush]), vec![1]);
/// ```
#[must_use]
pub fn showdown(hands: &[Hand]) -> Vec<usize> {
    let Some(best) = hands.iter().map(Hand::strength).max() else {
        return Vec::new();
    };

    hands
        .iter()
        .enumerate()
        .filter(|(_, hand)| hand.strength() == best)
        .map(|(index, _)| index)
        .collect()
}

/// A table that deals rounds of five-card hands from a single deck.
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    options: TableOptions,
    rounds: usize,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use pkhand::{Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default(), 42).unwrap();
    /// let result = table.play_round().unwrap();
    /// assert_eq!(result.hands.len(), 3);
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;

        let mut deck = Deck::new(seed);
        if options.shuffle {
            deck.shuffle();
        }

        Ok(Self {
            deck,
            options,
            rounds: 0,
        })
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns whether the deck is too short for a full round.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.deck.remaining() < self.options.hands as usize * HAND_SIZE
    }

    /// Restores the full deck, shuffled unless the table deals in order.
    pub fn reshuffle(&mut self) {
        self.deck.reset();
        if self.options.shuffle {
            self.deck.shuffle();
        }
    }

    /// Deals one hand per seat and returns the hands with the winners.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck is too short and
    /// reshuffling is disabled. No card is dealt in that case.
    pub fn play_round(&mut self) -> Result<RoundResult, DealError> {
        if self.needs_reshuffle() {
            if !self.options.reshuffle_when_short {
                return Err(DealError::NotEnoughCards {
                    remaining: self.deck.remaining(),
                });
            }
            self.reshuffle();
        }

        let hands = (0..self.options.hands)
            .map(|_| self.deck.deal())
            .collect::<Result<Vec<_>, _>>()?;
        let winners = showdown(&hands);
        self.rounds += 1;

        log::debug!(
            "round {} dealt {} hands, winners {:?}",
            self.rounds,
            hands.len(),
            winners
        );

        Ok(RoundResult { hands, winners })
    }
}
