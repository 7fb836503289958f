//! Error types for hand construction, parsing and dealing.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not contain exactly five cards.
    #[error("a hand must contain exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card could not be parsed.
    #[error("invalid card: {0}")]
    Parse(#[from] ParseCardError),
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input is not exactly a rank followed by a suit.
    #[error("expected a rank followed by a suit")]
    InvalidLength,
    /// Unknown rank symbol.
    #[error("invalid rank '{0}'")]
    InvalidRank(char),
    /// Unknown suit symbol.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck ({remaining} left)")]
    NotEnoughCards {
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when validating table options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The number of hands per round cannot be dealt from one deck.
    #[error("cannot deal {0} hands from a single deck")]
    InvalidHandCount(u8),
}
