//! A standard 52-card deck with seeded shuffling.

extern crate alloc;

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::{HAND_SIZE, Hand};

/// A deck of playing cards.
///
/// A new deck holds the 52 cards in order from the top: hearts, diamonds,
/// clubs, spades, each from two up to ace, so the first card dealt is 2♥.
/// The top of the deck is stored last.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new ordered deck, the seed is used for shuffling.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: Self::ordered(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn ordered() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL.into_iter().rev() {
            for rank in Rank::ALL.into_iter().rev() {
                cards.push(Card::new(suit, rank));
            }
        }

        cards
    }

    /// Shuffles the remaining cards (Fisher-Yates).
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        log::debug!("shuffled deck with {} cards", self.cards.len());
    }

    /// Restores the full ordered deck.
    ///
    /// The random generator keeps its state, so a following shuffle gives a
    /// different order than the previous one.
    pub fn reset(&mut self) {
        self.cards = Self::ordered();
        log::debug!("deck reset");
    }

    /// Draws the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals a hand of five cards from the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than five cards are
    /// left. The deck is not modified in that case.
    pub fn deal(&mut self) -> Result<Hand, DealError> {
        let remaining = self.cards.len();
        let Some(&cards) = self.cards.last_chunk::<HAND_SIZE>() else {
            return Err(DealError::NotEnoughCards { remaining });
        };

        self.cards.truncate(remaining - HAND_SIZE);
        Ok(Hand::from(cards))
    }

    /// Returns the cards left in the deck, the top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
