//! Five-card poker hands.
//!
//! A [`Hand`] classifies itself into one of the ten [`HandCategory`] values and
//! produces a [`Strength`] key so that two hands can be compared.
//!
//! The classification predicates follow the usual poker definitions and can
//! overlap: a royal flush is also a straight flush, a straight and a flush.
//! [`Hand::category`] resolves the overlap by precedence and is the only place
//! where exactly one answer is guaranteed.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::card::Card;
use crate::category::{HandCategory, Strength};
use crate::error::HandError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

const WHEEL: [u8; HAND_SIZE] = [2, 3, 4, 5, 14];
const WHEEL_KEY: [u8; HAND_SIZE] = [5, 4, 3, 2, 1];
const BROADWAY: [u8; HAND_SIZE] = [10, 11, 12, 13, 14];

/// Rank-frequency partition of a hand.
///
/// Entries are `(count, value)` sorted by count, then value, both descending,
/// so the entry order is also the tie-break order for every rank pattern.
struct Groups {
    entries: [(u8, u8); HAND_SIZE],
    len: usize,
}

impl Groups {
    fn of(cards: &[Card; HAND_SIZE]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.value() as usize] += 1;
        }

        let mut entries = [(0, 0); HAND_SIZE];
        let mut len = 0;
        for (value, &count) in counts.iter().enumerate() {
            if count > 0 {
                entries[len] = (count, value as u8);
                len += 1;
            }
        }

        entries[..len].sort_unstable_by(|a, b| b.cmp(a));
        Self { entries, len }
    }

    fn largest(&self) -> u8 {
        self.entries[0].0
    }

    fn count_of(&self, size: u8) -> usize {
        self.entries[..self.len]
            .iter()
            .filter(|&&(count, _)| count == size)
            .count()
    }

    fn key(&self) -> [u8; HAND_SIZE] {
        let mut key = [0; HAND_SIZE];
        for (slot, &(_, value)) in key.iter_mut().zip(&self.entries[..self.len]) {
            *slot = value;
        }
        key
    }
}

/// An immutable hand of exactly five cards.
///
/// Cards are stored sorted by rank then suit, so the order used to build a
/// hand never affects its classification, ranking or equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from a slice of cards.
    ///
    /// Duplicate cards are accepted, see [`Hand::new_distinct`] for a checked
    /// variant.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidHandSize`] if `cards` does not hold exactly
    /// five cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidHandSize(cards.len()))?;

        let hand = Self::from(cards);
        log::trace!("new hand {hand}");
        Ok(hand)
    }

    /// Creates a hand from a slice of cards, rejecting repeated cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidHandSize`] if `cards` does not hold exactly
    /// five cards, or [`HandError::DuplicateCard`] if a card appears twice.
    pub fn new_distinct(cards: &[Card]) -> Result<Self, HandError> {
        let hand = Self::new(cards)?;

        // Sorted storage puts equal cards next to each other.
        if let Some(pair) = hand.cards.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(HandError::DuplicateCard(pair[0]));
        }

        Ok(hand)
    }

    /// Returns the cards in the hand, lowest rank first.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Numeric rank values in ascending order.
    fn values(&self) -> [u8; HAND_SIZE] {
        self.cards.map(|card| card.value())
    }

    fn groups(&self) -> Groups {
        Groups::of(&self.cards)
    }

    fn is_wheel(&self) -> bool {
        self.values() == WHEEL
    }

    /// Returns whether all five cards share one suit.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|card| card.suit == suit)
    }

    /// Returns whether the five ranks are consecutive.
    ///
    /// The ace plays low in the wheel (A-2-3-4-5). A run of five consecutive
    /// values can't contain a repeated rank, so paired hands are never
    /// straights.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        let values = self.values();
        values.windows(2).all(|pair| pair[1] == pair[0] + 1) || values == WHEEL
    }

    /// Returns whether the hand is both a straight and a flush.
    #[must_use]
    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    /// Returns whether the hand is a ten to ace straight flush.
    #[must_use]
    pub fn is_royal_flush(&self) -> bool {
        self.is_straight_flush() && self.values() == BROADWAY
    }

    /// Returns whether four cards share a rank.
    #[must_use]
    pub fn is_four_of_a_kind(&self) -> bool {
        self.groups().largest() == 4
    }

    /// Returns whether the hand holds three cards of one rank and two of another.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        let groups = self.groups();
        groups.len == 2 && groups.largest() == 3
    }

    /// Returns whether three cards share a rank and the other two differ.
    #[must_use]
    pub fn is_three_of_a_kind(&self) -> bool {
        let groups = self.groups();
        groups.largest() == 3 && groups.count_of(2) == 0
    }

    /// Returns whether the hand holds two pairs.
    #[must_use]
    pub fn is_two_pair(&self) -> bool {
        self.groups().count_of(2) == 2
    }

    /// Returns whether the hand holds exactly one pair and three odd cards.
    #[must_use]
    pub fn is_one_pair(&self) -> bool {
        let groups = self.groups();
        groups.len == 4 && groups.largest() == 2
    }

    /// Returns whether no other predicate holds.
    #[must_use]
    pub fn is_high_card(&self) -> bool {
        !(self.is_royal_flush()
            || self.is_straight_flush()
            || self.is_four_of_a_kind()
            || self.is_full_house()
            || self.is_flush()
            || self.is_straight()
            || self.is_three_of_a_kind()
            || self.is_two_pair()
            || self.is_one_pair())
    }

    /// Returns the category of the hand, strongest matching first.
    #[must_use]
    pub fn category(&self) -> HandCategory {
        if self.is_royal_flush() {
            HandCategory::RoyalFlush
        } else if self.is_straight_flush() {
            HandCategory::StraightFlush
        } else if self.is_four_of_a_kind() {
            HandCategory::FourOfAKind
        } else if self.is_full_house() {
            HandCategory::FullHouse
        } else if self.is_flush() {
            HandCategory::Flush
        } else if self.is_straight() {
            HandCategory::Straight
        } else if self.is_three_of_a_kind() {
            HandCategory::ThreeOfAKind
        } else if self.is_two_pair() {
            HandCategory::TwoPair
        } else if self.is_one_pair() {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        }
    }

    /// Returns whether the hand belongs to `category`.
    ///
    /// Unlike the `is_*` predicates, exactly one category matches a hand.
    #[must_use]
    pub fn matches(&self, category: HandCategory) -> bool {
        self.category() == category
    }

    /// Returns the category level, 1 (high card) to 10 (royal flush).
    #[must_use]
    pub fn score(&self) -> u8 {
        self.category().level()
    }

    /// Returns the ranking key of the hand.
    #[must_use]
    pub fn strength(&self) -> Strength {
        let category = self.category();
        let ranks = match category {
            HandCategory::Straight | HandCategory::StraightFlush if self.is_wheel() => WHEEL_KEY,
            _ => self.groups().key(),
        };

        Strength::new(category, ranks)
    }

    /// Compares two hands by poker strength.
    ///
    /// Hands with the same category and tie-break ranks compare equal whatever
    /// their suits, so this is a total preorder: `Equal` does not imply
    /// `self == other`.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }

    /// Returns the category label followed by the cards.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_unstable_by_key(|card| (card.rank, card.suit));
        Self { cards }
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(&cards)
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses whitespace separated cards, e.g. `"Ah Kh Qh Jh Th"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.category())?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
