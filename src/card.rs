//! Card types, formatting and parsing.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Parses a suit from its letter (`h`, `d`, `c`, `s`, any case) or symbol.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'h' | 'H' | '♥' => Some(Self::Hearts),
            'd' | 'D' | '♦' => Some(Self::Diamonds),
            'c' | 'C' | '♣' => Some(Self::Clubs),
            's' | 'S' | '♠' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ordered from two up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the numeric value of the rank (2..=14, ace high).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given numeric value (2..=14).
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            2..=14 => Some(Self::ALL[value as usize - 2]),
            _ => None,
        }
    }

    /// Returns the single-character symbol of the rank.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Parses a rank from its symbol (case-insensitive).
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '2'..='9' => Self::from_value(c as u8 - b'0'),
            't' | 'T' => Some(Self::Ten),
            'j' | 'J' => Some(Self::Jack),
            'q' | 'Q' => Some(Self::Queen),
            'k' | 'K' => Some(Self::King),
            'a' | 'A' => Some(Self::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// Two cards are equal when both suit and rank match. Card strength only
/// depends on the rank, see [`Card::cmp_rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the numeric rank value (2..=14).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Compares two cards by rank only, ignoring the suit.
    #[must_use]
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::InvalidLength);
        };

        let rank = Rank::from_char(r).ok_or(ParseCardError::InvalidRank(r))?;
        let suit = Suit::from_char(s).ok_or(ParseCardError::InvalidSuit(s))?;

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
