//! Hand categories and the ranking key used to compare hands.

use core::fmt;

/// One of the ten poker hand categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    /// No combination.
    HighCard = 1,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// Ten to ace of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// All categories, weakest first.
    pub const ALL: [Self; 10] = [
        Self::HighCard,
        Self::OnePair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];

    /// Returns the category level, 1 (high card) to 10 (royal flush).
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Returns the display label of the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ranking key of a hand.
///
/// Keys compare lexicographically: category first, then the rank values that
/// decide ties within the category, most significant first. Unused trailing
/// slots are zero, so keys of the same category always have the same shape.
///
/// Equal keys mean hands of equal strength; suits never break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strength {
    /// The hand category.
    pub category: HandCategory,
    /// Tie-break rank values. A wheel straight stores its ace as 1.
    pub ranks: [u8; 5],
}

impl Strength {
    /// Creates a new ranking key.
    #[must_use]
    pub const fn new(category: HandCategory, ranks: [u8; 5]) -> Self {
        Self { category, ranks }
    }

    /// Returns the tie-break values without the zero padding.
    #[must_use]
    pub fn kickers(&self) -> &[u8] {
        let len = self.ranks.iter().take_while(|&&r| r != 0).count();
        &self.ranks[..len]
    }
}
