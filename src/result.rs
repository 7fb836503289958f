//! Round result types for showdown.

extern crate alloc;

use alloc::vec::Vec;

use crate::category::Strength;
use crate::hand::Hand;

/// Result of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The hands dealt this round, in dealing order.
    pub hands: Vec<Hand>,
    /// Indices into `hands` of the strongest hands. Holds more than one
    /// index when hands tie.
    pub winners: Vec<usize>,
}

impl RoundResult {
    /// Returns whether the round ended in a tie.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }

    /// Returns the winning strength, if any hand was dealt.
    #[must_use]
    pub fn winning_strength(&self) -> Option<Strength> {
        self.winners
            .first()
            .and_then(|&index| self.hands.get(index))
            .map(Hand::strength)
    }
}
