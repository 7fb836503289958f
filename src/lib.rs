//! A five-card poker hand classifier with optional `no_std` support.
//!
//! The crate provides a [`Hand`] type that classifies five cards into one of
//! the ten poker categories and compares hands by poker strength, including
//! kickers and the ace-low straight. A [`Deck`] and a [`Table`] deal hands
//! and pick the winners of a round.
//!
//! # Example
//!
//! ```
//! use pkhand::{Card, Hand, HandCategory, Rank, Suit};
//!
//! let royal: Hand = "Ah Kh Qh Jh Th".parse().unwrap();
//! assert_eq!(royal.category(), HandCategory::RoyalFlush);
//!
//! let wheel = Hand::new(&[
//!     Card::new(Suit::Hearts, Rank::Ace),
//!     Card::new(Suit::Diamonds, Rank::Two),
//!     Card::new(Suit::Clubs, Rank::Three),
//!     Card::new(Suit::Spades, Rank::Four),
//!     Card::new(Suit::Hearts, Rank::Five),
//! ])
//! .unwrap();
//! assert!(wheel.is_straight());
//! assert!(royal.compare(&wheel).is_gt());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use category::{HandCategory, Strength};
pub use deck::Deck;
pub use error::{DealError, HandError, OptionsError, ParseCardError};
pub use hand::{HAND_SIZE, Hand};
pub use options::{MAX_HANDS, TableOptions};
pub use result::RoundResult;
pub use table::{Table, showdown};
