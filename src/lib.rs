//! A cribbage scoring engine with optional `no_std` support.
//!
//! The [`score`] module counts a hand against the starter card: fifteens,
//! pairs, runs, flush and his nobs. A [`Game`] type runs two-player rounds
//! on top of it, from the deal through the show.
//!
//! # Example
//!
//! ```
//! use cribrs::{Card, Hand, Rank, Suit, score};
//!
//! let mut hand = Hand::new();
//! hand.pickup_all([
//!     Card::new(Suit::Spade, Rank::Five),
//!     Card::new(Suit::Club, Rank::Five),
//!     Card::new(Suit::Heart, Rank::Ten),
//! ]);
//! let starter = Card::new(Suit::Diamond, Rank::Nine);
//!
//! assert_eq!(score::total(&hand, starter), 6);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod score;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    CutError, DealError, DiscardError, EmptyDeckError, EmptyHandError, InvalidCardValueError,
    InvalidSuitError, JoinError, PlayError, RoundError, ShowError,
};
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{PlayerShow, ShowResult};
pub use score::{ScoreBreakdown, total};
