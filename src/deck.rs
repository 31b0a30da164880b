//! A single 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// A deck of cards. Cards are drawn from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards; the top of the deck is the end of the vector.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck, spades through diamonds, ace through king.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck shuffled with the given random number generator.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck shuffled deterministically from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::shuffled(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a deck that deals `draws` in order.
    #[must_use]
    pub fn stacked<I>(draws: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = draws.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is exhausted.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the remaining cards, top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
