//! Hand container.

extern crate alloc;

use alloc::vec::Vec;
use core::{fmt, slice};

use crate::card::{Card, Suit};
use crate::error::{DiscardError, EmptyHandError};

/// An ordered collection of cards held by a player or set aside as the crib.
///
/// The hand does not enforce uniqueness; a deck never yields the same card
/// twice, so well-formed play never produces duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in pickup order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the end of the hand.
    pub fn pickup(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Appends every card, preserving their order.
    pub fn pickup_all<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Removes the first occurrence of `card` from the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is empty or does not hold the card.
    pub fn discard(&mut self, card: Card) -> Result<Card, DiscardError> {
        if self.cards.is_empty() {
            return Err(EmptyHandError.into());
        }

        let index = self
            .cards
            .iter()
            .position(|held| *held == card)
            .ok_or(DiscardError::CardNotInHand)?;

        Ok(self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards in pickup order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether any card in the hand has the given suit.
    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit == suit)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.pickup_all(iter);
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
