//! Error types for card construction and game operations.

use thiserror::Error;

/// Errors that can occur when constructing a [`Suit`](crate::Suit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidSuitError {
    /// Numeric suit id outside `1..=4`.
    #[error("suit id {0} is not in the valid range 1 to 4")]
    Id(u8),
    /// Suit name is not one of spade, club, heart or diamond.
    #[error("unrecognized suit name")]
    Name,
}

/// A card rank outside `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card value; {0} is not between 1 and 13")]
pub struct InvalidCardValueError(pub u8);

/// A draw was requested from an exhausted deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no more cards in the deck")]
pub struct EmptyDeckError;

/// A discard was requested from an empty hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards to discard")]
pub struct EmptyHandError;

/// Errors that can occur when joining a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Two players are already seated.
    #[error("table is full")]
    TableFull,
    /// Players can only join before the first round.
    #[error("invalid game state for joining")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Fewer than two players have joined.
    #[error("two players are required")]
    NotEnoughPlayers,
    /// Fewer cards dealt than the crib needs.
    #[error("too few cards dealt to lay away to the crib")]
    TooFewCards,
    /// The deck ran out while dealing.
    #[error("not enough cards in the deck")]
    EmptyDeck,
}

/// Errors that can occur when discarding to the crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// Invalid game state for discarding.
    #[error("invalid game state for discarding")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Player already gave their cards to the crib this round.
    #[error("player already discarded")]
    AlreadyDiscarded,
    /// Wrong number of cards offered to the crib.
    #[error("exactly two cards must be discarded")]
    WrongCount,
    /// The card is not held by the player.
    #[error("card not in hand")]
    CardNotInHand,
    /// The hand has no cards left.
    #[error("no cards to discard")]
    EmptyHand,
}

impl From<EmptyHandError> for DiscardError {
    fn from(_: EmptyHandError) -> Self {
        Self::EmptyHand
    }
}

/// Errors that can occur when cutting for the starter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CutError {
    /// Invalid game state for cutting.
    #[error("invalid game state for cutting")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<EmptyDeckError> for CutError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}

impl From<EmptyDeckError> for DealError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}

/// Errors that can occur when finishing the play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Play can only finish after the starter is cut.
    #[error("invalid game state for finishing play")]
    InvalidState,
}

/// Errors that can occur during the show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowError {
    /// Invalid game state for the show.
    #[error("invalid game state for the show")]
    InvalidState,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for starting a round.
    #[error("invalid game state for starting a round")]
    InvalidState,
}
