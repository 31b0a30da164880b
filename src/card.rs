//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::{InvalidCardValueError, InvalidSuitError};

/// Card suit.
///
/// Suits carry the numeric ids 1 through 4 in the order spade, club, heart,
/// diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spade = 1,
    /// Clubs.
    Club = 2,
    /// Hearts.
    Heart = 3,
    /// Diamonds.
    Diamond = 4,
}

impl Suit {
    /// All suits in id order.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Club, Self::Heart, Self::Diamond];

    /// Creates a suit from its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSuitError::Id`] if `id` is not in `1..=4`.
    pub const fn from_id(id: u8) -> Result<Self, InvalidSuitError> {
        match id {
            1 => Ok(Self::Spade),
            2 => Ok(Self::Club),
            3 => Ok(Self::Heart),
            4 => Ok(Self::Diamond),
            _ => Err(InvalidSuitError::Id(id)),
        }
    }

    /// Returns the numeric id of the suit.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase singular name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "spade",
            Self::Club => "club",
            Self::Heart => "heart",
            Self::Diamond => "diamond",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = InvalidSuitError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl FromStr for Suit {
    type Err = InvalidSuitError;

    /// Parses a singular suit name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or(InvalidSuitError::Name)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack (11).
    Jack = 11,
    /// Queen (12).
    Queen = 12,
    /// King (13).
    King = 13,
}

impl Rank {
    /// All ranks from ace to king.
    pub const ALL: [Self; 13] = [
        Self::Ace,
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
    ];

    /// Creates a rank from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not in `1..=13`.
    pub const fn from_value(value: u8) -> Result<Self, InvalidCardValueError> {
        if matches!(value, 1..=13) {
            Ok(Self::ALL[value as usize - 1])
        } else {
            Err(InvalidCardValueError(value))
        }
    }

    /// Returns the numeric value (1 = ace, 13 = king).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidCardValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// A playing card.
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

    /// Creates a new card from a numeric rank.
    ///
    /// # Errors
    ///
    /// Returns an error if `rank` is not in `1..=13`.
    pub const fn try_new(suit: Suit, rank: u8) -> Result<Self, InvalidCardValueError> {
        match Rank::from_value(rank) {
            Ok(rank) => Ok(Self { suit, rank }),
            Err(err) => Err(err),
        }
    }

    /// Value used when counting fifteens: face cards count ten.
    #[must_use]
    pub const fn cribbage_value(&self) -> u8 {
        let value = self.rank.value();
        if value > 10 { 10 } else { value }
    }

    /// Returns whether the card is a jack.
    #[must_use]
    pub const fn is_jack(&self) -> bool {
        matches!(self.rank, Rank::Jack)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}s", self.rank.value(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
