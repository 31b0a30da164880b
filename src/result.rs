//! Show result types.

use crate::card::Card;
use crate::hand::Hand;
use crate::score::ScoreBreakdown;

/// A player's counted hand during the show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerShow {
    /// The player ID.
    pub player_id: u8,
    /// The hand that was counted.
    pub hand: Hand,
    /// Points in each category.
    pub score: ScoreBreakdown,
    /// Whether the points were pegged. False when the game ended earlier in
    /// the show.
    pub counted: bool,
    /// The player's game score after the show.
    pub points: u16,
}

/// Result of the show at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowResult {
    /// The starter card.
    pub starter: Card,
    /// Points the dealer pegged for his heels at the cut.
    pub his_heels: u8,
    /// The non-dealer's hand, counted first.
    pub non_dealer: PlayerShow,
    /// The dealer's hand.
    pub dealer: PlayerShow,
    /// The crib, counted for the dealer.
    pub crib: ScoreBreakdown,
    /// Whether the crib was pegged.
    pub crib_counted: bool,
    /// The player who reached the winning score, if any.
    pub winner: Option<u8>,
}
