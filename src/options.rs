//! Game configuration options.

use crate::score::HIS_HEELS_POINTS;

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_winning_score(61)
///     .with_his_heels_points(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Points needed to win.
    pub winning_score: u16,
    /// Points the dealer pegs when the starter is a jack.
    pub his_heels_points: u8,
    /// Cards dealt to each player.
    pub cards_dealt: u8,
    /// Whether a crib flush needs the starter to match as well.
    pub crib_flush_needs_starter: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            winning_score: 121,
            his_heels_points: HIS_HEELS_POINTS,
            cards_dealt: 6,
            crib_flush_needs_starter: true,
        }
    }
}

impl GameOptions {
    /// Sets the points needed to win.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(61);
    /// assert_eq!(options.winning_score, 61);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: u16) -> Self {
        self.winning_score = score;
        self
    }

    /// Sets the points awarded for his heels.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_his_heels_points(0);
    /// assert_eq!(options.his_heels_points, 0);
    /// ```
    #[must_use]
    pub const fn with_his_heels_points(mut self, points: u8) -> Self {
        self.his_heels_points = points;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// Two of them go to the crib, so [`Game::deal`](crate::Game::deal)
    /// rejects fewer than two.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_cards_dealt(5);
    /// assert_eq!(options.cards_dealt, 5);
    /// ```
    #[must_use]
    pub const fn with_cards_dealt(mut self, cards: u8) -> Self {
        self.cards_dealt = cards;
        self
    }

    /// Sets whether a crib flush needs the starter to match.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_crib_flush_needs_starter(false);
    /// assert!(!options.crib_flush_needs_starter);
    /// ```
    #[must_use]
    pub const fn with_crib_flush_needs_starter(mut self, needs_starter: bool) -> Self {
        self.crib_flush_needs_starter = needs_starter;
        self
    }
}
