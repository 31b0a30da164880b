use crate::card::Card;
use crate::error::ShowError;
use crate::result::{PlayerShow, ShowResult};
use crate::score;

use super::{Game, GameState};

impl Game {
    /// Counts one player's hand and pegs it unless the game is already won.
    fn count_hand(&self, player_id: u8, starter: Card) -> PlayerShow {
        let hand = self.get_hand(player_id).unwrap_or_default();
        let breakdown = score::score_hand(&hand, starter);

        let counted = self.winner().is_none();
        if counted {
            log::info!(
                "player {player_id} counts {} for [{hand}]",
                breakdown.total()
            );
            self.peg(player_id, breakdown.total());
        }

        PlayerShow {
            player_id,
            hand,
            score: breakdown,
            counted,
            points: self.get_points(player_id).unwrap_or(0),
        }
    }

    /// Counts the hands and the crib.
    ///
    /// The non-dealer counts first, then the dealer, then the dealer's crib.
    /// Counting stops as soon as a player reaches the winning score.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in show state.
    pub fn show(&self) -> Result<ShowResult, ShowError> {
        let mut state = self.state.lock();
        if *state != GameState::Show {
            return Err(ShowError::InvalidState);
        }

        let starter = self.starter().ok_or(ShowError::InvalidState)?;
        let (Some(dealer), Some(non_dealer)) = (self.dealer(), self.non_dealer()) else {
            return Err(ShowError::InvalidState);
        };

        let non_dealer_show = self.count_hand(non_dealer, starter);
        let mut dealer_show = self.count_hand(dealer, starter);

        let crib = self.get_crib();
        let crib_score = if self.options.crib_flush_needs_starter {
            score::score_crib(&crib, starter)
        } else {
            score::score_hand(&crib, starter)
        };

        let crib_counted = self.winner().is_none();
        if crib_counted {
            log::info!("player {dealer} counts {} for the crib", crib_score.total());
            self.peg(dealer, crib_score.total());
            dealer_show.points = self.get_points(dealer).unwrap_or(0);
        }

        let winner = self.winner();
        *state = if winner.is_some() {
            GameState::GameOver
        } else {
            GameState::RoundOver
        };
        drop(state);

        Ok(ShowResult {
            starter,
            his_heels: *self.his_heels.lock(),
            non_dealer: non_dealer_show,
            dealer: dealer_show,
            crib: crib_score,
            crib_counted,
            winner,
        })
    }
}
