use crate::card::Card;
use crate::error::{CutError, PlayError};
use crate::score;

use super::{Game, GameState};

impl Game {
    /// Cuts the deck for the starter.
    ///
    /// If the starter is a jack the dealer pegs his heels, which can end the
    /// game on the spot.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in play state, the starter was
    /// already cut, or the deck is empty.
    pub fn cut(&self) -> Result<Card, CutError> {
        let mut state = self.state.lock();
        if *state != GameState::Play {
            return Err(CutError::InvalidState);
        }

        let mut starter = self.starter.lock();
        if starter.is_some() {
            return Err(CutError::InvalidState);
        }

        let card = self.deck.lock().draw()?;
        *starter = Some(card);
        drop(starter);
        log::info!("starter is {card}");

        let heels = if score::his_heels(card) > 0 {
            self.options.his_heels_points
        } else {
            0
        };

        if heels > 0 {
            *self.his_heels.lock() = heels;
            if let Some(dealer) = self.dealer() {
                log::info!("player {dealer} pegs {heels} for his heels");
                if self.peg(dealer, heels) {
                    *state = GameState::GameOver;
                }
            }
        }

        Ok(card)
    }

    /// Ends the play and moves on to the show.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in play state or the starter has
    /// not been cut.
    pub fn finish_play(&self) -> Result<(), PlayError> {
        let mut state = self.state.lock();
        if *state != GameState::Play || self.starter.lock().is_none() {
            return Err(PlayError::InvalidState);
        }

        *state = GameState::Show;
        Ok(())
    }
}
