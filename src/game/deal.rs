use crate::card::Card;
use crate::error::{DealError, DiscardError};

use super::{CRIB_DISCARDS, Game, GameState, PLAYERS};

impl Game {
    /// Deals the hands, one card at a time, dealer first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in deal state, fewer than two
    /// players have joined, `cards_dealt` is below the crib discard count,
    /// or the deck cannot cover the deal.
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != GameState::Deal {
            return Err(DealError::InvalidState);
        }

        if self.player_count() < PLAYERS {
            return Err(DealError::NotEnoughPlayers);
        }

        let cards_per_player = usize::from(self.options.cards_dealt);
        if cards_per_player < CRIB_DISCARDS {
            return Err(DealError::TooFewCards);
        }

        if self.cards_remaining() < cards_per_player * PLAYERS {
            return Err(DealError::EmptyDeck);
        }

        let order = [self.dealer(), self.non_dealer()];
        let mut deck = self.deck.lock();
        let mut hands = self.hands.lock();

        for _ in 0..cards_per_player {
            for player_id in order.into_iter().flatten() {
                let card = deck.draw()?;
                if let Some(hand) = hands.get_mut(&player_id) {
                    hand.pickup(card);
                }
            }
        }
        drop(hands);
        drop(deck);

        *state = GameState::Discard;
        log::info!("dealt {cards_per_player} cards to each player");

        Ok(())
    }

    /// Lays away two of the player's cards to the crib.
    ///
    /// Once both players have discarded, the game moves to the play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in discard state, the player is
    /// unknown or has already discarded, `cards` does not hold exactly two
    /// cards, or a card is not in the player's hand. On error the hand and
    /// crib are unchanged.
    pub fn discard(&self, player_id: u8, cards: &[Card]) -> Result<(), DiscardError> {
        let mut state = self.state.lock();
        if *state != GameState::Discard {
            return Err(DiscardError::InvalidState);
        }

        if self.discarded.lock().contains(&player_id) {
            return Err(DiscardError::AlreadyDiscarded);
        }

        if cards.len() != CRIB_DISCARDS {
            return Err(DiscardError::WrongCount);
        }

        let mut hands = self.hands.lock();
        let hand = hands
            .get_mut(&player_id)
            .ok_or(DiscardError::PlayerNotFound)?;

        let mut kept = hand.clone();
        for &card in cards {
            kept.discard(card)?;
        }
        *hand = kept;
        drop(hands);

        self.crib.lock().pickup_all(cards.iter().copied());

        let mut discarded = self.discarded.lock();
        discarded.push(player_id);
        let all_discarded = discarded.len() == PLAYERS;
        drop(discarded);

        if all_discarded {
            *state = GameState::Play;
            log::info!("crib is complete");
        }

        Ok(())
    }
}
