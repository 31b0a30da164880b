//! Two-player game engine and round state machine.

use core::sync::atomic::{AtomicU8, Ordering};

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{JoinError, RoundError};
use crate::hand::Hand;
use crate::options::GameOptions;

mod cut;
mod deal;
mod show;
pub mod state;

pub use state::GameState;

/// Number of players at the table.
pub const PLAYERS: usize = 2;
/// Cards each player lays away to the crib.
pub const CRIB_DISCARDS: usize = 2;

/// A cribbage game between two players.
///
/// The game owns the deck, hands, crib, starter and scores, and moves through
/// [`GameState`] one phase at a time: deal, discard, play (where the starter
/// is cut) and show. Scoring is delegated to [`crate::score`].
pub struct Game {
    /// Deck for the current round.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Next player ID to assign.
    next_id: AtomicU8,
    /// Player IDs in seating order.
    pub players: Mutex<Vec<u8>>,
    /// Index into `players` of the current dealer.
    dealer_index: Mutex<usize>,
    /// Game score (`player_id` -> points).
    pub points: Mutex<HashMap<u8, u16>>,
    /// Player hands (`player_id` -> hand).
    pub hands: Mutex<HashMap<u8, Hand>>,
    /// Players who have laid away to the crib this round.
    discarded: Mutex<Vec<u8>>,
    /// The dealer's crib.
    pub crib: Mutex<Hand>,
    /// The starter, once cut.
    starter: Mutex<Option<Card>>,
    /// Points pegged for his heels this round.
    his_heels: Mutex<u8>,
    /// Player who reached the winning score.
    winner: Mutex<Option<u8>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForPlayers);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            deck: Mutex::new(deck),
            options,
            state: Mutex::new(GameState::WaitingForPlayers),
            next_id: AtomicU8::new(0),
            players: Mutex::new(Vec::new()),
            dealer_index: Mutex::new(0),
            points: Mutex::new(HashMap::new()),
            hands: Mutex::new(HashMap::new()),
            discarded: Mutex::new(Vec::new()),
            crib: Mutex::new(Hand::new()),
            starter: Mutex::new(None),
            his_heels: Mutex::new(0),
            winner: Mutex::new(None),
            rng: Mutex::new(rng),
        }
    }

    /// Joins the game. The first player to join deals the first round.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if two players have already joined or the first
    /// round has started.
    pub fn join(&self) -> Result<u8, JoinError> {
        if *self.state.lock() != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        let mut players = self.players.lock();
        if players.len() >= PLAYERS {
            return Err(JoinError::TableFull);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        players.push(id);
        drop(players);

        self.points.lock().insert(id, 0);
        self.hands.lock().insert(id, Hand::new());
        log::info!("player {id} joined");

        Ok(id)
    }

    /// Starts the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already started.
    pub fn start_round(&self) -> Result<(), RoundError> {
        let mut state = self.state.lock();
        if *state != GameState::WaitingForPlayers {
            return Err(RoundError::InvalidState);
        }

        *state = GameState::Deal;
        Ok(())
    }

    /// Starts the next round after the show: the deal passes to the other
    /// player and a fresh deck is shuffled.
    ///
    /// # Errors
    ///
    /// Returns an error unless the previous round is over.
    pub fn next_round(&self) -> Result<(), RoundError> {
        let mut state = self.state.lock();
        if *state != GameState::RoundOver {
            return Err(RoundError::InvalidState);
        }

        {
            let mut dealer_index = self.dealer_index.lock();
            *dealer_index = (*dealer_index + 1) % PLAYERS;
        }
        self.clear_round();
        *self.deck.lock() = Deck::shuffled(&mut *self.rng.lock());

        *state = GameState::Deal;
        drop(state);
        log::info!("new round, dealer is player {:?}", self.dealer());

        Ok(())
    }

    /// Clears hands, crib and starter.
    fn clear_round(&self) {
        for hand in self.hands.lock().values_mut() {
            hand.clear();
        }
        self.crib.lock().clear();
        self.discarded.lock().clear();
        *self.starter.lock() = None;
        *self.his_heels.lock() = 0;
    }

    /// Adds points to a player's score.
    ///
    /// Returns `true` if this ends the game. Points pegged after the game is
    /// over are ignored.
    fn peg(&self, player_id: u8, points: u8) -> bool {
        let mut winner = self.winner.lock();
        if winner.is_some() {
            return true;
        }

        let mut scores = self.points.lock();
        let Some(score) = scores.get_mut(&player_id) else {
            return false;
        };
        *score = score.saturating_add(u16::from(points));
        let total = *score;
        drop(scores);

        if total >= self.options.winning_score {
            *winner = Some(player_id);
            drop(winner);
            log::info!("player {player_id} wins with {total} points");
            return true;
        }

        false
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns the dealer for the current round.
    pub fn dealer(&self) -> Option<u8> {
        let index = *self.dealer_index.lock();
        self.players.lock().get(index).copied()
    }

    /// Returns the player who is not dealing this round.
    pub fn non_dealer(&self) -> Option<u8> {
        let index = (*self.dealer_index.lock() + 1) % PLAYERS;
        self.players.lock().get(index).copied()
    }

    /// Returns the game score for the specified player.
    pub fn get_points(&self, player_id: u8) -> Option<u16> {
        self.points.lock().get(&player_id).copied()
    }

    /// Returns a clone of the player's hand.
    pub fn get_hand(&self, player_id: u8) -> Option<Hand> {
        self.hands.lock().get(&player_id).cloned()
    }

    /// Returns a clone of the crib.
    pub fn get_crib(&self) -> Hand {
        self.crib.lock().clone()
    }

    /// Returns the starter, if it has been cut.
    pub fn starter(&self) -> Option<Card> {
        *self.starter.lock()
    }

    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<u8> {
        *self.winner.lock()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }
}
