//! Game state types.

/// Phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for two players to join.
    WaitingForPlayers,
    /// A fresh deck is ready to be dealt.
    Deal,
    /// Players are laying away cards to the crib.
    Discard,
    /// The starter is cut and the cards are played out.
    Play,
    /// Hands and crib are ready to be counted.
    Show,
    /// The show is done; the next round can start.
    RoundOver,
    /// A player reached the winning score.
    GameOver,
}
