//! Error types for game operations.

use thiserror::Error;

/// Errors that reject a play.
///
/// A rejected play never changes the game; the caller should ask the same
/// player for another card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has already ended.
    #[error("the game is over")]
    GameOver,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// The player holds the lead suit and must follow it.
    #[error("player must follow the lead suit")]
    MustFollowSuit,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// A hand does not hold exactly 13 cards.
    #[error("each hand must hold exactly 13 cards")]
    WrongHandSize,
    /// The residual deck does not hold exactly 6 cards.
    #[error("the residual deck must hold exactly 6 cards")]
    WrongDeckSize,
    /// A card appears twice, or a card outside the 33-card set was used.
    #[error("the deal does not partition the 33-card set")]
    DuplicateCard,
}
