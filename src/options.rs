//! Game configuration options.

use crate::player::Player;

/// How the Fox picks the new trump card from its owner's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum FoxTrump {
    /// The first card remaining in the hand.
    #[default]
    FirstInHand,
    /// The first card whose suit differs from the current trump, falling back
    /// to the first card when every card is of the trump suit.
    FirstOffSuit,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use foxglade::{FoxTrump, GameOptions, Player};
///
/// let options = GameOptions::default()
///     .with_target_score(30)
///     .with_first_dealer(Some(Player::P1))
///     .with_fox_trump(FoxTrump::FirstOffSuit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cumulative score at which the game ends.
    pub target_score: u32,
    /// Dealer of the first con. `None` picks one at random.
    pub first_dealer: Option<Player>,
    /// Upper bound on the number of pairs a leading Lunatic exchanges.
    pub lunatic_exchanges: u8,
    /// Fox trump selection policy.
    pub fox_trump: FoxTrump,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            target_score: 21,
            first_dealer: None,
            lunatic_exchanges: 3,
            fox_trump: FoxTrump::FirstInHand,
        }
    }
}

impl GameOptions {
    /// Sets the score that ends the game.
    ///
    /// # Example
    ///
    /// ```
    /// use foxglade::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(12);
    /// assert_eq!(options.target_score, 12);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Sets the dealer of the first con.
    ///
    /// # Example
    ///
    /// ```
    /// use foxglade::{GameOptions, Player};
    ///
    /// let options = GameOptions::default().with_first_dealer(Some(Player::P2));
    /// assert_eq!(options.first_dealer, Some(Player::P2));
    /// ```
    #[must_use]
    pub const fn with_first_dealer(mut self, first_dealer: Option<Player>) -> Self {
        self.first_dealer = first_dealer;
        self
    }

    /// Sets the maximum number of pairs a Lunatic exchanges.
    ///
    /// # Example
    ///
    /// ```
    /// use foxglade::GameOptions;
    ///
    /// let options = GameOptions::default().with_lunatic_exchanges(1);
    /// assert_eq!(options.lunatic_exchanges, 1);
    /// ```
    #[must_use]
    pub const fn with_lunatic_exchanges(mut self, lunatic_exchanges: u8) -> Self {
        self.lunatic_exchanges = lunatic_exchanges;
        self
    }

    /// Sets the Fox trump selection policy.
    ///
    /// # Example
    ///
    /// ```
    /// use foxglade::{FoxTrump, GameOptions};
    ///
    /// let options = GameOptions::default().with_fox_trump(FoxTrump::FirstOffSuit);
    /// assert_eq!(options.fox_trump, FoxTrump::FirstOffSuit);
    /// ```
    #[must_use]
    pub const fn with_fox_trump(mut self, fox_trump: FoxTrump) -> Self {
        self.fox_trump = fox_trump;
        self
    }
}
