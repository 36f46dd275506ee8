//! Records produced by plays, tricks and cons.

use alloc::vec::Vec;

use crate::card::{Card, Effect, Suit};
use crate::player::Player;
use crate::scoring::Title;

/// A card on the table together with the player who played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayedCard {
    /// Who played the card.
    pub player: Player,
    /// The card.
    pub card: Card,
}

/// An effect that has resolved during the current trick and not yet been
/// consumed by trick completion. A responding Guard cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingEffect {
    /// Owner of the card that produced the effect.
    pub player: Player,
    /// The effect.
    pub effect: Effect,
}

/// One pair of cards swapped by a Lunatic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exchange {
    /// Card moved from the Lunatic's owner to the opponent.
    pub given: Card,
    /// Card moved from the opponent to the Lunatic's owner.
    pub received: Card,
}

/// What resolving a played card's effect did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The card has no effect.
    None,
    /// Swan; checked again at trick completion.
    Swan,
    /// Fox. `new_trump` is `None` when the hand was empty.
    Fox {
        /// Card that became the trump indicator.
        new_trump: Option<Card>,
    },
    /// Woodcutter.
    Woodcutter {
        /// Card the opponent lost, if they held any.
        discarded: Option<Card>,
        /// Card the opponent drew from the residual deck in its place.
        replacement: Option<Card>,
    },
    /// Guard. `blocked` holds the cancelled effect when played in response.
    Guard {
        /// The lead's effect that was cancelled.
        blocked: Option<PendingEffect>,
    },
    /// Witch; checked again at trick completion.
    Witch,
    /// Lunatic. Only a leading Lunatic exchanges cards.
    Lunatic {
        /// Pairs swapped, in order.
        exchanges: Vec<Exchange>,
    },
}

/// Result of a completed trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResult {
    /// Trick number within the con (1..=13).
    pub number: u8,
    /// The lead card.
    pub lead: PlayedCard,
    /// The response card.
    pub response: PlayedCard,
    /// The trump suit the trick was decided under.
    pub trump: Suit,
    /// Who took the trick.
    pub winner: Player,
    /// Who leads the next trick.
    pub next_leader: Player,
    /// What the lead card's effect did.
    pub lead_effect: Resolution,
    /// What the response card's effect did.
    pub response_effect: Resolution,
    /// Effects still pending when the trick closed, lead first.
    pub applied_effects: Vec<PendingEffect>,
}

/// Result of a completed con.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConResult {
    /// Con number within the game, starting at 1.
    pub number: u32,
    /// Dealer of the con.
    pub dealer: Player,
    /// Tricks taken, indexed by [`Player::index`].
    pub tricks: [u8; 2],
    /// Points awarded, indexed by [`Player::index`].
    pub points: [u32; 2],
    /// Cumulative scores after the con, indexed by [`Player::index`].
    pub scores: [u32; 2],
}

impl ConResult {
    /// Returns the tricks `player` took.
    #[must_use]
    pub const fn tricks(&self, player: Player) -> u8 {
        self.tricks[player.index()]
    }

    /// Returns the points `player` earned.
    #[must_use]
    pub const fn points(&self, player: Player) -> u32 {
        self.points[player.index()]
    }

    /// Returns the title `player` earned.
    #[must_use]
    pub const fn title(&self, player: Player) -> Title {
        Title::for_tricks(self.tricks[player.index()])
    }

    /// Returns the cumulative score of `player` after the con.
    #[must_use]
    pub const fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }
}

/// What an accepted play led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was led; the opponent must respond.
    Led(Resolution),
    /// The response completed a trick.
    TrickComplete(TrickResult),
    /// The response completed the 13th trick and a new con was dealt.
    ConComplete {
        /// The final trick.
        trick: TrickResult,
        /// Scoring of the finished con.
        con: ConResult,
    },
    /// The response completed the con and a player reached the target score.
    GameOver {
        /// The final trick.
        trick: TrickResult,
        /// Scoring of the finished con.
        con: ConResult,
        /// Winner, or `None` on equal scores.
        winner: Option<Player>,
    },
}

impl PlayOutcome {
    /// Returns the completed trick, if this play completed one.
    #[must_use]
    pub const fn trick(&self) -> Option<&TrickResult> {
        match self {
            Self::Led(_) => None,
            Self::TrickComplete(trick)
            | Self::ConComplete { trick, .. }
            | Self::GameOver { trick, .. } => Some(trick),
        }
    }
}
