//! Card types and deck utilities.

use core::fmt;

use alloc::vec::Vec;

/// Card suit.
///
/// Suits carry no ordering of their own; only the trump suit matters when a
/// trick is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Key.
    Key,
    /// Bell.
    Bell,
    /// Moon.
    Moon,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 3] = [Self::Key, Self::Bell, Self::Moon];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Key => "Key",
            Self::Bell => "Bell",
            Self::Moon => "Moon",
        };
        f.write_str(name)
    }
}

/// Special rule attached to an odd-ranked card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Even ranks have no effect.
    None,
    /// Rank 1: when both cards of a trick are Swans, the loser leads next.
    Swan,
    /// Rank 3: replaces the trump with a card from the player's hand.
    Fox,
    /// Rank 5: the opponent discards a random card.
    Woodcutter,
    /// Rank 7: a responding Guard cancels the lead's pending effect.
    Guard,
    /// Rank 9: a lone Witch wins the trick.
    Witch,
    /// Rank 11: a leading Lunatic swaps random cards between the hands.
    Lunatic,
}

impl Effect {
    /// Returns the effect carried by a card of the given rank.
    #[must_use]
    pub const fn for_rank(rank: u8) -> Self {
        match rank {
            1 => Self::Swan,
            3 => Self::Fox,
            5 => Self::Woodcutter,
            7 => Self::Guard,
            9 => Self::Witch,
            11 => Self::Lunatic,
            _ => Self::None,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1..=11).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside
    /// `1..=MAX_RANK` are accepted but never appear in a dealt deck, so such a
    /// card can never be held or played.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the effect of this card, derived from its rank.
    #[must_use]
    pub const fn effect(&self) -> Effect {
        Effect::for_rank(self.rank)
    }

    /// Returns `true` for odd ranks, which carry an effect.
    #[must_use]
    pub const fn has_effect(&self) -> bool {
        self.rank % 2 == 1
    }

    /// Position of the card in [`full_deck`] order, or `None` for a rank
    /// outside the deck.
    pub(crate) const fn ordinal(&self) -> Option<usize> {
        if self.rank == 0 || self.rank > MAX_RANK {
            return None;
        }
        let suit = match self.suit {
            Suit::Key => 0,
            Suit::Bell => 1,
            Suit::Moon => 2,
        };
        Some(suit * MAX_RANK as usize + self.rank as usize - 1)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

/// Highest rank in a suit.
pub const MAX_RANK: u8 = 11;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 33;

/// Number of cards dealt to each player.
pub const HAND_SIZE: usize = 13;

/// Number of tricks in a con.
pub const TRICKS_PER_CON: u8 = 13;

/// Returns the full, unshuffled 33-card set in suit-then-rank order.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=MAX_RANK {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}
