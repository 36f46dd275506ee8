//! Player hand representation.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::{Card, Suit};

/// A player's hand.
///
/// Hands are read-only outside the engine; cards leave a hand only by being
/// played, discarded or exchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns `true` if the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns `true` if the hand holds at least one card of `suit`.
    #[must_use]
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit == suit)
    }

    /// Returns the cards that may be played against a lead of `lead_suit`.
    ///
    /// With no lead (the player is leading) every card is playable. Otherwise
    /// a player holding the lead suit must follow it.
    #[must_use]
    pub fn playable(&self, lead_suit: Option<Suit>) -> Vec<Card> {
        match lead_suit {
            Some(suit) if self.has_suit(suit) => self
                .cards
                .iter()
                .copied()
                .filter(|card| card.suit == suit)
                .collect(),
            _ => self.cards.clone(),
        }
    }

    /// Returns the cards ordered for presentation: trump suit first, then the
    /// remaining suits in deck order, ascending rank within a suit.
    #[must_use]
    pub fn sorted(&self, trump: Option<Suit>) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.sort_by(|a, b| {
            let a_trump = Some(a.suit) == trump;
            let b_trump = Some(b.suit) == trump;
            match (a_trump, b_trump) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => a.suit.cmp(&b.suit).then(a.rank.cmp(&b.rank)),
            }
        });
        cards
    }

    /// Removes `card` from the hand. Returns `false` if it was not held.
    pub(crate) fn remove(&mut self, card: Card) -> bool {
        if let Some(index) = self.cards.iter().position(|&held| held == card) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Removes and returns the card at `index`.
    pub(crate) fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Adds a card to the hand.
    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}
