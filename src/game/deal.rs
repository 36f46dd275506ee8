use alloc::vec::Vec;
use core::iter;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, full_deck};
use crate::error::DealError;
use crate::hand::Hand;
use crate::player::Player;

use super::state::{GameState, Phase};

/// Cards left in the residual deck once the trump is revealed.
pub const DECK_AFTER_DEAL: usize = DECK_SIZE - 2 * HAND_SIZE - 1;

/// The starting position of a con.
///
/// A valid deal partitions the 33-card set into two 13-card hands, a 6-card
/// residual deck and the revealed trump card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// Hands indexed by [`Player::index`].
    pub hands: [Vec<Card>; 2],
    /// Residual deck; the last card is the top.
    pub deck: Vec<Card>,
    /// The revealed trump card.
    pub trump: Card,
}

impl Deal {
    /// Shuffles the full set and partitions it by position: cards 0..26
    /// alternate between the hands, the rest form the deck and its top card
    /// becomes the trump.
    pub(crate) fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);

        let mut hands = [
            Vec::with_capacity(HAND_SIZE),
            Vec::with_capacity(HAND_SIZE),
        ];
        for pair in cards[..2 * HAND_SIZE].chunks_exact(2) {
            hands[0].push(pair[0]);
            hands[1].push(pair[1]);
        }

        Self {
            hands,
            deck: cards[2 * HAND_SIZE..DECK_SIZE - 1].to_vec(),
            trump: cards[DECK_SIZE - 1],
        }
    }

    /// Checks that the deal partitions the 33-card set.
    ///
    /// # Errors
    ///
    /// Returns an error if a hand does not hold 13 cards, the deck does not
    /// hold 6 cards, or a card is repeated or outside the set.
    ///
    /// # Example
    ///
    /// ```
    /// use foxglade::{Deal, DealError, Suit, Card};
    ///
    /// let deal = Deal {
    ///     hands: [Vec::new(), Vec::new()],
    ///     deck: Vec::new(),
    ///     trump: Card::new(Suit::Moon, 2),
    /// };
    /// assert_eq!(deal.validate(), Err(DealError::WrongHandSize));
    /// ```
    pub fn validate(&self) -> Result<(), DealError> {
        if self.hands.iter().any(|hand| hand.len() != HAND_SIZE) {
            return Err(DealError::WrongHandSize);
        }
        if self.deck.len() != DECK_AFTER_DEAL {
            return Err(DealError::WrongDeckSize);
        }

        let mut seen = [false; DECK_SIZE];
        for card in self
            .hands
            .iter()
            .flatten()
            .chain(self.deck.iter())
            .chain(iter::once(&self.trump))
        {
            let Some(index) = card.ordinal() else {
                return Err(DealError::DuplicateCard);
            };
            if core::mem::replace(&mut seen[index], true) {
                return Err(DealError::DuplicateCard);
            }
        }

        Ok(())
    }
}

impl GameState {
    /// Replaces hands, deck and trump with `deal` and resets every per-con
    /// counter and effect flag. Scores and con history are kept.
    pub(crate) fn begin_con(&mut self, deal: Deal, dealer: Player) {
        let [first, second] = deal.hands;
        self.hands = [Hand::new(first), Hand::new(second)];
        self.deck = deal.deck;
        self.trump_card = deal.trump;
        self.fox_trump = None;
        self.dealer = dealer;
        self.current_player = dealer.opponent();
        self.phase = Phase::AwaitingLead;
        self.lead = None;
        self.response = None;
        self.lead_effect = None;
        self.pending_effects.clear();
        self.witch_active = false;
        self.discarded = None;
        self.tricks_won = [0; 2];
        self.current_round = 0;
        self.con_number += 1;
        self.last_trick_winner = None;
        self.trick_history.clear();

        info!(
            con = self.con_number,
            dealer = %dealer,
            trump = %self.trump_card,
            "dealt new con"
        );
    }
}
