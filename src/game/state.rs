//! Game state types.

use core::fmt;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, HAND_SIZE, Suit, TRICKS_PER_CON};
use crate::hand::Hand;
use crate::player::Player;
use crate::result::{ConResult, PendingEffect, PlayedCard, Resolution, TrickResult};

use super::deal::Deal;

/// Which action the game expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The current player must lead a card.
    AwaitingLead,
    /// The current player must respond to the lead card.
    AwaitingResponse,
    /// A player reached the target score; no further plays are accepted.
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitingLead => "awaiting lead",
            Self::AwaitingResponse => "awaiting response",
            Self::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Full state of a game.
///
/// The engine owns the only mutable copy. [`Game::state`](super::Game::state)
/// hands out clones, so a snapshot never changes under its holder and cannot
/// be used to alter the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Residual deck; the last card is the top.
    pub(crate) deck: Vec<Card>,
    /// Hands indexed by [`Player::index`].
    pub(crate) hands: [Hand; 2],
    /// Trump card revealed by the deal.
    pub(crate) trump_card: Card,
    /// Trump indicator chosen by the most recent Fox this con.
    pub(crate) fox_trump: Option<Card>,
    pub(crate) dealer: Player,
    /// Player whose lead or response is expected.
    pub(crate) current_player: Player,
    pub(crate) phase: Phase,
    pub(crate) lead: Option<PlayedCard>,
    pub(crate) response: Option<PlayedCard>,
    /// Resolution of the lead card, kept until the trick closes.
    pub(crate) lead_effect: Option<Resolution>,
    /// Effect tokens of the trick in play order; at most one per card.
    pub(crate) pending_effects: Vec<PendingEffect>,
    pub(crate) witch_active: bool,
    /// Card lost to the last Woodcutter; cleared when the next trick is led.
    pub(crate) discarded: Option<Card>,
    pub(crate) tricks_won: [u8; 2],
    pub(crate) scores: [u32; 2],
    /// Completed tricks in the current con.
    pub(crate) current_round: u8,
    pub(crate) con_number: u32,
    pub(crate) last_trick_winner: Option<Player>,
    pub(crate) trick_history: Vec<TrickResult>,
    pub(crate) con_history: Vec<ConResult>,
}

impl GameState {
    /// Creates the state of a fresh game whose first con uses `deal`.
    pub(crate) fn new(deal: Deal, dealer: Player) -> Self {
        let mut state = Self {
            deck: Vec::new(),
            hands: [Hand::default(), Hand::default()],
            trump_card: deal.trump,
            fox_trump: None,
            dealer,
            current_player: dealer.opponent(),
            phase: Phase::AwaitingLead,
            lead: None,
            response: None,
            lead_effect: None,
            pending_effects: Vec::new(),
            witch_active: false,
            discarded: None,
            tricks_won: [0; 2],
            scores: [0; 2],
            current_round: 0,
            con_number: 0,
            last_trick_winner: None,
            trick_history: Vec::new(),
            con_history: Vec::new(),
        };
        state.begin_con(deal, dealer);
        state
    }

    /// Returns the residual deck; the last card is the top.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the number of cards left in the residual deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Returns the hand of `player`.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// Returns the trump indicator in force: the card chosen by the latest
    /// Fox this con, or else the card revealed by the deal.
    #[must_use]
    pub const fn trump_card(&self) -> Card {
        match self.fox_trump {
            Some(card) => card,
            None => self.trump_card,
        }
    }

    /// Returns the trump card revealed by the deal, ignoring any Fox.
    #[must_use]
    pub const fn dealt_trump(&self) -> Card {
        self.trump_card
    }

    /// Returns the trump indicator set by a Fox this con, if any.
    #[must_use]
    pub const fn fox_trump(&self) -> Option<Card> {
        self.fox_trump
    }

    /// Returns the trump suit in force, taking a Fox override into account.
    #[must_use]
    pub const fn trump_suit(&self) -> Suit {
        self.trump_card().suit
    }

    /// Returns the dealer of the current con.
    #[must_use]
    pub const fn dealer(&self) -> Player {
        self.dealer
    }

    /// Returns the player whose action is expected next.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` while a lead card waits for its response.
    #[must_use]
    pub const fn is_waiting_for_response(&self) -> bool {
        matches!(self.phase, Phase::AwaitingResponse)
    }

    /// Returns `true` once the game has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    /// Returns the lead card on the table and who played it.
    #[must_use]
    pub const fn lead(&self) -> Option<PlayedCard> {
        self.lead
    }

    /// Returns the response card on the table and who played it.
    ///
    /// Tricks close in the same call that plays the response, so this is only
    /// ever observed as `None` from outside the engine.
    #[must_use]
    pub const fn response(&self) -> Option<PlayedCard> {
        self.response
    }

    /// Returns the effects that have resolved this trick and are still
    /// pending, lead first.
    #[must_use]
    pub fn pending_effects(&self) -> &[PendingEffect] {
        &self.pending_effects
    }

    /// Returns `true` if an effect has resolved this trick and has not been
    /// cancelled by a Guard.
    #[must_use]
    pub fn is_effect_applied_this_trick(&self) -> bool {
        !self.pending_effects.is_empty()
    }

    /// Returns `true` if a Witch is on the table.
    #[must_use]
    pub const fn is_witch_active(&self) -> bool {
        self.witch_active
    }

    /// Returns the card most recently discarded by a Woodcutter.
    #[must_use]
    pub const fn discarded_card(&self) -> Option<Card> {
        self.discarded
    }

    /// Returns the tricks `player` has taken this con.
    #[must_use]
    pub const fn tricks_won(&self, player: Player) -> u8 {
        self.tricks_won[player.index()]
    }

    /// Returns the cumulative score of `player`.
    #[must_use]
    pub const fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Returns the number of tricks completed this con.
    #[must_use]
    pub const fn current_round(&self) -> u8 {
        self.current_round
    }

    /// Returns the number of the current con, starting at 1.
    #[must_use]
    pub const fn con_number(&self) -> u32 {
        self.con_number
    }

    /// Returns the winner of the most recent trick this con.
    #[must_use]
    pub const fn last_trick_winner(&self) -> Option<Player> {
        self.last_trick_winner
    }

    /// Returns the tricks completed this con, in order.
    #[must_use]
    pub fn trick_history(&self) -> &[TrickResult] {
        &self.trick_history
    }

    /// Returns the results of every completed con, in order.
    #[must_use]
    pub fn con_history(&self) -> &[ConResult] {
        &self.con_history
    }

    /// Returns the winner of a finished game.
    ///
    /// Returns `None` while the game is running or when the final scores are
    /// equal.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        if !self.is_game_over() {
            return None;
        }
        let [p1, p2] = self.scores;
        if p1 > p2 {
            Some(Player::P1)
        } else if p2 > p1 {
            Some(Player::P2)
        } else {
            None
        }
    }

    /// Asserts the structural invariants in debug builds.
    pub(crate) fn debug_check_invariants(&self) {
        debug_assert!(self.current_round <= TRICKS_PER_CON);
        debug_assert_eq!(
            u16::from(self.tricks_won[0]) + u16::from(self.tricks_won[1]),
            u16::from(self.current_round),
            "tricks won must add up to tricks played"
        );
        debug_assert!(self.hands.iter().all(|hand| hand.len() <= HAND_SIZE));
        debug_assert_eq!(self.lead.is_some(), self.is_waiting_for_response());
        debug_assert!(self.response.is_none());
        debug_assert!(self.pending_effects.len() <= 2);
        debug_assert!(self.cards_are_unique(), "a card is held twice");
    }

    fn cards_are_unique(&self) -> bool {
        let mut seen = [false; DECK_SIZE];
        let table = self.lead.map(|played| played.card);
        self.hands
            .iter()
            .flat_map(|hand| hand.cards().iter())
            .chain(self.deck.iter())
            .chain(table.iter())
            .all(|card| {
                card.ordinal()
                    .is_some_and(|index| !core::mem::replace(&mut seen[index], true))
            })
    }
}
