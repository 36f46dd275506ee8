use tracing::debug;

use crate::card::{Card, Effect, Suit};
use crate::player::Player;
use crate::result::{PlayedCard, Resolution, TrickResult};

use super::state::{GameState, Phase};

/// Decides who takes a trick.
///
/// A lone Witch wins outright. Two Witches cancel out and the trick is decided
/// like any other: a trump beats a non-trump, two trumps or two cards of the
/// same suit compare by rank, and an off-suit non-trump response loses to the
/// lead.
///
/// ```
/// use foxglade::{Card, PlayedCard, Player, Suit, trick_winner};
///
/// let lead = PlayedCard { player: Player::P1, card: Card::new(Suit::Key, 10) };
/// let response = PlayedCard { player: Player::P2, card: Card::new(Suit::Moon, 2) };
/// assert_eq!(trick_winner(lead, response, Suit::Moon), Player::P2);
/// assert_eq!(trick_winner(lead, response, Suit::Bell), Player::P1);
/// ```
#[must_use]
pub fn trick_winner(lead: PlayedCard, response: PlayedCard, trump: Suit) -> Player {
    match (lead.card.effect(), response.card.effect()) {
        (Effect::Witch, Effect::Witch) => {}
        (Effect::Witch, _) => return lead.player,
        (_, Effect::Witch) => return response.player,
        _ => {}
    }

    if beats(response.card, lead.card, trump) {
        response.player
    } else {
        lead.player
    }
}

/// Returns `true` if `response` takes the trick from `lead`.
fn beats(response: Card, lead: Card, trump: Suit) -> bool {
    match (lead.suit == trump, response.suit == trump) {
        (true, true) => response.rank > lead.rank,
        (true, false) => false,
        (false, true) => true,
        (false, false) => lead.suit == response.suit && response.rank > lead.rank,
    }
}

/// Decides who leads after a trick: normally the winner, but the loser when
/// both cards are Swans.
#[must_use]
pub fn next_leader(winner: Player, lead: PlayedCard, response: PlayedCard) -> Player {
    if lead.card.effect() == Effect::Swan && response.card.effect() == Effect::Swan {
        winner.opponent()
    } else {
        winner
    }
}

impl GameState {
    /// Closes the trick on the table: credits the winner, records the result,
    /// clears the table and hands the lead to the next leader.
    pub(crate) fn complete_trick(
        &mut self,
        lead: PlayedCard,
        response: PlayedCard,
        response_effect: Resolution,
    ) -> TrickResult {
        let trump = self.trump_suit();
        let winner = trick_winner(lead, response, trump);
        let next = next_leader(winner, lead, response);

        self.tricks_won[winner.index()] += 1;
        self.current_round += 1;

        let trick = TrickResult {
            number: self.current_round,
            lead,
            response,
            trump,
            winner,
            next_leader: next,
            lead_effect: self.lead_effect.take().unwrap_or(Resolution::None),
            response_effect,
            applied_effects: core::mem::take(&mut self.pending_effects),
        };
        self.trick_history.push(trick.clone());

        self.lead = None;
        self.response = None;
        self.witch_active = false;
        self.last_trick_winner = Some(winner);
        self.current_player = next;
        self.phase = Phase::AwaitingLead;

        debug!(
            number = trick.number,
            lead = %lead.card,
            response = %response.card,
            winner = %winner,
            next_leader = %next,
            "trick complete"
        );
        trick
    }
}
