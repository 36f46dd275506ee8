use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::card::{Card, Effect};
use crate::options::{FoxTrump, GameOptions};
use crate::player::Player;
use crate::result::{Exchange, PendingEffect, PlayedCard, Resolution};

use super::state::GameState;

impl GameState {
    /// Resolves the effect of a card that has just been placed on the table.
    ///
    /// Every effect except a responding Guard adds a pending effect token to
    /// the trick. A responding Guard removes the lead's token instead.
    pub(crate) fn resolve_effect<R: Rng + ?Sized>(
        &mut self,
        played: PlayedCard,
        leading: bool,
        options: &GameOptions,
        rng: &mut R,
    ) -> Resolution {
        let PlayedCard { player, card } = played;
        let effect = card.effect();

        let resolution = match effect {
            Effect::None => return Resolution::None,
            Effect::Swan => Resolution::Swan,
            Effect::Fox => Resolution::Fox {
                new_trump: self.swap_trump(player, options.fox_trump),
            },
            Effect::Woodcutter => {
                let (discarded, replacement) = self.fell(player.opponent(), rng);
                Resolution::Woodcutter {
                    discarded,
                    replacement,
                }
            }
            Effect::Guard if !leading => {
                let blocked = self.pending_effects.pop();
                debug!(player = %player, blocked = ?blocked, "guard cancelled pending effect");
                return Resolution::Guard { blocked };
            }
            Effect::Guard => Resolution::Guard { blocked: None },
            Effect::Witch => {
                self.witch_active = true;
                Resolution::Witch
            }
            Effect::Lunatic => Resolution::Lunatic {
                exchanges: if leading {
                    self.exchange_cards(player, options.lunatic_exchanges, rng)
                } else {
                    Vec::new()
                },
            },
        };

        debug!(player = %player, card = %card, resolution = ?resolution, "effect resolved");
        self.pending_effects.push(PendingEffect { player, effect });
        resolution
    }

    /// Fox: makes a card from `player`'s hand the trump indicator. The card
    /// stays in the hand.
    fn swap_trump(&mut self, player: Player, policy: FoxTrump) -> Option<Card> {
        let current = self.trump_suit();
        let cards = self.hands[player.index()].cards();
        let chosen = match policy {
            FoxTrump::FirstInHand => cards.first(),
            FoxTrump::FirstOffSuit => cards
                .iter()
                .find(|card| card.suit != current)
                .or_else(|| cards.first()),
        }
        .copied();

        if chosen.is_some() {
            self.fox_trump = chosen;
        }
        chosen
    }

    /// Woodcutter: `victim` loses a random card for good and draws the top
    /// of the residual deck in its place.
    fn fell<R: Rng + ?Sized>(&mut self, victim: Player, rng: &mut R) -> (Option<Card>, Option<Card>) {
        let hand = &mut self.hands[victim.index()];
        if hand.is_empty() {
            return (None, None);
        }

        let index = rng.random_range(0..hand.len());
        let discarded = hand.take(index);
        let replacement = self.deck.pop();
        if let Some(card) = replacement {
            self.hands[victim.index()].add_card(card);
        }

        self.discarded = discarded;
        (discarded, replacement)
    }

    /// Lunatic: swaps up to `limit` random pairs between the two hands, one
    /// pair at a time. Later picks see the hands as changed by earlier swaps.
    fn exchange_cards<R: Rng + ?Sized>(
        &mut self,
        player: Player,
        limit: u8,
        rng: &mut R,
    ) -> Vec<Exchange> {
        let own = player.index();
        let other = player.opponent().index();
        let count = usize::from(limit)
            .min(self.hands[own].len())
            .min(self.hands[other].len());

        let mut exchanges = Vec::with_capacity(count);
        for _ in 0..count {
            let own_index = rng.random_range(0..self.hands[own].len());
            let other_index = rng.random_range(0..self.hands[other].len());
            let (Some(given), Some(received)) = (
                self.hands[own].take(own_index),
                self.hands[other].take(other_index),
            ) else {
                break;
            };
            self.hands[own].add_card(received);
            self.hands[other].add_card(given);
            exchanges.push(Exchange { given, received });
        }
        exchanges
    }
}
