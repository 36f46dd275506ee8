use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::card::{Card, TRICKS_PER_CON};
use crate::error::PlayError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{PlayOutcome, PlayedCard};

use super::deal::Deal;
use super::state::{GameState, Phase};
use super::Game;

impl GameState {
    fn ensure_player_turn(&self, player: Player) -> Result<(), PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        if player != self.current_player {
            return Err(PlayError::NotYourTurn);
        }

        Ok(())
    }

    /// Checks a play without applying it.
    pub(crate) fn check_play(&self, player: Player, card: Card) -> Result<(), PlayError> {
        self.ensure_player_turn(player)?;

        let hand = &self.hands[player.index()];
        if !hand.contains(card) {
            return Err(PlayError::CardNotInHand);
        }

        // Leading is unconstrained
        if let Some(lead) = self.lead {
            if hand.has_suit(lead.card.suit) && card.suit != lead.card.suit {
                return Err(PlayError::MustFollowSuit);
            }
        }

        Ok(())
    }

    /// Returns the cards `player` may play now.
    pub(crate) fn valid_moves(&self, player: Player) -> Vec<Card> {
        if self.ensure_player_turn(player).is_err() {
            return Vec::new();
        }
        let lead_suit = self.lead.map(|lead| lead.card.suit);
        self.hands[player.index()].playable(lead_suit)
    }

    /// Validates and applies a play, running every consequence through to the
    /// next decision point: the response, the next lead, or the end of the
    /// game.
    pub(crate) fn play<R: Rng + ?Sized>(
        &mut self,
        player: Player,
        card: Card,
        options: &GameOptions,
        rng: &mut R,
    ) -> Result<PlayOutcome, PlayError> {
        self.check_play(player, card)?;

        self.hands[player.index()].remove(card);
        let played = PlayedCard { player, card };

        match self.phase {
            Phase::AwaitingLead => {
                debug!(player = %player, card = %card, "card led");
                self.discarded = None;
                self.lead = Some(played);

                let resolution = self.resolve_effect(played, true, options, rng);
                self.lead_effect = Some(resolution.clone());

                self.phase = Phase::AwaitingResponse;
                self.current_player = player.opponent();
                Ok(PlayOutcome::Led(resolution))
            }
            Phase::AwaitingResponse => {
                debug!(player = %player, card = %card, "card played in response");
                let lead = self
                    .lead
                    .expect("a lead card is on the table while awaiting a response");
                self.response = Some(played);

                let resolution = self.resolve_effect(played, false, options, rng);
                let trick = self.complete_trick(lead, played, resolution);

                if self.current_round < TRICKS_PER_CON {
                    return Ok(PlayOutcome::TrickComplete(trick));
                }

                let con = self.complete_con(options);
                if self.is_game_over() {
                    return Ok(PlayOutcome::GameOver {
                        trick,
                        con,
                        winner: self.winner(),
                    });
                }

                let dealer = self.dealer.opponent();
                self.begin_con(Deal::shuffled(rng), dealer);
                Ok(PlayOutcome::ConComplete { trick, con })
            }
            Phase::GameOver => Err(PlayError::GameOver),
        }
    }
}

impl Game {
    /// Plays `card` for `player`.
    ///
    /// Leading places the card and resolves its effect. Responding places the
    /// card, resolves its effect and closes the trick; closing the 13th trick
    /// also scores the con and either deals the next one or ends the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not the player's turn, the
    /// card is not in the player's hand, or the player must follow the lead
    /// suit. A rejected play leaves the game unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use foxglade::{Game, GameOptions, PlayOutcome};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// let leader = game.current_player();
    /// let card = game.valid_moves(leader)[0];
    /// assert!(matches!(game.play_card(leader, card), Ok(PlayOutcome::Led(_))));
    /// assert!(game.is_waiting_for_response());
    /// ```
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn play_card(&self, player: Player, card: Card) -> Result<PlayOutcome, PlayError> {
        let mut state = self.state.lock();
        let mut rng = self.rng.lock();

        let outcome = state.play(player, card, &self.options, &mut *rng);
        if let Err(err) = &outcome {
            debug!(player = %player, card = %card, error = %err, "play rejected");
        }
        state.debug_check_invariants();
        outcome
    }

    /// Returns `true` if `player` may play `card` now.
    pub fn is_legal(&self, player: Player, card: Card) -> bool {
        self.state.lock().check_play(player, card).is_ok()
    }

    /// Returns the cards `player` may legally play now.
    ///
    /// A leader may play any held card. A responder holding the lead suit may
    /// only play that suit. A player who is not expected to act gets an empty
    /// list.
    pub fn valid_moves(&self, player: Player) -> Vec<Card> {
        self.state.lock().valid_moves(player)
    }
}
