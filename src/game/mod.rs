//! Game engine and state management.

use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::sync::Mutex;

use crate::card::{Card, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{ConResult, TrickResult};

mod con;
mod deal;
mod effects;
mod play;
pub mod state;
mod trick;

pub use deal::{DECK_AFTER_DEAL, Deal};
pub use state::{GameState, Phase};
pub use trick::{next_leader, trick_winner};

/// A Fox at the Glade game engine for two players.
///
/// The game owns the whole state and the random generator. Front ends and
/// synthetic opponents drive it through [`Game::valid_moves`] and
/// [`Game::play_card`], and read it through the query methods or a
/// [`GameState`] snapshot. Every command holds the state lock for its entire
/// transition, so transitions never interleave.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: Mutex<GameState>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed and deals the first con.
    ///
    /// The same seed and the same sequence of plays always produce the same
    /// game.
    ///
    /// # Example
    ///
    /// ```
    /// use foxglade::{Game, GameOptions, Player};
    ///
    /// let game = Game::new(GameOptions::default().with_first_dealer(Some(Player::P1)), 42);
    /// assert_eq!(game.current_player(), Player::P2);
    /// assert_eq!(game.hand(Player::P1).len(), 13);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dealer = Self::first_dealer(&options, &mut rng);
        let state = GameState::new(Deal::shuffled(&mut rng), dealer);

        Self {
            options,
            state: Mutex::new(state),
            rng: Mutex::new(rng),
        }
    }

    /// Creates a new game whose first con starts from an explicit deal.
    ///
    /// Later cons are shuffled from the seeded generator.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal does not partition the 33-card set.
    pub fn with_deal(
        options: GameOptions,
        seed: u64,
        dealer: Player,
        deal: Deal,
    ) -> Result<Self, DealError> {
        deal.validate()?;

        Ok(Self {
            options,
            state: Mutex::new(GameState::new(deal, dealer)),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        })
    }

    fn first_dealer<R: Rng + ?Sized>(options: &GameOptions, rng: &mut R) -> Player {
        options.first_dealer.unwrap_or_else(|| {
            if rng.random_bool(0.5) {
                Player::P1
            } else {
                Player::P2
            }
        })
    }

    /// Starts a new game: scores are reset, the first dealer is chosen again
    /// and a fresh con is dealt.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn new_game(&self) {
        let mut state = self.state.lock();
        let mut rng = self.rng.lock();

        let dealer = Self::first_dealer(&self.options, &mut *rng);
        *state = GameState::new(Deal::shuffled(&mut *rng), dealer);
        info!(dealer = %dealer, "new game");
    }

    /// Abandons the current con and deals a new one. The deal passes to the
    /// other player; scores are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn start_new_con(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if state.is_game_over() {
            return Err(DealError::InvalidState);
        }

        let mut rng = self.rng.lock();
        let dealer = state.dealer().opponent();
        state.begin_con(Deal::shuffled(&mut *rng), dealer);
        state.debug_check_invariants();

        Ok(())
    }

    /// Returns a snapshot of the full game state.
    pub fn state(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase()
    }

    /// Returns the player whose action is expected next.
    pub fn current_player(&self) -> Player {
        self.state.lock().current_player()
    }

    /// Returns the dealer of the current con.
    pub fn dealer(&self) -> Player {
        self.state.lock().dealer()
    }

    /// Returns `true` while a lead card waits for its response.
    pub fn is_waiting_for_response(&self) -> bool {
        self.state.lock().is_waiting_for_response()
    }

    /// Returns the lead card on the table.
    pub fn lead_card(&self) -> Option<Card> {
        self.state.lock().lead().map(|played| played.card)
    }

    /// Returns the response card on the table.
    pub fn response_card(&self) -> Option<Card> {
        self.state.lock().response().map(|played| played.card)
    }

    /// Returns the trump indicator in force. After a Fox this is the card it
    /// chose; the card revealed by the deal is [`GameState::dealt_trump`].
    pub fn trump_card(&self) -> Card {
        self.state.lock().trump_card()
    }

    /// Returns the trump suit in force, including a Fox override.
    pub fn current_trump_suit(&self) -> Suit {
        self.state.lock().trump_suit()
    }

    /// Returns a copy of the hand of `player`.
    pub fn hand(&self, player: Player) -> Hand {
        self.state.lock().hand(player).clone()
    }

    /// Returns the cumulative score of `player`.
    pub fn score(&self, player: Player) -> u32 {
        self.state.lock().score(player)
    }

    /// Returns the tricks `player` has taken this con.
    pub fn tricks_won(&self, player: Player) -> u8 {
        self.state.lock().tricks_won(player)
    }

    /// Returns `true` once a player has reached the target score.
    pub fn is_game_over(&self) -> bool {
        self.state.lock().is_game_over()
    }

    /// Returns the winner of a finished game, or `None` while running or on
    /// equal scores.
    pub fn winner(&self) -> Option<Player> {
        self.state.lock().winner()
    }

    /// Returns the tricks completed this con, in order.
    pub fn trick_history(&self) -> Vec<TrickResult> {
        self.state.lock().trick_history().to_vec()
    }

    /// Returns the results of every completed con.
    pub fn con_history(&self) -> Vec<ConResult> {
        self.state.lock().con_history().to_vec()
    }

    /// Returns the card most recently discarded by a Woodcutter. It stays
    /// visible until the next trick is led.
    pub fn discarded_card(&self) -> Option<Card> {
        self.state.lock().discarded_card()
    }

    /// Returns `true` if an effect has resolved in the current trick and has
    /// not been cancelled by a Guard.
    pub fn is_effect_applied_this_trick(&self) -> bool {
        self.state.lock().is_effect_applied_this_trick()
    }
}
