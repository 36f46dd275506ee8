//! Property tests over randomly played games.
//!
//! Properties tested:
//! - Every deal partitions the full 33-card set
//! - Hand sizes track the number of completed tricks
//! - Legal moves respect follow-suit and belong only to the player to act
//! - A leading Lunatic swaps as many pairs as both hands allow, up to the limit
//! - Tricks won add up to the tricks played, and to 13 when a con closes
//! - Scores never decrease; the game ends exactly when a score reaches the target

use proptest::prelude::*;

use foxglade::{
    Card, Game, GameOptions, HAND_SIZE, PlayOutcome, Player, Resolution, TRICKS_PER_CON,
    full_deck,
};

fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(|card| (card.suit, card.rank));
    cards
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the deal is a partition of the card set
    #[test]
    fn prop_deal_partitions_card_set(seed in any::<u64>()) {
        let state = Game::new(GameOptions::default(), seed).state();

        let mut all: Vec<Card> = state.hand(Player::P1).cards().to_vec();
        all.extend_from_slice(state.hand(Player::P2).cards());
        all.extend_from_slice(state.deck());
        all.push(state.dealt_trump());

        prop_assert_eq!(state.hand(Player::P1).len(), HAND_SIZE);
        prop_assert_eq!(state.hand(Player::P2).len(), HAND_SIZE);
        prop_assert_eq!(sorted(all), sorted(full_deck()));
    }

    /// Property: random legal play keeps every structural invariant
    #[test]
    fn prop_random_games_hold_invariants(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<u8>(), 64),
    ) {
        let game = Game::new(GameOptions::default(), seed);
        let options = game.options.clone();
        let mut last_scores = [0, 0];

        for step in 0..10_000_usize {
            if game.is_game_over() {
                break;
            }

            let state = game.state();
            let player = state.current_player();
            let round = usize::from(state.current_round());
            let remaining = HAND_SIZE - round;

            if state.is_waiting_for_response() {
                prop_assert_eq!(state.hand(player).len(), remaining);
                prop_assert_eq!(state.hand(player.opponent()).len(), remaining - 1);
            } else {
                prop_assert_eq!(state.hand(Player::P1).len(), remaining);
                prop_assert_eq!(state.hand(Player::P2).len(), remaining);
            }

            let moves = game.valid_moves(player);
            prop_assert!(!moves.is_empty());
            prop_assert!(game.valid_moves(player.opponent()).is_empty());
            if let Some(lead) = state.lead() {
                if state.hand(player).has_suit(lead.card.suit) {
                    prop_assert!(moves.iter().all(|card| card.suit == lead.card.suit));
                }
            }

            let pick = usize::from(choices[step % choices.len()]) % moves.len();
            let card = moves[pick];
            prop_assert!(game.is_legal(player, card));

            let outcome = game.play_card(player, card);
            prop_assert!(outcome.is_ok(), "legal move rejected: {:?}", outcome);
            let Ok(outcome) = outcome else { unreachable!() };

            match &outcome {
                PlayOutcome::Led(Resolution::Lunatic { exchanges }) => {
                    let expected = usize::from(options.lunatic_exchanges)
                        .min(remaining - 1);
                    prop_assert_eq!(exchanges.len(), expected);
                }
                PlayOutcome::Led(_) => {}
                PlayOutcome::TrickComplete(trick) => {
                    let after = game.state();
                    prop_assert_eq!(usize::from(trick.number), round + 1);
                    prop_assert_eq!(
                        after.tricks_won(Player::P1) + after.tricks_won(Player::P2),
                        after.current_round()
                    );
                }
                PlayOutcome::ConComplete { con, .. } | PlayOutcome::GameOver { con, .. } => {
                    prop_assert_eq!(con.tricks[0] + con.tricks[1], TRICKS_PER_CON);
                }
            }

            let scores = [game.score(Player::P1), game.score(Player::P2)];
            prop_assert!(scores[0] >= last_scores[0] && scores[1] >= last_scores[1]);
            last_scores = scores;

            let reached = scores.iter().any(|&score| score >= options.target_score);
            prop_assert_eq!(game.is_game_over(), reached);
        }

        prop_assert!(game.is_game_over());
        let [p1, p2] = last_scores;
        let expected = match p1.cmp(&p2) {
            core::cmp::Ordering::Greater => Some(Player::P1),
            core::cmp::Ordering::Less => Some(Player::P2),
            core::cmp::Ordering::Equal => None,
        };
        prop_assert_eq!(game.winner(), expected);
    }
}
