//! Shared helpers for building fixed positions.

#![allow(dead_code)]

use foxglade::{Card, Deal, Game, GameOptions, Player, Suit, full_deck};

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

pub fn cards(suit: Suit, ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| Card::new(suit, rank)).collect()
}

/// Builds a deal from two full hands and the trump card. Every other card goes
/// to the residual deck in suit-then-rank order, so the highest such card is
/// on top.
pub fn deal(p1: Vec<Card>, p2: Vec<Card>, trump: Card) -> Deal {
    let deck = full_deck()
        .into_iter()
        .filter(|card| !p1.contains(card) && !p2.contains(card) && *card != trump)
        .collect();
    Deal {
        hands: [p1, p2],
        deck,
        trump,
    }
}

/// The standard test position, trump Moon-11:
///
/// - P1: Key 2 4 6 8 10, Bell 2 4 6 8, Moon 2 4 6 8 (no effects)
/// - P2: Key 1 3 5 7 9 11, Bell 1 3 5 7 9 11, Bell 10 (void in Moon)
/// - deck: Moon 1 3 5 7 9 10 (Moon-10 on top)
pub fn standard_hands() -> (Vec<Card>, Vec<Card>) {
    let p1 = [
        cards(Suit::Key, &[2, 4, 6, 8, 10]),
        cards(Suit::Bell, &[2, 4, 6, 8]),
        cards(Suit::Moon, &[2, 4, 6, 8]),
    ]
    .concat();
    let p2 = [
        cards(Suit::Key, &[1, 3, 5, 7, 9, 11]),
        cards(Suit::Bell, &[1, 3, 5, 7, 9, 11, 10]),
    ]
    .concat();
    (p1, p2)
}

pub const STANDARD_TRUMP: Card = card(Suit::Moon, 11);

/// Starts a game from the given hands with trump Moon-11.
pub fn game_with(dealer: Player, p1: Vec<Card>, p2: Vec<Card>) -> Game {
    Game::with_deal(GameOptions::default(), 1, dealer, deal(p1, p2, STANDARD_TRUMP))
        .expect("test deal is a valid partition")
}

/// Starts a game from the standard test position.
pub fn standard_game(dealer: Player) -> Game {
    let (p1, p2) = standard_hands();
    game_with(dealer, p1, p2)
}

/// Replaces `from` with `to` in `hand`, keeping its position.
pub fn swap(hand: &mut [Card], from: Card, to: Card) {
    let slot = hand
        .iter_mut()
        .find(|held| **held == from)
        .expect("card to swap is in the hand");
    *slot = to;
}

/// Plays the first legal card for whoever is to act until the game ends.
pub fn play_out(game: &Game) {
    for _ in 0..10_000 {
        if game.is_game_over() {
            return;
        }
        let player = game.current_player();
        let card = game.valid_moves(player)[0];
        game.play_card(player, card).expect("first valid move is legal");
    }
    panic!("game did not finish");
}
