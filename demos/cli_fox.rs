//! CLI Fox at the Glade example. You play Player 1 against a bot that always
//! plays its first legal card.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use foxglade::{Card, Game, GameOptions, PlayOutcome, Player, Resolution, Suit, TrickResult};

const HUMAN: Player = Player::P1;
const BOT: Player = Player::P2;

fn main() {
    println!("Fox at the Glade CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    println!("{} deals.", game.dealer());

    while !game.is_game_over() {
        let player = game.current_player();
        let card = if player == HUMAN {
            print_table(&game);
            let Some(card) = prompt_card(&game) else {
                println!("Goodbye.");
                return;
            };
            card
        } else {
            let Some(&card) = game.valid_moves(BOT).first() else {
                println!("Bot has no legal move.");
                return;
            };
            card
        };

        match game.play_card(player, card) {
            Ok(outcome) => report(player, card, &outcome),
            Err(err) => println!("Play error: {err}"),
        }
    }

    println!(
        "\nFinal score: you {} - bot {}",
        game.score(HUMAN),
        game.score(BOT)
    );
    match game.winner() {
        Some(HUMAN) => println!("You win!"),
        Some(_) => println!("The bot wins."),
        None => println!("A draw."),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Asks for the index of a card in the displayed hand until a legal one is
/// chosen.
fn prompt_card(game: &Game) -> Option<Card> {
    let hand = game.hand(HUMAN).sorted(Some(game.current_trump_suit()));
    let legal = game.valid_moves(HUMAN);
    loop {
        let input = prompt_line("Card number: ");
        if input == "q" || input == "quit" {
            return None;
        }
        let Ok(index) = input.parse::<usize>() else {
            println!("Please enter a number.");
            continue;
        };
        match hand.get(index) {
            Some(card) if legal.contains(card) => return Some(*card),
            Some(card) => println!("{card} cannot be played now."),
            None => println!("No card with that number."),
        }
    }
}

fn print_table(game: &Game) {
    let state = game.state();
    println!(
        "\nCon {} | trick {} | trump {} ({}) | deck {}",
        state.con_number(),
        state.current_round() + 1,
        format_suit(state.trump_suit()),
        format_card(state.trump_card()),
        state.deck_len()
    );
    println!(
        "Score: you {} ({} tricks) - bot {} ({} tricks)",
        state.score(HUMAN),
        state.tricks_won(HUMAN),
        state.score(BOT),
        state.tricks_won(BOT)
    );
    if let Some(card) = state.discarded_card() {
        println!("Last discarded: {}", format_card(card));
    }
    if let Some(lead) = state.lead() {
        println!("Bot led: {}", format_card(lead.card));
    }

    let legal = game.valid_moves(HUMAN);
    let hand = state.hand(HUMAN).sorted(Some(state.trump_suit()));
    let parts: Vec<String> = hand
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let text = format!("{index}:{}", format_card(*card));
            if legal.contains(card) {
                text
            } else {
                colorize(&text, "90")
            }
        })
        .collect();
    println!("Hand: {}", parts.join(" "));
}

fn report(player: Player, card: Card, outcome: &PlayOutcome) {
    let who = if player == HUMAN { "You" } else { "Bot" };
    println!("{who} played {}", format_card(card));

    match outcome {
        PlayOutcome::Led(resolution) => report_resolution(resolution),
        PlayOutcome::TrickComplete(trick) => report_trick(trick),
        PlayOutcome::ConComplete { trick, con } | PlayOutcome::GameOver { trick, con, .. } => {
            report_trick(trick);
            println!(
                "Con {} over: you {} ({}, +{}) - bot {} ({}, +{})",
                con.number,
                con.tricks(HUMAN),
                con.title(HUMAN),
                con.points(HUMAN),
                con.tricks(BOT),
                con.title(BOT),
                con.points(BOT)
            );
        }
    }
}

fn report_trick(trick: &TrickResult) {
    report_resolution(&trick.response_effect);
    let winner = if trick.winner == HUMAN { "You" } else { "Bot" };
    println!("{winner} took trick {}.", trick.number);
}

fn report_resolution(resolution: &Resolution) {
    match resolution {
        Resolution::None | Resolution::Witch => {}
        Resolution::Swan => println!("  Swan: the loser of this trick may lead next."),
        Resolution::Fox { new_trump } => {
            if let Some(card) = new_trump {
                println!("  Fox: trump is now {}", format_card(*card));
            }
        }
        Resolution::Woodcutter {
            discarded,
            replacement,
        } => {
            if let Some(card) = discarded {
                println!("  Woodcutter: {} was discarded", format_card(*card));
            }
            if replacement.is_some() {
                println!("  A replacement was drawn from the deck.");
            }
        }
        Resolution::Guard { blocked } => {
            if let Some(pending) = blocked {
                println!("  Guard blocked the {:?}.", pending.effect);
            }
        }
        Resolution::Lunatic { exchanges } => {
            println!("  Lunatic: {} card(s) exchanged.", exchanges.len());
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn suit_color(suit: Suit) -> &'static str {
    match suit {
        Suit::Key => "33",
        Suit::Bell => "36",
        Suit::Moon => "35",
    }
}

fn format_suit(suit: Suit) -> String {
    colorize(&suit.to_string(), suit_color(suit))
}

fn format_card(card: Card) -> String {
    let text = card.to_string();
    if card.has_effect() {
        format!("{}*", colorize(&text, suit_color(card.suit)))
    } else {
        colorize(&text, suit_color(card.suit))
    }
}
