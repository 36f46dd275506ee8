//! A rules engine for Fox at the Glade, a two-player trick-taking card game,
//! with optional `no_std` support.
//!
//! 33 cards in three suits are dealt into two 13-card hands. Each con is
//! thirteen tricks; odd ranks carry special effects. Cons are scored from a
//! fixed table until a player reaches 21 points.
//!
//! The crate provides a [`Game`] type that owns the state and exposes a
//! small command surface: [`Game::valid_moves`], [`Game::play_card`] and
//! read-only queries. Anything that picks moves, human or synthetic, sits
//! outside the engine.
//!
//! # Example
//!
//! ```no_run
//! use foxglade::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! while !game.is_game_over() {
//!     let player = game.current_player();
//!     let card = game.valid_moves(player)[0];
//!     game.play_card(player, card).unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod scoring;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Effect, HAND_SIZE, MAX_RANK, Suit, TRICKS_PER_CON, full_deck};
pub use error::{DealError, PlayError};
pub use game::{DECK_AFTER_DEAL, Deal, Game, GameState, Phase, next_leader, trick_winner};
pub use hand::Hand;
pub use options::{FoxTrump, GameOptions};
pub use player::Player;
pub use result::{
    ConResult, Exchange, PendingEffect, PlayOutcome, PlayedCard, Resolution, TrickResult,
};
pub use scoring::{Title, points_for_tricks};
