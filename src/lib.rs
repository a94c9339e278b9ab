//! A war-style card comparison game engine with optional `no_std` support.
//!
//! The crate provides a [`Match`] type that runs a player-versus-bot match:
//! both sides are dealt seven cards from a shuffled deck, each round the
//! player picks a card and the bot answers with its front card, the higher
//! rank scores, and ties draw a fresh card for both sides from the remaining
//! pile. The match ends as soon as either hand is empty.
//!
//! # Example
//!
//! ```
//! use warrs::{Match, MatchOptions, Phase};
//!
//! let game = Match::new(MatchOptions::default(), 42).unwrap();
//! let round = game.play_card(0).unwrap();
//! assert_eq!(round.round, 1);
//! assert_eq!(game.phase(), Phase::Resolving);
//!
//! game.settle();
//! assert_eq!(game.phase(), Phase::AwaitingPlayerChoice);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deal, Deck, MAX_HAND_SIZE};
pub use error::{DeckError, PlayError};
pub use game::{
    Match, MatchSnapshot, MatchState, PendingRound, Phase, PlayedCard, SettleTimer, Side,
    SubscriptionId,
};
pub use hand::Hand;
pub use options::{MatchOptions, TieRule};
pub use result::{MatchOutcome, RoundOutcome, RoundResult};
