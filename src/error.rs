//! Error types for deck and match operations.

use thiserror::Error;

use crate::card::Card;

/// Errors raised when a deck or deal would not describe a valid match.
///
/// These indicate a programming defect in the caller (a hand-built deck or a
/// bad option value). The match constructors refuse to build a match from
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck does not hold exactly 52 cards.
    #[error("deck holds {found} cards, expected 52")]
    WrongSize {
        /// Number of cards found.
        found: usize,
    },
    /// A card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// The hand size cannot be dealt from one deck.
    #[error("hand size {requested} is outside 1..={max}")]
    InvalidHandSize {
        /// Requested hand size.
        requested: usize,
        /// Largest hand size that fits two hands in the deck.
        max: usize,
    },
}

/// Errors that can occur when playing a card.
///
/// A rejected play leaves the match untouched; the presentation layer may
/// ignore these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The match is not waiting for the player's choice.
    #[error("invalid match state for playing a card")]
    InvalidState,
    /// The card index is outside the player's hand.
    #[error("card not found in hand")]
    CardNotFound,
    /// One of the hands has no cards left.
    #[error("a hand is empty")]
    EmptyHand,
}
