//! Deck construction, shuffling, and dealing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::hand::Hand;

/// Largest hand size that still leaves room for the opposing hand.
pub const MAX_HAND_SIZE: usize = DECK_SIZE / 2;

/// Position of a card in the canonical deck order.
const fn canonical_index(card: Card) -> usize {
    card.suit as usize * Rank::ALL.len() + (card.rank.value() as usize - 1)
}

/// An ordered deck holding each of the 52 cards exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Cards handed out at the start of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// The human player's hand.
    pub player: Hand,
    /// The bot's hand.
    pub bot: Hand,
    /// Remaining cards, drawn from the front when a round ties.
    pub draw_pile: VecDeque<Card>,
}

impl Deck {
    /// Builds the deck in canonical order: suits ♠ ♥ ♦ ♣, each from Ace to King.
    ///
    /// # Panics
    ///
    /// Panics if the suit and rank tables stop producing exactly 52 cards.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        assert_eq!(cards.len(), DECK_SIZE, "standard deck must hold 52 cards");
        Self { cards }
    }

    /// Creates a deck with an explicit card order.
    ///
    /// # Errors
    ///
    /// Returns an error unless `cards` holds each of the 52 cards exactly once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize { found: cards.len() });
        }

        let mut seen = [false; DECK_SIZE];
        for &card in &cards {
            let slot = &mut seen[canonical_index(card)];
            if *slot {
                return Err(DeckError::DuplicateCard(card));
            }
            *slot = true;
        }

        Ok(Self { cards })
    }

    /// Returns a uniformly shuffled copy of this deck.
    ///
    /// The shuffle is a Fisher–Yates pass: walking from the last index down,
    /// each position is swapped with one drawn uniformly from `0..=i`.
    /// The deck itself is left untouched.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Deals `hand_size` cards to the player, the next `hand_size` to the bot,
    /// and keeps the rest in order as the draw pile.
    ///
    /// `hand_size` is capped at [`MAX_HAND_SIZE`].
    #[must_use]
    pub fn deal(self, hand_size: usize) -> Deal {
        let hand_size = hand_size.min(MAX_HAND_SIZE);
        let mut cards = self.cards.into_iter();

        let player: Vec<Card> = cards.by_ref().take(hand_size).collect();
        let bot: Vec<Card> = cards.by_ref().take(hand_size).collect();
        let draw_pile: VecDeque<Card> = cards.collect();

        debug_assert_eq!(player.len() + bot.len() + draw_pile.len(), DECK_SIZE);

        Deal {
            player: Hand::from_cards(player),
            bot: Hand::from_cards(bot),
            draw_pile,
        }
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
