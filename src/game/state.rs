//! Match state types.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deal;
use crate::hand::Hand;
use crate::result::{MatchOutcome, RoundOutcome};

use super::timer::SettleTimer;

/// Match phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the player to pick a card.
    AwaitingPlayerChoice,
    /// A round has been revealed and is waiting for the settle delay.
    Resolving,
    /// One of the hands ran out; the match is over.
    GameOver,
}

/// The side that played a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The automated opponent.
    Bot,
}

/// A card on the center pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    /// The card revealed.
    pub card: Card,
    /// Who revealed it.
    pub side: Side,
}

/// The two cards of the round being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRound {
    /// Card revealed by the player.
    pub player_card: Card,
    /// Card revealed by the bot.
    pub bot_card: Card,
    /// The round outcome.
    pub outcome: RoundOutcome,
}

/// Complete state of one match.
///
/// Only the transitions on this type mutate it: [`MatchState::play_card`],
/// [`MatchState::advance`], [`MatchState::settle`], and a fresh deal.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub(super) player_hand: Hand,
    pub(super) bot_hand: Hand,
    pub(super) draw_pile: VecDeque<Card>,
    pub(super) center_pile: Vec<PlayedCard>,
    pub(super) player_score: u32,
    pub(super) bot_score: u32,
    pub(super) draws: u32,
    pub(super) rounds_played: u32,
    pub(super) pending_round: Option<PendingRound>,
    pub(super) log: Vec<String>,
    pub(super) phase: Phase,
    pub(super) outcome: Option<MatchOutcome>,
    pub(super) timer: SettleTimer,
}

impl MatchState {
    /// Starts a match from a fresh deal.
    #[must_use]
    pub fn from_deal(deal: Deal) -> Self {
        Self {
            player_hand: deal.player,
            bot_hand: deal.bot,
            draw_pile: deal.draw_pile,
            center_pile: Vec::new(),
            player_score: 0,
            bot_score: 0,
            draws: 0,
            rounds_played: 0,
            pending_round: None,
            log: Vec::new(),
            phase: Phase::AwaitingPlayerChoice,
            outcome: None,
            timer: SettleTimer::new(),
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the bot's hand.
    #[must_use]
    pub const fn bot_hand(&self) -> &Hand {
        &self.bot_hand
    }

    /// Returns the cards left in the draw pile, next card first.
    #[must_use]
    pub const fn draw_pile(&self) -> &VecDeque<Card> {
        &self.draw_pile
    }

    /// Returns every card revealed this match, in play order.
    #[must_use]
    pub fn center_pile(&self) -> &[PlayedCard] {
        &self.center_pile
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Returns the bot's score.
    #[must_use]
    pub const fn bot_score(&self) -> u32 {
        self.bot_score
    }

    /// Returns the number of tied rounds.
    #[must_use]
    pub const fn draws(&self) -> u32 {
        self.draws
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the round currently on display, if any.
    #[must_use]
    pub const fn pending_round(&self) -> Option<PendingRound> {
        self.pending_round
    }

    /// Returns the match log, oldest entry first.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the final outcome once the match is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// Returns the settle timer.
    #[must_use]
    pub const fn timer(&self) -> &SettleTimer {
        &self.timer
    }
}
