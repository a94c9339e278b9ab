//! Read-only views of a match for the presentation layer.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use crate::card::Card;
use crate::result::MatchOutcome;

use super::{MatchState, PendingRound, Phase, PlayedCard};

/// An immutable copy of the match as seen by the human player.
///
/// The bot's hand is exposed by size only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSnapshot {
    /// The player's hand, front first.
    pub player_hand: Vec<Card>,
    /// Number of cards in the bot's hand.
    pub bot_hand_len: usize,
    /// The player's score.
    pub player_score: u32,
    /// The bot's score.
    pub bot_score: u32,
    /// Number of tied rounds.
    pub draws: u32,
    /// Number of rounds played.
    pub rounds_played: u32,
    /// The round on display while resolving (and after the final round).
    pub pending_round: Option<PendingRound>,
    /// Every card revealed this match, in play order.
    pub center_pile: Vec<PlayedCard>,
    /// Cards left in the draw pile.
    pub draw_pile_len: usize,
    /// The match log, oldest entry first.
    pub log: Vec<String>,
    /// The current phase.
    pub phase: Phase,
    /// Final outcome once the match is over.
    pub outcome: Option<MatchOutcome>,
    /// Time left before the pending round settles.
    pub settle_remaining: Option<Duration>,
}

impl MatchSnapshot {
    /// Returns whether the player may play a card now.
    #[must_use]
    pub fn can_play(&self) -> bool {
        self.phase == Phase::AwaitingPlayerChoice
            && !self.player_hand.is_empty()
            && self.bot_hand_len > 0
    }
}

impl From<&MatchState> for MatchSnapshot {
    fn from(state: &MatchState) -> Self {
        Self {
            player_hand: state.player_hand.cards().to_vec(),
            bot_hand_len: state.bot_hand.len(),
            player_score: state.player_score,
            bot_score: state.bot_score,
            draws: state.draws,
            rounds_played: state.rounds_played,
            pending_round: state.pending_round,
            center_pile: state.center_pile.clone(),
            draw_pile_len: state.draw_pile.len(),
            log: state.log.clone(),
            phase: state.phase,
            outcome: state.outcome,
            settle_remaining: state.timer.remaining(),
        }
    }
}

/// Handle returned by [`Match::subscribe`](super::Match::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) usize);

pub(super) type Observer = Box<dyn FnMut(&MatchSnapshot) + Send>;

/// Registered snapshot observers, in subscription order.
#[derive(Default)]
pub(super) struct Observers {
    next_id: usize,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(super) fn insert(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(super) fn notify(&mut self, snapshot: &MatchSnapshot) {
        for (_, observer) in &mut self.entries {
            observer(snapshot);
        }
    }
}
