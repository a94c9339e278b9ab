//! Round and match result types.

use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;

/// Outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The player's card ranks higher.
    PlayerWins,
    /// The bot's card ranks higher.
    BotWins,
    /// Both cards have the same rank.
    Draw,
}

impl RoundOutcome {
    /// Compares two cards by rank.
    #[must_use]
    pub fn compare(player_card: Card, bot_card: Card) -> Self {
        match player_card.rank.cmp(&bot_card.rank) {
            Ordering::Greater => Self::PlayerWins,
            Ordering::Less => Self::BotWins,
            Ordering::Equal => Self::Draw,
        }
    }
}

/// Final outcome of a match, decided by the accumulated scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    /// The player won more rounds.
    PlayerWins,
    /// The bot won more rounds.
    BotWins,
    /// Both sides won the same number of rounds.
    Draw,
}

impl MatchOutcome {
    /// Decides the match from the final scores.
    #[must_use]
    pub fn from_scores(player_score: u32, bot_score: u32) -> Self {
        match player_score.cmp(&bot_score) {
            Ordering::Greater => Self::PlayerWins,
            Ordering::Less => Self::BotWins,
            Ordering::Equal => Self::Draw,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWins => "Player wins!",
            Self::BotWins => "Bot wins!",
            Self::Draw => "It's a tie!",
        })
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Card revealed by the player.
    pub player_card: Card,
    /// Card revealed by the bot.
    pub bot_card: Card,
    /// The round outcome.
    pub outcome: RoundOutcome,
    /// Cards drawn on a tie as `(player, bot)`, if the pile had any.
    pub replenished: Option<(Card, Card)>,
    /// Final outcome, if this round ended the match.
    pub match_outcome: Option<MatchOutcome>,
}
