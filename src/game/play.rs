use alloc::format;
use alloc::string::String;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::PlayError;
use crate::options::{MatchOptions, TieRule};
use crate::result::{MatchOutcome, RoundOutcome, RoundResult};

use super::{MatchState, PendingRound, Phase, PlayedCard, Side};

fn round_entry(
    round: u32,
    player_card: Card,
    bot_card: Card,
    outcome: RoundOutcome,
    tie_rule: TieRule,
    replenished: bool,
) -> String {
    let verdict = match outcome {
        RoundOutcome::PlayerWins => "Player wins the round.",
        RoundOutcome::BotWins => "Bot wins the round.",
        RoundOutcome::Draw if replenished => "Tie! Both sides draw a card.",
        RoundOutcome::Draw if tie_rule == TieRule::DrawFromPile => {
            "Tie! The draw pile is empty."
        }
        RoundOutcome::Draw => "Tie!",
    };

    format!("Round {round}: Player played {player_card}, Bot played {bot_card}. {verdict}")
}

impl MatchState {
    /// Plays the player's card at `index` against the bot's front card.
    ///
    /// On success the round is scored and logged, and the match either moves
    /// to [`Phase::Resolving`] with the settle timer running or, if a hand is
    /// now empty, straight to [`Phase::GameOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not waiting for the player, a hand is
    /// empty, or `index` is outside the player's hand. The state is unchanged
    /// in every error case.
    pub fn play_card(
        &mut self,
        index: usize,
        options: &MatchOptions,
    ) -> Result<RoundResult, PlayError> {
        if self.phase != Phase::AwaitingPlayerChoice {
            return Err(PlayError::InvalidState);
        }

        if self.player_hand.is_empty() || self.bot_hand.is_empty() {
            return Err(PlayError::EmptyHand);
        }

        if index >= self.player_hand.len() {
            return Err(PlayError::CardNotFound);
        }

        let (Some(player_card), Some(bot_card)) =
            (self.player_hand.take(index), self.bot_hand.take_front())
        else {
            return Err(PlayError::EmptyHand);
        };

        self.center_pile.push(PlayedCard {
            card: player_card,
            side: Side::Player,
        });
        self.center_pile.push(PlayedCard {
            card: bot_card,
            side: Side::Bot,
        });

        let outcome = RoundOutcome::compare(player_card, bot_card);
        let mut replenished = None;
        match outcome {
            RoundOutcome::PlayerWins => self.player_score += 1,
            RoundOutcome::BotWins => self.bot_score += 1,
            RoundOutcome::Draw => {
                self.draws += 1;
                if options.tie_rule == TieRule::DrawFromPile {
                    replenished = self.replenish();
                }
            }
        }
        self.rounds_played += 1;

        let round = self.rounds_played;
        self.log.push(round_entry(
            round,
            player_card,
            bot_card,
            outcome,
            options.tie_rule,
            replenished.is_some(),
        ));
        self.pending_round = Some(PendingRound {
            player_card,
            bot_card,
            outcome,
        });

        debug!(
            round,
            %player_card,
            %bot_card,
            ?outcome,
            player_score = self.player_score,
            bot_score = self.bot_score,
            "round resolved"
        );

        let match_outcome = if self.player_hand.is_empty() || self.bot_hand.is_empty() {
            Some(self.finish())
        } else {
            self.phase = Phase::Resolving;
            self.timer.schedule(options.settle_delay);
            None
        };

        Ok(RoundResult {
            round,
            player_card,
            bot_card,
            outcome,
            replenished,
            match_outcome,
        })
    }

    /// Draws one card for each side, player first. Draws nothing unless the
    /// pile can serve both.
    fn replenish(&mut self) -> Option<(Card, Card)> {
        if self.draw_pile.len() < 2 {
            return None;
        }

        let player_card = self.draw_pile.pop_front()?;
        let bot_card = self.draw_pile.pop_front()?;
        self.player_hand.add_card(player_card);
        self.bot_hand.add_card(bot_card);

        Some((player_card, bot_card))
    }

    /// Ends the match on the accumulated scores.
    fn finish(&mut self) -> MatchOutcome {
        let outcome = MatchOutcome::from_scores(self.player_score, self.bot_score);

        self.phase = Phase::GameOver;
        self.outcome = Some(outcome);
        self.timer.cancel();
        self.log.push(format!(
            "Game over! {outcome} Final score: Player {} - Bot {}.",
            self.player_score, self.bot_score
        ));

        info!(
            ?outcome,
            player_score = self.player_score,
            bot_score = self.bot_score,
            rounds = self.rounds_played,
            "match over"
        );

        outcome
    }
}
