use core::time::Duration;

use tracing::trace;

use super::{MatchState, Phase};

impl MatchState {
    /// Advances the settle timer by `elapsed`.
    ///
    /// Returns `true` if the pending round settled and the player may play
    /// again.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.phase != Phase::Resolving {
            return false;
        }

        if self.timer.advance(elapsed) {
            self.finish_settle();
            true
        } else {
            false
        }
    }

    /// Settles the pending round right away, skipping the remaining delay.
    ///
    /// Returns `false` if no round was resolving.
    pub fn settle(&mut self) -> bool {
        if self.phase != Phase::Resolving {
            return false;
        }

        self.timer.cancel();
        self.finish_settle();
        true
    }

    fn finish_settle(&mut self) {
        self.pending_round = None;
        self.phase = Phase::AwaitingPlayerChoice;
        trace!(round = self.rounds_played, "round settled");
    }
}
