//! Settle timer.

use core::time::Duration;

/// A single-slot, cancellable countdown driven by the caller.
///
/// The timer never blocks; the owner advances it with elapsed time and reacts
/// when it fires. Scheduling while a countdown is pending replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettleTimer {
    remaining: Option<Duration>,
}

impl SettleTimer {
    /// Creates an idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { remaining: None }
    }

    /// Starts a countdown of `delay`.
    pub const fn schedule(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    /// Cancels the pending countdown, if any.
    ///
    /// Returns whether a countdown was pending.
    pub const fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    /// Advances the countdown by `elapsed`.
    ///
    /// Returns `true` exactly once, when the countdown reaches zero. The timer
    /// is idle afterwards.
    pub const fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };

        match remaining.checked_sub(elapsed) {
            Some(left) if !left.is_zero() => {
                self.remaining = Some(left);
                false
            }
            _ => {
                self.remaining = None;
                true
            }
        }
    }

    /// Returns whether a countdown is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Returns the time left before the countdown fires.
    #[must_use]
    pub const fn remaining(&self) -> Option<Duration> {
        self.remaining
    }
}
