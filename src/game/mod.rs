//! Match engine and state management.

use alloc::collections::VecDeque;
use core::sync::atomic::{AtomicUsize, Ordering};
use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::deck::{Deck, MAX_HAND_SIZE};
use crate::error::{DeckError, PlayError};
use crate::options::MatchOptions;
use crate::result::RoundResult;
use crate::sync::Mutex;

mod play;
mod settle;
pub mod snapshot;
pub mod state;
pub mod timer;

use snapshot::Observers;
pub use snapshot::{MatchSnapshot, SubscriptionId};
pub use state::{MatchState, PendingRound, Phase, PlayedCard, Side};
pub use timer::SettleTimer;

/// A player-versus-bot match of war.
///
/// The match owns the random source, the state machine, and the snapshot
/// observers. Every command takes `&self` and runs to completion under the
/// state lock, so rounds never overlap.
pub struct Match {
    /// Match options.
    options: MatchOptions,
    /// Current match state.
    state: Mutex<MatchState>,
    /// Random number generator used for every shuffle.
    rng: Mutex<ChaCha8Rng>,
    /// Snapshot observers.
    observers: Mutex<Observers>,
    /// Snapshots waiting for delivery, in commit order.
    outbox: Mutex<VecDeque<MatchSnapshot>>,
    /// Number of registered observers.
    subscribers: AtomicUsize,
}

impl Match {
    /// Creates a match with the given seed and deals the first hands.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.hand_size` is not in `1..=26`.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Match, MatchOptions, Phase};
    ///
    /// let game = Match::new(MatchOptions::default(), 42).unwrap();
    /// assert_eq!(game.phase(), Phase::AwaitingPlayerChoice);
    /// ```
    pub fn new(options: MatchOptions, seed: u64) -> Result<Self, DeckError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::standard().shuffled(&mut rng);
        Self::start(options, rng, deck)
    }

    /// Creates a match whose first deal comes from `deck` as ordered.
    ///
    /// Later restarts shuffle a fresh deck from the seeded generator.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.hand_size` is not in `1..=26`.
    pub fn with_deck(options: MatchOptions, seed: u64, deck: Deck) -> Result<Self, DeckError> {
        Self::start(options, ChaCha8Rng::seed_from_u64(seed), deck)
    }

    fn start(options: MatchOptions, rng: ChaCha8Rng, deck: Deck) -> Result<Self, DeckError> {
        if options.hand_size == 0 || options.hand_size > MAX_HAND_SIZE {
            return Err(DeckError::InvalidHandSize {
                requested: options.hand_size,
                max: MAX_HAND_SIZE,
            });
        }

        let state = MatchState::from_deal(deck.deal(options.hand_size));
        info!(hand_size = options.hand_size, "match dealt");

        Ok(Self {
            options,
            state: Mutex::new(state),
            rng: Mutex::new(rng),
            observers: Mutex::new(Observers::default()),
            outbox: Mutex::new(VecDeque::new()),
            subscribers: AtomicUsize::new(0),
        })
    }

    /// Plays the player's card at `index`; the bot answers with its front card.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not waiting for the player, a hand is
    /// empty, or `index` is out of range. A rejected play changes nothing and
    /// publishes nothing.
    pub fn play_card(&self, index: usize) -> Result<RoundResult, PlayError> {
        let result = self.commit(|state| {
            let result = state.play_card(index, &self.options);
            (result, result.is_ok())
        });

        if let Err(err) = result {
            debug!(index, %err, "play rejected");
        }

        result
    }

    /// Advances the settle timer by `elapsed`.
    ///
    /// Returns `true` if the pending round settled.
    pub fn tick(&self, elapsed: Duration) -> bool {
        self.commit(|state| {
            let settled = state.advance(elapsed);
            (settled, settled)
        })
    }

    /// Settles the pending round without waiting out the delay.
    ///
    /// Returns `false` if no round was resolving.
    pub fn settle(&self) -> bool {
        self.commit(|state| {
            let settled = state.settle();
            (settled, settled)
        })
    }

    /// Deals a new match from a freshly shuffled deck.
    ///
    /// Scores, log, center pile, and any pending settle are discarded. Valid in
    /// every phase.
    pub fn restart(&self) {
        let deck = self.rng.with(|rng| Deck::standard().shuffled(rng));
        let fresh = MatchState::from_deal(deck.deal(self.options.hand_size));

        let preempted = self.commit(|state| {
            let pending = state.timer.is_pending();
            *state = fresh;
            (pending, true)
        });
        info!(preempted, "match restarted");
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase()
    }

    /// Returns the player's score.
    pub fn player_score(&self) -> u32 {
        self.state.lock().player_score()
    }

    /// Returns the bot's score.
    pub fn bot_score(&self) -> u32 {
        self.state.lock().bot_score()
    }

    /// Returns the match options.
    #[must_use]
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Returns a snapshot of the current state.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::from(&*self.state.lock())
    }

    /// Runs `f` against the full match state, including the bot's cards and
    /// the draw pile.
    ///
    /// `f` runs with the state lock held. It must not call back into this
    /// match, which would deadlock.
    pub fn inspect<R>(&self, f: impl FnOnce(&MatchState) -> R) -> R {
        self.state.with(|state| f(state))
    }

    /// Registers an observer that receives a snapshot after every transition.
    ///
    /// Observers run after the state lock is released. They may read the
    /// match but must not issue commands or (un)subscribe from inside the
    /// callback.
    pub fn subscribe(
        &self,
        observer: impl FnMut(&MatchSnapshot) + Send + 'static,
    ) -> SubscriptionId {
        let id = self.observers.lock().insert(alloc::boxed::Box::new(observer));
        self.subscribers.fetch_add(1, Ordering::AcqRel);
        id
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.observers.lock().remove(id);
        if removed {
            self.subscribers.fetch_sub(1, Ordering::AcqRel);
        }
        removed
    }

    /// Applies `transition` under the state lock and delivers the resulting
    /// snapshot to observers when it reports a change.
    ///
    /// The snapshot is taken under the same lock as the transition and queued
    /// before the lock is released, so observers see every transition once,
    /// in commit order, even when commands race on several threads.
    fn commit<R>(&self, transition: impl FnOnce(&mut MatchState) -> (R, bool)) -> R {
        let (result, changed) = self.state.with(|state| {
            let (result, changed) = transition(state);
            if changed && self.subscribers.load(Ordering::Acquire) > 0 {
                self.outbox.lock().push_back(MatchSnapshot::from(&*state));
            }
            (result, changed)
        });

        if changed {
            self.flush();
        }
        result
    }

    /// Delivers queued snapshots. Whoever holds the observer lock drains the
    /// queue, including snapshots queued by other threads meanwhile.
    fn flush(&self) {
        let mut observers = self.observers.lock();
        loop {
            let next = self.outbox.lock().pop_front();
            let Some(snapshot) = next else {
                break;
            };
            observers.notify(&snapshot);
        }
    }
}
