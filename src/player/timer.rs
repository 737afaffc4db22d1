//! Cancellable deadline timers for the terminal player.
//!
//! The player never sleeps. It schedules deadlines here and the owner's
//! event loop calls back with the current time. Every timer carries the
//! epoch it was scheduled in; bumping the epoch cancels everything that
//! was pending, so a timer armed for one turn can never fire into the next.

use std::time::Instant;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Reveal the next character of the current input
    TypeChar,
    /// Show the current turn's output and explanation
    Reveal,
    /// Autoplay: move on to the next turn and start typing it
    AutoAdvance,
}

/// A scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub due: Instant,
    pub kind: TimerKind,
    epoch: u64,
}

/// Deadline queue with epoch-based cancellation.
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    epoch: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current epoch. Timers from older epochs are never delivered.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Schedule a timer in the current epoch.
    pub fn schedule(&mut self, due: Instant, kind: TimerKind) {
        self.timers.push(Timer {
            due,
            kind,
            epoch: self.epoch,
        });
    }

    /// Cancel every pending timer and start a new epoch.
    pub fn cancel_all(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.timers.clear();
    }

    /// Number of timers still waiting (current epoch only).
    pub fn pending(&self) -> usize {
        self.timers.iter().filter(|t| t.epoch == self.epoch).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }

    /// Earliest deadline among live timers.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers
            .iter()
            .filter(|t| t.epoch == self.epoch)
            .map(|t| t.due)
            .min()
    }

    /// Remove and return the earliest live timer due at or before `now`.
    ///
    /// Stale timers encountered on the way are dropped. Ties keep
    /// scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<Timer> {
        let epoch = self.epoch;
        self.timers.retain(|t| t.epoch == epoch);

        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(i, t)| (t.due, *i))
            .map(|(i, _)| i)?;

        Some(self.timers.remove(idx))
    }
}
