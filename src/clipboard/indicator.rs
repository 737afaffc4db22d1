//! Transient "copied" indicator for code snippets.
//!
//! After a successful copy the indicator stays on for a fixed window and
//! then clears itself on the next tick. A failed copy is logged and leaves
//! the indicator untouched.

use std::time::{Duration, Instant};

use tracing::warn;

use super::copy::Copy;
use super::error::ClipboardError;
use super::result::CopyResult;

/// Default time the "copied" state stays visible.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(2);

/// Copy feedback for one snippet (or one screen of snippets).
#[derive(Debug, Clone)]
pub struct CopyIndicator {
    window: Duration,
    copied_until: Option<Instant>,
    /// Which snippet the indicator belongs to
    target: Option<usize>,
}

impl CopyIndicator {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            copied_until: None,
            target: None,
        }
    }

    /// Copy `text` and light the indicator on success.
    ///
    /// A failure is logged and handed back so the caller can show its
    /// cause; the indicator stays off.
    pub fn copy(
        &mut self,
        copier: &Copy,
        target: usize,
        text: &str,
        now: Instant,
    ) -> Result<CopyResult, ClipboardError> {
        let result = copier.text(text);
        match &result {
            Ok(_) => self.mark_copied(target, now),
            Err(e) => warn!(error = %e, "failed to copy snippet"),
        }
        result
    }

    /// Turn the indicator on for `target` until `now + window`.
    pub fn mark_copied(&mut self, target: usize, now: Instant) {
        self.copied_until = Some(now + self.window);
        self.target = Some(target);
    }

    /// Whether `target` currently shows the copied state.
    pub fn is_copied(&self, target: usize, now: Instant) -> bool {
        self.target == Some(target) && self.copied_until.is_some_and(|until| now < until)
    }

    /// Whether any snippet currently shows the copied state.
    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }

    /// Clear the indicator once its window has passed.
    ///
    /// Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.copied_until {
            Some(until) if now >= until => {
                self.copied_until = None;
                self.target = None;
                true
            }
            _ => false,
        }
    }

    /// When the indicator will clear, if it is on.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.copied_until
    }

    /// Drop any pending state (used when leaving a page).
    pub fn clear(&mut self) {
        self.copied_until = None;
        self.target = None;
    }
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
