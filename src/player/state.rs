//! Player state management
//!
//! Contains the `PlaybackState` struct that tracks where a scripted
//! terminal is in its transcript, and the `Phase` derived from it.

use std::time::Duration;

/// How long autoplay leaves a revealed turn on screen before the next one.
pub const DEFAULT_AUTOPLAY_PAUSE: Duration = Duration::from_millis(2000);

/// Derived playback phase of the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing typed yet (or an empty script)
    Idle,
    /// Input is being typed out
    Typing,
    /// Typing finished, waiting out the reveal delay
    Revealing,
    /// Output and explanation are visible
    Revealed,
}

impl Phase {
    /// Short label for status lines.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "ready",
            Phase::Typing => "typing",
            Phase::Revealing => "running",
            Phase::Revealed => "done",
        }
    }
}

/// Timing of the typing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay between two typed characters
    pub typing_interval: Duration,
    /// Delay between the end of typing and the output reveal
    pub reveal_delay: Duration,
    /// Autoplay: delay between a reveal and the next turn starting
    pub autoplay_pause: Duration,
}

impl Timing {
    /// Zero delays everywhere. Useful for non-animated output.
    pub fn instant() -> Self {
        Self {
            typing_interval: Duration::ZERO,
            reveal_delay: Duration::ZERO,
            autoplay_pause: Duration::ZERO,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            typing_interval: Duration::from_millis(50),
            reveal_delay: Duration::from_millis(500),
            autoplay_pause: DEFAULT_AUTOPLAY_PAUSE,
        }
    }
}

/// Playback position within a script.
///
/// Invariant: `output_revealed` implies `!is_typing` and the whole input
/// has been typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Index of the current turn
    pub current_index: usize,
    /// Prefix of the current input revealed so far
    pub typed_prefix: String,
    /// Number of chars in `typed_prefix`
    pub typed_chars: usize,
    /// True while the typing animation runs
    pub is_typing: bool,
    /// True once typing has finished for the current turn
    pub typing_done: bool,
    /// True once output and explanation are visible
    pub output_revealed: bool,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the canonical initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clear per-turn progress (used when the turn changes).
    pub fn clear_turn(&mut self) {
        self.typed_prefix.clear();
        self.typed_chars = 0;
        self.is_typing = false;
        self.typing_done = false;
        self.output_revealed = false;
    }

    /// Derive the phase of the current turn.
    pub fn phase(&self) -> Phase {
        if self.output_revealed {
            Phase::Revealed
        } else if self.is_typing {
            Phase::Typing
        } else if self.typing_done {
            Phase::Revealing
        } else {
            Phase::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_correct_defaults() {
        let state = PlaybackState::new();

        assert_eq!(state.current_index, 0);
        assert!(state.typed_prefix.is_empty());
        assert!(!state.is_typing);
        assert!(!state.output_revealed);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut state = PlaybackState {
            current_index: 3,
            typed_prefix: "git".to_string(),
            typed_chars: 3,
            is_typing: false,
            typing_done: true,
            output_revealed: true,
        };

        state.reset();

        assert_eq!(state, PlaybackState::new());
    }

    #[test]
    fn clear_turn_keeps_index() {
        let mut state = PlaybackState {
            current_index: 2,
            typed_prefix: "git add".to_string(),
            typed_chars: 7,
            is_typing: true,
            typing_done: false,
            output_revealed: false,
        };

        state.clear_turn();

        assert_eq!(state.current_index, 2);
        assert!(state.typed_prefix.is_empty());
        assert!(!state.is_typing);
        assert!(!state.typing_done);
    }

    #[test]
    fn phase_follows_flags() {
        let mut state = PlaybackState::new();
        state.is_typing = true;
        state.typed_chars = 1;
        assert_eq!(state.phase(), Phase::Typing);

        state.is_typing = false;
        state.typing_done = true;
        state.typed_chars = 5;
        assert_eq!(state.phase(), Phase::Revealing);

        state.output_revealed = true;
        assert_eq!(state.phase(), Phase::Revealed);
    }

    #[test]
    fn default_timing_matches_animation_cadence() {
        let timing = Timing::default();
        assert_eq!(timing.typing_interval, Duration::from_millis(50));
        assert_eq!(timing.reveal_delay, Duration::from_millis(500));
        assert_eq!(Timing::instant().reveal_delay, Duration::ZERO);
    }
}
