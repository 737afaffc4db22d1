//! The scripted terminal player.
//!
//! `TerminalPlayer` animates a [`Script`]: it types each turn's input one
//! character per tick, waits the reveal delay, then shows the output. In
//! interactive mode the user drives it with `run`, `advance` and `reset`;
//! in autoplay mode it walks through the whole script on its own.
//!
//! All methods take the current time explicitly. The owner's event loop
//! decides when to call [`TerminalPlayer::tick`], usually at
//! [`TerminalPlayer::next_deadline`].

use std::time::Instant;

use tracing::{debug, trace};

use super::state::{Phase, PlaybackState, Timing};
use super::timer::{TimerKind, TimerQueue};
use crate::script::{Script, Turn};

/// Playback mode of a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    /// Every turn plays automatically, no user controls
    #[default]
    Autoplay,
    /// The user runs and advances each turn
    Interactive,
}

impl PlayMode {
    pub fn from_interactive(interactive: bool) -> Self {
        if interactive {
            PlayMode::Interactive
        } else {
            PlayMode::Autoplay
        }
    }
}

/// Animated playback of one script.
#[derive(Debug)]
pub struct TerminalPlayer {
    script: Script,
    mode: PlayMode,
    timing: Timing,
    state: PlaybackState,
    timers: TimerQueue,
    torn_down: bool,
}

impl TerminalPlayer {
    /// Create a player. Autoplay starts typing the first turn at `now`.
    pub fn new(script: Script, mode: PlayMode, timing: Timing, now: Instant) -> Self {
        let mut player = Self {
            script,
            mode,
            timing,
            state: PlaybackState::new(),
            timers: TimerQueue::new(),
            torn_down: false,
        };
        debug!(
            turns = player.script.len(),
            ?mode,
            "terminal player mounted"
        );
        if player.mode == PlayMode::Autoplay {
            player.start_typing(now);
        }
        player
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == PlayMode::Interactive
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_turn(&self) -> Option<&Turn> {
        self.script.get(self.state.current_index)
    }

    /// Prefix of the current input typed so far.
    pub fn typed_prefix(&self) -> &str {
        &self.state.typed_prefix
    }

    pub fn is_typing(&self) -> bool {
        self.state.is_typing
    }

    pub fn output_revealed(&self) -> bool {
        self.state.output_revealed
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether the user may start the current turn.
    pub fn can_run(&self) -> bool {
        self.is_interactive() && self.run_allowed()
    }

    /// Whether the user may move to the next turn.
    pub fn can_advance(&self) -> bool {
        self.is_interactive() && self.advance_allowed()
    }

    /// Whether the last turn has been revealed (always true when empty).
    pub fn is_finished(&self) -> bool {
        match self.script.last_index() {
            None => true,
            Some(last) => self.state.current_index == last && self.state.output_revealed,
        }
    }

    /// Number of turns whose output has been revealed.
    pub fn revealed_count(&self) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        self.state.current_index + usize::from(self.state.output_revealed)
    }

    /// Earliest pending timer, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.torn_down {
            return None;
        }
        self.timers.next_deadline()
    }

    /// Run the current turn (interactive mode only).
    ///
    /// No-op while typing, during the reveal delay, or once the output is
    /// showing. Returns whether anything changed.
    pub fn run(&mut self, now: Instant) -> bool {
        if !self.can_run() {
            trace!(phase = ?self.phase(), "run ignored");
            return false;
        }
        self.start_typing(now);
        true
    }

    /// Move to the next turn (interactive mode only).
    ///
    /// Only effective once the current output is revealed and there is a
    /// next turn. Does not start typing.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            trace!(index = self.state.current_index, "advance ignored");
            return false;
        }
        self.move_to_next();
        true
    }

    /// Return to the first turn. Always permitted.
    ///
    /// Pending timers are cancelled. Autoplay starts over from turn 0.
    pub fn reset(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        self.timers.cancel_all();
        self.state.reset();
        debug!("terminal player reset");
        if self.mode == PlayMode::Autoplay {
            self.start_typing(now);
        }
    }

    /// Cancel every pending timer and stop reacting to ticks.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.timers.cancel_all();
        self.torn_down = true;
        debug!(index = self.state.current_index, "terminal player torn down");
    }

    /// Fire every timer due at or before `now`.
    ///
    /// Timers are applied in deadline order and follow-up timers are
    /// scheduled relative to the deadline that produced them, so a late
    /// tick catches up exactly. Returns whether the visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while self.step(now) {
            changed = true;
        }
        changed
    }

    /// Fire only the earliest timer due at or before `now`.
    ///
    /// Lets a renderer observe every intermediate state, even when several
    /// timers are due at once. Returns whether a timer fired.
    pub fn step(&mut self, now: Instant) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(timer) = self.timers.pop_due(now) else {
            return false;
        };
        match timer.kind {
            TimerKind::TypeChar => self.type_next_char(timer.due),
            TimerKind::Reveal => self.reveal(timer.due),
            TimerKind::AutoAdvance => {
                self.move_to_next();
                self.start_typing(timer.due);
            }
        }
        true
    }

    fn run_allowed(&self) -> bool {
        !self.torn_down && self.current_turn().is_some() && self.phase() == Phase::Idle
    }

    fn advance_allowed(&self) -> bool {
        match self.script.last_index() {
            Some(last) => {
                !self.torn_down && self.state.output_revealed && self.state.current_index < last
            }
            None => false,
        }
    }

    fn start_typing(&mut self, at: Instant) {
        let Some(turn) = self.current_turn() else {
            return;
        };
        let empty_input = turn.input.is_empty();
        self.state.clear_turn();
        self.state.is_typing = true;
        trace!(index = self.state.current_index, "typing started");
        if empty_input {
            self.finish_typing(at);
        } else {
            self.timers
                .schedule(at + self.timing.typing_interval, TimerKind::TypeChar);
        }
    }

    fn type_next_char(&mut self, at: Instant) {
        let Some(turn) = self.script.get(self.state.current_index) else {
            return;
        };
        if let Some(ch) = turn.input.chars().nth(self.state.typed_chars) {
            self.state.typed_prefix.push(ch);
            self.state.typed_chars += 1;
        }
        if self.state.typed_chars >= turn.input_len() {
            self.finish_typing(at);
        } else {
            self.timers
                .schedule(at + self.timing.typing_interval, TimerKind::TypeChar);
        }
    }

    fn finish_typing(&mut self, at: Instant) {
        self.state.is_typing = false;
        self.state.typing_done = true;
        self.timers
            .schedule(at + self.timing.reveal_delay, TimerKind::Reveal);
    }

    fn reveal(&mut self, at: Instant) {
        self.state.output_revealed = true;
        trace!(index = self.state.current_index, "output revealed");
        if self.mode == PlayMode::Autoplay && self.advance_allowed() {
            self.timers
                .schedule(at + self.timing.autoplay_pause, TimerKind::AutoAdvance);
        }
    }

    fn move_to_next(&mut self) {
        self.timers.cancel_all();
        self.state.current_index += 1;
        self.state.clear_turn();
        trace!(index = self.state.current_index, "advanced");
    }
}

impl Drop for TerminalPlayer {
    fn drop(&mut self) {
        self.teardown();
    }
}
