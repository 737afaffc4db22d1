//! Scripted terminal player module
//!
//! Plays back a lesson's terminal transcript: each turn's command is typed
//! out character by character, then its output is revealed after a short
//! delay.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlaybackState struct and shared types (Phase, Timing)
//! - `timer`: Deadline queue with epoch-based cancellation
//! - `terminal`: The `TerminalPlayer` state machine driving both
//!
//! # Usage
//!
//! ```
//! use gitmaster::player::{PlayMode, TerminalPlayer, Timing};
//! use gitmaster::script::{Script, Turn};
//! use std::time::{Duration, Instant};
//!
//! let script = Script::new(vec![Turn::new("git status", "On branch main")]);
//! let t0 = Instant::now();
//! let mut player = TerminalPlayer::new(script, PlayMode::Interactive, Timing::default(), t0);
//!
//! player.run(t0);
//! player.tick(t0 + Duration::from_secs(5));
//! assert_eq!(player.typed_prefix(), "git status");
//! assert!(player.output_revealed());
//! ```

pub mod state;
mod terminal;
pub mod timer;

pub use state::{Phase, PlaybackState, Timing};
pub use terminal::{PlayMode, TerminalPlayer};
