//! GitMaster - learn Git and GitHub interactively from your terminal
//!
//! Lessons pair explanatory text with a scripted terminal session. The
//! [`player::TerminalPlayer`] types each command out and reveals its
//! output; [`clipboard`] copies lesson snippets; [`tui`] ties both into a
//! lesson browser.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod lessons;
pub mod logging;
pub mod player;
pub mod script;
pub mod tui;

pub use config::Config;
pub use lessons::{Catalog, Lesson, Route};
pub use player::{PlayMode, TerminalPlayer, Timing};
pub use script::{Script, Turn};
