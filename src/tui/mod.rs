//! TUI (Text User Interface) module for GitMaster
//!
//! Terminal-based lesson browser built on ratatui/crossterm.

pub mod app;
pub mod lesson_app;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use lesson_app::LessonApp;
pub use theme::Theme;
