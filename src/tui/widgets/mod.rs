//! TUI widgets for gitmaster
//!
//! Reusable UI components for the lesson screens.

pub mod code_block;
pub mod nav;
pub mod prose;
pub mod terminal_view;

pub use code_block::{build_snippet_lines, SnippetPanel};
pub use nav::{build_nav_lines, NavSidebar};
pub use prose::{build_prose_lines, ProsePanel};
pub use terminal_view::{build_terminal_lines, TerminalView};
