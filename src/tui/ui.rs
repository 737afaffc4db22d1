//! UI rendering helpers for TUI
//!
//! Common layout helpers shared by the screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Narrowest lesson body that still gets prose and terminal side by side.
const TWO_COLUMN_WIDTH: u16 = 80;

/// Split a lesson body into the reading panel and the terminal column.
///
/// Wide bodies put the prose on the left; narrow ones stack it on top.
pub fn split_lesson_body(area: Rect) -> (Rect, Rect) {
    let (direction, constraints) = if area.width >= TWO_COLUMN_WIDTH {
        (
            Direction::Horizontal,
            [Constraint::Percentage(40), Constraint::Percentage(60)],
        )
    } else {
        (
            Direction::Vertical,
            [Constraint::Percentage(35), Constraint::Percentage(65)],
        )
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    (chunks[0], chunks[1])
}

/// A fixed-size rect centered in `area`, clamped to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Split a lesson screen into sidebar and main column.
pub fn split_sidebar(area: Rect, show_sidebar: bool) -> (Option<Rect>, Rect) {
    if !show_sidebar || area.width < 60 {
        return (None, area);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(30)])
        .split(area);
    (Some(chunks[0]), chunks[1])
}
