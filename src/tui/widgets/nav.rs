//! Navigation sidebar
//!
//! Lists the home page and every lesson in catalog order, highlights the
//! current page and shows lesson progress.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::lessons::{Catalog, HOME_TAGLINE, HOME_TITLE};
use crate::tui::theme::Theme;

/// Width of the text progress bar.
const PROGRESS_WIDTH: usize = 12;

/// Columns left for an entry label inside the bordered sidebar, after the
/// cursor marker.
const LABEL_WIDTH: usize = 24;

/// Shorten `text` to at most `max_width` display columns, ending in `…`.
pub fn truncate_label(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Progress label for the lesson at `current` (`None` on non-lesson pages).
pub fn progress_label(current: Option<usize>, total: usize) -> String {
    let done = current.map_or(0, |i| i + 1).min(total);
    format!("Progress {}/{}", done, total)
}

/// A `[####----]` bar for the same progress.
pub fn progress_bar(current: Option<usize>, total: usize) -> String {
    let done = current.map_or(0, |i| i + 1).min(total);
    let filled = if total == 0 {
        0
    } else {
        done * PROGRESS_WIDTH / total
    };
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

/// Build the sidebar lines.
///
/// `current` is the open lesson, `cursor` the highlighted entry
/// (0 is home, `n` is lesson `n - 1`).
pub fn build_nav_lines(
    catalog: &Catalog,
    current: Option<usize>,
    cursor: Option<usize>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            HOME_TITLE.to_string(),
            theme.accent_bold_style(),
        )),
        Line::from(Span::styled(
            HOME_TAGLINE.to_string(),
            theme.text_secondary_style(),
        )),
        Line::from(""),
    ];

    let entry = |label: String, is_current: bool, is_cursor: bool| {
        let marker = if is_cursor { "> " } else { "  " };
        let style = if is_current {
            theme.accent_bold_style()
        } else {
            theme.text_style()
        };
        let style = if is_cursor {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        };
        Line::from(vec![
            Span::styled(marker.to_string(), theme.accent_style()),
            Span::styled(truncate_label(&label, LABEL_WIDTH), style),
        ])
    };

    lines.push(entry("Home".to_string(), current.is_none(), cursor == Some(0)));
    for (i, lesson) in catalog.lessons().iter().enumerate() {
        lines.push(entry(
            format!("{}. {}", i + 1, lesson.title),
            current == Some(i),
            cursor == Some(i + 1),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        progress_label(current, catalog.len()),
        theme.text_secondary_style(),
    )));
    lines.push(Line::from(Span::styled(
        progress_bar(current, catalog.len()),
        theme.success_style(),
    )));
    lines
}

/// Bordered navigation sidebar.
pub struct NavSidebar<'a> {
    catalog: &'a Catalog,
    current: Option<usize>,
    cursor: Option<usize>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> NavSidebar<'a> {
    pub fn new(catalog: &'a Catalog, current: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            catalog,
            current,
            cursor: None,
            focused: false,
            theme,
        }
    }

    /// Highlight `cursor` and draw the focused border.
    pub fn focused(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self.focused = true;
        self
    }
}

impl Widget for NavSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.accent_style()
        } else {
            self.theme.text_secondary_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Lessons ");
        let lines = build_nav_lines(self.catalog, self.current, self.cursor, self.theme);
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
