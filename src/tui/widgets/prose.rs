//! Lesson reading panel
//!
//! Renders a lesson's headed prose sections followed by its tips. Inline
//! `code` spans are highlighted; the panel scrolls by whole lines.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::lessons::Section;
use crate::tui::theme::Theme;

/// Build the lines for a lesson's sections and tips.
pub fn build_prose_lines(sections: &[Section], tips: &[String], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in sections {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            section.heading.clone(),
            theme.accent_bold_style(),
        )));
        for line in section.lines() {
            lines.push(body_line(line, theme));
        }
    }

    if !tips.is_empty() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Tips".to_string(),
            theme.accent_bold_style(),
        )));
        for tip in tips {
            lines.push(body_line(&format!("• {}", tip), theme));
        }
    }
    lines
}

/// One body line: bullets in the accent color, backtick spans as code.
fn body_line(text: &str, theme: &Theme) -> Line<'static> {
    let (bullet, rest) = match text.strip_prefix("• ") {
        Some(rest) => (Some(Span::styled("• ".to_string(), theme.accent_style())), rest),
        None => (None, text),
    };
    let mut spans: Vec<Span<'static>> = bullet.into_iter().collect();
    spans.extend(code_spans(rest, theme.text_style(), theme.command_style()));
    Line::from(spans)
}

/// Split on backticks, alternating plain and code styles.
fn code_spans(text: &str, plain: Style, code: Style) -> Vec<Span<'static>> {
    text.split('`')
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            let style = if i % 2 == 1 { code } else { plain };
            Span::styled(part.to_string(), style)
        })
        .collect()
}

/// Bordered, scrollable reading panel.
pub struct ProsePanel<'a> {
    sections: &'a [Section],
    tips: &'a [String],
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> ProsePanel<'a> {
    pub fn new(sections: &'a [Section], tips: &'a [String], theme: &'a Theme) -> Self {
        Self {
            sections,
            tips,
            scroll: 0,
            theme,
        }
    }

    /// Skip the first `lines` wrapped lines.
    pub fn scroll(mut self, lines: u16) -> Self {
        self.scroll = lines;
        self
    }
}

impl Widget for ProsePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.text_secondary_style())
            .title(" Lesson ");
        Paragraph::new(build_prose_lines(self.sections, self.tips, self.theme))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
