//! Code snippet panel
//!
//! Lists a lesson's snippets with their 1-based numbers. The selected
//! snippet is highlighted and a snippet inside its copy window carries a
//! "✓ copied" marker.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::lessons::Snippet;
use crate::tui::theme::Theme;

/// Marker shown next to a freshly copied snippet.
pub const COPIED_MARKER: &str = "✓ copied";

/// Build the lines for a list of snippets.
pub fn build_snippet_lines(
    snippets: &[Snippet],
    selected: Option<usize>,
    copied: Option<usize>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, snippet) in snippets.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        let is_selected = selected == Some(i);
        let marker = if is_selected { "▶ " } else { "  " };
        let header_style = if is_selected {
            theme.accent_bold_style()
        } else {
            theme.text_style()
        };

        let mut header = vec![
            Span::styled(marker.to_string(), theme.accent_style()),
            Span::styled(format!("[{}] ", i + 1), header_style),
        ];
        if let Some(title) = &snippet.title {
            header.push(Span::styled(title.clone(), header_style));
            header.push(Span::raw(" "));
        }
        header.push(Span::styled(
            format!("({})", snippet.language),
            theme.text_secondary_style(),
        ));
        if copied == Some(i) {
            header.push(Span::raw("  "));
            header.push(Span::styled(
                COPIED_MARKER.to_string(),
                theme.success_style().add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(header));

        for code_line in snippet.code.lines() {
            lines.push(Line::from(Span::styled(
                format!("    {}", code_line),
                theme.command_style(),
            )));
        }
    }
    lines
}

/// Bordered snippet panel.
pub struct SnippetPanel<'a> {
    snippets: &'a [Snippet],
    selected: Option<usize>,
    copied: Option<usize>,
    theme: &'a Theme,
}

impl<'a> SnippetPanel<'a> {
    pub fn new(snippets: &'a [Snippet], theme: &'a Theme) -> Self {
        Self {
            snippets,
            selected: None,
            copied: None,
            theme,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn copied(mut self, copied: Option<usize>) -> Self {
        self.copied = copied;
        self
    }

    /// Rows needed to show every snippet, borders included.
    pub fn height(snippets: &[Snippet]) -> u16 {
        let code_lines: usize = snippets.iter().map(|s| s.code.lines().count()).sum();
        let rows = snippets.len() * 2 - usize::from(!snippets.is_empty()) + code_lines;
        (rows + 2).min(u16::MAX as usize) as u16
    }
}

impl Widget for SnippetPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.text_secondary_style())
            .title(Span::styled(" Snippets ", self.theme.text_style()));
        let lines = build_snippet_lines(self.snippets, self.selected, self.copied, self.theme);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
