//! Terminal widget
//!
//! Renders the current turn of a [`TerminalPlayer`]: the prompt with the
//! typed prefix, the output and explanation once revealed, and the
//! interactive controls.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::player::TerminalPlayer;
use crate::tui::theme::Theme;

/// Prompt shown before every command.
pub const PROMPT: &str = "$";
/// Cursor drawn while typing.
pub const CURSOR: &str = "|";

/// Build the lines for the player's current turn.
///
/// `cursor_on` drives the blinking cursor; it is only drawn while typing.
pub fn build_terminal_lines(
    player: &TerminalPlayer,
    theme: &Theme,
    cursor_on: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut prompt = vec![
        Span::styled(PROMPT.to_string(), theme.prompt_style()),
        Span::raw(" "),
        Span::styled(player.typed_prefix().to_string(), theme.command_style()),
    ];
    if player.is_typing() && cursor_on {
        prompt.push(Span::styled(
            CURSOR.to_string(),
            theme.command_style().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    lines.push(Line::from(prompt));

    if player.output_revealed() {
        if let Some(turn) = player.current_turn() {
            if turn.has_output() {
                for line in turn.output.lines() {
                    lines.push(Line::from(Span::styled(
                        line.to_string(),
                        theme.output_style(),
                    )));
                }
            }
            if let Some(explanation) = &turn.explanation {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled(
                        "Explanation: ".to_string(),
                        theme.explanation_style().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(explanation.clone(), theme.text_style()),
                ]));
            }
        }
    }

    if player.is_interactive() && !player.script().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(control_spans(player, theme)));
    }

    lines
}

fn control_spans(player: &TerminalPlayer, theme: &Theme) -> Vec<Span<'static>> {
    let enabled = |on: bool| {
        if on {
            theme.accent_bold_style()
        } else {
            theme.text_secondary_style()
        }
    };
    let mut spans = vec![Span::styled(
        "[r] Run Command".to_string(),
        enabled(player.can_run()),
    )];
    if player.can_advance() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "[n] Next Command".to_string(),
            enabled(true),
        ));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "[x] Reset".to_string(),
        Style::default().fg(theme.text_primary),
    ));
    spans
}

/// Bordered terminal panel.
pub struct TerminalView<'a> {
    player: &'a TerminalPlayer,
    theme: &'a Theme,
    cursor_on: bool,
}

impl<'a> TerminalView<'a> {
    pub fn new(player: &'a TerminalPlayer, theme: &'a Theme) -> Self {
        Self {
            player,
            theme,
            cursor_on: true,
        }
    }

    pub fn cursor_on(mut self, on: bool) -> Self {
        self.cursor_on = on;
        self
    }

    fn step_label(&self) -> String {
        let total = self.player.script().len();
        if total == 0 {
            return String::new();
        }
        format!(
            " step {}/{} · {} ",
            self.player.current_index() + 1,
            total,
            self.player.phase().label()
        )
    }
}

impl Widget for TerminalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.text_secondary_style())
            .title(Span::styled(" Git Terminal ", self.theme.text_style()))
            .title_bottom(Line::from(self.step_label()).right_aligned());

        let lines = build_terminal_lines(self.player, self.theme, self.cursor_on);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
