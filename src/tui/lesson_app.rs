//! Lesson browser TUI application
//!
//! One screen per route: the home page, a lesson page (prose, terminal,
//! snippets) or a not-found page. A lesson page owns one `TerminalPlayer`;
//! navigating away tears it down so none of its timers outlive the page.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::{debug, info, warn};

use super::app::status_footer::{render_footer, render_status_line};
use super::app::App;
use super::theme::Theme;
use super::ui::{centered_fixed, split_lesson_body, split_sidebar};
use super::widgets::{build_prose_lines, NavSidebar, ProsePanel, SnippetPanel, TerminalView};
use crate::clipboard::{Copy, CopyIndicator};
use crate::config::Config;
use crate::lessons::{Catalog, Route, HOME_TAGLINE, HOME_TITLE};
use crate::player::{TerminalPlayer, Timing};

/// Upper bound on how long the loop waits for input between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(250);

/// Cursor blink half-period.
const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Lines moved by one prose scroll key press.
const PROSE_PAGE: u16 = 5;

/// UI mode for the lesson application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help mode - showing keyboard shortcuts
    Help,
}

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The page itself (terminal and snippets)
    #[default]
    Content,
    /// The lesson sidebar
    Sidebar,
}

/// Lesson browser state.
pub struct LessonApp {
    catalog: Catalog,
    route: Route,
    player: Option<TerminalPlayer>,
    indicator: CopyIndicator,
    copier: Copy,
    timing: Timing,
    theme: Theme,
    mode: Mode,
    focus: Focus,
    show_sidebar: bool,
    /// Selected snippet on a lesson page (0-based)
    selected_snippet: usize,
    /// Highlighted entry on the home list and sidebar (0 is home)
    nav_cursor: usize,
    /// First visible line of the lesson prose
    prose_scroll: u16,
    status_message: Option<String>,
    page_opened: Instant,
    should_quit: bool,
}

impl LessonApp {
    /// Create the app and open `route`.
    pub fn new(catalog: Catalog, config: &Config, route: Route, now: Instant) -> Self {
        let theme = Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
            warn!(theme = %config.ui.theme, "unknown theme, using default");
            Theme::default()
        });
        let mut app = Self {
            catalog,
            route: Route::Home,
            player: None,
            indicator: CopyIndicator::new(config.indicator_window()),
            copier: Copy::new(),
            timing: config.timing(),
            theme,
            mode: Mode::Normal,
            focus: Focus::Content,
            show_sidebar: config.ui.show_sidebar,
            selected_snippet: 0,
            nav_cursor: 0,
            prose_scroll: 0,
            status_message: None,
            page_opened: now,
            should_quit: false,
        };
        app.navigate(route, now);
        app
    }

    /// Replace the clipboard orchestrator (used by tests).
    pub fn with_copier(mut self, copier: Copy) -> Self {
        self.copier = copier;
        self
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn player(&self) -> Option<&TerminalPlayer> {
        self.player.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected_snippet(&self) -> usize {
        self.selected_snippet
    }

    pub fn prose_scroll(&self) -> u16 {
        self.prose_scroll
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn indicator(&self) -> &CopyIndicator {
        &self.indicator
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Open another page, tearing down the current lesson's player.
    pub fn navigate(&mut self, route: Route, now: Instant) {
        if let Some(mut player) = self.player.take() {
            player.teardown();
        }
        self.indicator.clear();
        self.selected_snippet = 0;
        self.prose_scroll = 0;
        self.status_message = None;
        self.page_opened = now;

        match &route {
            Route::Lesson(idx) => {
                if let Some(lesson) = self.catalog.get(*idx) {
                    info!(path = %lesson.path, "opening lesson");
                    self.player = Some(TerminalPlayer::new(
                        lesson.script(),
                        lesson.play_mode(),
                        self.timing,
                        now,
                    ));
                }
                self.nav_cursor = idx + 1;
            }
            Route::Home => {
                self.nav_cursor = 0;
            }
            Route::NotFound(path) => {
                info!(path = %path, "page not found");
                self.nav_cursor = 0;
            }
        }
        self.route = route;
    }

    /// Current lesson index, if a lesson page is open.
    fn lesson_index(&self) -> Option<usize> {
        match self.route {
            Route::Lesson(idx) => Some(idx),
            _ => None,
        }
    }

    /// Fire due timers. Returns whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(player) = self.player.as_mut() {
            changed |= player.tick(now);
        }
        changed |= self.indicator.tick(now);
        changed
    }

    /// Earliest pending deadline across the player and the indicator.
    pub fn next_deadline(&self) -> Option<Instant> {
        let player = self.player.as_ref().and_then(|p| p.next_deadline());
        match (player, self.indicator.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// How long to wait for input before the next tick.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.next_deadline()
            .map(|d| d.saturating_duration_since(now))
            .unwrap_or(FRAME_INTERVAL)
            .min(FRAME_INTERVAL)
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Help => self.mode = Mode::Normal,
            Mode::Normal => match self.focus {
                Focus::Sidebar => self.handle_sidebar_key(key, now),
                Focus::Content => self.handle_content_key(key, now),
            },
        }
    }

    fn handle_content_key(&mut self, key: KeyEvent, now: Instant) {
        self.status_message = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Char('h') => self.navigate(Route::Home, now),
            KeyCode::Char(']') => self.open_relative(1, now),
            KeyCode::Char('[') => self.open_relative(-1, now),
            KeyCode::Tab => self.toggle_sidebar_focus(),
            _ => match self.route {
                Route::Home => self.handle_home_key(key, now),
                Route::Lesson(_) => self.handle_lesson_key(key, now),
                Route::NotFound(_) => {}
            },
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_nav_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_nav_cursor(-1),
            KeyCode::Enter => self.open_nav_cursor(now),
            _ => {}
        }
    }

    fn handle_lesson_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => {
                if let Some(player) = self.player.as_mut() {
                    player.run(now);
                }
            }
            KeyCode::Char('n') => {
                if let Some(player) = self.player.as_mut() {
                    player.advance();
                }
            }
            KeyCode::Char('x') => {
                if let Some(player) = self.player.as_mut() {
                    player.reset(now);
                }
            }
            KeyCode::Char('c') => self.copy_selected(now),
            KeyCode::Down | KeyCode::Char('j') => self.move_snippet(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_snippet(-1),
            KeyCode::PageDown | KeyCode::Char('d') => self.scroll_prose(true),
            KeyCode::PageUp | KeyCode::Char('u') => self.scroll_prose(false),
            _ => {}
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::Esc => self.focus = Focus::Content,
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Down | KeyCode::Char('j') => self.move_nav_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_nav_cursor(-1),
            KeyCode::Enter => {
                self.open_nav_cursor(now);
                self.focus = Focus::Content;
            }
            _ => {}
        }
    }

    fn toggle_sidebar_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Content => {
                self.show_sidebar = true;
                Focus::Sidebar
            }
            Focus::Sidebar => Focus::Content,
        };
    }

    fn move_nav_cursor(&mut self, delta: isize) {
        let max = self.catalog.len();
        self.nav_cursor = step(self.nav_cursor, delta, max);
    }

    fn open_nav_cursor(&mut self, now: Instant) {
        let route = match self.nav_cursor {
            0 => Route::Home,
            n => Route::Lesson(n - 1),
        };
        if route != self.route {
            self.navigate(route, now);
        }
    }

    /// Open the next (`1`) or previous (`-1`) lesson in catalog order.
    fn open_relative(&mut self, delta: isize, now: Instant) {
        let target = match (self.lesson_index(), delta.is_positive()) {
            (Some(idx), true) => self.catalog.next(idx).map(|_| idx + 1),
            (Some(idx), false) => self.catalog.prev(idx).map(|_| idx - 1),
            (None, true) if !self.catalog.is_empty() => Some(0),
            (None, _) => None,
        };
        match target {
            Some(idx) => self.navigate(Route::Lesson(idx), now),
            None => {
                let edge = if delta.is_positive() { "last" } else { "first" };
                self.status_message = Some(format!("Already at the {} lesson", edge));
            }
        }
    }

    fn move_snippet(&mut self, delta: isize) {
        let count = self
            .lesson_index()
            .and_then(|i| self.catalog.get(i))
            .map_or(0, |l| l.snippets.len());
        if count == 0 {
            return;
        }
        self.selected_snippet = step(self.selected_snippet, delta, count - 1);
    }

    /// Scroll the reading panel by a page, never past its last line.
    fn scroll_prose(&mut self, down: bool) {
        let Some(lesson) = self.lesson_index().and_then(|i| self.catalog.get(i)) else {
            return;
        };
        if !down {
            self.prose_scroll = self.prose_scroll.saturating_sub(PROSE_PAGE);
            return;
        }
        let total = build_prose_lines(&lesson.sections, &lesson.tips, &self.theme).len();
        let max = u16::try_from(total.saturating_sub(1)).unwrap_or(u16::MAX);
        self.prose_scroll = self.prose_scroll.saturating_add(PROSE_PAGE).min(max);
    }

    fn copy_selected(&mut self, now: Instant) {
        let Some(lesson) = self.lesson_index().and_then(|i| self.catalog.get(i)) else {
            return;
        };
        let Some(snippet) = lesson.snippets.get(self.selected_snippet) else {
            self.status_message = Some("No snippet to copy".to_string());
            return;
        };
        if !snippet.copyable {
            self.status_message = Some("This snippet is not copyable".to_string());
            return;
        }

        let number = self.selected_snippet + 1;
        let message = match self
            .indicator
            .copy(&self.copier, self.selected_snippet, &snippet.code, now)
        {
            Ok(result) => {
                debug!(snippet = number, tool = result.tool.name(), "snippet copied");
                result.message(&format!("snippet {}", number))
            }
            Err(e) => format!("Copy failed: {}", e),
        };
        self.status_message = Some(message);
    }

    fn cursor_on(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.page_opened);
        (elapsed.as_millis() / BLINK_INTERVAL.as_millis()) % 2 == 0
    }
}

/// Move `current` by `delta`, clamped to `0..=max`.
fn step(current: usize, delta: isize, max: usize) -> usize {
    current.saturating_add_signed(delta).min(max)
}

// --- Rendering ---

impl LessonApp {
    /// Draw the whole screen.
    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let (sidebar, main) = split_sidebar(rows[0], self.show_sidebar);
        if let Some(sidebar) = sidebar {
            let mut nav = NavSidebar::new(&self.catalog, self.lesson_index(), &self.theme);
            if self.focus == Focus::Sidebar {
                nav = nav.focused(self.nav_cursor);
            }
            frame.render_widget(nav, sidebar);
        }

        match &self.route {
            Route::Home => self.render_home(frame, main),
            Route::Lesson(idx) => self.render_lesson(frame, main, *idx, now),
            Route::NotFound(path) => self.render_not_found(frame, main, path),
        }

        let status = self
            .status_message
            .clone()
            .unwrap_or_else(|| self.default_status());
        render_status_line(frame, rows[1], &status, &self.theme);
        render_footer(frame, rows[2], self.footer_keys(), &self.theme);

        if self.mode == Mode::Help {
            Self::render_help_modal(frame, area, &self.theme);
        }
    }

    fn render_home(&self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                HOME_TITLE.to_string(),
                theme.accent_bold_style(),
            )),
            Line::from(Span::styled(HOME_TAGLINE.to_string(), theme.text_style())),
            Line::from(""),
        ];
        for (i, lesson) in self.catalog.lessons().iter().enumerate() {
            let selected = self.focus == Focus::Content && self.nav_cursor == i + 1;
            let style = if selected {
                theme.accent_bold_style()
            } else {
                theme.text_style()
            };
            let marker = if selected { "> " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker.to_string(), theme.accent_style()),
                Span::styled(format!("{}. {}", i + 1, lesson.title), style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {}", lesson.description),
                theme.text_secondary_style(),
            )));
        }

        let page = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Home "))
            .wrap(Wrap { trim: false });
        frame.render_widget(page, area);
    }

    fn render_lesson(&self, frame: &mut Frame, area: Rect, idx: usize, now: Instant) {
        let Some(lesson) = self.catalog.get(idx) else {
            return;
        };
        let theme = &self.theme;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(8)])
            .split(area);
        let (prose_area, demo_area) = split_lesson_body(chunks[1]);
        let snippet_height = SnippetPanel::height(&lesson.snippets).min(demo_area.height / 2);
        let demo = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(snippet_height)])
            .split(demo_area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(lesson.title.clone(), theme.accent_bold_style())),
            Line::from(Span::styled(
                lesson.description.clone(),
                theme.text_secondary_style(),
            )),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(header, chunks[0]);

        let prose =
            ProsePanel::new(&lesson.sections, &lesson.tips, theme).scroll(self.prose_scroll);
        frame.render_widget(prose, prose_area);

        if let Some(player) = self.player.as_ref() {
            let view = TerminalView::new(player, theme).cursor_on(self.cursor_on(now));
            frame.render_widget(view, demo[0]);
        }

        if !lesson.snippets.is_empty() {
            let copied = (0..lesson.snippets.len()).find(|i| self.indicator.is_copied(*i, now));
            let panel = SnippetPanel::new(&lesson.snippets, theme)
                .selected(Some(self.selected_snippet))
                .copied(copied);
            frame.render_widget(panel, demo[1]);
        }
    }

    fn render_not_found(&self, frame: &mut Frame, area: Rect, path: &str) {
        let theme = &self.theme;
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("404".to_string(), theme.error_style())),
            Line::from(Span::styled(
                format!("Page not found: {}", path),
                theme.text_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press h to return home".to_string(),
                theme.text_secondary_style(),
            )),
        ];
        let page = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(page, area);
    }

    /// Render the help modal overlay.
    pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = centered_fixed(52, 27, area);
        frame.render_widget(Clear, modal_area);

        let help = Paragraph::new(build_help_text(theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent))
                    .title(" Help "),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(help, modal_area);
    }

    /// Status text when no message is pending: prev/next lesson titles.
    fn default_status(&self) -> String {
        let Some(idx) = self.lesson_index() else {
            return format!("{} lessons", self.catalog.len());
        };
        let prev = self
            .catalog
            .prev(idx)
            .map(|l| format!("\u{2190} {}", l.title));
        let next = self
            .catalog
            .next(idx)
            .map(|l| format!("{} \u{2192}", l.title));
        match (prev, next) {
            (Some(p), Some(n)) => format!("{}  |  {}", p, n),
            (Some(p), None) => p,
            (None, Some(n)) => n,
            (None, None) => String::new(),
        }
    }

    fn footer_keys(&self) -> &'static [(&'static str, &'static str)] {
        match (self.mode, self.focus, &self.route) {
            (Mode::Help, _, _) => &[("any key", "close help")],
            (_, Focus::Sidebar, _) => &[
                ("\u{2191}\u{2193}", "navigate"),
                ("Enter", "open"),
                ("Tab", "back"),
                ("q", "quit"),
            ],
            (_, _, Route::Lesson(_)) => &[
                ("r", "run"),
                ("n", "next"),
                ("x", "reset"),
                ("c", "copy"),
                ("d/u", "scroll"),
                ("[/]", "lesson"),
                ("?", "help"),
                ("q", "quit"),
            ],
            (_, _, Route::Home) => &[
                ("\u{2191}\u{2193}", "navigate"),
                ("Enter", "open"),
                ("Tab", "sidebar"),
                ("?", "help"),
                ("q", "quit"),
            ],
            (_, _, Route::NotFound(_)) => &[("h", "home"), ("q", "quit")],
        }
    }
}

/// Build the help text lines for the help modal.
fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), Style::default().fg(theme.accent)),
            Span::raw(desc),
        ])
    };
    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(theme.text_secondary)))
    };

    vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Terminal"),
        key("r / Enter", "Run command"),
        key("n", "Next command"),
        key("x", "Reset"),
        Line::from(""),
        heading("Snippets"),
        key("\u{2191}/\u{2193} j/k", "Select snippet"),
        key("c", "Copy to clipboard"),
        Line::from(""),
        heading("Reading"),
        key("d/u PgDn/Up", "Scroll lesson text"),
        Line::from(""),
        heading("Navigation"),
        key("] / [", "Next/previous lesson"),
        key("Tab", "Focus sidebar"),
        key("h", "Home"),
        Line::from(""),
        key("?", "This help"),
        key("q / Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme.text_secondary),
        )),
    ]
}

/// Run the lesson browser until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(mut state: LessonApp) -> Result<()> {
    let mut app = App::new()?;
    loop {
        let now = Instant::now();
        state.tick(now);
        app.draw(|frame| state.render(frame, now))?;
        if state.should_quit() {
            break;
        }

        let timeout = state.poll_timeout(Instant::now());
        if let Some(Event::Key(key)) = app.next_event(timeout)? {
            if key.kind == KeyEventKind::Press {
                state.handle_key(key, Instant::now());
            }
        }
    }
    app.restore()
}
