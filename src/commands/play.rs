//! Play command handler
//!
//! Plays a lesson's terminal session inline on stdout. The same
//! `TerminalPlayer` that drives the TUI runs here; this loop sleeps until
//! its next deadline, fires one timer and prints whatever became visible.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use gitmaster::player::Phase;
use gitmaster::tui::Theme;
use gitmaster::{Lesson, PlayMode, TerminalPlayer, Timing};

use super::{load_catalog, load_config, output_theme, styled};

/// Play a lesson inline.
#[cfg(not(tarpaulin_include))]
pub fn handle(path: &str, interactive: bool) -> Result<()> {
    let catalog = load_catalog()?;
    let config = load_config()?;
    let lesson = catalog.find(path)?;
    let mode = PlayMode::from_interactive(interactive);
    info!(path = %lesson.path, ?mode, "playing lesson inline");

    let theme = output_theme(&config);
    let stdout = io::stdout();
    let stdin = io::stdin();
    play_lesson(
        lesson,
        mode,
        config.timing(),
        theme.as_ref(),
        &mut stdout.lock(),
        &mut stdin.lock(),
    )
}

/// Play `lesson` to `out`, reading Enter presses from `input` in
/// interactive mode. Stops early when `input` reaches end of file.
pub fn play_lesson<W: Write, R: BufRead>(
    lesson: &Lesson,
    mode: PlayMode,
    timing: Timing,
    theme: Option<&Theme>,
    out: &mut W,
    input: &mut R,
) -> Result<()> {
    writeln!(out, "{}", styled(theme, &lesson.title, Theme::accent_text))?;
    writeln!(
        out,
        "{}",
        styled(theme, &lesson.description, Theme::secondary_text)
    )?;
    writeln!(out)?;

    let mut player = TerminalPlayer::new(lesson.script(), mode, timing, Instant::now());
    let mut view = InlineView::new(theme);

    loop {
        view.sync(&player, out)?;
        if player.is_finished() {
            break;
        }

        if let Some(deadline) = player.next_deadline() {
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            }
            player.step(Instant::now());
            continue;
        }

        if player.can_run() {
            if !wait_for_enter(out, input, "run", theme)? {
                break;
            }
            player.run(Instant::now());
        } else if player.can_advance() {
            if !wait_for_enter(out, input, "continue", theme)? {
                break;
            }
            player.advance();
        } else {
            break;
        }
    }

    player.teardown();
    out.flush()?;
    Ok(())
}

/// Print a hint and block until a line is read. Returns false at EOF.
fn wait_for_enter<W: Write, R: BufRead>(
    out: &mut W,
    input: &mut R,
    action: &str,
    theme: Option<&Theme>,
) -> Result<bool> {
    let hint = format!("[Enter] {}", action);
    write!(out, "{} ", styled(theme, &hint, Theme::secondary_text))?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        writeln!(out)?;
    }
    Ok(read > 0)
}

/// Tracks what of the current turn has already been printed.
struct InlineView<'t> {
    theme: Option<&'t Theme>,
    index: Option<usize>,
    printed_chars: usize,
    prompt_open: bool,
    revealed: bool,
}

impl<'t> InlineView<'t> {
    fn new(theme: Option<&'t Theme>) -> Self {
        Self {
            theme,
            index: None,
            printed_chars: 0,
            prompt_open: false,
            revealed: false,
        }
    }

    /// Print everything the player shows that has not been printed yet.
    fn sync<W: Write>(&mut self, player: &TerminalPlayer, out: &mut W) -> Result<()> {
        let index = player.current_index();
        if self.index != Some(index) {
            self.index = Some(index);
            self.printed_chars = 0;
            self.prompt_open = false;
            self.revealed = false;
        }
        if player.phase() == Phase::Idle {
            return Ok(());
        }

        if !self.prompt_open {
            write!(out, "{} ", styled(self.theme, "$", Theme::prompt_text))?;
            self.prompt_open = true;
        }

        let fresh: String = player
            .typed_prefix()
            .chars()
            .skip(self.printed_chars)
            .collect();
        if !fresh.is_empty() {
            self.printed_chars += fresh.chars().count();
            write!(out, "{}", fresh)?;
        }

        if player.output_revealed() && !self.revealed {
            self.revealed = true;
            writeln!(out)?;
            if let Some(turn) = player.current_turn() {
                if turn.has_output() {
                    writeln!(out, "{}", turn.output)?;
                }
                if let Some(explanation) = &turn.explanation {
                    writeln!(
                        out,
                        "{} {}",
                        styled(self.theme, "Explanation:", Theme::explanation_text),
                        explanation
                    )?;
                }
            }
            writeln!(out)?;
        }

        out.flush()?;
        Ok(())
    }
}
