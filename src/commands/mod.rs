//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod copy;
pub mod lessons;
pub mod play;
pub mod show;

use std::io::IsTerminal;

use anyhow::{Context, Result};
use gitmaster::tui::Theme;
use gitmaster::{Catalog, Config};

/// Theme for colored CLI output, or `None` when stdout is not a terminal
/// or `NO_COLOR` is set.
pub fn output_theme(config: &Config) -> Option<Theme> {
    if std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
        return None;
    }
    Some(Theme::by_name(&config.ui.theme).unwrap_or_default())
}

/// Paint `text` with `paint` when colors are on.
pub fn styled(theme: Option<&Theme>, text: &str, paint: fn(&Theme, &str) -> String) -> String {
    match theme {
        Some(theme) => paint(theme, text),
        None => text.to_string(),
    }
}

/// Load the embedded lesson catalog.
pub fn load_catalog() -> Result<Catalog> {
    Catalog::builtin().context("Failed to load built-in lessons")
}

/// Load the user config.
pub fn load_config() -> Result<Config> {
    Config::load().context("Failed to load config")
}
