//! Copy command handler

use anyhow::{bail, Context, Result};
use tracing::info;

use gitmaster::clipboard::copy_text_to_clipboard;
use gitmaster::lessons::Snippet;
use gitmaster::tui::Theme;
use gitmaster::Catalog;

use super::{load_catalog, load_config, output_theme, styled};

/// Copy snippet `index` (1-based) of the lesson at `path`.
#[cfg(not(tarpaulin_include))]
pub fn handle(path: &str, index: usize) -> Result<()> {
    let catalog = load_catalog()?;
    let config = load_config()?;
    let theme = output_theme(&config);

    let snippet = copyable_snippet(&catalog, path, index)?;
    let result = copy_text_to_clipboard(&snippet.code)
        .with_context(|| format!("Failed to copy snippet {} of {}", index, path))?;
    info!(path, index, tool = result.tool.name(), "snippet copied");

    let what = match &snippet.title {
        Some(title) => format!("\"{}\"", title),
        None => format!("snippet {}", index),
    };
    println!(
        "{}",
        styled(theme.as_ref(), &result.message(&what), Theme::success_text)
    );
    Ok(())
}

/// Look up snippet `index` of `path`, refusing display-only blocks.
fn copyable_snippet<'c>(catalog: &'c Catalog, path: &str, index: usize) -> Result<&'c Snippet> {
    let snippet = catalog.snippet(path, index)?;
    if !snippet.copyable {
        bail!("Snippet {} of {} is not copyable", index, path);
    }
    Ok(snippet)
}
