//! Lessons command handler

use anyhow::Result;
use serde::Serialize;

use gitmaster::tui::Theme;
use gitmaster::{Catalog, Lesson};

use super::{load_catalog, load_config, output_theme, styled};

/// One catalog entry as printed by `lessons --json`.
#[derive(Debug, Serialize)]
pub struct LessonSummary<'a> {
    pub path: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub interactive: bool,
    pub turns: usize,
    pub snippets: usize,
}

impl<'a> From<&'a Lesson> for LessonSummary<'a> {
    fn from(lesson: &'a Lesson) -> Self {
        Self {
            path: &lesson.path,
            title: &lesson.title,
            description: &lesson.description,
            interactive: lesson.interactive,
            turns: lesson.turns.len(),
            snippets: lesson.snippets.len(),
        }
    }
}

/// List lessons as an aligned table or as JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle(json: bool) -> Result<()> {
    let catalog = load_catalog()?;
    if json {
        println!("{}", render_json(&catalog)?);
    } else {
        let config = load_config()?;
        let theme = output_theme(&config);
        print!("{}", render_table(&catalog, theme.as_ref()));
    }
    Ok(())
}

/// Pretty JSON array of lesson summaries.
pub fn render_json(catalog: &Catalog) -> Result<String> {
    let summaries: Vec<LessonSummary> = catalog.lessons().iter().map(Into::into).collect();
    Ok(serde_json::to_string_pretty(&summaries)?)
}

/// One line per lesson: number, path, title.
pub fn render_table(catalog: &Catalog, theme: Option<&Theme>) -> String {
    let width = catalog
        .lessons()
        .iter()
        .map(|l| l.path.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, lesson) in catalog.lessons().iter().enumerate() {
        let path = format!("{:<width$}", lesson.path, width = width);
        out.push_str(&format!(
            "{:>2}. {}  {}\n",
            i + 1,
            styled(theme, &path, Theme::accent_text),
            styled(theme, &lesson.title, Theme::primary_text),
        ));
    }
    out
}
