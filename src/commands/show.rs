//! Lesson browser handler

use std::time::Instant;

use anyhow::Result;

use gitmaster::lessons::Route;
use gitmaster::tui::{lesson_app, LessonApp};

use super::{load_catalog, load_config};

/// Open the lesson browser at `path` (home when `None`).
#[cfg(not(tarpaulin_include))]
pub fn handle(path: Option<&str>) -> Result<()> {
    let catalog = load_catalog()?;
    let config = load_config()?;
    let route = match path {
        Some(path) => catalog.resolve(path),
        None => Route::Home,
    };
    let app = LessonApp::new(catalog, &config, route, Instant::now());
    lesson_app::run(app)
}
