//! Named-path routing between the home page and lessons.

use super::catalog::Catalog;

/// Page title shown on the home route.
pub const HOME_TITLE: &str = "GitMaster";
/// Tagline shown under the home title.
pub const HOME_TAGLINE: &str = "Learn Git & GitHub interactively";

/// A resolved page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing page with the lesson list
    Home,
    /// Lesson at this catalog index
    Lesson(usize),
    /// Nothing lives at this path
    NotFound(String),
}

impl Route {
    /// Path of this route, for status lines and logs.
    pub fn path<'a>(&'a self, catalog: &'a Catalog) -> &'a str {
        match self {
            Route::Home => "/",
            Route::Lesson(idx) => catalog.get(*idx).map(|l| l.path.as_str()).unwrap_or("/"),
            Route::NotFound(path) => path,
        }
    }
}

/// Normalize user input into a route path.
///
/// The leading slash is optional and a trailing slash is ignored, so
/// `branching`, `/branching` and `/branching/` are all `/branching`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    format!("/{}", trimmed)
}

impl Catalog {
    /// Resolve a path to a page.
    pub fn resolve(&self, path: &str) -> Route {
        let normalized = normalize_path(path);
        if normalized == "/" {
            return Route::Home;
        }
        match self.position(&normalized) {
            Some(idx) => Route::Lesson(idx),
            None => Route::NotFound(normalized),
        }
    }
}
