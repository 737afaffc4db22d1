//! Embedded lesson catalog.
//!
//! Lessons ship inside the binary as TOML documents. The catalog keeps them
//! in navigation order; previous/next links follow that order.

use std::collections::HashSet;

use tracing::debug;

use super::error::LessonError;
use super::lesson::{Lesson, Snippet};

/// Built-in lesson sources in navigation order.
const BUILTIN_LESSONS: &[(&str, &str)] = &[
    (
        "01-what-is-git.toml",
        include_str!("../../lessons/01-what-is-git.toml"),
    ),
    (
        "02-installation.toml",
        include_str!("../../lessons/02-installation.toml"),
    ),
    (
        "03-basic-commands.toml",
        include_str!("../../lessons/03-basic-commands.toml"),
    ),
    (
        "04-repositories.toml",
        include_str!("../../lessons/04-repositories.toml"),
    ),
    (
        "05-branching.toml",
        include_str!("../../lessons/05-branching.toml"),
    ),
    (
        "06-github-basics.toml",
        include_str!("../../lessons/06-github-basics.toml"),
    ),
    (
        "07-collaboration.toml",
        include_str!("../../lessons/07-collaboration.toml"),
    ),
];

/// Ordered collection of lessons.
#[derive(Debug, Clone)]
pub struct Catalog {
    lessons: Vec<Lesson>,
}

impl Catalog {
    /// Load the lessons compiled into the binary.
    pub fn builtin() -> Result<Self, LessonError> {
        Self::from_sources(BUILTIN_LESSONS.iter().copied())
    }

    /// Parse and validate lessons from `(name, toml)` pairs.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, LessonError> {
        let lessons = sources
            .into_iter()
            .map(|(name, text)| {
                toml::from_str::<Lesson>(text).map_err(|source| LessonError::Parse {
                    source_name: name.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(lessons)
    }

    /// Build a catalog from already-parsed lessons.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self, LessonError> {
        validate(&lessons)?;
        debug!(count = lessons.len(), "lesson catalog loaded");
        Ok(Self { lessons })
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn get(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    /// Index of the lesson at `path` (exact match on the normalized path).
    pub fn position(&self, path: &str) -> Option<usize> {
        self.lessons.iter().position(|l| l.path == path)
    }

    /// Lesson before `index` in navigation order.
    pub fn prev(&self, index: usize) -> Option<&Lesson> {
        index.checked_sub(1).and_then(|i| self.lessons.get(i))
    }

    /// Lesson after `index` in navigation order.
    pub fn next(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index + 1)
    }

    /// Look up a lesson by path or slug.
    pub fn find(&self, path: &str) -> Result<&Lesson, LessonError> {
        let normalized = super::router::normalize_path(path);
        self.position(&normalized)
            .and_then(|i| self.lessons.get(i))
            .ok_or_else(|| LessonError::NotFound {
                path: path.to_string(),
            })
    }

    /// Look up a snippet by lesson path and 1-based number.
    pub fn snippet(&self, path: &str, number: usize) -> Result<&Snippet, LessonError> {
        let lesson = self.find(path)?;
        lesson
            .snippet(number)
            .ok_or_else(|| LessonError::SnippetOutOfRange {
                path: lesson.path.clone(),
                index: number,
                count: lesson.snippets.len(),
            })
    }
}

fn validate(lessons: &[Lesson]) -> Result<(), LessonError> {
    let mut seen = HashSet::new();
    for lesson in lessons {
        if !lesson.path.starts_with('/') || lesson.path.len() < 2 {
            return Err(LessonError::InvalidPath {
                path: lesson.path.clone(),
            });
        }
        if !seen.insert(lesson.path.as_str()) {
            return Err(LessonError::DuplicatePath {
                path: lesson.path.clone(),
            });
        }
        if lesson.turns.is_empty() {
            return Err(LessonError::EmptyScript {
                path: lesson.path.clone(),
            });
        }
        if let Some(i) = lesson.turns.iter().position(|t| t.input.is_empty()) {
            return Err(LessonError::EmptyInput {
                path: lesson.path.clone(),
                turn: i + 1,
            });
        }
    }
    Ok(())
}
