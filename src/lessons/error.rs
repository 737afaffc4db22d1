//! Lesson catalog errors.

/// Errors raised while loading or validating lessons.
#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    #[error("Failed to parse lesson '{source_name}': {source}")]
    Parse {
        source_name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Lesson '{path}' must start with '/'")]
    InvalidPath { path: String },

    #[error("Duplicate lesson path: {path}")]
    DuplicatePath { path: String },

    #[error("Lesson '{path}' turn {turn} has an empty command")]
    EmptyInput { path: String, turn: usize },

    #[error("Lesson '{path}' has no terminal turns")]
    EmptyScript { path: String },

    #[error("Lesson not found: {path}")]
    NotFound { path: String },

    #[error("Lesson '{path}' has no snippet {index} (it has {count})")]
    SnippetOutOfRange {
        path: String,
        index: usize,
        count: usize,
    },
}
