//! Lesson content and navigation.
//!
//! - `lesson`: Lesson and Snippet data types (serde)
//! - `catalog`: The embedded, ordered lesson catalog
//! - `router`: Path resolution (home, lesson, not found)

mod catalog;
mod error;
mod lesson;
mod router;

pub use catalog::Catalog;
pub use error::LessonError;
pub use lesson::{Lesson, Section, Snippet};
pub use router::{normalize_path, Route, HOME_TAGLINE, HOME_TITLE};
