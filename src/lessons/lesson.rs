//! Lesson and snippet data types.

use serde::{Deserialize, Serialize};

use crate::player::PlayMode;
use crate::script::{Script, Turn};

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "bash".to_string()
}

/// A copyable code block shown on a lesson page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub code: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_true")]
    pub copyable: bool,
}

/// A headed block of lesson prose.
///
/// `body` is plain text: blank lines separate paragraphs and lines starting
/// with `•` are list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

impl Section {
    /// Body lines with surrounding blank lines trimmed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.trim_matches('\n').lines().map(str::trim_end)
    }
}

/// One lesson page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Route path, e.g. `/basic-commands`
    pub path: String,
    pub title: String,
    pub description: String,
    /// Whether the terminal waits for the user between turns
    #[serde(default = "default_true")]
    pub interactive: bool,
    /// Reading material shown beside the terminal
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub turns: Vec<Turn>,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Lesson {
    /// Build the terminal script for this lesson.
    pub fn script(&self) -> Script {
        Script::new(self.turns.clone())
    }

    pub fn play_mode(&self) -> PlayMode {
        PlayMode::from_interactive(self.interactive)
    }

    /// Snippet by 1-based index, as shown to users.
    pub fn snippet(&self, number: usize) -> Option<&Snippet> {
        number.checked_sub(1).and_then(|i| self.snippets.get(i))
    }

    /// Path without the leading slash, used as a CLI-friendly slug.
    pub fn slug(&self) -> &str {
        self.path.trim_start_matches('/')
    }
}
