//! Scripted terminal transcripts
//!
//! A [`Script`] is the ordered list of [`Turn`]s that a lesson's terminal
//! plays back. Scripts are plain data: nothing in them is parsed as a shell
//! command or executed.

use serde::{Deserialize, Serialize};

/// One scripted exchange: a command, its output, and an optional note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Text "typed" at the prompt
    pub input: String,
    /// Text shown once typing completes (empty means no output block)
    #[serde(default)]
    pub output: String,
    /// Supplementary text shown alongside the output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Turn {
    /// Create a turn without an explanation.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            explanation: None,
        }
    }

    /// Attach an explanation to this turn.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Number of characters the typing animation reveals.
    pub fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Whether this turn has an output block to show.
    pub fn has_output(&self) -> bool {
        !self.output.is_empty()
    }
}

/// Ordered, immutable sequence of turns.
///
/// Insertion order is playback order. There is no way to mutate a script
/// after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    turns: Vec<Turn>,
}

impl Script {
    pub fn new(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Turn> {
        self.turns.get(index)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Index of the last turn, or `None` for an empty script.
    pub fn last_index(&self) -> Option<usize> {
        self.turns.len().checked_sub(1)
    }
}

impl From<Vec<Turn>> for Script {
    fn from(turns: Vec<Turn>) -> Self {
        Self::new(turns)
    }
}

impl FromIterator<Turn> for Script {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
