//! Integration tests for snippet copying and the copied indicator

use std::sync::{Arc, Mutex};
use std::time::Instant;

use gitmaster::clipboard::{
    ClipboardError, Copy, CopyIndicator, CopyMethod, CopyTool, CopyToolError,
};

use crate::helpers::ms;

/// Records what it was asked to copy.
struct RecordingTool {
    copied: Arc<Mutex<Vec<String>>>,
}

impl CopyTool for RecordingTool {
    fn method(&self) -> CopyMethod {
        CopyMethod::WlCopy
    }

    fn is_available(&self) -> bool {
        true
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Never installed.
struct MissingTool;

impl CopyTool for MissingTool {
    fn method(&self) -> CopyMethod {
        CopyMethod::Xsel
    }

    fn is_available(&self) -> bool {
        false
    }

    fn try_copy_text(&self, _text: &str) -> Result<(), CopyToolError> {
        Err(CopyToolError::NotFound)
    }
}

fn recording_copier() -> (Copy, Arc<Mutex<Vec<String>>>) {
    let copied = Arc::new(Mutex::new(Vec::new()));
    let tool = RecordingTool {
        copied: Arc::clone(&copied),
    };
    (Copy::with_tools(vec![Box::new(tool)]), copied)
}

#[test]
fn copying_git_add_shows_then_clears_indicator() {
    let t0 = Instant::now();
    let (copier, copied) = recording_copier();
    let mut indicator = CopyIndicator::new(ms(2_000));

    let result = indicator.copy(&copier, 0, "git add .", t0).unwrap();

    assert_eq!(result.tool, CopyMethod::WlCopy);
    assert_eq!(copied.lock().unwrap().as_slice(), ["git add ."]);
    assert!(indicator.is_copied(0, t0 + ms(1_999)));
    assert!(!indicator.is_copied(1, t0));

    assert!(!indicator.tick(t0 + ms(1_999)));
    assert!(indicator.tick(t0 + ms(2_000)));
    assert!(!indicator.is_active(t0 + ms(2_000)));
    assert!(indicator.next_deadline().is_none());
}

#[test]
fn copying_again_restarts_the_window() {
    let t0 = Instant::now();
    let (copier, _) = recording_copier();
    let mut indicator = CopyIndicator::new(ms(2_000));

    indicator.copy(&copier, 0, "git add .", t0).unwrap();
    indicator
        .copy(&copier, 1, "git commit", t0 + ms(1_500))
        .unwrap();

    assert!(!indicator.is_copied(0, t0 + ms(1_600)));
    assert!(indicator.is_copied(1, t0 + ms(3_000)));
    assert_eq!(indicator.next_deadline(), Some(t0 + ms(3_500)));
}

#[test]
fn failed_copy_leaves_indicator_off() {
    let t0 = Instant::now();
    let copier = Copy::with_tools(vec![Box::new(MissingTool)]);
    let mut indicator = CopyIndicator::default();

    assert!(matches!(
        indicator.copy(&copier, 0, "git add .", t0),
        Err(ClipboardError::NoToolAvailable)
    ));
    assert!(!indicator.is_active(t0));
}

#[test]
fn empty_snippet_is_rejected() {
    let (copier, copied) = recording_copier();

    assert!(matches!(copier.text(""), Err(ClipboardError::EmptyText)));
    assert!(copied.lock().unwrap().is_empty());
}
