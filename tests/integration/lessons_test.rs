//! Integration tests for the lesson catalog and router

use gitmaster::lessons::{normalize_path, LessonError};
use gitmaster::{Catalog, PlayMode, Route};

#[test]
fn every_catalog_path_resolves() {
    let catalog = Catalog::builtin().unwrap();

    for (idx, lesson) in catalog.lessons().iter().enumerate() {
        assert_eq!(catalog.resolve(&lesson.path), Route::Lesson(idx));
        assert_eq!(catalog.resolve(lesson.slug()), Route::Lesson(idx));
        assert_eq!(catalog.resolve(&format!("{}/", lesson.path)), Route::Lesson(idx));
    }
}

#[test]
fn unknown_paths_are_not_found() {
    let catalog = Catalog::builtin().unwrap();

    assert_eq!(
        catalog.resolve("/git-internals"),
        Route::NotFound("/git-internals".to_string())
    );
    assert_eq!(
        catalog.resolve("branching/advanced"),
        Route::NotFound("/branching/advanced".to_string())
    );
    assert_eq!(catalog.resolve(""), Route::Home);
}

#[test]
fn prev_and_next_are_consistent() {
    let catalog = Catalog::builtin().unwrap();

    for idx in 0..catalog.len() {
        if let Some(next) = catalog.next(idx) {
            let next_idx = catalog.position(&next.path).unwrap();
            assert_eq!(next_idx, idx + 1);
            assert_eq!(catalog.prev(next_idx).unwrap().path, catalog.get(idx).unwrap().path);
        }
    }
    assert!(catalog.prev(0).is_none());
    assert!(catalog.next(catalog.len() - 1).is_none());
}

#[test]
fn builtin_lessons_are_interactive_with_scripts() {
    let catalog = Catalog::builtin().unwrap();

    for lesson in catalog.lessons() {
        assert_eq!(lesson.play_mode(), PlayMode::Interactive, "{}", lesson.path);
        assert!(!lesson.script().is_empty(), "{}", lesson.path);
        assert!(lesson.turns.iter().all(|t| !t.input.is_empty()));
        assert!(!lesson.title.is_empty());
    }
}

#[test]
fn basic_commands_lesson_starts_with_git_status() {
    let catalog = Catalog::builtin().unwrap();
    let lesson = catalog.find("basic-commands").unwrap();
    let first = &lesson.turns[0];

    assert_eq!(first.input, "git status");
    assert!(first.output.starts_with("On branch main"));
    assert!(first.explanation.is_some());
}

#[test]
fn snippet_numbers_are_one_based() {
    let catalog = Catalog::builtin().unwrap();

    assert_eq!(
        catalog.snippet("/github-basics", 3).unwrap().code,
        "git clone https://github.com/user/repo.git"
    );
    assert!(matches!(
        catalog.snippet("/github-basics", 0),
        Err(LessonError::SnippetOutOfRange { index: 0, .. })
    ));
    assert!(matches!(
        catalog.snippet("/nowhere", 1),
        Err(LessonError::NotFound { .. })
    ));
}

#[test]
fn normalize_path_is_idempotent() {
    for raw in ["", "/", "a", "/a", "a/", "/a/b/", " /branching "] {
        let once = normalize_path(raw);
        assert_eq!(normalize_path(&once), once);
        assert!(once.starts_with('/'));
    }
}
