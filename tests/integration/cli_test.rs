//! Integration tests for the gitmaster binary

use predicates::prelude::*;

use crate::helpers::TestEnv;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_lists_commands() {
    TestEnv::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Learn Git & GitHub interactively"))
        .stdout(predicate::str::contains("lessons"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("copy"));
}

#[test]
fn version_prints_package_version() {
    TestEnv::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn copy_without_arguments_is_usage_error() {
    TestEnv::new()
        .cmd()
        .arg("copy")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<PATH>"));
}

// ============================================================================
// lessons
// ============================================================================

#[test]
fn lessons_lists_catalog_in_order() {
    let output = TestEnv::new()
        .cmd()
        .arg("lessons")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let first = stdout.find("/what-is-git").unwrap();
    let last = stdout.find("/collaboration").unwrap();
    assert!(first < last);
    assert!(stdout.contains("Branching & Merging"));
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn lessons_json_is_parseable() {
    let output = TestEnv::new()
        .cmd()
        .args(["lessons", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 7);
    assert_eq!(items[2]["path"], "/basic-commands");
    assert_eq!(items[2]["interactive"], true);
}

// ============================================================================
// play
// ============================================================================

#[test]
fn play_autoplays_whole_lesson() {
    let env = TestEnv::instant();
    env.cmd()
        .args(["play", "/basic-commands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Essential Git Commands"))
        .stdout(predicate::str::contains("$ git status\nOn branch main"))
        .stdout(predicate::str::contains("Explanation: Shows the current state"))
        .stdout(predicate::str::contains("[Enter]").not());
}

#[test]
fn play_accepts_slug_without_slash() {
    let env = TestEnv::instant();
    env.cmd()
        .args(["play", "branching"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Branching & Merging"));
}

#[test]
fn play_interactive_waits_for_enter() {
    let env = TestEnv::instant();
    env.cmd()
        .args(["play", "/basic-commands", "--interactive"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Enter] run $ git status"))
        .stdout(predicate::str::contains("README.md").not());
}

#[test]
fn play_unknown_lesson_fails() {
    TestEnv::instant()
        .cmd()
        .args(["play", "/rebasing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Lesson not found: /rebasing"));
}

#[test]
fn play_rejects_conflicting_modes() {
    TestEnv::new()
        .cmd()
        .args(["play", "/branching", "--autoplay", "--interactive"])
        .assert()
        .code(2);
}

// ============================================================================
// copy
// ============================================================================

#[test]
fn copy_out_of_range_snippet_fails() {
    TestEnv::new()
        .cmd()
        .args(["copy", "/github-basics", "9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("has no snippet 9 (it has 3)"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_honors_env_override() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            env.config_path().display().to_string(),
        ));
}

#[test]
fn config_show_reads_file() {
    TestEnv::instant()
        .cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typing_interval_ms = 0"))
        .stdout(predicate::str::contains("[clipboard]"));
}

#[test]
fn config_init_writes_once() {
    let env = TestEnv::new();

    env.cmd().args(["config", "init"]).assert().success();
    assert!(env.config_path().exists());

    env.cmd()
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    env.cmd()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn invalid_config_is_reported() {
    let env = TestEnv::new();
    std::fs::write(env.config_path(), "[player\n").unwrap();

    env.cmd()
        .args(["play", "/branching"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_for_bash() {
    TestEnv::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitmaster"));
}
