//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{Duration, Instant};

use assert_cmd::Command;
use tempfile::TempDir;

use gitmaster::{PlayMode, Script, TerminalPlayer, Timing, Turn};

/// Isolated environment for running the binary: its own config file and
/// log directory under a temp dir.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Env whose config plays with zero delays.
    pub fn instant() -> Self {
        let env = Self::new();
        std::fs::write(
            env.config_path(),
            "[player]\ntyping_interval_ms = 0\nreveal_delay_ms = 0\nautoplay_pause_ms = 0\n",
        )
        .expect("Failed to write config");
        env
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// `gitmaster` command wired to this env.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gitmaster").expect("binary not built");
        cmd.env("NO_COLOR", "1")
            .env("GITMASTER_CONFIG", self.config_path())
            .env("GITMASTER_LOG", "off")
            .env("XDG_DATA_HOME", self.dir.path().join("data"));
        cmd
    }
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Script with one turn per input, each with output `out:<input>`.
pub fn script(inputs: &[&str]) -> Script {
    inputs
        .iter()
        .map(|i| Turn::new(*i, format!("out:{}", i)))
        .collect()
}

/// Interactive player on the default timing.
pub fn interactive(script: Script, t0: Instant) -> TerminalPlayer {
    TerminalPlayer::new(script, PlayMode::Interactive, Timing::default(), t0)
}

/// Autoplay player on the default timing.
pub fn autoplay(script: Script, t0: Instant) -> TerminalPlayer {
    TerminalPlayer::new(script, PlayMode::Autoplay, Timing::default(), t0)
}
