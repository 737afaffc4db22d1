//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version line shown by `--version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("GITMASTER_BUILD_DATE"),
    ")"
);

/// Git commit the binary was built from (dev builds only).
pub fn git_sha() -> Option<&'static str> {
    option_env!("VERGEN_GIT_SHA").filter(|sha| !sha.is_empty() && *sha != "unknown")
}

#[derive(Parser, Debug)]
#[command(name = "gitmaster")]
#[command(about = "Learn Git & GitHub interactively from your terminal")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    long_about = "GitMaster walks you through Git and GitHub with lessons that play \
scripted terminal sessions: each command is typed out, then its output appears.\n\n\
Run without a command to open the lesson browser."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all lessons
    Lessons {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a lesson in the lesson browser
    Show {
        /// Lesson path, e.g. /branching or branching
        path: String,
    },

    /// Play a lesson's terminal session inline
    #[command(long_about = "Play a lesson's terminal session inline on stdout.\n\n\
Autoplay (the default) runs every command on its own. With --interactive, \
press Enter to run each command and Enter again to move on.")]
    Play(PlayArgs),

    /// Copy a lesson snippet to the clipboard
    #[command(long_about = "Copy a code snippet from a lesson to the system clipboard.\n\n\
Snippets are numbered from 1 in the order the lesson shows them.\n\
Uses wl-copy, xclip or xsel on Linux and pbcopy on macOS.")]
    Copy {
        /// Lesson path, e.g. /github-basics
        path: String,
        /// Snippet number (1-based)
        index: usize,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Lesson path, e.g. /basic-commands
    pub path: String,

    /// Play every command automatically (default)
    #[arg(long, conflicts_with = "interactive")]
    pub autoplay: bool,

    /// Wait for Enter before running and advancing each command
    #[arg(long)]
    pub interactive: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["gitmaster"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn play_defaults_to_autoplay() {
        let cli = Cli::try_parse_from(["gitmaster", "play", "/branching"]).unwrap();
        match cli.command {
            Some(Commands::Play(args)) => {
                assert_eq!(args.path, "/branching");
                assert!(!args.interactive);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn play_rejects_both_modes() {
        let err = Cli::try_parse_from(["gitmaster", "play", "x", "--autoplay", "--interactive"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn copy_takes_path_and_index() {
        let cli = Cli::try_parse_from(["gitmaster", "copy", "/github-basics", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Copy { ref path, index: 2 }) if path == "/github-basics"
        ));
    }
}
