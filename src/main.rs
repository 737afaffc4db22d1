//! GitMaster CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use gitmaster::cli::{git_sha, Cli, Commands, ConfigCommands};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = gitmaster::logging::init();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        sha = git_sha().unwrap_or("release"),
        "gitmaster starting"
    );

    match cli.command {
        None => commands::show::handle(None),
        Some(Commands::Lessons { json }) => commands::lessons::handle(json),
        Some(Commands::Show { path }) => commands::show::handle(Some(&path)),
        Some(Commands::Play(args)) => commands::play::handle(&args.path, args.interactive),
        Some(Commands::Copy { path, index }) => commands::copy::handle(&path, index),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}
