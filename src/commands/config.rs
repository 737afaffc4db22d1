//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use gitmaster::tui::Theme;
use gitmaster::Config;

use super::{load_config, output_theme, styled};

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = load_config()?;
    let theme = output_theme(&config);
    print!(
        "{}",
        styled(theme.as_ref(), &config.to_toml()?, Theme::primary_text)
    );
    Ok(())
}

/// Print the config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default config to its location.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    let written = init_at(&path, force)?;
    let theme = output_theme(&Config::default());
    println!(
        "{}",
        styled(
            theme.as_ref(),
            &format!("Wrote default config to {}", written.display()),
            Theme::success_text
        )
    );
    Ok(())
}

/// Write defaults to `path`, refusing to overwrite unless `force`.
pub fn init_at(path: &Path, force: bool) -> Result<&Path> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gitmaster").join("config.toml");

        init_at(&path, false).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"ocean\"\n").unwrap();

        let err = init_at(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        init_at(&path, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().ui.theme, "default");
    }
}
