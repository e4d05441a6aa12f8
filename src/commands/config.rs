//! Config subcommands handler

use anyhow::{Context, Result};

use runnerdeck::cli::ConfigCommand;
use runnerdeck::tui::cli_theme;
use runnerdeck::Config;

pub fn handle(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => handle_show(),
        ConfigCommand::Path => handle_path(),
        ConfigCommand::Init => handle_init(),
    }
}

/// Show current configuration as TOML.
fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = cli_theme(config.ui.theme);
    println!("{}", theme.primary_text(config.to_toml()?.trim_end()));
    Ok(())
}

/// Print where the configuration file is (or would be).
fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a default config file unless one exists.
fn handle_init() -> Result<()> {
    let path = Config::config_path()?;
    let theme = cli_theme(Config::default().ui.theme);

    if path.exists() {
        println!(
            "{}",
            theme.secondary_text(&format!("Config already exists at {}", path.display()))
        );
        return Ok(());
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    println!(
        "{}",
        theme.success_text(&format!("Created {}", path.display()))
    );
    Ok(())
}
