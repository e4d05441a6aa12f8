//! Subcommand handlers for the runnerdeck binary.

pub mod config;
pub mod frame;
pub mod play;
pub mod timeline;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;

use runnerdeck::cli::{AnimationArgs, Cli};
use runnerdeck::Config;

/// Load configuration and apply animation flag overrides.
pub fn effective_config(args: &AnimationArgs) -> Result<Config> {
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(speed) = args.speed {
        config.animation.speed_multiplier = speed;
    }
    if args.once {
        config.animation.auto_replay = false;
    }
    config.validate()?;
    Ok(config)
}

/// Print shell completions to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "runnerdeck", &mut std::io::stdout());
    Ok(())
}
