//! Command line definitions.
//!
//! Kept in the library so `xtask` can generate man pages from them.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::ThemeName;

/// Build version string: `0.1.0 (abc1234 2026-01-01)` for dev builds.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("RUNNERDECK_BUILD_DATE"),
    ")"
);

/// Terminal landing page for ephemeral GitHub Actions runners.
#[derive(Debug, Parser)]
#[command(name = "runnerdeck", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// Write logs to this file (also: RUNNERDECK_LOG)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the animated landing page (default)
    Play(PlayArgs),

    /// Render a single frame at a point in time and print it as text
    Frame(FrameArgs),

    /// Print the scheduled timeline of one animation run
    Timeline(AnimationArgs),

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Flags overriding `[animation]` config values.
#[derive(Debug, Clone, Default, Args)]
pub struct AnimationArgs {
    /// Simulated seconds per real second
    #[arg(long, value_name = "N")]
    pub speed: Option<u32>,

    /// Play a single run without auto-replay
    #[arg(long)]
    pub once: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub animation: AnimationArgs,

    /// Initial color theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeName>,
}

#[derive(Debug, Clone, Args)]
pub struct FrameArgs {
    /// Milliseconds since the animation started
    #[arg(long, value_name = "MS")]
    pub at: u64,

    /// Frame width in columns
    #[arg(long, default_value_t = 90)]
    pub width: u16,

    /// Frame height in rows
    #[arg(long, default_value_t = 20)]
    pub height: u16,

    #[command(flatten)]
    pub animation: AnimationArgs,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
    /// Write a default configuration file if none exists
    Init,
}
