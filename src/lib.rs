//! runnerdeck: a terminal landing page for ephemeral GitHub Actions runners.
//!
//! The interesting part is the [`animator`]: a replayable, cancellable state
//! machine that reveals a scripted orchestrator log line by line and then runs
//! an accelerated simulated clock. Everything else renders its snapshots.

pub mod animator;
pub mod cli;
pub mod config;
pub mod logging;
pub mod tui;

pub use animator::{Animator, Phase, Snapshot};
pub use config::{AnimationConfig, Config, ThemeName};
