//! Shared helpers for integration tests

use std::path::Path;
use std::time::Duration;

use assert_cmd::Command;
use runnerdeck::animator::{orchestrator_script, Animator, ManualClock};
use runnerdeck::config::AnimationConfig;

/// Animator over the built-in script driven by a manual clock.
pub fn manual_animator(config: AnimationConfig) -> Animator<ManualClock> {
    Animator::new(orchestrator_script(), config, ManualClock::new())
}

/// Default timing with auto-replay off.
pub fn single_run_config() -> AnimationConfig {
    AnimationConfig {
        auto_replay: false,
        ..AnimationConfig::default()
    }
}

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// runnerdeck command with colors off and the config file pinned to `config`.
pub fn runnerdeck(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("runnerdeck").expect("binary should build");
    cmd.env("NO_COLOR", "1")
        .env("RUNNERDECK_CONFIG", config)
        .env_remove("RUNNERDECK_LOG");
    cmd
}
