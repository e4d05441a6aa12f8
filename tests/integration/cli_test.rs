//! End-to-end tests for the runnerdeck binary

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::runnerdeck;

fn config_dir() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    (dir, path)
}

// ============================================================================
// timeline
// ============================================================================

#[test]
fn timeline_lists_every_step() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .arg("timeline")
        .assert()
        .success()
        .stdout(predicate::str::contains("    0ms  reveal  github"))
        .stdout(predicate::str::contains(" 3200ms  clock   start simulated clock (x100)"))
        .stdout(predicate::str::contains("37530ms  replay  restart sequence"));
}

#[test]
fn timeline_once_has_no_replay() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["timeline", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("replay").not());
}

#[test]
fn timeline_speed_override_changes_completion() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["timeline", "--speed", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3633ms  done"));
}

#[test]
fn zero_speed_is_rejected() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["timeline", "--speed", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("animation.speed_multiplier"));
}

// ============================================================================
// frame
// ============================================================================

#[test]
fn frame_during_scheduling_shows_all_lines() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["frame", "--at", "2500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> github: received workflow_run.queued"))
        .stdout(predicate::str::contains("> runner: registered as self-hosted #47"))
        .stdout(predicate::str::contains("Running...").not())
        .stdout(predicate::str::contains("run 1 · scheduling"));
}

#[test]
fn frame_after_completion_shows_final_line() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["frame", "--at", "9000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ workflow completed in 7m 13s – cleanup OK"));
}

#[test]
fn frame_at_max_offset_finishes() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["frame", "--at", "18446744073709551615"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::contains("runner-orchestrator"));
}

#[test]
fn frame_too_small_prints_notice() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["frame", "--at", "0", "--width", "30", "--height", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal too small"));
}

#[test]
fn frame_zero_size_fails() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["frame", "--at", "0", "--width", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Frame size must be non-zero"));
}

#[test]
fn frame_without_at_is_usage_error() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .arg("frame")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--at"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_honours_env_override() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(config.display().to_string()));
}

#[test]
fn config_init_writes_defaults_once() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(config.exists());

    runnerdeck(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_show_reflects_file() {
    let (_dir, config) = config_dir();
    fs::write(&config, "[animation]\nspeed_multiplier = 250\n").unwrap();
    runnerdeck(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("speed_multiplier = 250"))
        .stdout(predicate::str::contains("theme = \"dark\""));
}

#[test]
fn broken_config_fails_with_path() {
    let (_dir, config) = config_dir();
    fs::write(&config, "animation = 3\n").unwrap();
    runnerdeck(&config)
        .arg("timeline")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn log_file_receives_startup_line() {
    let (dir, config) = config_dir();
    let log = dir.path().join("runnerdeck.log");
    runnerdeck(&config)
        .args(["timeline", "--log-file"])
        .arg(&log)
        .assert()
        .success();
    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("logging to"));
}

#[test]
fn completions_are_generated() {
    let (_dir, config) = config_dir();
    runnerdeck(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("runnerdeck"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let (_dir, config) = config_dir();
    runnerdeck(&config).arg("launch").assert().code(2);
}
