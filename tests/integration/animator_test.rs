//! Behavioural tests for the animator driven by a manual clock

use std::collections::BTreeSet;

use runnerdeck::animator::{Clock, ManualClock, Phase};
use runnerdeck::config::AnimationConfig;
use runnerdeck::tui::format_elapsed;

use crate::helpers::{manual_animator, ms, single_run_config};

fn ids(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Reveal ordering
// ============================================================================

#[test]
fn revealed_ids_only_grow_within_a_run() {
    let mut animator = manual_animator(AnimationConfig::default());
    animator.start();

    let mut previous = animator.snapshot();
    let mut resets = 0;
    for step in 1..=4000 {
        animator.advance_to(ms(step * 10));
        let current = animator.snapshot();
        if current.run_epoch != previous.run_epoch {
            resets += 1;
        } else {
            assert!(
                current.revealed.is_superset(&previous.revealed),
                "revealed set shrank at {}ms",
                step * 10
            );
        }
        previous = current;
    }
    // One auto-replay happens within 40s
    assert_eq!(resets, 1);
}

#[test]
fn restart_clears_revealed_lines() {
    let mut animator = manual_animator(single_run_config());
    animator.start();
    animator.advance_to(ms(2000));
    assert_eq!(animator.snapshot().revealed.len(), 3);

    animator.start();
    let snapshot = animator.snapshot();
    assert!(snapshot.revealed.is_empty());
    assert_eq!(snapshot.phase, Phase::Scheduling);
    assert_eq!(snapshot.elapsed_secs, 0);
}

// ============================================================================
// Simulated clock
// ============================================================================

#[test]
fn elapsed_never_exceeds_target() {
    let mut animator = manual_animator(single_run_config());
    animator.start();
    for step in 0..=1200 {
        animator.advance_to(ms(step * 7));
        let snapshot = animator.snapshot();
        assert!(snapshot.elapsed_secs <= snapshot.target_secs);
    }
    assert_eq!(animator.snapshot().phase, Phase::Completed);
}

#[test]
fn large_gap_near_target_clamps_exactly() {
    let clock = ManualClock::new();
    let mut animator = runnerdeck::Animator::new(
        runnerdeck::animator::orchestrator_script(),
        single_run_config(),
        clock.clone(),
    );
    animator.start();
    clock.set(ms(7400));
    animator.tick();
    let before = animator.snapshot();
    assert_eq!(before.phase, Phase::Running);
    assert_eq!(before.elapsed_secs, 420);

    // 10 seconds without a tick
    clock.advance_ms(10_000);
    animator.tick();
    let after = animator.snapshot();
    assert_eq!(after.phase, Phase::Completed);
    assert_eq!(after.elapsed_secs, 433);
    assert_eq!(animator.pending_timers(), 0);
}

#[test]
fn elapsed_is_monotonic_while_running() {
    let mut animator = manual_animator(single_run_config());
    animator.start();
    let mut last = 0;
    for step in 320..=760 {
        animator.advance_to(ms(step * 10));
        let elapsed = animator.snapshot().elapsed_secs;
        assert!(elapsed >= last);
        last = elapsed;
    }
    assert_eq!(last, 433);
}

// ============================================================================
// Epochs and teardown
// ============================================================================

#[test]
fn double_start_leaves_one_run() {
    let mut animator = manual_animator(single_run_config());
    animator.start();
    animator.start();
    assert_eq!(animator.snapshot().run_epoch, 2);
    assert_eq!(animator.pending_timers(), 5);

    animator.advance_to(ms(60_000));
    let snapshot = animator.snapshot();
    assert_eq!(snapshot.run_epoch, 2);
    assert_eq!(snapshot.phase, Phase::Completed);
    assert_eq!(snapshot.revealed, ids(&["github", "scheduler", "ecs", "runner"]));
    assert_eq!(animator.pending_timers(), 0);
}

#[test]
fn restart_mid_clock_does_not_leak_polls() {
    let mut animator = manual_animator(single_run_config());
    animator.start();
    animator.advance_to(ms(5000));
    assert!(animator.snapshot().elapsed_secs > 0);

    animator.start();
    // four reveals plus the clock start, no poll from the old run
    assert_eq!(animator.pending_timers(), 5);
    assert_eq!(animator.snapshot().elapsed_secs, 0);
}

#[test]
fn stop_freezes_snapshot() {
    let mut animator = manual_animator(AnimationConfig::default());
    animator.start();
    animator.advance_to(ms(1000));
    animator.stop();
    let frozen = animator.snapshot();

    animator.advance_to(ms(120_000));
    assert_eq!(animator.snapshot(), frozen);
    assert_eq!(animator.pending_timers(), 0);
    assert!(!animator.is_live());
}

#[test]
fn stop_while_running_freezes_clock() {
    let mut animator = manual_animator(AnimationConfig::default());
    animator.start();
    animator.advance_to(ms(4000));
    animator.stop();
    let frozen = animator.snapshot();
    assert_eq!(frozen.phase, Phase::Running);

    animator.advance_to(ms(10_000));
    assert_eq!(animator.snapshot(), frozen);
}

#[test]
fn start_after_stop_begins_fresh_run() {
    let mut animator = manual_animator(single_run_config());
    animator.start();
    animator.advance_to(ms(1000));
    animator.stop();

    animator.start();
    assert!(animator.is_live());
    let start = animator.clock().now();
    animator.advance_to(start + ms(2500));
    let snapshot = animator.snapshot();
    assert_eq!(snapshot.run_epoch, 2);
    assert_eq!(snapshot.revealed.len(), 4);
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn elapsed_formatting() {
    assert_eq!(format_elapsed(433), "7m 13s");
    assert_eq!(format_elapsed(5), "0m 05s");
    assert_eq!(format_elapsed(0), "0m 00s");
    assert_eq!(format_elapsed(60), "1m 00s");
}

// ============================================================================
// End-to-end timing
// ============================================================================

#[test]
fn reference_run_timing() {
    let mut animator = manual_animator(AnimationConfig::default());
    animator.start();

    animator.advance_to(ms(0));
    let snapshot = animator.snapshot();
    assert_eq!(snapshot.revealed, ids(&["github"]));
    assert_eq!(snapshot.phase, Phase::Scheduling);

    animator.advance_to(ms(2500));
    let snapshot = animator.snapshot();
    assert_eq!(snapshot.revealed.len(), 4);
    assert_eq!(snapshot.phase, Phase::Scheduling);

    animator.advance_to(ms(3199));
    assert_eq!(animator.snapshot().phase, Phase::Scheduling);
    animator.advance_to(ms(3200));
    assert_eq!(animator.snapshot().phase, Phase::Running);

    // Completion lands within one poll interval of 7530ms
    animator.advance_to(ms(7479));
    assert_eq!(animator.snapshot().phase, Phase::Running);
    animator.advance_to(ms(7580));
    let snapshot = animator.snapshot();
    assert_eq!(snapshot.phase, Phase::Completed);
    assert_eq!(snapshot.elapsed_secs, 433);

    // Stays completed through the dwell
    animator.advance_to(ms(37_500));
    let snapshot = animator.snapshot();
    assert_eq!(snapshot.phase, Phase::Completed);
    assert_eq!(snapshot.run_epoch, 1);

    animator.advance_to(ms(37_600));
    let snapshot = animator.snapshot();
    assert_eq!(snapshot.run_epoch, 2);
    assert_eq!(snapshot.phase, Phase::Scheduling);
    assert_eq!(snapshot.elapsed_secs, 0);
    // Only the zero-offset line of the new run is visible
    assert_eq!(snapshot.revealed, ids(&["github"]));
}

#[test]
fn once_mode_stays_completed() {
    let mut animator = manual_animator(single_run_config());
    animator.start();
    animator.advance_to(ms(300_000));
    let snapshot = animator.snapshot();
    assert_eq!(snapshot.run_epoch, 1);
    assert_eq!(snapshot.phase, Phase::Completed);
    assert_eq!(animator.next_deadline(), None);
}

#[test]
fn faster_speed_completes_sooner() {
    let config = AnimationConfig {
        speed_multiplier: 1000,
        auto_replay: false,
        ..AnimationConfig::default()
    };
    let mut animator = manual_animator(config);
    animator.start();
    // 433s at x1000 needs 433ms of real time after 3200ms
    animator.advance_to(ms(3700));
    assert_eq!(animator.snapshot().phase, Phase::Completed);
}
