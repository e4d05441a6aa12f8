//! Snapshot of the projected timeline

use runnerdeck::animator::{orchestrator_script, Timeline, TimelineStep};
use runnerdeck::config::AnimationConfig;

#[test]
fn snapshot_default_timeline() {
    let table = Timeline::project(&orchestrator_script(), &AnimationConfig::default()).to_table();
    insta::assert_snapshot!(table, @r"
    0ms  reveal  github     > github: received workflow_run.queued
  800ms  reveal  scheduler  > scheduler: starting runner for monorepo-ci
 1600ms  reveal  ecs        > ecs: runTask arn:aws:ecs:...
 2400ms  reveal  runner     > runner: registered as self-hosted #47
 3200ms  clock   start simulated clock (x100)
 7530ms  done    workflow completed in 7m 13s
37530ms  replay  restart sequence
");
}

#[test]
fn projected_completion_matches_clock_math() {
    let config = AnimationConfig {
        target_duration_secs: 60,
        speed_multiplier: 7,
        ..AnimationConfig::default()
    };
    let timeline = Timeline::project(&orchestrator_script(), &config);
    let done = timeline
        .entries
        .iter()
        .find(|e| matches!(e.step, TimelineStep::Completed { .. }))
        .unwrap();
    // ceil(60_000 / 7) = 8572
    assert_eq!(done.at.as_millis(), 3200 + 8572);
}
