//! Headless single-frame rendering.

use std::time::Duration;

use anyhow::{bail, Result};
use ratatui::{buffer::Buffer, layout::Rect};

use runnerdeck::animator::{orchestrator_script, Animator, ManualClock};
use runnerdeck::cli::FrameArgs;
use runnerdeck::config::AnimationConfig;
use runnerdeck::tui::ui::render_page_area;
use runnerdeck::tui::{buffer_to_text, PageView, Theme};

use super::effective_config;

pub fn handle(args: &FrameArgs) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        bail!("Frame size must be non-zero, got {}x{}", args.width, args.height);
    }
    let config = effective_config(&args.animation)?;
    let text = render_frame_at(
        config.animation,
        Theme::from_name(config.ui.theme),
        Duration::from_millis(args.at),
        args.width,
        args.height,
    );
    print!("{}", text);
    Ok(())
}

/// Simulate a fresh run up to `at` and render the page as plain text.
///
/// With auto-replay on, runs repeat every [`replay_cycle`], so `at` is folded
/// into the first cycle and only the run counter accounts for the skipped runs.
pub fn render_frame_at(
    animation: AnimationConfig,
    theme: Theme,
    at: Duration,
    width: u16,
    height: u16,
) -> String {
    let script = orchestrator_script();
    let (at, skipped_runs) = if animation.auto_replay {
        fold_into_cycle(at, replay_cycle(&animation, script.last_offset()))
    } else {
        (at, 0)
    };

    let mut animator = Animator::new(script, animation, ManualClock::new());
    animator.start();
    animator.advance_to(at);

    let mut snapshot = animator.snapshot();
    snapshot.run_epoch = snapshot.run_epoch.saturating_add(skipped_runs);
    tracing::debug!(
        at_ms = at.as_millis() as u64,
        skipped_runs,
        phase = %snapshot.phase,
        "rendering frame"
    );

    let view = PageView {
        script: animator.script(),
        snapshot: &snapshot,
        theme: &theme,
        live: animator.is_live(),
    };
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render_page_area(area, &mut buf, &view);
    buffer_to_text(&buf)
}

/// Real time from one run start to the next when every timer fires on time.
///
/// Completion lands on the first clock poll at or past the ideal clock run.
pub fn replay_cycle(animation: &AnimationConfig, last_offset: Duration) -> Duration {
    let interval = animation.poll_interval().as_millis().max(1);
    let ideal = animation.ideal_clock_run().as_millis();
    let clock_run_ms = ideal.div_ceil(interval).saturating_mul(interval);
    let clock_run = Duration::from_millis(u64::try_from(clock_run_ms).unwrap_or(u64::MAX));

    last_offset
        .saturating_add(animation.clock_gap())
        .saturating_add(clock_run)
        .saturating_add(animation.replay_dwell())
}

/// Split `at` into an offset within one cycle and the number of whole cycles.
fn fold_into_cycle(at: Duration, cycle: Duration) -> (Duration, u64) {
    let cycle_ms = cycle.as_millis().max(1);
    let at_ms = at.as_millis();
    let offset = u64::try_from(at_ms % cycle_ms).unwrap_or(u64::MAX);
    let runs = u64::try_from(at_ms / cycle_ms).unwrap_or(u64::MAX);
    (Duration::from_millis(offset), runs)
}
