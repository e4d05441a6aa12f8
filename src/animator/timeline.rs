//! Static projection of one animation run.
//!
//! Lists when each step of a run is scheduled to happen under ideal timing,
//! without running an animator. Used by the `timeline` command.

use std::fmt::Write as _;
use std::time::Duration;

use super::script::{LinePayload, Script};
use crate::config::AnimationConfig;
use crate::tui::format_elapsed;

/// Kind of step in a projected run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineStep {
    /// A script event becomes visible
    Reveal { id: String, text: String },
    /// The simulated clock starts
    ClockStart { speed_multiplier: u32 },
    /// The simulated clock reaches its target
    Completed { target_secs: u32 },
    /// The sequence restarts
    Replay,
}

/// One projected step with its offset from run start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub at: Duration,
    pub step: TimelineStep,
}

/// Projected schedule of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Project the schedule for `script` under `config`.
    pub fn project(script: &Script<LinePayload>, config: &AnimationConfig) -> Self {
        let mut entries: Vec<TimelineEntry> = script
            .events()
            .iter()
            .map(|event| TimelineEntry {
                at: event.offset,
                step: TimelineStep::Reveal {
                    id: event.id.clone(),
                    text: format!(
                        "{} {} {}",
                        event.payload.prefix, event.payload.service, event.payload.message
                    ),
                },
            })
            .collect();

        let clock_start = script.last_offset() + config.clock_gap();
        entries.push(TimelineEntry {
            at: clock_start,
            step: TimelineStep::ClockStart {
                speed_multiplier: config.speed_multiplier,
            },
        });

        let completed = clock_start + config.ideal_clock_run();
        entries.push(TimelineEntry {
            at: completed,
            step: TimelineStep::Completed {
                target_secs: config.target_duration_secs,
            },
        });

        if config.auto_replay {
            entries.push(TimelineEntry {
                at: completed + config.replay_dwell(),
                step: TimelineStep::Replay,
            });
        }

        Self { entries }
    }

    /// Render the timeline as an aligned plain-text table.
    pub fn to_table(&self) -> String {
        let width = self
            .entries
            .iter()
            .map(|e| format_offset(e.at).len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for entry in &self.entries {
            let (kind, detail) = match &entry.step {
                TimelineStep::Reveal { id, text } => ("reveal", format!("{:<10} {}", id, text)),
                TimelineStep::ClockStart { speed_multiplier } => (
                    "clock",
                    format!("start simulated clock (x{})", speed_multiplier),
                ),
                TimelineStep::Completed { target_secs } => (
                    "done",
                    format!("workflow completed in {}", format_elapsed(*target_secs)),
                ),
                TimelineStep::Replay => ("replay", "restart sequence".to_string()),
            };
            let _ = writeln!(
                out,
                "{:>width$}  {:<6}  {}",
                format_offset(entry.at),
                kind,
                detail,
                width = width
            );
        }
        out
    }
}

fn format_offset(at: Duration) -> String {
    format!("{}ms", at.as_millis())
}
