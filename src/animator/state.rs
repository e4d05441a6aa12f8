//! Sequence state and the read-only snapshot handed to renderers.

use std::collections::BTreeSet;
use std::fmt;

/// Lifecycle phase of one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Never started
    #[default]
    Idle,
    /// Script events are being revealed
    Scheduling,
    /// The simulated clock is counting
    Running,
    /// The simulated clock reached its target
    Completed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Scheduling => "scheduling",
            Phase::Running => "running",
            Phase::Completed => "completed",
        }
    }

    /// Whether a run has been started (any phase but `Idle`).
    pub fn run_started(&self) -> bool {
        !matches!(self, Phase::Idle)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable state of the current run. Owned by the animator only.
#[derive(Debug, Clone, Default)]
pub(crate) struct SequenceState {
    pub run_epoch: u64,
    pub phase: Phase,
    pub revealed: BTreeSet<String>,
    pub elapsed_secs: u32,
}

impl SequenceState {
    /// Begin a new run: bump the epoch and clear per-run state.
    pub fn begin_run(&mut self) -> u64 {
        self.run_epoch += 1;
        self.phase = Phase::Scheduling;
        self.revealed.clear();
        self.elapsed_secs = 0;
        self.run_epoch
    }
}

/// Immutable projection of the animator state at one instant.
///
/// Snapshots are owned copies; re-fetch from the animator to observe updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Run counter, incremented on every start
    pub run_epoch: u64,
    /// Current phase
    pub phase: Phase,
    /// Ids of revealed script events
    pub revealed: BTreeSet<String>,
    /// Simulated seconds elapsed, never above `target_secs`
    pub elapsed_secs: u32,
    /// Simulated workflow duration the clock counts up to
    pub target_secs: u32,
}

impl Snapshot {
    pub(crate) fn capture(state: &SequenceState, target_secs: u32) -> Self {
        Self {
            run_epoch: state.run_epoch,
            phase: state.phase,
            revealed: state.revealed.clone(),
            elapsed_secs: state.elapsed_secs,
            target_secs,
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Whether the "Running..." line should be visible.
    pub fn shows_running_line(&self) -> bool {
        self.phase == Phase::Running && self.elapsed_secs > 0
    }

    /// Whether the completion line should be visible.
    pub fn shows_completion(&self) -> bool {
        self.phase == Phase::Completed
    }
}
