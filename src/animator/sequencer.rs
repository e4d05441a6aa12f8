//! The scripted sequence animator.
//!
//! Drives one run of the mock terminal: reveals script events at their
//! offsets, then runs an accelerated simulated clock up to the target
//! duration, then optionally replays after a dwell.
//!
//! # Driving model
//!
//! The animator owns a [`TimerQueue`] and reads time from a [`Clock`]. Nothing
//! happens on its own: the owner calls [`Animator::tick`] whenever it likes
//! (typically after waiting [`Animator::next_deadline`]), and every timer that
//! has come due fires inside that call. Callbacks therefore never overlap with
//! each other or with `start`/`stop`.
//!
//! # Epoch guard
//!
//! Every timer carries the epoch of the run that armed it. A timer only acts
//! if its epoch is the live epoch; `start` moves to a new epoch and `stop`
//! revokes the live epoch entirely. Clearing the queue on `start`/`stop` is
//! best effort on top of that.

use std::time::Duration;

use tracing::{debug, trace};

use super::clock::{Clock, ManualClock, SystemClock};
use super::script::{LinePayload, Script};
use super::state::{Phase, SequenceState, Snapshot};
use super::timers::{Timer, TimerKind, TimerQueue};
use crate::config::AnimationConfig;

/// Replayable, cancellable animation of a [`Script`].
#[derive(Debug)]
pub struct Animator<C: Clock = SystemClock, P = LinePayload> {
    script: Script<P>,
    config: AnimationConfig,
    clock: C,
    timers: TimerQueue,
    state: SequenceState,
    /// Epoch whose timers may mutate state; `None` after `stop`
    live_epoch: Option<u64>,
    /// Clock time at which the simulated clock started
    clock_origin: Option<Duration>,
}

impl<C: Clock, P> Animator<C, P> {
    /// Create an idle animator. No timers are armed until [`start`](Self::start).
    pub fn new(script: Script<P>, config: AnimationConfig, clock: C) -> Self {
        Self {
            script,
            config,
            clock,
            timers: TimerQueue::new(),
            state: SequenceState::default(),
            live_epoch: None,
            clock_origin: None,
        }
    }

    pub fn script(&self) -> &Script<P> {
        &self.script
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Enable or disable auto-replay. Takes effect at the next completion.
    pub fn set_auto_replay(&mut self, enabled: bool) {
        self.config.auto_replay = enabled;
    }

    /// (Re)start the sequence from the beginning.
    ///
    /// Discards any run in progress. Always valid.
    pub fn start(&mut self) {
        let cancelled = self.timers.cancel_all();
        self.clock_origin = None;
        let epoch = self.state.begin_run();
        self.live_epoch = Some(epoch);

        let now = self.clock.now();
        for (index, event) in self.script.events().iter().enumerate() {
            self.timers.arm(now + event.offset, epoch, TimerKind::Reveal(index));
        }
        let clock_start = self.script.last_offset() + self.config.clock_gap();
        self.timers.arm(now + clock_start, epoch, TimerKind::ClockStart);

        debug!(epoch, cancelled, armed = self.timers.len(), "animation started");
    }

    /// Cancel every outstanding timer and freeze the current state.
    ///
    /// Idempotent.
    pub fn stop(&mut self) {
        let cancelled = self.timers.cancel_all();
        self.clock_origin = None;
        if self.live_epoch.take().is_some() {
            debug!(epoch = self.state.run_epoch, cancelled, "animation stopped");
        }
    }

    /// Owned projection of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.config.target_duration_secs)
    }

    /// Whether a run is live (started and not stopped).
    pub fn is_live(&self) -> bool {
        self.live_epoch.is_some()
    }

    /// Number of armed timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Time from now until the next armed timer is due.
    ///
    /// `None` when nothing is armed. Zero when a timer is already overdue.
    pub fn next_deadline(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.timers.next_due().map(|due| due.saturating_sub(now))
    }

    /// Fire every timer that is due. Returns whether the snapshot changed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;
        while let Some(timer) = self.timers.pop_due(now) {
            changed |= self.fire(timer, now);
        }
        changed
    }

    fn fire(&mut self, timer: Timer, now: Duration) -> bool {
        if self.live_epoch != Some(timer.epoch) {
            trace!(
                epoch = timer.epoch,
                live = ?self.live_epoch,
                kind = ?timer.kind,
                "dropping stale timer"
            );
            return false;
        }

        match timer.kind {
            TimerKind::Reveal(index) => self.reveal(index),
            TimerKind::ClockStart => {
                self.state.phase = Phase::Running;
                // Anchored on the due time, not the (possibly late) tick time
                self.clock_origin = Some(timer.due);
                let first_poll = timer.due + self.config.poll_interval();
                self.timers.arm(first_poll, timer.epoch, TimerKind::ClockPoll);
                trace!(epoch = timer.epoch, "simulated clock started");
                true
            }
            TimerKind::ClockPoll => self.sample_clock(timer, now),
            TimerKind::Replay => {
                debug!(epoch = timer.epoch, "auto-replay");
                self.start();
                true
            }
        }
    }

    fn reveal(&mut self, index: usize) -> bool {
        let Some(event) = self.script.get(index) else {
            return false;
        };
        trace!(id = %event.id, "reveal");
        self.state.revealed.insert(event.id.clone())
    }

    fn sample_clock(&mut self, timer: Timer, now: Duration) -> bool {
        let Some(origin) = self.clock_origin else {
            return false;
        };

        let real = now.saturating_sub(origin);
        let sample = simulated_seconds(real, self.config.speed_multiplier);
        let target = u64::from(self.config.target_duration_secs);

        // Compare before publishing so a late poll can never overshoot
        if sample >= target {
            self.state.elapsed_secs = self.config.target_duration_secs;
            self.state.phase = Phase::Completed;
            self.clock_origin = None;
            if self.config.auto_replay {
                let replay_at = now + self.config.replay_dwell();
                self.timers.arm(replay_at, timer.epoch, TimerKind::Replay);
            }
            debug!(epoch = timer.epoch, "animation completed");
            return true;
        }

        let interval = self.config.poll_interval();
        let mut next = timer.due + interval;
        if next <= now {
            next = now + interval;
        }
        self.timers.arm(next, timer.epoch, TimerKind::ClockPoll);

        // sample < target <= u32::MAX
        let sample = sample as u32;
        let changed = sample != self.state.elapsed_secs;
        self.state.elapsed_secs = sample;
        changed
    }
}

impl<P> Animator<ManualClock, P> {
    /// Advance the manual clock to `at`, stopping at every timer deadline on
    /// the way so each callback sees its exact due time. Work grows with the
    /// number of deadlines crossed.
    pub fn advance_to(&mut self, at: Duration) {
        self.tick();
        while let Some(wait) = self.next_deadline() {
            let due = self.clock.now() + wait;
            if due > at {
                break;
            }
            self.clock.set(due);
            self.tick();
        }
        self.clock.set(at);
        self.tick();
    }
}

impl<C: Clock, P> Drop for Animator<C, P> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Simulated seconds for a real elapsed time at the given speed multiplier.
///
/// `floor(real_ms * speed / 1000)`.
pub fn simulated_seconds(real: Duration, speed_multiplier: u32) -> u64 {
    let real_ms = real.as_millis().min(u128::from(u64::MAX)) as u64;
    real_ms.saturating_mul(u64::from(speed_multiplier)) / 1000
}
