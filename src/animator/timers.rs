//! Epoch-tagged one-shot timer queue.
//!
//! Every timer records the run epoch that armed it. Cancelling is a plain
//! `clear()`; the animator additionally compares each fired timer's epoch
//! against the live epoch, so a timer that somehow survives cancellation
//! still cannot act on a newer run.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Reveal the script event at this index
    Reveal(usize),
    /// Start the simulated clock
    ClockStart,
    /// Sample the simulated clock
    ClockPoll,
    /// Restart the sequence after the completion dwell
    Replay,
}

/// An armed one-shot timer.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    /// Clock time at which the timer is due
    pub due: Duration,
    /// Run epoch that armed the timer
    pub epoch: u64,
    /// Action to take
    pub kind: TimerKind,
    /// Arm order, breaks ties between timers due at the same time
    seq: u64,
}

impl PartialEq for Timer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timer {}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Min-heap of armed timers ordered by (due time, arm order).
#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Reverse<Timer>>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer due at `due` on behalf of `epoch`.
    pub fn arm(&mut self, due: Duration, epoch: u64, kind: TimerKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Timer {
            due,
            epoch,
            kind,
            seq,
        }));
    }

    /// Remove and return the earliest timer if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Timer> {
        match self.heap.peek() {
            Some(Reverse(timer)) if timer.due <= now => self.heap.pop().map(|Reverse(t)| t),
            _ => None,
        }
    }

    /// Due time of the earliest armed timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|Reverse(timer)| timer.due)
    }

    /// Cancel every armed timer, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.heap.len();
        self.heap.clear();
        count
    }

    /// Number of armed timers.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
