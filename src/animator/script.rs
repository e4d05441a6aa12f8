//! Script model: the ordered, timed events an animation run reveals.

use std::collections::HashSet;
use std::time::Duration;

use super::error::ScriptError;

/// One timed reveal step.
///
/// The payload is carried for the rendering layer and never inspected by the
/// animator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEvent<P> {
    /// Unique identifier within the script
    pub id: String,
    /// Delay relative to sequence start
    pub offset: Duration,
    /// Opaque display payload
    pub payload: P,
}

impl<P> ScriptEvent<P> {
    pub fn new(id: impl Into<String>, offset_ms: u64, payload: P) -> Self {
        Self {
            id: id.into(),
            offset: Duration::from_millis(offset_ms),
            payload,
        }
    }
}

/// A validated, immutable list of script events.
///
/// Construction guarantees the list is non-empty, ids are unique, and offsets
/// are non-decreasing in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script<P> {
    events: Vec<ScriptEvent<P>>,
}

impl<P> Script<P> {
    /// Build a script, validating ordering and id uniqueness.
    pub fn new(events: Vec<ScriptEvent<P>>) -> Result<Self, ScriptError> {
        if events.is_empty() {
            return Err(ScriptError::Empty);
        }

        let mut seen = HashSet::with_capacity(events.len());
        let mut previous = Duration::ZERO;
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(ScriptError::DuplicateId {
                    id: event.id.clone(),
                });
            }
            if event.offset < previous {
                return Err(ScriptError::OutOfOrder {
                    id: event.id.clone(),
                    offset_ms: event.offset.as_millis() as u64,
                    previous_ms: previous.as_millis() as u64,
                });
            }
            previous = event.offset;
        }

        Ok(Self { events })
    }

    pub fn events(&self) -> &[ScriptEvent<P>] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the script has no events. False for any constructed script.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Offset of the last (latest) event.
    pub fn last_offset(&self) -> Duration {
        // Non-empty by construction
        self.events.last().map_or(Duration::ZERO, |e| e.offset)
    }

    pub fn get(&self, index: usize) -> Option<&ScriptEvent<P>> {
        self.events.get(index)
    }
}

/// Content of one mock orchestrator log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePayload {
    /// Prompt marker, e.g. `>`
    pub prefix: &'static str,
    /// Service tag, e.g. `github:`
    pub service: &'static str,
    /// Log message
    pub message: &'static str,
    /// Short label for the flow row
    pub label: &'static str,
    /// Icon stand-in for the flow row
    pub glyph: &'static str,
}

/// The built-in orchestrator walkthrough: webhook, scheduler, ECS, runner.
pub fn orchestrator_script() -> Script<LinePayload> {
    let line = |service, message, label, glyph| LinePayload {
        prefix: ">",
        service,
        message,
        label,
        glyph,
    };

    let events = vec![
        ScriptEvent::new(
            "github",
            0,
            line("github:", "received workflow_run.queued", "GitHub", "◉"),
        ),
        ScriptEvent::new(
            "scheduler",
            800,
            line(
                "scheduler:",
                "starting runner for monorepo-ci",
                "Scheduler",
                "◷",
            ),
        ),
        ScriptEvent::new(
            "ecs",
            1600,
            line("ecs:", "runTask arn:aws:ecs:...", "ECS Fargate", "☁"),
        ),
        ScriptEvent::new(
            "runner",
            2400,
            line("runner:", "registered as self-hosted #47", "Runner", "ϟ"),
        ),
    ];

    match Script::new(events) {
        Ok(script) => script,
        // The literal above is ordered and unique
        Err(e) => unreachable!("built-in script is invalid: {e}"),
    }
}
