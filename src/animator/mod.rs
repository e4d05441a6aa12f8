//! Scripted sequence animator for the mock orchestrator terminal.
//!
//! # Architecture
//!
//! - `script`: validated list of timed events and the built-in orchestrator script
//! - `clock`: injectable time sources (`SystemClock`, `ManualClock`)
//! - `timers`: epoch-tagged one-shot timer queue
//! - `state`: phase, sequence state and the `Snapshot` handed to renderers
//! - `sequencer`: the `Animator` state machine
//! - `timeline`: static projection of one run
//!
//! # Usage
//!
//! ```
//! use runnerdeck::animator::{orchestrator_script, Animator, ManualClock, Phase};
//! use runnerdeck::config::AnimationConfig;
//!
//! let clock = ManualClock::new();
//! let mut animator = Animator::new(orchestrator_script(), AnimationConfig::default(), clock.clone());
//! animator.start();
//!
//! clock.advance_ms(3200);
//! animator.tick();
//! assert_eq!(animator.snapshot().phase, Phase::Running);
//! ```

pub mod clock;
mod error;
pub mod script;
mod sequencer;
pub mod state;
pub mod timeline;
mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ScriptError;
pub use script::{orchestrator_script, LinePayload, Script, ScriptEvent};
pub use sequencer::{simulated_seconds, Animator};
pub use state::{Phase, Snapshot};
pub use timeline::{Timeline, TimelineEntry, TimelineStep};
