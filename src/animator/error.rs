//! Script validation errors.

/// Errors raised when building a [`Script`](super::Script).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("Script has no events")]
    Empty,

    #[error("Duplicate event id '{id}'")]
    DuplicateId { id: String },

    #[error("Event '{id}' at {offset_ms}ms comes before the previous event at {previous_ms}ms")]
    OutOfOrder {
        id: String,
        offset_ms: u64,
        previous_ms: u64,
    },
}
