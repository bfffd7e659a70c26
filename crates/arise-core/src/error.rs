//! Error types for the progression engine.

/// Errors that can occur at the edges of the engine.
///
/// Engine intents never return these: invalid intents are no-ops and
/// persistence is best effort. They surface from stores, parsers, and
/// feedback ports.
#[derive(Debug, thiserror::Error)]
pub enum AriseError {
    /// Reading or writing the data directory failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored blob could not be encoded or decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An attribute name did not match any allocatable attribute.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A player name was empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// A wall-clock time string could not be parsed.
    #[error("invalid time: {0} (expected HH:MM)")]
    InvalidTime(String),

    /// A cue or notification could not be delivered.
    #[error("feedback unavailable: {0}")]
    Feedback(String),
}

/// Alias for `Result<T, AriseError>`.
pub type AriseResult<T> = Result<T, AriseError>;
