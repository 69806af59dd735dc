use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the jet stream library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a frontier holds no candidate paths at selection or resolution time.
    #[error("frontier is empty; no candidate path is available to extend or resolve")]
    EmptyFrontier,

    /// Raised when the input did not contain a leading weight line.
    #[error("input does not contain an open-air weight")]
    MissingWeight,

    /// Raised when the leading weight line is not an integer.
    #[error("line {line}: invalid open-air weight '{value}'")]
    InvalidWeight { line: usize, value: String },

    /// Raised when the open-air weight is negative.
    #[error("open-air weight must not be negative (got {value})")]
    NegativeWeight { value: i64 },

    /// Raised when a segment line cannot be parsed into `start end cost`.
    #[error("line {line}: malformed jet stream: {reason}")]
    MalformedSegment { line: usize, reason: String },

    /// Raised when a segment ends before it starts.
    #[error("line {line}: jet stream ends before it starts ({start} > {end})")]
    InvalidSegment { line: usize, start: i64, end: i64 },

    /// Raised when a segment carries a negative riding cost.
    #[error("line {line}: jet stream cost must not be negative (got {cost})")]
    NegativeCost { line: usize, cost: i64 },

    /// Raised when an energy total does not fit in a 64-bit integer.
    #[error("energy cost of reaching {position} overflows a 64-bit integer")]
    CostOverflow { position: i64 },

    /// Raised when the exhaustive planner is asked to enumerate too many segments.
    #[error("exhaustive planning supports at most {limit} jet streams (got {count})")]
    TooManySegments { count: usize, limit: usize },

    /// Raised when the input file could not be read.
    #[error("failed to read jet stream input from {path}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
