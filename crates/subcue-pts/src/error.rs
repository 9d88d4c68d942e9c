//! Position expression errors.

use thiserror::Error;

/// Failures surfaced to the command layer.
///
/// The variants stay distinct so callers can word user-facing messages
/// per cause ("no current frame" reads differently from "malformed
/// expression"). This crate itself never prints anything.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PtsError {
    /// Syntax error: empty input, dangling or doubled operator, a number
    /// without a unit, or an unrecognized token.
    #[error("malformed position expression: {0}")]
    Malformed(String),

    /// A frame or keyframe lookup ran against an empty table.
    #[error("no frames available")]
    NoFrames,

    /// A relative frame or keyframe reference has no valid neighbor at
    /// the current position.
    #[error("position out of range")]
    OutOfRange,

    /// The referenced resource does not currently exist, as opposed to
    /// being empty or zero.
    #[error("{0} is not available")]
    Unavailable(&'static str),
}

/// Result type alias for expression parsing and evaluation.
pub type Result<T> = std::result::Result<T, PtsError>;
