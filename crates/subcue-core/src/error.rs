//! Error types for subcue-core.

use thiserror::Error;

/// Structural problems in a timeline snapshot.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("frame timecodes decrease at index {0}")]
    UnorderedTimecodes(usize),

    #[error("keyframe index {index} out of range for {frames} frames")]
    KeyframeOutOfRange { index: usize, frames: usize },

    #[error("selected event index {index} out of range for {events} events")]
    SelectionOutOfRange { index: usize, events: usize },
}

/// Result type alias for subcue-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
