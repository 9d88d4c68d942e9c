//! SubCue Core - Foundation types for the subtitle editor
//!
//! This crate provides the fundamental types shared throughout SubCue:
//! - Subtitle events and span edges
//! - The read-only timeline snapshot handed to the position-expression
//!   evaluator
//! - Ordered anchor-time searches (floor/ceil index search, signed step
//!   lookup)

pub mod anchor;
pub mod error;
pub mod event;
pub mod snapshot;

pub use anchor::{ceil_index, floor_index, step_lookup};
pub use error::{CoreError, Result};
pub use event::{EventEdge, SubtitleEvent};
pub use snapshot::{AudioSpan, TimelineSnapshot};
