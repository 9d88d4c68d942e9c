//! Subtitle event primitives.

use serde::{Deserialize, Serialize};

/// A single subtitle event on the timeline.
///
/// Events are ordered by their index in the event list; that index, not
/// the start time, defines ordinal order for position expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleEvent {
    /// Start of the event in milliseconds.
    pub start: i64,
    /// End of the event in milliseconds.
    pub end: i64,
}

impl SubtitleEvent {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Duration in milliseconds. Zero-length events are legal.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Read one boundary of the event.
    pub fn edge(&self, edge: EventEdge) -> i64 {
        match edge {
            EventEdge::Start => self.start,
            EventEdge::End => self.end,
        }
    }
}

/// Which boundary of an event or span to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventEdge {
    Start,
    End,
}
