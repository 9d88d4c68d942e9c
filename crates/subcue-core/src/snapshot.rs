//! Read-only timeline snapshot consumed by the expression evaluator.
//!
//! The snapshot is a plain value: the owning editor clones the relevant
//! slices of its state into one, hands it to the evaluator, and throws it
//! away. The evaluator never mutates it, so independent evaluations can
//! run concurrently on independent snapshots.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::event::{EventEdge, SubtitleEvent};

/// A closed span of audio in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AudioSpan {
    pub start: i64,
    pub end: i64,
}

impl AudioSpan {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Read one boundary of the span.
    pub fn edge(&self, edge: EventEdge) -> i64 {
        match edge {
            EventEdge::Start => self.start,
            EventEdge::End => self.end,
        }
    }
}

/// Immutable view of the timeline state at one instant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    /// Frame presentation times in milliseconds, non-decreasing.
    /// Empty when no video is loaded.
    pub timecodes: Vec<i64>,
    /// Indices into `timecodes` flagged as keyframes, ascending.
    pub keyframes: Vec<usize>,
    /// Current playback position in milliseconds.
    pub current_pts: i64,
    /// Subtitle events in list order.
    pub events: Vec<SubtitleEvent>,
    /// Indices of the selected events, in selection order.
    pub selection: Vec<usize>,
    /// Active audio selection, if the user has made one.
    pub audio_selection: Option<AudioSpan>,
    /// Audio view bounds. Always defined, even without a selection.
    pub audio_view: AudioSpan,
    /// Configured default subtitle duration in milliseconds.
    pub default_duration: i64,
}

impl TimelineSnapshot {
    /// Times of the keyframe-flagged frames, in time order.
    ///
    /// Keyframe ordinals and deltas resolve against this sub-sequence the
    /// same way frame ordinals resolve against the full timecode table.
    pub fn keyframe_times(&self) -> Vec<i64> {
        self.keyframes
            .iter()
            .filter_map(|&index| self.timecodes.get(index).copied())
            .collect()
    }

    /// Index of the first selected event, if any.
    pub fn first_selected(&self) -> Option<usize> {
        self.selection.first().copied()
    }

    /// Check the structural invariants the evaluator relies on.
    pub fn validate(&self) -> Result<()> {
        for (i, pair) in self.timecodes.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(CoreError::UnorderedTimecodes(i + 1));
            }
        }
        for &index in &self.keyframes {
            if index >= self.timecodes.len() {
                return Err(CoreError::KeyframeOutOfRange {
                    index,
                    frames: self.timecodes.len(),
                });
            }
        }
        for &index in &self.selection {
            if index >= self.events.len() {
                return Err(CoreError::SelectionOutOfRange {
                    index,
                    events: self.events.len(),
                });
            }
        }
        Ok(())
    }
}
