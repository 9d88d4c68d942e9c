//! Resolution of parsed expressions against a timeline snapshot.
//!
//! The evaluator walks the term sequence left to right with a running
//! millisecond accumulator. The same token spelling resolves under two
//! different policies depending on where it sits:
//!
//! - **positional** — an unsigned leading term establishes an absolute
//!   value on its own (`1f` is the first frame's time);
//! - **delta** — a term behind a `+`/`-` steps the accumulator (`ms+1f`
//!   is the frame after the accumulator's floor frame).
//!
//! Frame and keyframe deltas use the shared step lookup from
//! `subcue_core::anchor`: floor-and-add for `+`, ceil-and-subtract for
//! `-`, clamped into the table. Chaining a subtitle, audio, or `dsd`
//! term behind an operator has no defined meaning and is rejected.

use subcue_core::{anchor, TimelineSnapshot};

use crate::error::{PtsError, Result};
use crate::term::{Expression, Sign, Term};

/// Resolve `expr` to an absolute millisecond value.
///
/// `origin` seeds the accumulator when the expression opens with an
/// explicit sign (`+500ms`, `-1f`); it is ignored otherwise. A missing
/// origin counts as zero.
pub fn evaluate(
    expr: &Expression,
    origin: Option<i64>,
    snapshot: &TimelineSnapshot,
) -> Result<i64> {
    let resolver = Resolver {
        snapshot,
        keyframe_times: snapshot.keyframe_times(),
    };

    let mut acc = 0i64;
    for (i, signed) in expr.terms.iter().enumerate() {
        acc = match (i, signed.sign) {
            (0, None) => resolver.positional(signed.term)?,
            (0, Some(sign)) => resolver.delta(origin.unwrap_or(0), sign, signed.term)?,
            (_, Some(sign)) => resolver.delta(acc, sign, signed.term)?,
            (_, None) => unreachable!("parser attaches a sign to every chained term"),
        };
    }
    Ok(acc)
}

struct Resolver<'a> {
    snapshot: &'a TimelineSnapshot,
    /// Keyframe-filtered anchor sequence, materialized once per
    /// evaluation.
    keyframe_times: Vec<i64>,
}

impl Resolver<'_> {
    /// Resolve a term that establishes an absolute value on its own.
    fn positional(&self, term: Term) -> Result<i64> {
        let snap = self.snapshot;
        match term {
            Term::Milliseconds(value) => Ok(value),

            Term::FrameOrdinal(n) => ordinal_lookup(&snap.timecodes, n),
            Term::CurrentFrame => {
                // No video loaded is a defined zero, not an error.
                if snap.timecodes.is_empty() {
                    return Ok(0);
                }
                anchor::floor_index(&snap.timecodes, snap.current_pts)
                    .map(|i| snap.timecodes[i])
                    .ok_or(PtsError::OutOfRange)
            }
            Term::PrevFrame => neighbor_lookup(&snap.timecodes, snap.current_pts, -1),
            Term::NextFrame => neighbor_lookup(&snap.timecodes, snap.current_pts, 1),

            Term::KeyframeOrdinal(n) => ordinal_lookup(&self.keyframe_times, n),
            Term::CurrentKeyframe => {
                // Unlike `cf`, an empty keyframe table is an error.
                if self.keyframe_times.is_empty() {
                    return Err(PtsError::NoFrames);
                }
                anchor::floor_index(&self.keyframe_times, snap.current_pts)
                    .map(|i| self.keyframe_times[i])
                    .ok_or(PtsError::OutOfRange)
            }
            Term::PrevKeyframe => neighbor_lookup(&self.keyframe_times, snap.current_pts, -1),
            Term::NextKeyframe => neighbor_lookup(&self.keyframe_times, snap.current_pts, 1),

            Term::SubtitleOrdinal(n, edge) => {
                if snap.events.is_empty() {
                    return Ok(0);
                }
                let index = (n - 1).clamp(0, snap.events.len() as i64 - 1) as usize;
                Ok(snap.events[index].edge(edge))
            }
            Term::CurrentSubtitle(edge) => Ok(snap
                .first_selected()
                .and_then(|i| snap.events.get(i))
                .map(|event| event.edge(edge))
                .unwrap_or(0)),
            Term::PrevSubtitle(edge) => Ok(snap
                .first_selected()
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| snap.events.get(i))
                .map(|event| event.edge(edge))
                .unwrap_or(0)),
            Term::NextSubtitle(edge) => Ok(snap
                .first_selected()
                .and_then(|i| snap.events.get(i + 1))
                .map(|event| event.edge(edge))
                .unwrap_or(0)),

            Term::AudioSelection(edge) => snap
                .audio_selection
                .map(|span| span.edge(edge))
                .ok_or(PtsError::Unavailable("audio selection")),
            Term::AudioView(edge) => Ok(snap.audio_view.edge(edge)),

            Term::DefaultSubtitleDuration => Ok(snap.default_duration),
        }
    }

    /// Apply a signed term as a step against the accumulator.
    fn delta(&self, acc: i64, sign: Sign, term: Term) -> Result<i64> {
        match term {
            Term::Milliseconds(value) => Ok(acc.saturating_add(sign.factor().saturating_mul(value))),

            Term::FrameOrdinal(n) => {
                step(&self.snapshot.timecodes, acc, sign.factor().saturating_mul(n))
            }
            Term::CurrentFrame => step(&self.snapshot.timecodes, acc, 0),
            Term::PrevFrame | Term::NextFrame => {
                step(&self.snapshot.timecodes, acc, sign.factor())
            }

            Term::KeyframeOrdinal(n) => {
                step(&self.keyframe_times, acc, sign.factor().saturating_mul(n))
            }
            Term::CurrentKeyframe => step(&self.keyframe_times, acc, 0),
            Term::PrevKeyframe | Term::NextKeyframe => {
                step(&self.keyframe_times, acc, sign.factor())
            }

            Term::SubtitleOrdinal(..)
            | Term::CurrentSubtitle(_)
            | Term::PrevSubtitle(_)
            | Term::NextSubtitle(_)
            | Term::AudioSelection(_)
            | Term::AudioView(_)
            | Term::DefaultSubtitleDuration => Err(PtsError::Malformed(
                "only millisecond, frame, and keyframe terms can follow '+' or '-'".into(),
            )),
        }
    }
}

/// 1-based ordinal lookup with clamping at both ends.
fn ordinal_lookup(times: &[i64], ordinal: i64) -> Result<i64> {
    if times.is_empty() {
        return Err(PtsError::NoFrames);
    }
    let index = (ordinal - 1).clamp(0, times.len() as i64 - 1) as usize;
    Ok(times[index])
}

/// `pf`/`nf`-style neighbor of the current playback position.
fn neighbor_lookup(times: &[i64], current: i64, offset: i64) -> Result<i64> {
    if times.is_empty() {
        return Err(PtsError::NoFrames);
    }
    let floor = anchor::floor_index(times, current)
        .map(|i| i as i64)
        .unwrap_or(-1);
    let index = floor + offset;
    if index < 0 || index >= times.len() as i64 {
        return Err(PtsError::OutOfRange);
    }
    Ok(times[index as usize])
}

fn step(times: &[i64], query: i64, count: i64) -> Result<i64> {
    anchor::step_lookup(times, query, count).ok_or(PtsError::NoFrames)
}
