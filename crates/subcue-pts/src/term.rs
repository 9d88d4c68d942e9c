//! The expression AST: terms, signs, and the parsed expression.

use smallvec::SmallVec;
use subcue_core::EventEdge;

/// Operator attached to a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// `+1` or `-1`.
    pub fn factor(self) -> i64 {
        match self {
            Sign::Plus => 1,
            Sign::Minus => -1,
        }
    }
}

/// A single anchor reference in a position expression.
///
/// The token spellings (`ms`, `f`, `kf`, `cf`, `s2.e`, `a.s`, `dsd`, ...)
/// are embedded literally in hotkey and command configuration, so both
/// the spellings and their semantics are a stable public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// Literal duration: `500ms`.
    Milliseconds(i64),
    /// 1-based frame ordinal: `3f`. `0f` clamps to the first frame.
    FrameOrdinal(i64),
    /// `cf` — the frame at or before the playback position.
    CurrentFrame,
    /// `pf` — the frame before the current one.
    PrevFrame,
    /// `nf` — the frame after the current one.
    NextFrame,
    /// 1-based keyframe ordinal: `2kf`.
    KeyframeOrdinal(i64),
    /// `ckf`
    CurrentKeyframe,
    /// `pkf`
    PrevKeyframe,
    /// `nkf`
    NextKeyframe,
    /// `sN.s` / `sN.e` — absolute subtitle ordinal.
    SubtitleOrdinal(i64, EventEdge),
    /// `cs.s` / `cs.e` — first selected subtitle.
    CurrentSubtitle(EventEdge),
    /// `ps.s` / `ps.e` — subtitle before the first selected one.
    PrevSubtitle(EventEdge),
    /// `ns.s` / `ns.e` — subtitle after the first selected one.
    NextSubtitle(EventEdge),
    /// `a.s` / `a.e` — audio selection boundary.
    AudioSelection(EventEdge),
    /// `av.s` / `av.e` — audio view boundary.
    AudioView(EventEdge),
    /// `dsd` — configured default subtitle duration.
    DefaultSubtitleDuration,
}

/// A term with its operator.
///
/// Only the leading term of an expression may carry no sign; an unsigned
/// lead is absolute, a signed one is a delta against the caller-supplied
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedTerm {
    pub sign: Option<Sign>,
    pub term: Term,
}

/// A parsed position expression: signed terms evaluated left to right.
///
/// Immutable and context-free; the same expression can be evaluated any
/// number of times against different snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub terms: SmallVec<[SignedTerm; 4]>,
}
