//! SubCue position expressions.
//!
//! A position expression names a point on the timeline relative to one
//! of several anchor namespaces: raw milliseconds (`500ms`), video
//! frames (`cf`, `pf`, `nf`, `3f`), keyframes (`ckf`, `pkf`, `nkf`,
//! `1kf`), subtitle event boundaries (`cs.s`, `ps.e`, `s2.e`), the audio
//! selection and view (`a.s`, `av.e`), and the configured default
//! subtitle duration (`dsd`). Terms chain with `+`/`-`: `a.s-1000ms` is
//! one second before the audio selection start, `cf+1f` the frame after
//! the current one.
//!
//! Hotkey bindings and command macros embed these expressions literally
//! (`seek -d=+1f`, `audio-shift-sel -d=-1kf`), so the token spellings
//! and their semantics are a stable public contract.
//!
//! Evaluation is a pure function of the expression text, an optional
//! origin, and a read-only [`TimelineSnapshot`]: no I/O, no mutation, no
//! hidden state.

pub mod error;
pub mod eval;
pub mod parse;
pub mod term;

pub use error::{PtsError, Result};
pub use eval::evaluate;
pub use parse::parse;
pub use term::{Expression, Sign, SignedTerm, Term};

use subcue_core::TimelineSnapshot;

/// Parse and evaluate an expression in one step.
pub fn resolve(text: &str, origin: Option<i64>, snapshot: &TimelineSnapshot) -> Result<i64> {
    let expr = parse(text)?;
    let value = evaluate(&expr, origin, snapshot)?;
    tracing::debug!(text, value, "resolved position expression");
    Ok(value)
}
