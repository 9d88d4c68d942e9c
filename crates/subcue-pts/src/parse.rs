//! Tokenizer and parser for position expressions.
//!
//! Grammar (informal):
//!
//! ```text
//! expr          := ws? signed_term (ws? op ws? term)* ws?
//! signed_term   := sign? term
//! op            := '+' | '-'
//! term          := ms_term | frame_term | keyframe_term
//!                | subtitle_term | audio_term | "dsd"
//! ms_term       := digits ws? "ms"
//! frame_term    := digits ws? "f" | "cf" | "pf" | "nf"
//! keyframe_term := digits ws? "kf" | "ckf" | "pkf" | "nkf"
//! subtitle_term := ("cs" | "ps" | "ns" | "s" digits) "." ("s" | "e")
//! audio_term    := ("a" | "av") "." ("s" | "e")
//! ```
//!
//! Whitespace is permitted around operators and between a number and its
//! unit. Bare numbers are never valid; every number needs a unit.

use std::iter::Peekable;

use smallvec::SmallVec;
use subcue_core::EventEdge;

use crate::error::{PtsError, Result};
use crate::term::{Expression, Sign, SignedTerm, Term};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Plus,
    Minus,
    Number(i64),
    Word(&'a str),
}

fn lex(text: &str) -> Result<Vec<Token<'_>>> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b if b.is_ascii_whitespace() => i += 1,
            b'+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            b'-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            b'0'..=b'9' => {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                let digits = &text[start..i];
                let value = digits
                    .parse::<i64>()
                    .map_err(|_| PtsError::Malformed(format!("number out of range: {digits}")))?;
                tokens.push(Token::Number(value));
            }
            b'a'..=b'z' | b'A'..=b'Z' => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'.') {
                    i += 1;
                }
                tokens.push(Token::Word(&text[start..i]));
            }
            b => {
                return Err(PtsError::Malformed(format!(
                    "unexpected character '{}'",
                    b as char
                )))
            }
        }
    }
    Ok(tokens)
}

/// Parse an expression into its term sequence.
pub fn parse(text: &str) -> Result<Expression> {
    if text.trim().is_empty() {
        return Err(PtsError::Malformed("empty expression".into()));
    }
    let mut tokens = lex(text)?.into_iter().peekable();
    let mut terms: SmallVec<[SignedTerm; 4]> = SmallVec::new();

    // The leading sign is optional. When present, the first term becomes
    // a delta against the caller-supplied origin instead of an absolute
    // position.
    let lead_sign = match tokens.peek() {
        Some(Token::Plus) => {
            tokens.next();
            Some(Sign::Plus)
        }
        Some(Token::Minus) => {
            tokens.next();
            Some(Sign::Minus)
        }
        _ => None,
    };
    let term = parse_term(&mut tokens)?;
    terms.push(SignedTerm {
        sign: lead_sign,
        term,
    });

    while let Some(token) = tokens.next() {
        let sign = match token {
            Token::Plus => Sign::Plus,
            Token::Minus => Sign::Minus,
            _ => {
                return Err(PtsError::Malformed(
                    "expected '+' or '-' between terms".into(),
                ))
            }
        };
        let term = parse_term(&mut tokens)?;
        terms.push(SignedTerm {
            sign: Some(sign),
            term,
        });
    }

    Ok(Expression { terms })
}

fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> Result<Term>
where
    I: Iterator<Item = Token<'a>>,
{
    match tokens.next() {
        None => Err(PtsError::Malformed("expression ends with an operator".into())),
        Some(Token::Plus) | Some(Token::Minus) => {
            Err(PtsError::Malformed("doubled operator".into()))
        }
        Some(Token::Number(value)) => match tokens.next() {
            Some(Token::Word("ms")) => Ok(Term::Milliseconds(value)),
            Some(Token::Word("f")) => Ok(Term::FrameOrdinal(value)),
            Some(Token::Word("kf")) => Ok(Term::KeyframeOrdinal(value)),
            Some(Token::Word(unit)) => {
                Err(PtsError::Malformed(format!("unknown unit '{unit}'")))
            }
            _ => Err(PtsError::Malformed(format!("number {value} has no unit"))),
        },
        Some(Token::Word(word)) => anchor_term(word),
    }
}

fn anchor_term(word: &str) -> Result<Term> {
    let term = match word {
        "cf" => Term::CurrentFrame,
        "pf" => Term::PrevFrame,
        "nf" => Term::NextFrame,
        "ckf" => Term::CurrentKeyframe,
        "pkf" => Term::PrevKeyframe,
        "nkf" => Term::NextKeyframe,
        "dsd" => Term::DefaultSubtitleDuration,
        "cs.s" => Term::CurrentSubtitle(EventEdge::Start),
        "cs.e" => Term::CurrentSubtitle(EventEdge::End),
        "ps.s" => Term::PrevSubtitle(EventEdge::Start),
        "ps.e" => Term::PrevSubtitle(EventEdge::End),
        "ns.s" => Term::NextSubtitle(EventEdge::Start),
        "ns.e" => Term::NextSubtitle(EventEdge::End),
        "a.s" => Term::AudioSelection(EventEdge::Start),
        "a.e" => Term::AudioSelection(EventEdge::End),
        "av.s" => Term::AudioView(EventEdge::Start),
        "av.e" => Term::AudioView(EventEdge::End),
        _ => return subtitle_ordinal(word),
    };
    Ok(term)
}

/// `sN.s` / `sN.e` — the only anchor spelling with an embedded number.
fn subtitle_ordinal(word: &str) -> Result<Term> {
    let unrecognized = || PtsError::Malformed(format!("unrecognized token '{word}'"));

    let rest = word.strip_prefix('s').ok_or_else(unrecognized)?;
    let (digits, edge) = rest.split_once('.').ok_or_else(unrecognized)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unrecognized());
    }
    let ordinal = digits.parse::<i64>().map_err(|_| unrecognized())?;
    let edge = match edge {
        "s" => EventEdge::Start,
        "e" => EventEdge::End,
        _ => return Err(unrecognized()),
    };
    Ok(Term::SubtitleOrdinal(ordinal, edge))
}
