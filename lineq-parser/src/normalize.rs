//! Normalization and validation of raw equation text.
//!
//! Equations arrive exactly as the user typed them. Before tokenizing, [`normalize`] strips all
//! whitespace, turns every `.` into `*` and lower-cases the input. A `.` is **always** a
//! multiplication marker; there are no decimal points, so `2.5x` means `2 * 5 * x`.
//!
//! [`validate`] then checks the normalized text for the few structural properties every equation
//! must have before any parsing is attempted. All spans in errors produced after normalization
//! refer to the normalized text.

use crate::parser::error::{kind, Error};

/// Characters allowed in a normalized equation, other than ASCII digits.
const ALLOWED: &[char] = &['x', '+', '-', '*', '/', '(', ')', '='];

/// Normalizes the raw equation text: removes whitespace, replaces `.` with `*` and lower-cases
/// every character.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '.' { '*' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Checks that the normalized equation is non-empty, contains only allowed characters, contains
/// an `=`, and mentions the unknown `x`.
///
/// Every disallowed character is reported in a single error, each with its own span.
pub fn validate(normalized: &str) -> Result<(), Error> {
    if normalized.is_empty() {
        return Err(Error::new(vec![0..0], kind::EmptyEquation));
    }

    let (chars, spans): (Vec<_>, Vec<_>) = normalized
        .char_indices()
        .filter(|(_, c)| !c.is_ascii_digit() && !ALLOWED.contains(c))
        .map(|(i, c)| (c, i..i + c.len_utf8()))
        .unzip();
    if !chars.is_empty() {
        return Err(Error::new(spans, kind::InvalidCharacters { chars }));
    }

    let whole = 0..normalized.len();
    if !normalized.contains('=') {
        return Err(Error::new(vec![whole], kind::MissingEquals));
    }

    if !normalized.contains('x') {
        return Err(Error::new(vec![whole], kind::MissingUnknown));
    }

    Ok(())
}
