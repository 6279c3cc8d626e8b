use crate::{
    normalize::{normalize, validate},
    parser::{
        ast::Sum,
        error::{kind, Error},
        implicit::insert_implicit_mul,
        Parser,
    },
    tokenizer::{tokenize_complete, Token, TokenKind},
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Splits the tokens of an equation at its `=` sign, returning the tokens of the left and right
/// sides, and the span of the `=`.
///
/// Fails if there is no `=`, if there is more than one, or if either side is empty.
pub fn split_sides<'a, 'source>(
    tokens: &'a [Token<'source>],
) -> Result<(&'a [Token<'source>], &'a [Token<'source>], Range<usize>), Error> {
    let assigns = tokens.iter()
        .enumerate()
        .filter(|(_, token)| token.kind == TokenKind::Assign)
        .collect::<Vec<_>>();

    let (index, assign) = match assigns.as_slice() {
        [] => {
            let end = tokens.last().map_or(0, |token| token.span.end);
            return Err(Error::new(vec![0..end], kind::MissingEquals));
        },
        [first] => *first,
        _ => return Err(Error::new(
            assigns.iter().map(|(_, token)| token.span.clone()).collect(),
            kind::MultipleEquals,
        )),
    };

    let (lhs, rhs) = (&tokens[..index], &tokens[index + 1..]);
    if lhs.is_empty() {
        return Err(Error::new(vec![assign.span.clone()], kind::EmptySide { left: true }));
    }
    if rhs.is_empty() {
        return Err(Error::new(vec![assign.span.clone()], kind::EmptySide { left: false }));
    }

    Ok((lhs, rhs, assign.span.clone()))
}

/// A parsed equation: two sums separated by `=`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    /// The left side of the equation.
    pub lhs: Sum,

    /// The right side of the equation.
    pub rhs: Sum,

    /// The span of the `=` sign.
    pub assign_span: Range<usize>,
}

impl Equation {
    /// Parses an equation that has already been normalized with [`normalize`].
    ///
    /// The normalized text is validated first. Implicit multiplication is inserted separately on
    /// each side, and each side must be consumed completely.
    pub fn parse(normalized: &str) -> Result<Self, Error> {
        validate(normalized)?;

        let tokens = tokenize_complete(normalized);
        tracing::trace!(count = tokens.len(), "tokenized equation");

        let (lhs, rhs, assign_span) = split_sides(&tokens)?;
        let lhs = Parser::from_tokens(insert_implicit_mul(lhs), assign_span.start)
            .try_parse_full::<Sum>()?;
        let rhs = Parser::from_tokens(insert_implicit_mul(rhs), normalized.len())
            .try_parse_full::<Sum>()?;

        tracing::debug!(%lhs, %rhs, "parsed equation");
        Ok(Self { lhs, rhs, assign_span })
    }

    /// Normalizes the raw input and parses it. Returns the normalized text alongside the
    /// equation; spans in the equation and in any error refer to that text.
    pub fn parse_raw(input: &str) -> (String, Result<Self, Error>) {
        let normalized = normalize(input);
        tracing::debug!(input, %normalized, "normalized equation");
        let result = Self::parse(&normalized);
        (normalized, result)
    }
}
