//! Insertion of implicit multiplication.
//!
//! Multiplication can be written without an operator in a few places: `2x`, `x2`, `3(x + 1)`,
//! `x(4)`, `(x + 1)(2)` and `(x + 1)2`. This pass inserts an explicit [`TokenKind::Mul`] token,
//! with an empty lexeme and a zero-width span, between every such pair of adjacent tokens, so the
//! parser never has to guess.

use crate::tokenizer::{Token, TokenKind};

/// Returns true if multiplication is implied between two adjacent tokens of the given kinds.
pub fn implies_mul(left: TokenKind, right: TokenKind) -> bool {
    use TokenKind::*;
    matches!(
        (left, right),
        (Int, Unknown)
            | (Unknown, Int | OpenParen)
            | (Int, OpenParen)
            | (CloseParen, OpenParen | Int)
    )
}

/// Returns a copy of the given tokens with a multiplication token inserted between every pair of
/// adjacent tokens for which [`implies_mul`] holds.
pub fn insert_implicit_mul<'source>(tokens: &[Token<'source>]) -> Vec<Token<'source>> {
    let mut out = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        if let Some(prev) = i.checked_sub(1).map(|j| &tokens[j]) {
            if implies_mul(prev.kind, token.kind) {
                out.push(Token {
                    span: token.span.start..token.span.start,
                    kind: TokenKind::Mul,
                    lexeme: "",
                });
            }
        }
        out.push(token.clone());
    }

    out
}
