use crate::{
    parser::{
        ast::sum::Sum,
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal. Numbers are whole: a `.` is multiplication, never a decimal point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// A parenthesized sum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner sum.
    pub sum: Box<Sum>,

    /// The region of the source code that this [`Paren`] was parsed from, including both
    /// parentheses.
    pub span: Range<usize>,
}

/// The innermost building block of an expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// A number, such as `12`.
    Number(LitNum),

    /// The unknown `x`, with the span it was parsed from.
    Unknown(Range<usize>),

    /// A parenthesized sum, such as `(x - 4)`.
    Paren(Paren),
}

impl Primary {
    /// Returns the span of the primary.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Number(num) => num.span.clone(),
            Self::Unknown(span) => span.clone(),
            Self::Paren(paren) => paren.span.clone(),
        }
    }
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Int => {
                let value = token.lexeme.parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| Error::new(vec![token.span.clone()], kind::NumberOutOfRange))?;
                Ok(Self::Number(LitNum { value, span: token.span }))
            },
            TokenKind::Unknown => Ok(Self::Unknown(token.span)),
            TokenKind::OpenParen => {
                if let Some(close) = input.next_if(|kind| kind == TokenKind::CloseParen) {
                    return Err(Error::new(
                        vec![token.span.start..close.span.end],
                        kind::EmptyParenthesis,
                    ));
                }

                input.enter_paren(&token.span)?;
                let sum = input.try_parse::<Sum>();
                input.exit_paren();

                let sum = sum?;
                match input.current_kind() {
                    Some(TokenKind::CloseParen) => {
                        let close = input.next_token()?;
                        Ok(Self::Paren(Paren {
                            sum: Box::new(sum),
                            span: token.span.start..close.span.end,
                        }))
                    },
                    None => Err(Error::new(
                        vec![token.span],
                        kind::UnclosedParenthesis { opening: true },
                    )),
                    Some(found) => Err(input.error(kind::UnexpectedToken {
                        expected: &[TokenKind::CloseParen],
                        found,
                    })),
                }
            },
            TokenKind::CloseParen => Err(Error::new(
                vec![token.span],
                kind::UnclosedParenthesis { opening: false },
            )),
            found => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Unknown, TokenKind::OpenParen],
                found,
            })),
        }
    }
}

impl std::fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(num) => write!(f, "{}", num.value),
            Self::Unknown(_) => write!(f, "x"),
            Self::Paren(paren) => write!(f, "({})", paren.sum),
        }
    }
}

/// A [`Primary`] with an optional unary sign, such as `-3` in `2*-3`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Factor {
    /// Whether the factor is negated. Repeated signs cancel out, so `--3` is not negated.
    pub negated: bool,

    /// The value being signed.
    pub primary: Primary,

    /// The region of the source code that this factor was parsed from, including its signs.
    pub span: Range<usize>,
}

impl Parse for Factor {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let start = input.span().start;
        let mut negated = false;
        while let Some(sign) = input.next_if(TokenKind::is_sign) {
            negated ^= sign.kind == TokenKind::Sub;
        }

        let primary = input.try_parse::<Primary>()?;
        Ok(Self {
            negated,
            span: start..primary.span().end,
            primary,
        })
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negated {
            write!(f, "-")?;
        }
        self.primary.fmt(f)
    }
}
