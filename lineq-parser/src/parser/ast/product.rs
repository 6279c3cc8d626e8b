use crate::{
    parser::{ast::factor::Factor, error::Error, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operator joining two factors of a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MulOp {
    /// `*`, `.`, or implicit multiplication.
    Mul,

    /// `/`.
    Div,
}

impl MulOp {
    /// Converts a token kind to a product operator. Returns [`None`] for any other token.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Mul | TokenKind::Dot => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for MulOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

/// A chain of factors joined by multiplication or division, evaluated left to right, such as
/// `2 * (x + 1) / 3`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    /// The first factor.
    pub first: Factor,

    /// The remaining factors, each with the operator in front of it.
    pub rest: Vec<(MulOp, Factor)>,

    /// The region of the source code that this product was parsed from.
    pub span: Range<usize>,
}

impl Product {
    /// Returns the span of the product.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Product {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let first = input.try_parse::<Factor>()?;
        let mut rest = Vec::new();

        while let Some(op_token) = input.next_if(TokenKind::is_product_op) {
            let op = MulOp::from_kind(op_token.kind).unwrap_or(MulOp::Mul);
            rest.push((op, input.try_parse::<Factor>()?));
        }

        let end = rest.last().map_or(first.span.end, |(_, factor)| factor.span.end);
        Ok(Self {
            span: first.span.start..end,
            first,
            rest,
        })
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.first.fmt(f)?;
        for (op, factor) in &self.rest {
            write!(f, "{}{}", op, factor)?;
        }
        Ok(())
    }
}
