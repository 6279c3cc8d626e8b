use crate::{
    parser::{ast::product::Product, error::Error, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sign in front of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    /// Converts an additive token kind to a sign. Returns [`None`] for any other token.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Pos),
            TokenKind::Sub => Some(Self::Neg),
            _ => None,
        }
    }
}

/// A product together with the sign that precedes it in a [`Sum`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignedProduct {
    /// The sign of the term. The first term of a sum is [`Sign::Pos`] unless written with a
    /// leading `-`.
    pub sign: Sign,

    /// The product itself.
    pub product: Product,

    /// The region of the source code that this term was parsed from, including its sign.
    pub span: Range<usize>,
}

/// A sum of signed products, such as `2x - 3(x + 1) + 4`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sum {
    /// The terms of the sum, in the order they were written.
    pub terms: Vec<SignedProduct>,

    /// The region of the source code that this sum was parsed from.
    pub span: Range<usize>,
}

impl Sum {
    /// Returns the span of the sum.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Sum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let start = input.span().start;

        // only the first term may omit its sign
        let sign = input.next_if(TokenKind::is_sign)
            .and_then(|token| Sign::from_kind(token.kind))
            .unwrap_or(Sign::Pos);
        let product = input.try_parse::<Product>()?;
        let mut terms = vec![SignedProduct {
            sign,
            span: start..product.span.end,
            product,
        }];

        while let Some(sign_token) = input.next_if(TokenKind::is_sign) {
            let sign = Sign::from_kind(sign_token.kind).unwrap_or(Sign::Pos);
            let product = input.try_parse::<Product>()?;
            terms.push(SignedProduct {
                sign,
                span: sign_token.span.start..product.span.end,
                product,
            });
        }

        let end = terms.last().map_or(start, |term| term.span.end);
        Ok(Self {
            terms,
            span: start..end,
        })
    }
}

impl std::fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            match term.sign {
                Sign::Neg => write!(f, "-")?,
                Sign::Pos if i > 0 => write!(f, "+")?,
                Sign::Pos => {},
            }
            term.product.fmt(f)?;
        }
        Ok(())
    }
}
