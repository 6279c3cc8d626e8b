pub mod ast;
pub mod equation;
pub mod error;
pub mod implicit;

use error::{kind, Error};
use lineq_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The deepest nesting of parentheses the parser accepts.
pub const MAX_NESTING: usize = 64;

/// A parser for one side of an equation, or any other sum of linear terms.
///
/// The parser works on a list of tokens with whitespace already removed. Use
/// [`equation::Equation::parse`] to parse a whole equation; use [`Parser::new`] to parse a single
/// expression, such as `3(x - 1)`.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The offset in the source where the parsed tokens end. Errors about a missing token point
    /// here.
    end: usize,

    /// The number of parentheses currently open.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given expression. Implicit multiplication is inserted.
    pub fn new(source: &'source str) -> Self {
        let tokens = tokenize_complete(source);
        Self::from_tokens(implicit::insert_implicit_mul(&tokens), source.len())
    }

    /// Create a new parser for the given tokens. `end` is the offset in the source just past the
    /// last token.
    pub fn from_tokens(tokens: Vec<Token<'source>>, end: usize) -> Self {
        Self {
            tokens: tokens.into_boxed_slice(),
            cursor: 0,
            end,
            depth: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.end..self.end
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the current token, if there is one.
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an end-of-expression error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEoExpr)),
        }
    }

    /// Advances the cursor past the current token if it is of the given kind, returning it.
    pub fn next_if(&mut self, predicate: impl FnOnce(TokenKind) -> bool) -> Option<Token<'source>> {
        let token = self.current_token().filter(|token| predicate(token.kind))?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Records that a parenthesis was opened at the given span.
    ///
    /// Returns an error if more than [`MAX_NESTING`] parentheses would be open.
    pub fn enter_paren(&mut self, open: &Range<usize>) -> Result<(), Error> {
        if self.depth >= MAX_NESTING {
            return Err(Error::new(vec![open.clone()], kind::NestingTooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    /// Records that the innermost open parenthesis was closed, or abandoned.
    pub fn exit_paren(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Speculatively parses a value from the given stream of tokens. If parsing fails, the
    /// cursor is restored to where it was before the attempt.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(self.error(kind::UnclosedParenthesis { opening: false }))
            },
            Some(token) => Err(Error::new(
                vec![token.span.start..self.end],
                kind::ExpectedEoExpr,
            )),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

#[cfg(test)]
mod tests {
    use lineq_error::Category;
    use pretty_assertions::assert_eq;
    use super::*;
    use ast::{Factor, MulOp, Primary, Product, Sign, SignedProduct, Sum};

    #[test]
    fn display_inserts_implicit_mul() {
        let mut parser = Parser::new("2x+3(x-1)(2)");
        let sum = parser.try_parse_full::<Sum>().unwrap();
        assert_eq!(sum.to_string(), "2*x+3*(x-1)*(2)");
    }

    #[test]
    fn simple_sum() {
        let mut parser = Parser::new("-2x+7");
        let sum = parser.try_parse_full::<Sum>().unwrap();

        assert_eq!(sum, Sum {
            terms: vec![
                SignedProduct {
                    sign: Sign::Neg,
                    product: Product {
                        first: Factor {
                            negated: false,
                            primary: Primary::Number(ast::LitNum { value: 2.0, span: 1..2 }),
                            span: 1..2,
                        },
                        rest: vec![(MulOp::Mul, Factor {
                            negated: false,
                            primary: Primary::Unknown(2..3),
                            span: 2..3,
                        })],
                        span: 1..3,
                    },
                    span: 0..3,
                },
                SignedProduct {
                    sign: Sign::Pos,
                    product: Product {
                        first: Factor {
                            negated: false,
                            primary: Primary::Number(ast::LitNum { value: 7.0, span: 4..5 }),
                            span: 4..5,
                        },
                        rest: vec![],
                        span: 4..5,
                    },
                    span: 3..5,
                },
            ],
            span: 0..5,
        });
    }

    #[test]
    fn division_and_dot() {
        let mut parser = Parser::new("x/2.3");
        let sum = parser.try_parse_full::<Sum>().unwrap();
        let product = &sum.terms[0].product;

        assert_eq!(product.rest.iter().map(|(op, _)| *op).collect::<Vec<_>>(), vec![MulOp::Div, MulOp::Mul]);
        assert_eq!(sum.to_string(), "x/2*3");
    }

    #[test]
    fn unary_sign_on_factor() {
        let mut parser = Parser::new("2*-(x+1)");
        let sum = parser.try_parse_full::<Sum>().unwrap();
        let (_, factor) = &sum.terms[0].product.rest[0];

        assert!(factor.negated);
        assert!(matches!(factor.primary, Primary::Paren(_)));
        assert_eq!(sum.to_string(), "2*-(x+1)");
    }

    #[test]
    fn nested_parentheses() {
        let mut parser = Parser::new("2(3(x+1)-x)");
        let sum = parser.try_parse_full::<Sum>().unwrap();
        assert_eq!(sum.to_string(), "2*(3*(x+1)-x)");
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = Parser::new("2(x+1").try_parse_full::<Sum>().unwrap_err();
        assert_eq!(err.category(), Category::Parse);
        assert_eq!(
            err.downcast_ref::<kind::UnclosedParenthesis>(),
            Some(&kind::UnclosedParenthesis { opening: true }),
        );
        assert_eq!(err.spans, vec![1..2]);
    }

    #[test]
    fn unopened_parenthesis() {
        let err = Parser::new("x+1)").try_parse_full::<Sum>().unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnclosedParenthesis>(),
            Some(&kind::UnclosedParenthesis { opening: false }),
        );
        assert_eq!(err.spans, vec![3..4]);
    }

    #[test]
    fn empty_parenthesis() {
        let err = Parser::new("3()").try_parse_full::<Sum>().unwrap_err();
        assert!(err.downcast_ref::<kind::EmptyParenthesis>().is_some());
        assert_eq!(err.spans, vec![1..3]);
    }

    #[test]
    fn trailing_operator() {
        let err = Parser::new("2x+").try_parse_full::<Sum>().unwrap_err();
        assert_eq!(err.category(), Category::Parse);
        assert!(err.downcast_ref::<kind::UnexpectedEoExpr>().is_some());
        assert_eq!(err.spans, vec![3..3]);
    }

    #[test]
    fn leftover_tokens() {
        let err = Parser::new("(x+1)x").try_parse_full::<Sum>().unwrap_err();
        assert!(err.downcast_ref::<kind::ExpectedEoExpr>().is_some());
        assert_eq!(err.spans, vec![5..6]);
    }

    #[test]
    fn nesting_limit() {
        let nested = format!("{}x{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        let sum = Parser::new(&nested).try_parse_full::<Sum>().unwrap();
        assert_eq!(sum.to_string(), nested);

        let deeper = format!("{}x{}", "(".repeat(MAX_NESTING + 1), ")".repeat(MAX_NESTING + 1));
        let err = Parser::new(&deeper).try_parse_full::<Sum>().unwrap_err();
        assert_eq!(err.category(), Category::Parse);
        assert!(err.downcast_ref::<kind::NestingTooDeep>().is_some());
        assert_eq!(err.spans, vec![MAX_NESTING..MAX_NESTING + 1]);
    }

    #[test]
    fn very_deep_nesting() {
        let source = format!("2{}x{}", "(".repeat(10_000), ")".repeat(10_000));
        let err = Parser::new(&source).try_parse_full::<Sum>().unwrap_err();
        assert!(err.downcast_ref::<kind::NestingTooDeep>().is_some());
        assert_eq!(err.spans, vec![MAX_NESTING + 1..MAX_NESTING + 2]);
    }

    #[test]
    fn sibling_parentheses_do_not_nest() {
        let source = format!("2{}", "+(1)".repeat(MAX_NESTING * 2));
        let sum = Parser::new(&source).try_parse_full::<Sum>().unwrap();
        assert_eq!(sum.terms.len(), MAX_NESTING * 2 + 1);
    }

    #[test]
    fn number_out_of_range() {
        let huge = "9".repeat(400);
        let err = Parser::new(&huge).try_parse_full::<Sum>().unwrap_err();
        assert!(err.downcast_ref::<kind::NumberOutOfRange>().is_some());
    }
}
