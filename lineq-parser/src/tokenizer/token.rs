use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    /// A `.` is a multiplication marker, not a decimal point.
    #[token(".")]
    Dot,

    #[token("=")]
    Assign,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+")]
    Int,

    /// The unknown being solved for.
    #[token("x")]
    #[token("X")]
    Unknown,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token is an additive sign, `+` or `-`.
    pub fn is_sign(self) -> bool {
        matches!(self, TokenKind::Add | TokenKind::Sub)
    }

    /// Returns true if the token joins two factors of a product: `*`, `.` or `/`.
    pub fn is_product_op(self) -> bool {
        matches!(self, TokenKind::Mul | TokenKind::Dot | TokenKind::Div)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    ///
    /// Tokens inserted by the parser, such as implicit multiplication, have an empty lexeme.
    pub lexeme: &'source str,
}
