use ariadne::Fmt;
use lineq_attrs::ErrorKind;
use lineq_error::EXPR;
use crate::tokenizer::TokenKind;
use std::iter;

/// The equation contained nothing but whitespace.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "empty equation",
    labels = [format!("type an {} here", "equation".fg(EXPR))],
    help = "equations look like `2x + 3 = 7`",
)]
pub struct EmptyEquation;

/// The equation contained characters that cannot appear in a linear equation in `x`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = format!(
        "invalid characters in equation: `{}`",
        chars.iter().map(|c| c.to_string()).collect::<Vec<_>>().join("`, `"),
    ),
    labels = iter::repeat("this character is not allowed"),
    help = format!("only digits, the unknown {}, `+ - * / ( ) .` and `=` are allowed", "x".fg(EXPR)),
)]
pub struct InvalidCharacters {
    /// The offending characters, in the order they appear.
    pub chars: Vec<char>,
}

/// There was no `=` in the equation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "missing `=` sign in equation",
    labels = ["I expected an `=` somewhere in here"],
    help = "an equation relates two expressions, like `2x + 3 = 7`",
)]
pub struct MissingEquals;

/// The equation had more than one `=`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "too many `=` signs in equation",
    labels = iter::once("the equation is split here").chain(iter::repeat("remove this `=`")),
    help = "an equation has exactly one left side and one right side",
)]
pub struct MultipleEquals;

/// The unknown `x` did not appear anywhere in the equation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Syntax,
    message = "the equation does not contain the unknown `x`",
    labels = [format!("there is nothing to solve for in this {}", "equation".fg(EXPR))],
    help = "add a term with `x`, like `2x`",
)]
pub struct MissingUnknown;

/// One side of the equation was empty.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Structural,
    message = format!("the {} side of the equation is empty", if *left { "left" } else { "right" }),
    labels = [format!("I expected an {} here", "expression".fg(EXPR))],
    help = "write an expression on both sides of the `=`",
)]
pub struct EmptySide {
    /// Whether the left side is the empty one. Otherwise, the right side is empty.
    pub left: bool,
}

/// The end of one side of the equation was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "term".fg(EXPR))],
)]
pub struct UnexpectedEoExpr;

/// The end of one side of the equation was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEoExpr;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A number was too large to be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "number is too large",
    labels = ["this number cannot be represented"],
    help = "numbers must be smaller than about 1.8e308",
)]
pub struct NumberOutOfRange;

/// Parentheses were nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "too many nested parentheses",
    labels = ["this parenthesis is nested too deeply"],
    help = format!("at most {} parentheses can be open at once", crate::parser::MAX_NESTING),
)]
pub struct NestingTooDeep;
