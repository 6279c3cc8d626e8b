use ariadne::Fmt;
use lineq_attrs::ErrorKind;
use lineq_error::EXPR;

/// Two factors of a product both contain the unknown, which would make the equation non-linear.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "cannot multiply `x` by `x`",
    labels = ["this part contains `x`", "and so does this factor"],
    help = format!("only {} equations can be solved, such as `2x + 3 = 7`", "linear".fg(EXPR)),
)]
pub struct NonLinearTerm;

/// The divisor of a division contains the unknown.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "cannot divide by an expression containing `x`",
    labels = ["this divisor contains `x`"],
    help = "only division by a number is supported",
)]
pub struct DivisionByUnknown;

/// The divisor of a division is zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "division by zero",
    labels = ["this divisor is zero"],
)]
pub struct DivisionByZero;

/// Multiplying or dividing the numbers in a term produced a value too large to represent.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Parse,
    message = "term is too large",
    labels = ["the value of this term cannot be represented"],
)]
pub struct TermOutOfRange;

/// The terms containing `x` cancel out, so the equation does not have exactly one solution.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Degenerate,
    message = "the equation has no unique solution",
    labels = [
        format!("the {} terms on this side...", "x".fg(EXPR)),
        "...cancel out with the ones on this side".to_string(),
    ],
    help = if *identity {
        "both sides are always equal, so every value of `x` is a solution"
    } else {
        "both sides can never be equal, so no value of `x` is a solution"
    },
)]
pub struct NoUniqueSolution {
    /// Whether the constants cancel out as well, making the equation true for every `x`.
    /// Otherwise, the equation is false for every `x`.
    pub identity: bool,
}

/// The totals or the final value of `x` are too large to represent.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    category = Degenerate,
    message = "the solution is too large to represent",
    labels = ["the numbers in this equation are too large"],
)]
pub struct NonFiniteResult;
