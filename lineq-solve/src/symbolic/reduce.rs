use crate::symbolic::term::Term;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One side of an equation folded into a single coefficient of `x` and a single constant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReducedSide {
    /// The sum of the coefficients of every variable term.
    pub coefficient: f64,

    /// The sum of every constant term.
    pub constant: f64,

    /// The terms of the side rendered in the order they were written, such as `2x + 3 - 1x`.
    pub expression: String,

    /// The terms the side was reduced from.
    pub terms: Vec<Term>,
}

/// Collects like terms of an expanded side.
///
/// The reduced expression renders every term canonically, joins them with `" + "`, and then
/// collapses `"+ -"` into `"- "`, so `[2x, -3]` renders as `2x - 3`.
pub fn reduce(terms: Vec<Term>) -> ReducedSide {
    let (coefficient, constant) = terms.iter()
        .fold((0.0, 0.0), |(coefficient, constant), term| {
            if term.is_variable() {
                (coefficient + term.coefficient, constant)
            } else {
                (coefficient, constant + term.coefficient)
            }
        });

    let expression = terms.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" + ")
        .replace("+ -", "- ");
    trace!(coefficient, constant, %expression, "reduced side");

    ReducedSide { coefficient, constant, expression, terms }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn collects_like_terms() {
        let side = reduce(vec![
            Term::variable(2.0),
            Term::constant(3.0),
            Term::variable(-1.0),
            Term::constant(-7.0),
        ]);
        assert_eq!(side.coefficient, 1.0);
        assert_eq!(side.constant, -4.0);
        assert_eq!(side.expression, "2x + 3 - 1x - 7");
    }

    #[test]
    fn single_constant() {
        let side = reduce(vec![Term::constant(10.0)]);
        assert_eq!(side.coefficient, 0.0);
        assert_eq!(side.constant, 10.0);
        assert_eq!(side.expression, "10");
    }

    #[test]
    fn invariant_under_reordering() {
        let a = reduce(vec![Term::variable(2.0), Term::constant(3.0)]);
        let b = reduce(vec![Term::constant(3.0), Term::variable(2.0)]);
        assert_eq!(a.coefficient, b.coefficient);
        assert_eq!(a.constant, b.constant);
        assert_eq!(b.expression, "3 + 2x");
    }

    #[test]
    fn fractional_coefficients() {
        let side = reduce(vec![Term::variable(0.1), Term::variable(0.2)]);
        assert_float_relative_eq!(side.coefficient, 0.3);
        assert_eq!(side.expression, "0.1x + 0.2x");
    }
}
