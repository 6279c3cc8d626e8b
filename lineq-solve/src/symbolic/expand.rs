//! Parenthesis expansion.
//!
//! Turns a parsed [`Sum`] into a flat list of [`Term`]s by distributing every scalar factor over
//! the parenthesized sums it multiplies, so that `2(x + 3) - 4` becomes `2x + 6 - 4`. Products
//! are evaluated left to right. A product may contain the unknown in at most one of its factors,
//! and may only divide by factors that do not contain it.

use crate::{
    error::{kind, Error},
    symbolic::term::Term,
};
use lineq_parser::parser::ast::{Factor, MulOp, Primary, Product, Sign, Sum};
use std::ops::Range;

/// Returns the value of a list of terms if none of them contains the unknown.
fn scalar(terms: &[Term]) -> Option<f64> {
    terms.iter()
        .try_fold(0.0, |acc, term| (!term.is_variable()).then(|| acc + term.coefficient))
}

/// Multiplies two expanded factors, distributing whichever one is a scalar over the other.
///
/// Returns [`None`] if both factors contain the unknown.
fn multiply(lhs: Vec<Term>, rhs: Vec<Term>) -> Option<Vec<Term>> {
    match (scalar(&lhs), scalar(&rhs)) {
        (_, Some(factor)) => Some(lhs.into_iter().map(|term| term.scale(factor)).collect()),
        (Some(factor), None) => Some(rhs.into_iter().map(|term| term.scale(factor)).collect()),
        (None, None) => None,
    }
}

/// Divides every term of an expanded factor by the scalar value of `rhs`.
fn divide(lhs: Vec<Term>, rhs: &[Term], rhs_span: Range<usize>) -> Result<Vec<Term>, Error> {
    let divisor = scalar(rhs)
        .ok_or_else(|| Error::new(vec![rhs_span.clone()], kind::DivisionByUnknown))?;
    if divisor == 0.0 {
        return Err(Error::new(vec![rhs_span], kind::DivisionByZero));
    }
    Ok(lhs.into_iter().map(|term| term.divide(divisor)).collect())
}

/// Expands a single factor, applying its unary sign.
fn expand_factor(factor: &Factor) -> Result<Vec<Term>, Error> {
    let terms = match &factor.primary {
        Primary::Number(num) => vec![Term::constant(num.value)],
        Primary::Unknown(_) => vec![Term::variable(1.0)],
        Primary::Paren(paren) => expand(&paren.sum)?,
    };

    if factor.negated {
        Ok(terms.into_iter().map(|term| -term).collect())
    } else {
        Ok(terms)
    }
}

/// Expands a product of factors into a list of terms.
fn expand_product(product: &Product) -> Result<Vec<Term>, Error> {
    let mut terms = expand_factor(&product.first)?;
    let mut span = product.first.span.clone();

    for (op, factor) in &product.rest {
        let rhs = expand_factor(factor)?;
        terms = match op {
            MulOp::Mul => multiply(terms, rhs).ok_or_else(|| Error::new(
                vec![span.clone(), factor.span.clone()],
                kind::NonLinearTerm,
            ))?,
            MulOp::Div => divide(terms, &rhs, factor.span.clone())?,
        };
        span.end = factor.span.end;
    }

    if terms.iter().any(|term| !term.coefficient.is_finite()) {
        return Err(Error::new(vec![product.span()], kind::TermOutOfRange));
    }

    Ok(terms)
}

/// Expands a sum into a flat list of terms, in the order they appear.
pub fn expand(sum: &Sum) -> Result<Vec<Term>, Error> {
    let mut terms = Vec::new();
    for signed in &sum.terms {
        let product = expand_product(&signed.product)?;
        match signed.sign {
            Sign::Pos => terms.extend(product),
            Sign::Neg => terms.extend(product.into_iter().map(|term| -term)),
        }
    }
    Ok(terms)
}

/// Renders expanded terms the way they are shown after distribution: each term in canonical form,
/// joined with `+`, with `+-` collapsed to `-`. For example, `[2x, -3]` renders as `2x-3`.
pub fn expanded_expression(terms: &[Term]) -> String {
    terms.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("+")
        .replace("+-", "-")
}

#[cfg(test)]
mod tests {
    use lineq_error::Category;
    use lineq_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses and expands the given expression.
    fn expand_str(input: &str) -> Result<Vec<Term>, Error> {
        let sum = Parser::new(input).try_parse_full::<Sum>().unwrap();
        expand(&sum)
    }

    #[test]
    fn flat_sum() {
        assert_eq!(
            expand_str("2x+3-x").unwrap(),
            vec![Term::variable(2.0), Term::constant(3.0), Term::variable(-1.0)],
        );
    }

    #[test]
    fn scalar_before_group() {
        let terms = expand_str("2*(x+1)").unwrap();
        assert_eq!(terms, vec![Term::variable(2.0), Term::constant(2.0)]);
        assert_eq!(expanded_expression(&terms), "2x+2");
    }

    #[test]
    fn scalar_after_group() {
        let terms = expand_str("(x-4)3").unwrap();
        assert_eq!(terms, vec![Term::variable(3.0), Term::constant(-12.0)]);
        assert_eq!(expanded_expression(&terms), "3x-12");
    }

    #[test]
    fn negated_group() {
        assert_eq!(
            expand_str("5-(x-2)").unwrap(),
            vec![Term::constant(5.0), Term::variable(-1.0), Term::constant(2.0)],
        );
        assert_eq!(
            expand_str("-2(3-x)").unwrap(),
            vec![Term::constant(-6.0), Term::variable(2.0)],
        );
    }

    #[test]
    fn nested_groups() {
        assert_eq!(
            expand_str("2(3(x+1)-x)").unwrap(),
            vec![Term::variable(6.0), Term::constant(6.0), Term::variable(-2.0)],
        );
    }

    #[test]
    fn dot_multiplies() {
        // `2.5x` is `2 * 5 * x`, not two and a half
        assert_eq!(expand_str("2.5x").unwrap(), vec![Term::variable(10.0)]);
    }

    #[test]
    fn division_by_number() {
        assert_eq!(
            expand_str("(x+4)/2").unwrap(),
            vec![Term::variable(0.5), Term::constant(2.0)],
        );
    }

    #[test]
    fn non_linear_product() {
        let err = expand_str("x(x+1)").unwrap_err();
        assert_eq!(err.category(), Category::Parse);
        assert!(err.downcast_ref::<kind::NonLinearTerm>().is_some());
        assert_eq!(err.spans, vec![0..1, 1..6]);
    }

    #[test]
    fn division_by_unknown() {
        let err = expand_str("3/x").unwrap_err();
        assert!(err.downcast_ref::<kind::DivisionByUnknown>().is_some());
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn division_by_zero() {
        let err = expand_str("x/(2-2)").unwrap_err();
        assert_eq!(err.category(), Category::Parse);
        assert!(err.downcast_ref::<kind::DivisionByZero>().is_some());
        assert_eq!(err.spans, vec![2..7]);
    }

    #[test]
    fn overflowing_product() {
        let big = "9".repeat(200);
        let err = expand_str(&format!("{big}*{big}x")).unwrap_err();
        assert!(err.downcast_ref::<kind::TermOutOfRange>().is_some());
    }
}
