//! The solver pipeline, from the raw equation text to the value of `x`.

use crate::{
    error::{kind, Error},
    fmt::FormatOptions,
    step::{narrate, Step},
    symbolic::{expand, expanded_expression, invert, reduce, InvertedSide, ReducedSide, StepCollector},
};
use lineq_parser::parser::equation::Equation;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every intermediate result needed to explain how an equation was solved.
///
/// A [`Derivation`] only exists for equations with exactly one finite solution, so the steps
/// narrated from it are always complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    /// The left-hand side after distribution, such as `2x+2`.
    pub lhs_expanded: String,

    /// The right-hand side after distribution.
    pub rhs_expanded: String,

    /// The reduced left-hand side.
    pub lhs: ReducedSide,

    /// The reduced right-hand side.
    pub rhs: ReducedSide,

    /// The right-hand side as it reads once moved to the left-hand side.
    pub inverted_rhs: InvertedSide,

    /// `lhs.coefficient - rhs.coefficient`.
    pub total_coefficient: f64,

    /// `lhs.constant - rhs.constant`.
    pub total_constant: f64,

    /// `-total_constant / total_coefficient`.
    pub value: f64,
}

impl Derivation {
    /// Parses and solves the given equation.
    pub fn new(input: &str) -> Result<Self, Error> {
        let (normalized, equation) = Equation::parse_raw(input);
        let equation = equation?;

        let lhs_terms = expand(&equation.lhs)?;
        let rhs_terms = expand(&equation.rhs)?;
        let lhs_expanded = expanded_expression(&lhs_terms);
        let rhs_expanded = expanded_expression(&rhs_terms);
        debug!(%lhs_expanded, %rhs_expanded, "expanded sides");

        let lhs = reduce(lhs_terms);
        let rhs = reduce(rhs_terms);
        let inverted_rhs = invert(&rhs.terms);

        let total_coefficient = lhs.coefficient - rhs.coefficient;
        let total_constant = lhs.constant - rhs.constant;
        debug!(total_coefficient, total_constant, "combined like terms");

        let whole = 0..normalized.len();
        if !total_coefficient.is_finite() || !total_constant.is_finite() {
            return Err(Error::new(vec![whole], kind::NonFiniteResult));
        }
        if total_coefficient == 0.0 {
            return Err(Error::new(
                vec![equation.lhs.span(), equation.rhs.span()],
                kind::NoUniqueSolution { identity: total_constant == 0.0 },
            ));
        }

        let value = -total_constant / total_coefficient;
        if !value.is_finite() {
            return Err(Error::new(vec![whole], kind::NonFiniteResult));
        }
        debug!(value, "solved");

        Ok(Self {
            lhs_expanded,
            rhs_expanded,
            lhs,
            rhs,
            inverted_rhs,
            total_coefficient,
            total_constant,
            value,
        })
    }
}

/// The solution of a linear equation, with the steps that lead to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// The value of `x`.
    pub value: f64,

    /// The reduced left-hand side.
    pub lhs: ReducedSide,

    /// The reduced right-hand side.
    pub rhs: ReducedSide,

    /// The five steps of the solution, in order.
    pub steps: Vec<Step>,
}

/// Solves the given equation, using the default formatting options for the steps.
pub fn solve(input: &str) -> Result<Solution, Error> {
    solve_with(input, FormatOptions::default())
}

/// Solves the given equation, using the given formatting options for the steps.
pub fn solve_with(input: &str, options: FormatOptions) -> Result<Solution, Error> {
    let derivation = Derivation::new(input)?;
    let mut steps = Vec::new();
    narrate(&derivation, options, &mut steps);
    Ok(Solution {
        value: derivation.value,
        lhs: derivation.lhs,
        rhs: derivation.rhs,
        steps,
    })
}

/// Solves the given equation and returns the value of `x`. The steps are pushed into the given
/// [`StepCollector`], and nothing is pushed if the equation cannot be solved.
pub fn solve_with_steps(
    input: &str,
    options: FormatOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<f64, Error> {
    let derivation = Derivation::new(input)?;
    narrate(&derivation, options, step_collector);
    Ok(derivation.value)
}
