use crate::fmt::fmt_num;
use std::{fmt, ops::Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a [`Term`] multiplies the unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TermKind {
    /// `coefficient * x`.
    Variable,

    /// A bare number.
    Constant,
}

/// A signed additive unit of a linear expression: either `coefficient * x` or a constant. The
/// sign of the term is the sign of its coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// Whether this term multiplies the unknown.
    pub kind: TermKind,

    /// The multiplier of `x` for a variable term, or the value of a constant term.
    pub coefficient: f64,
}

impl Term {
    /// Creates the variable term `coefficient * x`.
    pub fn variable(coefficient: f64) -> Self {
        Self { kind: TermKind::Variable, coefficient }
    }

    /// Creates a constant term.
    pub fn constant(value: f64) -> Self {
        Self { kind: TermKind::Constant, coefficient: value }
    }

    /// Returns true if this term multiplies the unknown.
    pub fn is_variable(&self) -> bool {
        self.kind == TermKind::Variable
    }

    /// Returns this term multiplied by a scalar.
    pub fn scale(self, factor: f64) -> Self {
        Self { coefficient: self.coefficient * factor, ..self }
    }

    /// Returns this term divided by a scalar.
    pub fn divide(self, divisor: f64) -> Self {
        Self { coefficient: self.coefficient / divisor, ..self }
    }
}

impl Neg for Term {
    type Output = Self;

    fn neg(self) -> Self {
        Self { coefficient: -self.coefficient, ..self }
    }
}

/// Formats the term canonically: `{coefficient}x` for variable terms, the value for constants.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TermKind::Variable => write!(f, "{}x", fmt_num(self.coefficient)),
            TermKind::Constant => write!(f, "{}", fmt_num(self.coefficient)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Term::variable(2.0).to_string(), "2x");
        assert_eq!(Term::variable(1.0).to_string(), "1x");
        assert_eq!(Term::variable(-0.5).to_string(), "-0.5x");
        assert_eq!(Term::constant(-3.0).to_string(), "-3");
    }

    #[test]
    fn negation_is_involutive() {
        let term = Term::variable(-7.25);
        assert_eq!(-(-term), term);
        assert_eq!((-term).coefficient, 7.25);
    }

    #[test]
    fn scale_keeps_kind() {
        assert_eq!(Term::variable(3.0).scale(-2.0), Term::variable(-6.0));
        assert_eq!(Term::constant(9.0).divide(3.0), Term::constant(3.0));
    }
}
