use crate::{fmt::fmt_num, symbolic::term::Term};

/// The additive inverse of a side, used to move it across the equality.
#[derive(Debug, Clone, PartialEq)]
pub struct InvertedSide {
    /// Every term of the side with its sign flipped.
    pub terms: Vec<Term>,

    /// The inverted terms rendered with explicit signs, such as `- 3x - 5`.
    pub expression: String,
}

/// Renders one term as it reads once moved to the other side: `- {magnitude}` if it was positive,
/// `+ {magnitude}` otherwise.
fn fmt_moved(term: &Term) -> String {
    let sign = if term.coefficient > 0.0 { '-' } else { '+' };
    let magnitude = fmt_num(term.coefficient.abs());
    if term.is_variable() {
        format!("{} {}x", sign, magnitude)
    } else {
        format!("{} {}", sign, magnitude)
    }
}

/// Flips the sign of every term, so `3x + 5` becomes `- 3x - 5`.
pub fn invert(terms: &[Term]) -> InvertedSide {
    InvertedSide {
        terms: terms.iter().map(|&term| -term).collect(),
        expression: terms.iter()
            .map(fmt_moved)
            .collect::<Vec<_>>()
            .join(" "),
    }
}
