//! The human-readable steps of a solution.

use crate::{
    fmt::{fmt_num, pretty, FormatOptions, Language},
    solve::Derivation,
    symbolic::StepCollector,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies a step independently of the language it is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepKind {
    /// `2(x+1) = 10` becomes `2x+2 = 10`.
    Distribute,

    /// `2x + 2 = 10` becomes `2x + 2 - 10 = 0`.
    MoveTerms,

    /// `2x + 2 - 10 = 0` becomes `2x + -8 = 0`.
    CombineLikeTerms,

    /// `2x + -8 = 0` becomes `2x = 8`.
    Isolate,

    /// `2x = 8` becomes `x = 4`.
    Divide,
}

impl StepKind {
    /// Every kind of step, in the order they are emitted.
    pub const ALL: [Self; 5] = [
        Self::Distribute,
        Self::MoveTerms,
        Self::CombineLikeTerms,
        Self::Isolate,
        Self::Divide,
    ];

    /// Returns the title of the step.
    pub fn title(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Distribute, Language::English) => "Step 1: Apply the distributive property",
            (Self::Distribute, Language::Spanish) => "Paso 1: Aplicamos la propiedad distributiva",
            (Self::MoveTerms, Language::English) => "Step 2: Move the terms to the other side, changing their sign",
            (Self::MoveTerms, Language::Spanish) => "Paso 2: Pasamos los términos al otro lado cambiando el signo",
            (Self::CombineLikeTerms, Language::English) => "Step 3: Combine like terms",
            (Self::CombineLikeTerms, Language::Spanish) => "Paso 3: Agrupamos términos semejantes",
            (Self::Isolate, Language::English) => "Step 4: Isolate the unknown 'x'",
            (Self::Isolate, Language::Spanish) => "Paso 4: Despejamos la incógnita 'x'",
            (Self::Divide, Language::English) => "Final result",
            (Self::Divide, Language::Spanish) => "Resultado final",
        }
    }

    /// Returns the explanation of the step. `divisor` is the coefficient of `x` that the final
    /// step divides by.
    pub fn detail(self, language: Language, divisor: f64) -> String {
        match (self, language) {
            (Self::Distribute, Language::English) => "Multiply each term inside the parentheses by the number next to it.".to_string(),
            (Self::Distribute, Language::Spanish) => "Multiplicamos cada término dentro del paréntesis por el número que lo acompaña.".to_string(),
            (Self::MoveTerms, Language::English) => "The terms on the right-hand side move to the left-hand side with the opposite sign.".to_string(),
            (Self::MoveTerms, Language::Spanish) => "Los términos del segundo miembro pasan al primero con signo contrario.".to_string(),
            (Self::CombineLikeTerms, Language::English) => "Add or subtract the coefficients of 'x' and the constant numbers.".to_string(),
            (Self::CombineLikeTerms, Language::Spanish) => "Sumamos o restamos los coeficientes de 'x' y los números.".to_string(),
            (Self::Isolate, Language::English) => "Leave 'x' alone with its coefficient on one side.".to_string(),
            (Self::Isolate, Language::Spanish) => "Aislamos la 'x' dejando su coeficiente solo en un lado.".to_string(),
            (Self::Divide, Language::English) => format!("Divide both sides by {} to find the value of x.", fmt_num(divisor)),
            (Self::Divide, Language::Spanish) => format!("Dividimos ambos lados entre {} para encontrar el valor de x.", fmt_num(divisor)),
        }
    }
}

/// A single step of a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// Which step this is.
    pub kind: StepKind,

    /// The title of the step, in the requested language.
    pub title: String,

    /// An explanation of what the step does, in the requested language.
    pub detail: String,

    /// The equation after the step is applied.
    pub expression: String,
}

/// Returns the equation as it reads after the given step.
fn expression(kind: StepKind, derivation: &Derivation) -> String {
    let coefficient = derivation.total_coefficient;
    let constant = derivation.total_constant;
    match kind {
        StepKind::Distribute => format!(
            "{} = {}",
            pretty(&derivation.lhs_expanded),
            pretty(&derivation.rhs_expanded),
        ),
        StepKind::MoveTerms => format!(
            "{} {} = 0",
            pretty(&derivation.lhs.expression),
            derivation.inverted_rhs.expression,
        ),
        StepKind::CombineLikeTerms => format!("{}x + {} = 0", fmt_num(coefficient), fmt_num(constant)),
        StepKind::Isolate => format!("{}x = {}", fmt_num(coefficient), fmt_num(-constant)),
        StepKind::Divide => format!("x = {}", fmt_num(derivation.value)),
    }
}

/// Writes the five steps of a successful derivation into the collector, in order.
pub fn narrate(
    derivation: &Derivation,
    options: FormatOptions,
    step_collector: &mut dyn StepCollector<Step>,
) {
    for kind in StepKind::ALL {
        step_collector.push(Step {
            kind,
            title: kind.title(options.language).to_string(),
            detail: kind.detail(options.language, derivation.total_coefficient),
            expression: expression(kind, derivation),
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn steps_in_order() {
        let derivation = Derivation::new("3x-2=0").unwrap();
        let mut steps = Vec::new();
        narrate(&derivation, FormatOptions::default(), &mut steps);

        assert_eq!(steps.iter().map(|step| step.kind).collect::<Vec<_>>(), StepKind::ALL);
        assert_eq!(
            steps.iter().map(|step| step.expression.as_str()).collect::<Vec<_>>(),
            [
                "3x-2 = 0",
                "3x - 2 + 0 = 0",
                "3x + -2 = 0",
                "3x = 2",
                "x = 0.6666666666666666",
            ],
        );
        assert_eq!(steps[4].detail, "Divide both sides by 3 to find the value of x.");
    }

    #[test]
    fn spanish_text() {
        let derivation = Derivation::new("x=5").unwrap();
        let mut steps = Vec::new();
        narrate(&derivation, Language::Spanish.inside(FormatOptions::default()), &mut steps);

        assert_eq!(steps[0].title, "Paso 1: Aplicamos la propiedad distributiva");
        assert_eq!(steps[4].title, "Resultado final");
        assert_eq!(steps[4].detail, "Dividimos ambos lados entre 1 para encontrar el valor de x.");
        assert_eq!(steps[4].expression, "x = 5");
    }

    #[test]
    fn expressions_do_not_depend_on_language() {
        let derivation = Derivation::new("2(x+1)=x").unwrap();
        let mut english = Vec::new();
        let mut spanish = Vec::new();
        narrate(&derivation, FormatOptions::default(), &mut english);
        narrate(&derivation, Language::Spanish.inside(FormatOptions::default()), &mut spanish);

        for (en, es) in english.iter().zip(&spanish) {
            assert_eq!(en.kind, es.kind);
            assert_eq!(en.expression, es.expression);
        }
    }

    #[test]
    fn unit_collector_discards() {
        let derivation = Derivation::new("x=1").unwrap();
        narrate(&derivation, FormatOptions::default(), &mut ());
    }
}
