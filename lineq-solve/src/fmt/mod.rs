//! Formatting of numbers and step text.

pub mod pretty;

pub use pretty::pretty;

/// Formatting options for the steps of a solution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// The language used for the titles and details of each step.
    pub language: Language,
}

/// The language of step titles and details. Expressions are language-independent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// This is the default option.
    #[default]
    English,

    Spanish,
}

impl Language {
    /// Utility function to create a new [`FormatOptions`] with the same formatting options as the
    /// given [`FormatOptions`], but with the language set to this value.
    pub fn inside(self, options: FormatOptions) -> FormatOptions {
        FormatOptions {
            language: self,
            ..options
        }
    }
}

/// Returns true if the given number should be formatted in scientific notation.
fn should_use_scientific(n: f64) -> bool {
    let abs = n.abs();
    abs >= 1e21 || abs < 1e-6
}

/// Formats a number with the shortest decimal representation that round-trips.
///
/// Negative zero is formatted as `0`. Numbers with a magnitude of at least `1e21` or below `1e-6`
/// use exponent notation with an explicit exponent sign, like `1e+21` and `1.5e-7`.
pub fn fmt_num(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    if should_use_scientific(n) {
        let s = format!("{:e}", n);
        match s.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            },
            _ => s,
        }
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(-40.0), "-40");
        assert_eq!(fmt_num(123456789.0), "123456789");
    }

    #[test]
    fn negative_zero() {
        assert_eq!(fmt_num(-0.0), "0");
    }

    #[test]
    fn shortest_round_trip() {
        assert_eq!(fmt_num(2.0 / 3.0), "0.6666666666666666");
        assert_eq!(fmt_num(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(fmt_num(-0.5), "-0.5");
    }

    #[test]
    fn exponent_notation() {
        assert_eq!(fmt_num(1e21), "1e+21");
        assert_eq!(fmt_num(-2.5e30), "-2.5e+30");
        assert_eq!(fmt_num(1.5e-7), "1.5e-7");
        assert_eq!(fmt_num(0.000001), "0.000001");
    }

    #[test]
    fn non_finite() {
        assert_eq!(fmt_num(f64::INFINITY), "Infinity");
        assert_eq!(fmt_num(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(fmt_num(f64::NAN), "NaN");
    }

    #[test]
    fn language_inside() {
        let options = Language::Spanish.inside(FormatOptions::default());
        assert_eq!(options.language, Language::Spanish);
    }
}
