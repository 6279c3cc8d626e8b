//! Step-by-step solver for single-variable linear equations.
//!
//! The solver turns an equation such as `2(x + 1) = 10` into the value of `x`, together with the
//! five steps a student would write down to get there:
//!
//! 1. distribute every scalar over the parentheses it multiplies,
//! 2. move the terms of the right-hand side to the left-hand side,
//! 3. combine like terms,
//! 4. isolate the term containing `x`,
//! 5. divide by the coefficient of `x`.
//!
//! ```
//! use lineq_solve::solve;
//!
//! let solution = solve("2(x + 1) = 10").unwrap();
//! assert_eq!(solution.value, 4.0);
//!
//! let expressions = solution.steps.iter()
//!     .map(|step| step.expression.as_str())
//!     .collect::<Vec<_>>();
//! assert_eq!(expressions, [
//!     "2x+2 = 10",
//!     "2x + 2 - 10 = 0",
//!     "2x + -8 = 0",
//!     "2x = 8",
//!     "x = 4",
//! ]);
//! ```
//!
//! Titles and explanations of the steps are available in English and Spanish; see
//! [`fmt::FormatOptions`]. Equations that cannot be solved produce an [`error::Error`] whose
//! [`Category`](lineq_error::Category) tells why.

pub mod error;
pub mod fmt;
pub mod solve;
pub mod step;
pub mod symbolic;

pub use solve::{solve, solve_with, solve_with_steps, Derivation, Solution};
pub use step::{Step, StepKind};
