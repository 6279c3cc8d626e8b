//! Symbolic manipulation of the sides of a linear equation.
//!
//! Each side of an equation goes through three transformations, in order:
//!
//! 1. [`expand()`] distributes scalars over parenthesized sums and flattens the side into a list of
//!    [`Term`]s, each either `coefficient * x` or a constant.
//! 2. [`reduce()`] collects like terms into a [`ReducedSide`] with one coefficient and one constant.
//! 3. [`invert()`] flips the sign of every term, which is how the right-hand side is moved to the
//!    left-hand side.
//!
//! ```
//! use lineq_parser::parser::{ast::Sum, Parser};
//! use lineq_solve::symbolic::{expand, reduce};
//!
//! let mut parser = Parser::new("2(x+3)-x");
//! let sum = parser.try_parse_full::<Sum>().unwrap();
//!
//! let side = reduce(expand(&sum).unwrap());
//! assert_eq!(side.coefficient, 1.0);
//! assert_eq!(side.constant, 6.0);
//! assert_eq!(side.expression, "2x + 6 - 1x");
//! ```

pub mod expand;
pub mod invert;
pub mod reduce;
pub mod step_collector;
pub mod term;

pub use expand::{expand, expanded_expression};
pub use invert::{invert, InvertedSide};
pub use reduce::{reduce, ReducedSide};
pub use step_collector::StepCollector;
pub use term::{Term, TermKind};
