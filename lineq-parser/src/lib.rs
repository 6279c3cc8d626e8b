//! Normalizer, tokenizer and parser for single-variable linear equations such as
//! `2(x + 1) = 10`.
//!
//! Parsing happens in stages:
//!
//! 1. [`normalize::normalize`] removes whitespace, turns `.` into `*`, and lower-cases the input.
//! 2. [`normalize::validate`] rejects disallowed characters and equations without `=` or `x`.
//! 3. [`tokenizer::tokenize_complete`] produces tokens with spans into the normalized text.
//! 4. [`parser::equation::split_sides`] splits the tokens at the `=`.
//! 5. [`parser::implicit::insert_implicit_mul`] makes implied multiplication explicit.
//! 6. Each side is parsed into an [`ast::Sum`](parser::ast::Sum).
//!
//! [`Equation::parse_raw`](parser::equation::Equation::parse_raw) runs all of them.
//!
//! ```
//! use lineq_parser::parser::equation::Equation;
//!
//! let (normalized, equation) = Equation::parse_raw("2(X + 1) = 10");
//! assert_eq!(normalized, "2(x+1)=10");
//! assert_eq!(equation.unwrap().lhs.to_string(), "2*(x+1)");
//! ```

pub mod normalize;
pub mod parser;
pub mod tokenizer;
