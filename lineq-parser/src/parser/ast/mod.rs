//! Abstract syntax tree for one side of a linear equation.
//!
//! A side is a [`Sum`] of [`SignedProduct`]s. Each product is a chain of [`Factor`]s joined by
//! multiplication or division, and each factor is a number, the unknown, or a parenthesized
//! [`Sum`]. Parentheses may nest.

pub mod factor;
pub mod product;
pub mod sum;

pub use factor::{Factor, LitNum, Paren, Primary};
pub use product::{MulOp, Product};
pub use sum::{Sign, SignedProduct, Sum};
