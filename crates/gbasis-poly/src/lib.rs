//! # gbasis-poly
//!
//! Sparse multivariate polynomial arithmetic for Gröbner basis computation.
//!
//! This crate provides:
//! - Exponent-vector monomials with checked arithmetic
//! - Lex, graded-lex and graded reverse-lex monomial orderings
//! - Sparse polynomials with floating-point coefficients and an epsilon
//!   cancellation rule
//! - Generalized multivariate division and S-polynomials
//!
//! ## Orderings
//!
//! The ordering is a value fixed when a polynomial is built. Polynomials
//! built under different orderings never mix: binary operations on them fail
//! with [`PolyError::OrderMismatch`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod division;
pub mod error;
pub mod monomial;
pub mod ordering;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use division::Division;
pub use error::{PolyError, PolyResult};
pub use monomial::Monomial;
pub use ordering::MonomialOrder;
pub use polynomial::{Polynomial, DEFAULT_EPSILON};
