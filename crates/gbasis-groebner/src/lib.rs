//! Buchberger's algorithm for Gröbner bases.
//!
//! This crate provides:
//! - [`Basis`]: a deduplicated set of ideal generators
//! - [`SimplifiedBuchberger`]: fixed-point completion by full passes
//! - [`OptimizedBuchberger`]: worklist completion with the product and chain
//!   criteria
//! - minimization and reduction to the unique reduced Gröbner basis
//!
//! # Example
//!
//! ```
//! use gbasis_groebner::{groebner_basis, GroebnerConfig};
//! use gbasis_poly::{Monomial, MonomialOrder, Polynomial};
//!
//! let order = MonomialOrder::Lex;
//! // x + 2y - 3, x - 2y - 7
//! let f = Polynomial::new(
//!     vec![
//!         (Monomial::new(&[1, 0]), 1.0),
//!         (Monomial::new(&[0, 1]), 2.0),
//!         (Monomial::new(&[0, 0]), -3.0),
//!     ],
//!     2,
//!     order,
//! )
//! .unwrap();
//! let g = Polynomial::new(
//!     vec![
//!         (Monomial::new(&[1, 0]), 1.0),
//!         (Monomial::new(&[0, 1]), -2.0),
//!         (Monomial::new(&[0, 0]), -7.0),
//!     ],
//!     2,
//!     order,
//! )
//! .unwrap();
//!
//! let basis = groebner_basis(&[f, g], &GroebnerConfig::new()).unwrap();
//! assert_eq!(basis.len(), 2);
//! assert!(basis.is_reduced().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod basis;
pub mod buchberger;
pub mod config;
pub mod criteria;
pub mod error;
pub mod pairs;
pub mod reduction;

#[cfg(test)]
mod proptests;

pub use basis::{Basis, Fingerprint};
pub use buchberger::{
    groebner_basis, BuchbergerStats, Completion, OptimizedBuchberger, SimplifiedBuchberger,
};
pub use config::{GroebnerConfig, Strategy};
pub use error::{GroebnerError, GroebnerResult};
pub use pairs::{Pair, PairQueue};
