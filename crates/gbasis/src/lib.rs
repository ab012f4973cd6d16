//! # gbasis
//!
//! Gröbner bases of polynomial ideals over floating-point coefficients,
//! computed with Buchberger's algorithm.
//!
//! ## Features
//!
//! - **Monomial orderings**: lex, graded lex and graded reverse lex, fixed per
//!   polynomial
//! - **Sparse polynomials**: epsilon cancellation, multivariate division,
//!   S-polynomials
//! - **Completion**: a reference fixed-point loop and a worklist loop with the
//!   product and chain criteria
//! - **Canonical output**: minimization and reduction to the reduced basis
//!
//! ## Quick Start
//!
//! ```rust
//! use gbasis::prelude::*;
//!
//! let order = MonomialOrder::Lex;
//! let x = Polynomial::<f64>::var(0, 2, order);
//! let y = Polynomial::<f64>::var(1, 2, order);
//! let c = |v: f64| Polynomial::constant(v, 2, order);
//!
//! // x + 2y - 3 = 0, x - 2y - 7 = 0
//! let f = x.add(&y.scale(2.0)).unwrap().sub(&c(3.0)).unwrap();
//! let g = x.sub(&y.scale(2.0)).unwrap().sub(&c(7.0)).unwrap();
//!
//! let basis = reduced_groebner_basis(&[f, g], &GroebnerConfig::new()).unwrap();
//! assert_eq!(basis.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use gbasis_groebner as groebner;
pub use gbasis_poly as poly;

use gbasis_groebner::{Basis, GroebnerConfig, GroebnerError, GroebnerResult};
use gbasis_poly::Polynomial;
use num_traits::Float;
use tracing::instrument;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::reduced_groebner_basis;
    pub use gbasis_groebner::{
        groebner_basis, Basis, BuchbergerStats, GroebnerConfig, GroebnerError, Strategy,
    };
    pub use gbasis_poly::{Monomial, MonomialOrder, PolyError, Polynomial, DEFAULT_EPSILON};
}

/// Computes the reduced Gröbner basis of the ideal generated by `generators`.
///
/// Runs completion under `config` and always finishes with minimization and
/// reduction, whatever `config.reduce` says. Fails with
/// [`GroebnerError::EmptyBasis`] if no generator is nonzero.
#[instrument(skip_all, fields(generators = generators.len()))]
pub fn reduced_groebner_basis<F: Float>(
    generators: &[Polynomial<F>],
    config: &GroebnerConfig,
) -> GroebnerResult<Basis<F>> {
    let config = config.clone().with_reduction(false);
    let mut basis = gbasis_groebner::groebner_basis(generators, &config)?;
    if basis.is_empty() {
        return Err(GroebnerError::EmptyBasis);
    }
    basis.reduce()?;
    Ok(basis)
}
