//! Errors raised by the Gröbner basis engine.

use gbasis_poly::PolyError;
use thiserror::Error;

/// Errors that can occur during Gröbner basis computation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GroebnerError {
    /// Polynomial arithmetic failed.
    #[error(transparent)]
    Poly(#[from] PolyError),

    /// Minimization or reduction was invoked on a basis with no generators.
    #[error("basis has no generators")]
    EmptyBasis,

    /// A new generator exceeded the configured degree limit.
    #[error("generator degree {actual_degree} exceeds limit {max_degree}")]
    DegreeExceeded {
        /// The configured limit.
        max_degree: u32,
        /// Total degree of the offending generator.
        actual_degree: u32,
    },
}

/// Result alias for Gröbner basis computation.
pub type GroebnerResult<T> = Result<T, GroebnerError>;
