//! Errors raised by monomial and polynomial arithmetic.

use thiserror::Error;

use crate::ordering::MonomialOrder;

/// Errors that can occur during polynomial arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Two operands do not have the same number of variables.
    #[error("arity mismatch: expected {expected} variables, found {found}")]
    ArityMismatch {
        /// Arity of the left operand.
        expected: usize,
        /// Arity of the right operand.
        found: usize,
    },

    /// Exact monomial division was requested but some exponent went negative.
    #[error("monomial is not divisible by the divisor")]
    NotDivisible,

    /// Leading term requested on the zero polynomial.
    #[error("zero polynomial has no leading term")]
    EmptyLeadingTerm,

    /// Two polynomials were built under different monomial orders.
    #[error("order mismatch: expected {expected}, found {found}")]
    OrderMismatch {
        /// Order of the left operand.
        expected: MonomialOrder,
        /// Order of the right operand.
        found: MonomialOrder,
    },
}

/// Result alias for polynomial arithmetic.
pub type PolyResult<T> = Result<T, PolyError>;

/// Fails with [`PolyError::ArityMismatch`] unless both arities agree.
pub(crate) fn check_arity(expected: usize, found: usize) -> PolyResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(PolyError::ArityMismatch { expected, found })
    }
}
