//! Buchberger's criteria for detecting useless S-polynomials.
//!
//! These criteria allow early rejection of pairs whose S-polynomial is
//! guaranteed to reduce to zero, so no division is performed for them.

use gbasis_poly::{Monomial, Polynomial};
use num_traits::Float;

use crate::pairs::{Pair, PairQueue};

/// Checks Buchberger's first criterion (product criterion).
///
/// If lcm(lm(f), lm(g)) = lm(f) * lm(g) (i.e., leading monomials are coprime),
/// then S(f, g) reduces to zero.
#[must_use]
pub fn product_criterion(lm_f: &Monomial, lm_g: &Monomial) -> bool {
    lm_f.is_coprime(lm_g)
}

/// Checks the chain criterion (Buchberger's second criterion).
///
/// If there exists a generator h (other than the pair's own) such that:
/// - lm(h) divides lcm(lm(f), lm(g))
/// - neither (f, h) nor (g, h) is still pending
///
/// then the pair (f, g) is redundant.
pub fn chain_criterion<F: Float>(
    pair: Pair,
    lcm: &Monomial,
    basis: &[Polynomial<F>],
    pending: &PairQueue,
) -> bool {
    basis.iter().enumerate().any(|(k, h)| {
        k != pair.i
            && k != pair.j
            && h.leading_monomial().is_ok_and(|lm_h| lm_h.divides(lcm))
            && !pending.contains(pair.i, k)
            && !pending.contains(pair.j, k)
    })
}
