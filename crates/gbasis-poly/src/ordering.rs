//! Monomial orderings for polynomial operations.
//!
//! The choice of monomial ordering affects Gröbner basis computation and
//! division. An ordering is a plain value carried by every polynomial built
//! under it; it never changes for the lifetime of that polynomial.

use std::cmp::Ordering;
use std::fmt;

use crate::monomial::Monomial;

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// x > y > z means x^a y^b z^c > x^d y^e z^f iff
    /// the first nonzero difference (a-d, b-e, c-f) is positive.
    #[default]
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then uses reverse lex (last variable first)
    /// with the comparison reversed.
    Grevlex,
}

impl MonomialOrder {
    /// Compares two monomials according to this ordering.
    ///
    /// Only the shared variable range is inspected; callers keep arities equal.
    #[must_use]
    pub fn compare(&self, a: &Monomial, b: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::Grlex => cmp_grlex(a, b),
            MonomialOrder::Grevlex => cmp_grevlex(a, b),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Compares two monomials lexicographically.
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    a.exponents()
        .iter()
        .zip(b.exponents())
        .map(|(x, y)| x.cmp(y))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Compares two monomials by graded lexicographic order.
pub fn cmp_grlex(a: &Monomial, b: &Monomial) -> Ordering {
    a.total_degree()
        .cmp(&b.total_degree())
        .then_with(|| cmp_lex(a, b))
}

/// Compares two monomials by graded reverse lexicographic order.
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Then compare in reverse order, reversed
    a.exponents()
        .iter()
        .zip(b.exponents())
        .rev()
        .map(|(x, y)| y.cmp(x))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
