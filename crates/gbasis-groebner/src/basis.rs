//! Polynomial bases: finite, deduplicated sets of ideal generators.
//!
//! A [`Basis`] owns deep copies of its generators. Zero polynomials are never
//! stored. Two generators are duplicates when [`Polynomial::approx_eq`] holds:
//! same monomials and coefficients within epsilon. Comparing monomials alone
//! would conflate `x + 2y - 3` with `x - 2y - 7`.

use std::cmp::Ordering;
use std::fmt;

use gbasis_poly::{Monomial, MonomialOrder, PolyError, Polynomial};
use num_traits::Float;
use tracing::trace;

use crate::error::GroebnerResult;

/// A set of polynomials generating an ideal.
///
/// All generators share one arity and one monomial ordering.
#[derive(Clone, Debug)]
pub struct Basis<F> {
    generators: Vec<Polynomial<F>>,
    num_vars: usize,
    order: MonomialOrder,
}

/// Structural summary of a basis: the sorted list of generator supports.
///
/// Two bases with equal fingerprints have the same number of generators and
/// the same multiset of monomial key sets.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Fingerprint(Vec<Vec<Monomial>>);

impl<F: Float> Basis<F> {
    /// Creates an empty basis.
    #[must_use]
    pub fn empty(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            generators: Vec::new(),
            num_vars,
            order,
        }
    }

    /// Creates a basis from deep copies of `generators`.
    ///
    /// Zero polynomials and duplicates are dropped. Every generator must have
    /// the arity and ordering of the first one.
    pub fn new(generators: &[Polynomial<F>]) -> GroebnerResult<Self> {
        Self::from_generators(generators.iter().cloned())
    }

    /// Creates a basis taking ownership of `generators`.
    pub fn from_generators<I>(generators: I) -> GroebnerResult<Self>
    where
        I: IntoIterator<Item = Polynomial<F>>,
    {
        let mut iter = generators.into_iter().peekable();
        let (num_vars, order) = iter
            .peek()
            .map_or((0, MonomialOrder::default()), |p| (p.num_vars(), p.order()));

        let mut basis = Self::empty(num_vars, order);
        for p in iter {
            basis.insert(p)?;
        }
        Ok(basis)
    }

    /// Adds a generator. Returns false if it was zero or already present.
    ///
    /// The generator must have the arity and ordering the basis was created
    /// with.
    pub fn insert(&mut self, p: Polynomial<F>) -> GroebnerResult<bool> {
        if p.num_vars() != self.num_vars {
            return Err(PolyError::ArityMismatch {
                expected: self.num_vars,
                found: p.num_vars(),
            }
            .into());
        }
        if p.order() != self.order {
            return Err(PolyError::OrderMismatch {
                expected: self.order,
                found: p.order(),
            }
            .into());
        }

        if p.is_zero() {
            trace!("dropping zero generator");
            return Ok(false);
        }
        if self.contains(&p) {
            trace!("dropping duplicate generator");
            return Ok(false);
        }

        self.generators.push(p);
        Ok(true)
    }

    /// Returns true if an approximately equal generator is present.
    #[must_use]
    pub fn contains(&self, p: &Polynomial<F>) -> bool {
        self.generators.iter().any(|g| g.approx_eq(p))
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns true if there are no generators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Returns true if the basis generates the zero ideal.
    ///
    /// Zero polynomials are never stored, so this holds exactly when the
    /// basis has no generators.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.generators.iter().all(Polynomial::is_zero)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the monomial ordering.
    #[must_use]
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Returns the generators.
    #[must_use]
    pub fn generators(&self) -> &[Polynomial<F>] {
        &self.generators
    }

    /// Iterates over the generators.
    pub fn iter(&self) -> std::slice::Iter<'_, Polynomial<F>> {
        self.generators.iter()
    }

    /// Consumes the basis, returning its generators.
    #[must_use]
    pub fn into_generators(self) -> Vec<Polynomial<F>> {
        self.generators
    }

    /// Returns the leading monomial of every generator.
    pub fn leading_monomials(&self) -> GroebnerResult<Vec<&Monomial>> {
        Ok(self
            .generators
            .iter()
            .map(Polynomial::leading_monomial)
            .collect::<Result<_, _>>()?)
    }

    /// Returns the remainder of `p` on division by every generator, in order.
    pub fn remainder(&self, p: &Polynomial<F>) -> GroebnerResult<Polynomial<F>> {
        Ok(p.remainder(&self.generators)?)
    }

    /// Checks whether every pairwise S-polynomial reduces to zero.
    pub fn is_groebner_basis(&self) -> GroebnerResult<bool> {
        for (i, f) in self.generators.iter().enumerate() {
            for g in &self.generators[i + 1..] {
                if !self.remainder(&f.s_polynomial(g)?)?.is_zero() {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Returns true if two bases hold approximately equal generators,
    /// irrespective of their order.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && other.iter().all(|g| self.contains(g))
    }

    /// Computes the structural fingerprint used to detect a fixed point.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        let order = self.order;
        let mut supports: Vec<Vec<Monomial>> = self
            .generators
            .iter()
            .map(|g| g.support().cloned().collect())
            .collect();
        supports.sort_by(|a, b| cmp_supports(order, a, b));
        Fingerprint(supports)
    }

    /// Sorts generators by leading monomial, largest first.
    pub(crate) fn sort_by_leading_monomial(&mut self) {
        let order = self.order;
        self.generators
            .sort_by(|a, b| cmp_supports(order, &leading(b), &leading(a)));
    }

    pub(crate) fn generators_mut(&mut self) -> &mut Vec<Polynomial<F>> {
        &mut self.generators
    }
}

fn leading<F: Float>(p: &Polynomial<F>) -> Vec<Monomial> {
    p.support().take(1).cloned().collect()
}

/// Lexicographic comparison of two descending monomial lists.
fn cmp_supports(order: MonomialOrder, a: &[Monomial], b: &[Monomial]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| order.compare(x, y))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

impl<F: Float + fmt::Display> fmt::Display for Basis<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, g) in self.generators.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{g}")?;
        }
        Ok(())
    }
}

impl<'a, F> IntoIterator for &'a Basis<F> {
    type Item = &'a Polynomial<F>;
    type IntoIter = std::slice::Iter<'a, Polynomial<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.generators.iter()
    }
}
