//! Minimization and reduction of a completed basis.
//!
//! A Gröbner basis is *minimal* when every generator is monic and no leading
//! monomial divides another. It is *reduced* when, additionally, no term of
//! any generator is divisible by the leading monomial of another. The reduced
//! basis is unique for a fixed ideal and ordering.

use num_traits::Float;
use tracing::{debug, instrument};

use crate::basis::Basis;
use crate::error::{GroebnerError, GroebnerResult};

impl<F: Float> Basis<F> {
    /// Makes every generator monic and drops generators whose leading
    /// monomial is divisible by another generator's.
    ///
    /// Among generators sharing a leading monomial, the first one is kept.
    #[instrument(skip_all, fields(generators = self.len()))]
    pub fn minimize(&mut self) -> GroebnerResult<()> {
        if self.is_empty() {
            return Err(GroebnerError::EmptyBasis);
        }

        for g in self.generators_mut() {
            g.normalize_leading_coefficient()?;
        }

        let lms = self
            .leading_monomials()?
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        // Equal leading monomials: the earlier generator wins.
        let redundant = |i: usize| {
            lms.iter().enumerate().any(|(j, lm_j)| {
                j != i && lm_j.divides(&lms[i]) && (*lm_j != lms[i] || j < i)
            })
        };
        let keep = (0..lms.len()).map(|i| !redundant(i)).collect::<Vec<_>>();

        let before = self.len();
        let mut flags = keep.into_iter();
        self.generators_mut().retain(|_| flags.next().unwrap_or(true));
        debug!(dropped = before - self.len(), "minimized basis");
        Ok(())
    }

    /// Replaces the basis by the reduced Gröbner basis of its ideal.
    ///
    /// The basis must already be a Gröbner basis. It is minimized first, then
    /// each generator is replaced by its monic remainder modulo all others.
    /// Generators end up sorted by leading monomial, largest first.
    #[instrument(skip_all, fields(generators = self.len()))]
    pub fn reduce(&mut self) -> GroebnerResult<()> {
        self.minimize()?;

        for i in 0..self.len() {
            let mut others = self.generators().to_vec();
            let g = others.remove(i);
            let mut r = g.remainder(&others)?;
            // Minimality keeps the leading term, so r is nonzero.
            r.normalize_leading_coefficient()?;
            self.generators_mut()[i] = r;
        }

        self.sort_by_leading_monomial();
        debug!(generators = self.len(), "reduced basis");
        Ok(())
    }

    /// Returns true if every generator is monic and no leading monomial
    /// divides another.
    pub fn is_minimal(&self) -> GroebnerResult<bool> {
        let lms = self.leading_monomials()?;
        for g in self {
            if (g.leading_coeff()? - F::one()).abs() >= g.epsilon() {
                return Ok(false);
            }
        }
        Ok(lms.iter().enumerate().all(|(i, a)| {
            lms.iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.divides(b))
        }))
    }

    /// Returns true if the basis is minimal and no term of a generator is
    /// divisible by the leading monomial of another.
    pub fn is_reduced(&self) -> GroebnerResult<bool> {
        if !self.is_minimal()? {
            return Ok(false);
        }
        let lms = self.leading_monomials()?;
        Ok(self.iter().enumerate().all(|(i, g)| {
            g.support()
                .all(|m| lms.iter().enumerate().all(|(j, lm)| i == j || !lm.divides(m)))
        }))
    }
}
