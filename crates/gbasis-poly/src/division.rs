//! Multivariate division and S-polynomials.
//!
//! Division by an ordered list of divisors follows the generalized division
//! algorithm: the leading term of what is left is cancelled by the first
//! divisor whose leading monomial divides it, or moved to the remainder when
//! none does. Every step removes the current leading term, so the loop ends.

use num_traits::Float;

use crate::error::PolyResult;
use crate::polynomial::Polynomial;

/// The result of dividing a polynomial by a list of divisors.
///
/// `dividend == Σ quotients[i] * divisors[i] + remainder`, and no term of
/// `remainder` is divisible by the leading monomial of any divisor.
#[derive(Clone, Debug, PartialEq)]
pub struct Division<F> {
    /// One quotient per divisor, in divisor order.
    pub quotients: Vec<Polynomial<F>>,
    /// The remainder.
    pub remainder: Polynomial<F>,
}

impl<F: Float> Polynomial<F> {
    /// Divides `self` by the ordered list `divisors`.
    ///
    /// Zero divisors never divide anything and receive a zero quotient.
    /// Quotient terms are recorded exactly as subtracted, even when their
    /// coefficient is below epsilon, so the division identity holds.
    pub fn multivariate_division(&self, divisors: &[Polynomial<F>]) -> PolyResult<Division<F>> {
        for d in divisors {
            self.check_compatible(d)?;
        }

        let zero = Polynomial::zero(self.num_vars(), self.order()).with_epsilon(self.epsilon());
        let mut quotients = vec![zero.clone(); divisors.len()];
        let mut remainder = zero;
        let mut p = self.clone();

        while let Some((lm, lc)) = p.pop_leading() {
            let hit = divisors
                .iter()
                .position(|d| d.leading_monomial().is_ok_and(|dm| dm.divides(&lm)));

            let Some(i) = hit else {
                remainder.push_trailing(lm, lc);
                continue;
            };

            let (dm, dc) = divisors[i].leading_term()?;
            let qm = lm.div(dm)?;
            let qc = lc / dc;

            // The leading terms cancel exactly; only the divisor's tail is
            // subtracted from what is left.
            let tail = divisors[i].terms()[1..]
                .iter()
                .map(|(m, c)| Ok((m.mul(&qm)?, -(qc * *c))))
                .collect::<PolyResult<Vec<_>>>()?;
            p.merge_sorted(tail);
            // Successive leading monomials strictly decrease, so do the
            // quotient monomials of one divisor.
            quotients[i].push_trailing(qm, qc);
        }

        Ok(Division {
            quotients,
            remainder,
        })
    }

    /// Returns the remainder of `self` on division by `divisors`.
    pub fn remainder(&self, divisors: &[Polynomial<F>]) -> PolyResult<Polynomial<F>> {
        self.multivariate_division(divisors).map(|d| d.remainder)
    }

    /// Computes the S-polynomial of `self` and `other`.
    ///
    /// With `L = lcm(LM(f), LM(g))` this is
    /// `(L / LM(f)) * f / LC(f) - (L / LM(g)) * g / LC(g)`.
    pub fn s_polynomial(&self, other: &Self) -> PolyResult<Self> {
        self.check_compatible(other)?;

        let (lm_f, lc_f) = self.leading_term()?;
        let (lm_g, lc_g) = other.leading_term()?;
        let lcm = lm_f.lcm(lm_g)?;

        let mut s = self.mul_monomial(&lcm.div(lm_f)?, lc_f.recip())?;
        let g = other.mul_monomial(&lcm.div(lm_g)?, lc_g.recip())?;
        s.add_scaled(&g, -F::one())?;
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolyError;
    use crate::monomial::Monomial;
    use crate::ordering::MonomialOrder;

    fn poly(terms: &[(&[u32], f64)], order: MonomialOrder) -> Polynomial<f64> {
        let n = terms.first().map_or(0, |(e, _)| e.len());
        Polynomial::new(
            terms.iter().map(|(e, c)| (Monomial::new(e), *c)).collect(),
            n,
            order,
        )
        .unwrap()
    }

    fn reconstruct(div: &Division<f64>, divisors: &[Polynomial<f64>]) -> Polynomial<f64> {
        let mut acc = div.remainder.clone();
        for (q, d) in div.quotients.iter().zip(divisors) {
            acc = acc.add(&q.mul(d).unwrap()).unwrap();
        }
        acc
    }

    #[test]
    fn test_division_single_divisor() {
        // (x^2*y + x*y^2 + y^2) / (x*y - 1), lex
        let order = MonomialOrder::Lex;
        let f = poly(&[(&[2, 1], 1.0), (&[1, 2], 1.0), (&[0, 2], 1.0)], order);
        let g = poly(&[(&[1, 1], 1.0), (&[0, 0], -1.0)], order);

        let div = f.multivariate_division(&[g.clone()]).unwrap();
        // quotient x + y, remainder x + y^2 + y
        assert_eq!(div.quotients[0], poly(&[(&[1, 0], 1.0), (&[0, 1], 1.0)], order));
        assert_eq!(
            div.remainder,
            poly(&[(&[1, 0], 1.0), (&[0, 2], 1.0), (&[0, 1], 1.0)], order)
        );
        assert!(reconstruct(&div, &[g]).approx_eq(&f));
    }

    #[test]
    fn test_division_two_divisors() {
        // x^2*y + x*y^2 + y^2 by (x*y - 1, y^2 - 1), lex
        let order = MonomialOrder::Lex;
        let f = poly(&[(&[2, 1], 1.0), (&[1, 2], 1.0), (&[0, 2], 1.0)], order);
        let f1 = poly(&[(&[1, 1], 1.0), (&[0, 0], -1.0)], order);
        let f2 = poly(&[(&[0, 2], 1.0), (&[0, 0], -1.0)], order);
        let divisors = vec![f1, f2];

        let div = f.multivariate_division(&divisors).unwrap();
        // q1 = x + y, q2 = 1, r = x + y + 1
        assert_eq!(div.quotients[0], poly(&[(&[1, 0], 1.0), (&[0, 1], 1.0)], order));
        assert_eq!(div.quotients[1], poly(&[(&[0, 0], 1.0)], order));
        assert_eq!(
            div.remainder,
            poly(&[(&[1, 0], 1.0), (&[0, 1], 1.0), (&[0, 0], 1.0)], order)
        );
        assert!(reconstruct(&div, &divisors).approx_eq(&f));
    }

    #[test]
    fn test_division_keeps_small_quotient_terms() {
        // 0.01x / (1000x + 1): the quotient 1e-5 is below epsilon but was
        // subtracted from the dividend.
        let order = MonomialOrder::Lex;
        let f = poly(&[(&[1], 0.01)], order);
        let divisors = vec![poly(&[(&[1], 1000.0), (&[0], 1.0)], order)];

        let div = f.multivariate_division(&divisors).unwrap();
        assert!(div.remainder.is_zero());
        let q = div.quotients[0].coefficient(&Monomial::one(1)).unwrap();
        assert!((q - 1e-5).abs() < 1e-12);
        assert!(reconstruct(&div, &divisors).approx_eq(&f));
    }

    #[test]
    fn test_division_by_nothing() {
        let order = MonomialOrder::Grlex;
        let f = poly(&[(&[1, 1], 2.0), (&[0, 0], 3.0)], order);
        let div = f.multivariate_division(&[]).unwrap();
        assert!(div.quotients.is_empty());
        assert_eq!(div.remainder, f);
    }

    #[test]
    fn test_division_skips_zero_divisor() {
        let order = MonomialOrder::Lex;
        let f = poly(&[(&[2], 1.0), (&[0], -1.0)], order);
        let zero = Polynomial::zero(1, order);
        let x = Polynomial::var(0, 1, order);

        let div = f.multivariate_division(&[zero, x]).unwrap();
        assert!(div.quotients[0].is_zero());
        assert_eq!(div.remainder, poly(&[(&[0], -1.0)], order));
    }

    #[test]
    fn test_division_arity_mismatch() {
        let order = MonomialOrder::Lex;
        let f = poly(&[(&[2, 0], 1.0)], order);
        let g = poly(&[(&[1], 1.0)], order);
        assert!(matches!(
            f.multivariate_division(&[g]),
            Err(PolyError::ArityMismatch { .. })
        ));
    }

    #[test]
    fn test_s_polynomial() {
        // f = x^3 - 2xy, g = x^2y - 2y^2 + x under grlex: S(f, g) = -x^2
        let order = MonomialOrder::Grlex;
        let f = poly(&[(&[3, 0], 1.0), (&[1, 1], -2.0)], order);
        let g = poly(&[(&[2, 1], 1.0), (&[0, 2], -2.0), (&[1, 0], 1.0)], order);

        let s = f.s_polynomial(&g).unwrap();
        assert_eq!(s, poly(&[(&[2, 0], -1.0)], order));
    }

    #[test]
    fn test_s_polynomial_scales_leading_coefficients() {
        // f = x^3y^2 - x^2y^3 + x, g = 3x^4y + y^2 under grlex
        let order = MonomialOrder::Grlex;
        let f = poly(&[(&[3, 2], 1.0), (&[2, 3], -1.0), (&[1, 0], 1.0)], order);
        let g = poly(&[(&[4, 1], 3.0), (&[0, 2], 1.0)], order);

        // S = -x^3y^3 + x^2 - y^3/3
        let s = f.s_polynomial(&g).unwrap();
        let expected = poly(
            &[(&[3, 3], -1.0), (&[2, 0], 1.0), (&[0, 3], -1.0 / 3.0)],
            order,
        );
        assert!(s.approx_eq(&expected));
    }

    #[test]
    fn test_s_polynomial_of_zero() {
        let order = MonomialOrder::Lex;
        let f = Polynomial::<f64>::var(0, 2, order);
        let zero = Polynomial::zero(2, order);
        assert_eq!(f.s_polynomial(&zero), Err(PolyError::EmptyLeadingTerm));
    }
}
