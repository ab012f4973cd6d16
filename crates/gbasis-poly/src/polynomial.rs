//! Sparse multivariate polynomials with floating-point coefficients.
//!
//! This module provides the sparse term map used throughout the Gröbner
//! machinery. Coefficients are compared against a per-polynomial epsilon:
//! any update that leaves a coefficient below it removes the term.

use std::cmp::Ordering;
use std::fmt;

use num_traits::Float;

use crate::error::{check_arity, PolyError, PolyResult};
use crate::monomial::{Monomial, DEFAULT_VAR_NAMES};
use crate::ordering::MonomialOrder;

/// Default zero threshold for coefficients.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Converts [`DEFAULT_EPSILON`] into the coefficient type.
#[must_use]
pub fn default_epsilon<F: Float>() -> F {
    F::from(DEFAULT_EPSILON).unwrap_or_else(F::epsilon)
}

/// A sparse multivariate polynomial.
///
/// Terms are stored as (monomial, coefficient) pairs, sorted by the monomial
/// ordering with the leading term first. Monomials are unique and every
/// stored coefficient has magnitude at least `epsilon`.
///
/// The ordering is fixed at construction. Operations combining two
/// polynomials fail with [`PolyError::OrderMismatch`] if their orders differ.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<F> {
    /// Terms in descending monomial order.
    terms: Vec<(Monomial, F)>,
    /// Number of variables.
    num_vars: usize,
    /// Monomial ordering used for sorting.
    order: MonomialOrder,
    /// Coefficients below this magnitude are treated as zero.
    epsilon: F,
}

impl<F: Float> Polynomial<F> {
    /// Creates a new polynomial from terms.
    ///
    /// Terms are sorted and like terms combined. Every monomial must have
    /// `num_vars` variables.
    pub fn new(
        terms: Vec<(Monomial, F)>,
        num_vars: usize,
        order: MonomialOrder,
    ) -> PolyResult<Self> {
        for (m, _) in &terms {
            check_arity(num_vars, m.num_vars())?;
        }

        let mut poly = Self {
            terms,
            num_vars,
            order,
            epsilon: default_epsilon(),
        };
        poly.normalize();
        Ok(poly)
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize, order: MonomialOrder) -> Self {
        Self {
            terms: Vec::new(),
            num_vars,
            order,
            epsilon: default_epsilon(),
        }
    }

    /// Creates a polynomial with a single term.
    #[must_use]
    pub fn from_term(m: Monomial, c: F, order: MonomialOrder) -> Self {
        let mut poly = Self::zero(m.num_vars(), order);
        if c.abs() >= poly.epsilon {
            poly.terms.push((m, c));
        }
        poly
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: F, num_vars: usize, order: MonomialOrder) -> Self {
        Self::from_term(Monomial::one(num_vars), c, order)
    }

    /// Creates a single variable x_i.
    #[must_use]
    pub fn var(i: usize, num_vars: usize, order: MonomialOrder) -> Self {
        Self::from_term(Monomial::var(i, num_vars), F::one(), order)
    }

    /// Replaces the zero threshold, dropping terms that fall below it.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        let eps = epsilon.abs();
        self.epsilon = eps;
        self.terms.retain(|(_, c)| c.abs() >= eps);
        self
    }

    /// Rebuilds the polynomial under another ordering.
    #[must_use]
    pub fn reorder(&self, order: MonomialOrder) -> Self {
        let mut poly = Self {
            terms: self.terms.clone(),
            order,
            ..self.clone_empty()
        };
        poly.normalize();
        poly
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
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

    /// Returns the zero threshold.
    #[must_use]
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// Returns the terms, leading term first.
    #[must_use]
    pub fn terms(&self) -> &[(Monomial, F)] {
        &self.terms
    }

    /// Iterates over (monomial, coefficient) pairs, leading term first.
    pub fn iter(&self) -> impl Iterator<Item = (&Monomial, F)> + '_ {
        self.terms.iter().map(|(m, c)| (m, *c))
    }

    /// Iterates over the monomials present, leading monomial first.
    pub fn support(&self) -> impl Iterator<Item = &Monomial> + '_ {
        self.terms.iter().map(|(m, _)| m)
    }

    /// Returns the coefficient of `m`, or `None` if the term is absent.
    #[must_use]
    pub fn coefficient(&self, m: &Monomial) -> Option<F> {
        self.position(m).ok().map(|i| self.terms[i].1)
    }

    /// Returns the leading term (monomial, coefficient).
    pub fn leading_term(&self) -> PolyResult<(&Monomial, F)> {
        self.terms
            .first()
            .map(|(m, c)| (m, *c))
            .ok_or(PolyError::EmptyLeadingTerm)
    }

    /// Returns the leading monomial.
    pub fn leading_monomial(&self) -> PolyResult<&Monomial> {
        self.leading_term().map(|(m, _)| m)
    }

    /// Returns the leading coefficient.
    pub fn leading_coeff(&self) -> PolyResult<F> {
        self.leading_term().map(|(_, c)| c)
    }

    /// Computes the total degree (0 for the zero polynomial).
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(m, _)| m.total_degree())
            .max()
            .unwrap_or(0)
    }

    /// Fails unless `other` has the same arity and ordering as `self`.
    pub fn check_compatible(&self, other: &Self) -> PolyResult<()> {
        check_arity(self.num_vars, other.num_vars)?;
        if self.order != other.order {
            return Err(PolyError::OrderMismatch {
                expected: self.order,
                found: other.order,
            });
        }
        Ok(())
    }

    /// Adds `c * m` to this polynomial.
    ///
    /// If the resulting coefficient falls below epsilon the term is removed.
    pub fn add_monomial(&mut self, m: Monomial, c: F) -> PolyResult<()> {
        check_arity(self.num_vars, m.num_vars())?;

        match self.position(&m) {
            Ok(i) => {
                let sum = self.terms[i].1 + c;
                if sum.abs() < self.epsilon {
                    self.terms.remove(i);
                } else {
                    self.terms[i].1 = sum;
                }
            }
            Err(i) => {
                if c.abs() >= self.epsilon {
                    self.terms.insert(i, (m, c));
                }
            }
        }
        Ok(())
    }

    /// Adds `scale * other` to this polynomial in place.
    pub fn add_scaled(&mut self, other: &Self, scale: F) -> PolyResult<()> {
        self.check_compatible(other)?;
        self.merge_sorted(other.terms.iter().map(|(m, c)| (m.clone(), *c * scale)));
        Ok(())
    }

    /// Adds two polynomials.
    pub fn add(&self, other: &Self) -> PolyResult<Self> {
        let mut sum = self.clone();
        sum.add_scaled(other, F::one())?;
        Ok(sum)
    }

    /// Subtracts two polynomials.
    pub fn sub(&self, other: &Self) -> PolyResult<Self> {
        let mut diff = self.clone();
        diff.add_scaled(other, -F::one())?;
        Ok(diff)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.scale(-F::one())
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, s: F) -> Self {
        let eps = self.epsilon;
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), *c * s))
                .filter(|(_, c)| c.abs() >= eps)
                .collect(),
            ..self.clone_empty()
        }
    }

    /// Multiplies every term by `c * m`.
    ///
    /// Monomial orders are compatible with multiplication, so the term order
    /// is preserved without re-sorting.
    pub fn mul_monomial(&self, m: &Monomial, c: F) -> PolyResult<Self> {
        check_arity(self.num_vars, m.num_vars())?;
        let eps = self.epsilon;
        let terms = self
            .terms
            .iter()
            .filter(|(_, x)| (*x * c).abs() >= eps)
            .map(|(m2, x)| Ok((m2.mul(m)?, *x * c)))
            .collect::<PolyResult<Vec<_>>>()?;
        Ok(Self {
            terms,
            ..self.clone_empty()
        })
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    pub fn mul(&self, other: &Self) -> PolyResult<Self> {
        self.check_compatible(other)?;

        let mut product = self.clone_empty();
        for (m, c) in &other.terms {
            product.add_scaled(&self.mul_monomial(m, *c)?, F::one())?;
        }
        Ok(product)
    }

    /// Divides every coefficient by the leading coefficient, making it one.
    pub fn normalize_leading_coefficient(&mut self) -> PolyResult<()> {
        let lc = self.leading_coeff()?;
        for (_, c) in &mut self.terms {
            *c = *c / lc;
        }
        if let Some((_, c)) = self.terms.first_mut() {
            *c = F::one();
        }
        let eps = self.epsilon;
        let tail = self.terms.split_off(1);
        self.terms.extend(tail.into_iter().filter(|(_, c)| c.abs() >= eps));
        Ok(())
    }

    /// Evaluates the polynomial at `point`.
    pub fn evaluate(&self, point: &[F]) -> PolyResult<F> {
        check_arity(self.num_vars, point.len())?;

        Ok(self.terms.iter().fold(F::zero(), |acc, (m, c)| {
            let value = m
                .exponents()
                .iter()
                .zip(point)
                .fold(*c, |v, (&e, &x)| v * pow(x, e));
            acc + value
        }))
    }

    /// Returns true if every term is divisible by `m`.
    #[must_use]
    pub fn is_divisible_by_monomial(&self, m: &Monomial) -> bool {
        self.terms.iter().all(|(t, _)| t.is_divisible_by(m))
    }

    /// Returns true if both polynomials have exactly the same monomials.
    #[must_use]
    pub fn same_support(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self.support().zip(other.support()).all(|(a, b)| a == b)
    }

    /// Returns true if both polynomials have the same monomials and every
    /// pair of coefficients differs by less than epsilon.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.order == other.order
            && self.same_support(other)
            && self
                .terms
                .iter()
                .zip(&other.terms)
                .all(|((_, a), (_, b))| (*a - *b).abs() < self.epsilon)
    }

    /// Locates `m` among the terms.
    ///
    /// `Err(i)` is the insertion point that keeps the terms sorted.
    fn position(&self, m: &Monomial) -> Result<usize, usize> {
        self.terms
            .binary_search_by(|(probe, _)| self.order.compare(m, probe))
    }

    /// Merges descending-sorted terms into `self`, cancelling below epsilon.
    pub(crate) fn merge_sorted<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (Monomial, F)>,
    {
        let order = self.order;
        let eps = self.epsilon;
        let lhs = std::mem::take(&mut self.terms);
        let mut out = Vec::with_capacity(lhs.len());
        let mut a = lhs.into_iter().peekable();
        let mut b = other.into_iter().peekable();

        loop {
            let ord = match (a.peek(), b.peek()) {
                (Some((ma, _)), Some((mb, _))) => order.compare(ma, mb),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => break,
            };

            match ord {
                Ordering::Greater => out.extend(a.next()),
                Ordering::Less => {
                    if let Some((m, c)) = b.next() {
                        if c.abs() >= eps {
                            out.push((m, c));
                        }
                    }
                }
                Ordering::Equal => {
                    if let (Some((m, ca)), Some((_, cb))) = (a.next(), b.next()) {
                        let c = ca + cb;
                        if c.abs() >= eps {
                            out.push((m, c));
                        }
                    }
                }
            }
        }

        self.terms = out;
    }

    /// Removes and returns the leading term.
    pub(crate) fn pop_leading(&mut self) -> Option<(Monomial, F)> {
        if self.terms.is_empty() {
            None
        } else {
            Some(self.terms.remove(0))
        }
    }

    /// Appends a term smaller than every stored term.
    pub(crate) fn push_trailing(&mut self, m: Monomial, c: F) {
        debug_assert!(self
            .terms
            .last()
            .map_or(true, |(last, _)| self.order.compare(last, &m) == Ordering::Greater));
        self.terms.push((m, c));
    }

    /// Sorts terms and combines like terms.
    fn normalize(&mut self) {
        let order = self.order;
        let eps = self.epsilon;

        // Sort by monomial order (descending for leading term first)
        self.terms.sort_by(|a, b| order.compare(&b.0, &a.0));

        // Combine like terms
        let mut combined: Vec<(Monomial, F)> = Vec::with_capacity(self.terms.len());
        for (m, c) in self.terms.drain(..) {
            if let Some((last, acc)) = combined.last_mut() {
                if *last == m {
                    *acc = *acc + c;
                    continue;
                }
            }
            combined.push((m, c));
        }
        combined.retain(|(_, c)| c.abs() >= eps);
        self.terms = combined;
    }

    /// A zero polynomial sharing this one's arity, order and epsilon.
    fn clone_empty(&self) -> Self {
        Self {
            terms: Vec::new(),
            num_vars: self.num_vars,
            order: self.order,
            epsilon: self.epsilon,
        }
    }
}

fn pow<F: Float>(x: F, e: u32) -> F {
    (0..e).fold(F::one(), |acc, _| acc * x)
}

impl<F: Float + fmt::Display> Polynomial<F> {
    /// Renders the polynomial with caller-supplied variable names.
    #[must_use]
    pub fn display_with(&self, names: &[&str]) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (i, (m, c)) in self.terms.iter().enumerate() {
            let negative = *c < F::zero();
            let magnitude = c.abs();
            match (i, negative) {
                (0, true) => out.push('-'),
                (0, false) => {}
                (_, true) => out.push_str(" - "),
                (_, false) => out.push_str(" + "),
            }

            if m.is_one() {
                out.push_str(&magnitude.to_string());
            } else if magnitude == F::one() {
                out.push_str(&m.to_string_with(names));
            } else {
                out.push_str(&format!("{magnitude}*{}", m.to_string_with(names)));
            }
        }
        out
    }
}

impl<F: Float + fmt::Display> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&DEFAULT_VAR_NAMES))
    }
}
