//! Exponent-vector monomials.
//!
//! A monomial `x_0^e_0 * ... * x_{n-1}^e_{n-1}` is stored as its exponent
//! vector. The arity `n` is fixed per computation; every binary operation
//! checks it and fails with [`PolyError::ArityMismatch`] instead of padding.

use std::fmt;

use smallvec::SmallVec;

use crate::error::{check_arity, PolyError, PolyResult};

/// Inline capacity before the exponent vector spills to the heap.
const INLINE_VARS: usize = 6;

/// A monomial represented by its exponent vector.
///
/// Equality and hashing are pointwise over the exponents, so two monomials
/// of different arity are never equal.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial {
    exponents: SmallVec<[u32; INLINE_VARS]>,
}

impl Monomial {
    /// Creates a monomial from its exponents.
    #[must_use]
    pub fn new(exps: &[u32]) -> Self {
        Self {
            exponents: SmallVec::from_slice(exps),
        }
    }

    /// Creates the identity monomial (1) in `num_vars` variables.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self {
            exponents: SmallVec::from_elem(0, num_vars),
        }
    }

    /// Creates the monomial x_i in `num_vars` variables.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index {i} out of range for {num_vars} variables");
        let mut m = Self::one(num_vars);
        m.exponents[i] = 1;
        m
    }

    /// Returns the exponent of variable i (zero when out of range).
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.exponents.get(i).copied().unwrap_or(0)
    }

    /// Returns the exponents as a slice.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.exponents.len()
    }

    /// Returns the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.exponents.iter().sum()
    }

    /// Checks if this is the identity monomial (1).
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiplies two monomials (adds exponents).
    pub fn mul(&self, other: &Self) -> PolyResult<Self> {
        check_arity(self.num_vars(), other.num_vars())?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Exact division `self / other`.
    ///
    /// Fails with [`PolyError::NotDivisible`] if any exponent would go negative.
    pub fn div(&self, other: &Self) -> PolyResult<Self> {
        check_arity(self.num_vars(), other.num_vars())?;
        let exponents = self
            .exponents
            .iter()
            .zip(&other.exponents)
            .map(|(&a, &b)| a.checked_sub(b).ok_or(PolyError::NotDivisible))
            .collect::<PolyResult<SmallVec<_>>>()?;
        Ok(Self { exponents })
    }

    /// Returns true if `self` divides `other`.
    ///
    /// Monomials of different arity never divide each other.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        self.num_vars() == other.num_vars()
            && self
                .exponents
                .iter()
                .zip(&other.exponents)
                .all(|(a, b)| a <= b)
    }

    /// Returns true if `other` divides `self`.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        other.divides(self)
    }

    /// Computes the least common multiple of two monomials.
    pub fn lcm(&self, other: &Self) -> PolyResult<Self> {
        check_arity(self.num_vars(), other.num_vars())?;
        Ok(self.zip_with(other, u32::max))
    }

    /// Computes the greatest common divisor of two monomials.
    pub fn gcd(&self, other: &Self) -> PolyResult<Self> {
        check_arity(self.num_vars(), other.num_vars())?;
        Ok(self.zip_with(other, u32::min))
    }

    /// Checks if two monomials are coprime (no variable appears in both).
    ///
    /// Monomials of different arity are never coprime.
    #[must_use]
    pub fn is_coprime(&self, other: &Self) -> bool {
        self.num_vars() == other.num_vars()
            && self
                .exponents
                .iter()
                .zip(&other.exponents)
                .all(|(&a, &b)| a == 0 || b == 0)
    }

    /// Converts to a string using the given variable names.
    ///
    /// Variables beyond `names` are written `x{i}`.
    #[must_use]
    pub fn to_string_with(&self, names: &[&str]) -> String {
        let parts: Vec<String> = self
            .exponents
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(i, &e)| {
                let name = names
                    .get(i)
                    .map_or_else(|| format!("x{i}"), |n| (*n).to_string());
                if e == 1 {
                    name
                } else {
                    format!("{name}^{e}")
                }
            })
            .collect();

        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join("*")
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(u32, u32) -> u32) -> Self {
        Self {
            exponents: self
                .exponents
                .iter()
                .zip(&other.exponents)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

/// Default variable names used by `Display`.
pub const DEFAULT_VAR_NAMES: [&str; 6] = ["x", "y", "z", "w", "u", "v"];

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&DEFAULT_VAR_NAMES))
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mono{:?}", self.exponents.as_slice())
    }
}

impl From<Vec<u32>> for Monomial {
    fn from(exps: Vec<u32>) -> Self {
        Self {
            exponents: SmallVec::from_vec(exps),
        }
    }
}
