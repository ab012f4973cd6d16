//! Buchberger completion loops.
//!
//! Two completion loops are provided:
//! - [`SimplifiedBuchberger`]: repeated full passes over every pair until a
//!   pass leaves the basis fingerprint unchanged. Slow, but the reference.
//! - [`OptimizedBuchberger`]: a worklist of pending pairs filtered by the
//!   product and chain criteria.
//!
//! Both stop with every pairwise S-polynomial reducing to zero modulo the
//! basis. [`groebner_basis`] runs completion followed by minimization and
//! reduction.

use gbasis_poly::{Monomial, Polynomial};
use num_traits::Float;
use tracing::{debug, instrument, trace};

use crate::basis::Basis;
use crate::config::{GroebnerConfig, Strategy};
use crate::criteria::{chain_criterion, product_criterion};
use crate::error::{GroebnerError, GroebnerResult};
use crate::pairs::{Pair, PairQueue};

/// Counters collected during completion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuchbergerStats {
    /// Full passes over the basis (simplified loop only).
    pub passes: u64,
    /// Pairs taken from the worklist or visited by a pass.
    pub pairs_considered: u64,
    /// S-polynomials computed and reduced.
    pub s_polynomials_computed: u64,
    /// S-polynomials whose remainder was zero.
    pub zero_reductions: u64,
    /// Pairs skipped by the product criterion.
    pub pairs_eliminated_product: u64,
    /// Pairs skipped by the chain criterion.
    pub pairs_eliminated_chain: u64,
    /// Generators appended to the basis.
    pub polynomials_added: u64,
}

/// A completed basis together with the counters of the run.
#[derive(Clone, Debug)]
pub struct Completion<F> {
    /// The basis, closed under S-polynomial reduction.
    pub basis: Basis<F>,
    /// Counters of the run.
    pub stats: BuchbergerStats,
}

/// Fixed-point completion by repeated full passes.
pub struct SimplifiedBuchberger<F> {
    basis: Basis<F>,
    max_degree: Option<u32>,
    stats: BuchbergerStats,
}

impl<F: Float> SimplifiedBuchberger<F> {
    /// Creates a new completion run over `basis`.
    pub fn new(basis: Basis<F>, config: &GroebnerConfig) -> Self {
        Self {
            basis,
            max_degree: config.max_degree,
            stats: BuchbergerStats::default(),
        }
    }

    /// Runs passes until one leaves the basis unchanged.
    #[instrument(skip_all, fields(generators = self.basis.len()))]
    pub fn compute(mut self) -> GroebnerResult<Completion<F>> {
        while self.step()? {}

        debug!(
            passes = self.stats.passes,
            generators = self.basis.len(),
            "simplified completion finished"
        );
        Ok(Completion {
            basis: self.basis,
            stats: self.stats,
        })
    }

    /// Performs one full pass over the pairs of the current generators.
    ///
    /// Returns true if the pass changed the basis.
    pub fn step(&mut self) -> GroebnerResult<bool> {
        let before = self.basis.fingerprint();
        let snapshot = self.basis.generators().to_vec();
        self.stats.passes += 1;

        for (i, f) in snapshot.iter().enumerate() {
            for g in &snapshot[i + 1..] {
                self.stats.pairs_considered += 1;
                self.stats.s_polynomials_computed += 1;

                let remainder = self.basis.remainder(&f.s_polynomial(g)?)?;
                if remainder.is_zero() {
                    self.stats.zero_reductions += 1;
                    continue;
                }

                check_degree(self.max_degree, &remainder)?;
                if self.basis.insert(remainder)? {
                    self.stats.polynomials_added += 1;
                }
            }
        }

        let changed = self.basis.fingerprint() != before;
        debug!(
            pass = self.stats.passes,
            generators = self.basis.len(),
            changed,
            "completion pass"
        );
        Ok(changed)
    }

    /// Returns the current basis.
    pub fn basis(&self) -> &Basis<F> {
        &self.basis
    }

    /// Returns the counters so far.
    pub fn stats(&self) -> &BuchbergerStats {
        &self.stats
    }
}

/// Worklist completion with the product and chain criteria.
///
/// New pairs discovered while processing a pair are queued only after that
/// pair is finished, so the queue is never mutated mid-iteration.
pub struct OptimizedBuchberger<F> {
    basis: Basis<F>,
    pairs: PairQueue,
    config: GroebnerConfig,
    stats: BuchbergerStats,
}

impl<F: Float> OptimizedBuchberger<F> {
    /// Creates a new completion run, queueing every pair of `basis`.
    pub fn new(basis: Basis<F>, config: &GroebnerConfig) -> Self {
        let pairs = PairQueue::all_pairs(basis.len());
        Self {
            basis,
            pairs,
            config: config.clone(),
            stats: BuchbergerStats::default(),
        }
    }

    /// Processes pairs until none is pending.
    #[instrument(skip_all, fields(generators = self.basis.len()))]
    pub fn compute(mut self) -> GroebnerResult<Completion<F>> {
        while self.step()? {}

        debug!(
            generators = self.basis.len(),
            s_polynomials = self.stats.s_polynomials_computed,
            product = self.stats.pairs_eliminated_product,
            chain = self.stats.pairs_eliminated_chain,
            "optimized completion finished"
        );
        Ok(Completion {
            basis: self.basis,
            stats: self.stats,
        })
    }

    /// Processes one pending pair.
    ///
    /// Returns false once the worklist is empty.
    pub fn step(&mut self) -> GroebnerResult<bool> {
        let Some(pair) = self.pairs.pop() else {
            return Ok(false);
        };
        self.stats.pairs_considered += 1;

        let Some(remainder) = self.reduce_pair(pair)? else {
            return Ok(true);
        };

        check_degree(self.config.max_degree, &remainder)?;
        let new_idx = self.basis.len();
        if self.basis.insert(remainder)? {
            self.stats.polynomials_added += 1;
            debug!(index = new_idx, pair.i, pair.j, "new generator");
            self.pairs.extend((0..new_idx).map(|k| Pair::new(k, new_idx)));
        }
        Ok(true)
    }

    /// Applies the criteria to `pair`, then reduces its S-polynomial.
    ///
    /// Returns the remainder if it is nonzero.
    fn reduce_pair(&mut self, pair: Pair) -> GroebnerResult<Option<Polynomial<F>>> {
        let generators = self.basis.generators();
        let f = &generators[pair.i];
        let g = &generators[pair.j];
        let lm_f = f.leading_monomial()?;
        let lm_g = g.leading_monomial()?;

        if self.config.use_product_criterion && product_criterion(lm_f, lm_g) {
            trace!(pair.i, pair.j, "pair skipped by product criterion");
            self.stats.pairs_eliminated_product += 1;
            return Ok(None);
        }

        let lcm: Monomial = lm_f.lcm(lm_g)?;
        if self.config.use_chain_criterion && chain_criterion(pair, &lcm, generators, &self.pairs)
        {
            trace!(pair.i, pair.j, "pair skipped by chain criterion");
            self.stats.pairs_eliminated_chain += 1;
            return Ok(None);
        }

        self.stats.s_polynomials_computed += 1;
        let remainder = f.s_polynomial(g)?.remainder(generators)?;
        if remainder.is_zero() {
            self.stats.zero_reductions += 1;
            return Ok(None);
        }
        Ok(Some(remainder))
    }

    /// Returns the current basis.
    pub fn basis(&self) -> &Basis<F> {
        &self.basis
    }

    /// Returns the number of pending pairs.
    pub fn pairs_remaining(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the counters so far.
    pub fn stats(&self) -> &BuchbergerStats {
        &self.stats
    }
}

fn check_degree<F: Float>(max_degree: Option<u32>, p: &Polynomial<F>) -> GroebnerResult<()> {
    let Some(max_degree) = max_degree else {
        return Ok(());
    };
    let actual_degree = p.total_degree();
    if actual_degree > max_degree {
        return Err(GroebnerError::DegreeExceeded {
            max_degree,
            actual_degree,
        });
    }
    Ok(())
}

impl<F: Float> Basis<F> {
    /// Completes the basis with the loop selected by `config.strategy`.
    pub fn complete(self, config: &GroebnerConfig) -> GroebnerResult<Completion<F>> {
        match config.strategy {
            Strategy::Simplified => SimplifiedBuchberger::new(self, config).compute(),
            Strategy::Optimized => OptimizedBuchberger::new(self, config).compute(),
        }
    }
}

/// Computes a Gröbner basis of the ideal generated by `generators`.
///
/// Generators are brought into `config.order`, completed, and, unless
/// `config.reduce` is false, minimized and reduced to the unique reduced
/// Gröbner basis.
#[instrument(skip_all, fields(generators = generators.len(), order = %config.order))]
pub fn groebner_basis<F: Float>(
    generators: &[Polynomial<F>],
    config: &GroebnerConfig,
) -> GroebnerResult<Basis<F>> {
    let basis = Basis::from_generators(generators.iter().map(|g| g.reorder(config.order)))?;
    let Completion { mut basis, stats } = basis.complete(config)?;
    debug!(?stats, "completion statistics");

    if config.reduce && !basis.is_empty() {
        basis.reduce()?;
    }
    Ok(basis)
}
