//! Configuration for Gröbner basis computation.

use gbasis_poly::MonomialOrder;

/// Which completion loop to run.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Strategy {
    /// Repeated full passes over every pair until a pass adds nothing.
    Simplified,
    /// Worklist of pending pairs with product and chain criteria.
    #[default]
    Optimized,
}

/// Configuration for Buchberger's algorithm.
#[derive(Clone, Debug)]
pub struct GroebnerConfig {
    /// Monomial ordering the generators are brought into.
    pub order: MonomialOrder,
    /// Completion loop.
    pub strategy: Strategy,
    /// Skip pairs whose leading monomials are coprime.
    pub use_product_criterion: bool,
    /// Skip pairs implied by two already-processed pairs.
    pub use_chain_criterion: bool,
    /// Abort if a new generator has a larger total degree (`None` = no limit).
    pub max_degree: Option<u32>,
    /// Minimize and reduce after completion.
    pub reduce: bool,
}

impl Default for GroebnerConfig {
    fn default() -> Self {
        Self {
            order: MonomialOrder::default(),
            strategy: Strategy::default(),
            use_product_criterion: true,
            use_chain_criterion: true,
            max_degree: None,
            reduce: true,
        }
    }
}

impl GroebnerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the monomial ordering.
    #[must_use]
    pub fn with_order(mut self, order: MonomialOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the completion loop.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables the product criterion.
    #[must_use]
    pub fn with_product_criterion(mut self, enabled: bool) -> Self {
        self.use_product_criterion = enabled;
        self
    }

    /// Enables or disables the chain criterion.
    #[must_use]
    pub fn with_chain_criterion(mut self, enabled: bool) -> Self {
        self.use_chain_criterion = enabled;
        self
    }

    /// Limits the total degree of new generators.
    #[must_use]
    pub fn with_max_degree(mut self, max_degree: u32) -> Self {
        self.max_degree = Some(max_degree);
        self
    }

    /// Enables or disables minimization and reduction after completion.
    #[must_use]
    pub fn with_reduction(mut self, enabled: bool) -> Self {
        self.reduce = enabled;
        self
    }
}
