//! Property-based tests for completion, minimization and reduction.

#[cfg(test)]
mod tests {
    use gbasis_poly::{Monomial, MonomialOrder, Polynomial};
    use proptest::prelude::*;

    use crate::basis::Basis;
    use crate::buchberger::groebner_basis;
    use crate::config::{GroebnerConfig, Strategy as PairStrategy};
    use crate::error::GroebnerError;

    const NUM_VARS: usize = 2;

    // Exponents up to 2 in two variables keeps completion small.
    fn monomial() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u32..=2, NUM_VARS).prop_map(Monomial::from)
    }

    fn order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![Just(MonomialOrder::Lex), Just(MonomialOrder::Grlex)]
    }

    fn generator(order: MonomialOrder) -> impl Strategy<Value = Polynomial<f64>> {
        proptest::collection::vec((monomial(), -3i32..=3), 1..=3)
            .prop_map(move |terms| {
                let terms = terms
                    .into_iter()
                    .map(|(m, c)| (m, f64::from(c)))
                    .collect();
                Polynomial::new(terms, NUM_VARS, order).unwrap()
            })
            .prop_filter("generator must be non-zero", |p| !p.is_zero())
    }

    fn system() -> impl Strategy<Value = (MonomialOrder, Vec<Polynomial<f64>>)> {
        order().prop_flat_map(|o| (Just(o), proptest::collection::vec(generator(o), 1..=3)))
    }

    fn config(order: MonomialOrder) -> GroebnerConfig {
        GroebnerConfig::new().with_order(order).with_max_degree(8)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn completion_yields_reduced_groebner_basis((o, gens) in system()) {
            let basis = match groebner_basis(&gens, &config(o)) {
                Err(GroebnerError::DegreeExceeded { .. }) => return Ok(()),
                other => other.unwrap(),
            };
            prop_assert!(basis.is_groebner_basis().unwrap());
            prop_assert!(basis.is_reduced().unwrap());
        }

        #[test]
        fn generators_lie_in_the_ideal((o, gens) in system()) {
            let basis = match groebner_basis(&gens, &config(o)) {
                Err(GroebnerError::DegreeExceeded { .. }) => return Ok(()),
                other => other.unwrap(),
            };
            for g in &gens {
                prop_assert!(basis.remainder(g).unwrap().is_zero());
            }
        }

        #[test]
        fn strategies_agree((o, gens) in system()) {
            let optimized = groebner_basis(&gens, &config(o));
            let simplified =
                groebner_basis(&gens, &config(o).with_strategy(PairStrategy::Simplified));
            match (optimized, simplified) {
                (Ok(a), Ok(b)) => prop_assert!(a.approx_eq(&b)),
                (Err(GroebnerError::DegreeExceeded { .. }), _)
                | (_, Err(GroebnerError::DegreeExceeded { .. })) => {}
                (a, b) => prop_assert!(false, "unexpected results {:?} / {:?}", a, b),
            }
        }

        #[test]
        fn minimization_is_idempotent((o, gens) in system()) {
            let mut basis = Basis::from_generators(gens.iter().map(|g| g.reorder(o))).unwrap();
            basis.minimize().unwrap();
            prop_assert!(basis.is_minimal().unwrap());

            let once = basis.clone();
            basis.minimize().unwrap();
            prop_assert!(basis.approx_eq(&once));
        }
    }
}
