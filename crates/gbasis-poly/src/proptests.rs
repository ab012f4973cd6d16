//! Property-based tests for monomial and polynomial arithmetic.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use crate::monomial::Monomial;
    use crate::ordering::MonomialOrder;
    use crate::polynomial::Polynomial;

    const NUM_VARS: usize = 3;

    // Strategy for generating small monomials in three variables
    fn monomial() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u32..4, NUM_VARS).prop_map(Monomial::from)
    }

    fn order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Grlex),
            Just(MonomialOrder::Grevlex),
        ]
    }

    // Strategy for generating small polynomials with integer coefficients
    fn small_poly(order: MonomialOrder) -> impl Strategy<Value = Polynomial<f64>> {
        proptest::collection::vec((monomial(), -5i32..=5), 0..=5).prop_map(move |terms| {
            let terms = terms
                .into_iter()
                .map(|(m, c)| (m, f64::from(c)))
                .collect();
            Polynomial::new(terms, NUM_VARS, order).unwrap()
        })
    }

    // Monic divisors keep every quotient coefficient an integer.
    fn monic_poly(order: MonomialOrder) -> impl Strategy<Value = Polynomial<f64>> {
        small_poly(order)
            .prop_filter("divisor must be non-zero", |p| !p.is_zero())
            .prop_map(|mut p| {
                let lc = p.leading_coeff().unwrap();
                p = p.scale(lc.signum());
                let lm = p.leading_monomial().unwrap().clone();
                p.add_monomial(lm, 1.0 - lc.abs()).unwrap();
                p
            })
    }

    fn poly_with_order() -> impl Strategy<Value = (MonomialOrder, Polynomial<f64>, Polynomial<f64>)> {
        order().prop_flat_map(|o| (Just(o), small_poly(o), small_poly(o)))
    }

    proptest! {
        // Monomial arithmetic

        #[test]
        fn monomial_mul_commutative(a in monomial(), b in monomial()) {
            prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
        }

        #[test]
        fn monomial_divides_product(a in monomial(), b in monomial()) {
            let ab = a.mul(&b).unwrap();
            prop_assert!(a.divides(&ab));
            prop_assert_eq!(ab.div(&a).unwrap(), b);
        }

        #[test]
        fn monomial_lcm_is_least(a in monomial(), b in monomial(), c in monomial()) {
            let l = a.lcm(&b).unwrap();
            prop_assert!(a.divides(&l));
            prop_assert!(b.divides(&l));
            // Any common multiple is a multiple of the lcm.
            if a.divides(&c) && b.divides(&c) {
                prop_assert!(l.divides(&c));
            }
        }

        #[test]
        fn monomial_div_fails_iff_not_divisible(a in monomial(), b in monomial()) {
            prop_assert_eq!(a.div(&b).is_ok(), b.divides(&a));
        }

        // Ordering axioms

        #[test]
        fn order_is_total_and_antisymmetric(o in order(), a in monomial(), b in monomial()) {
            let ab = o.compare(&a, &b);
            prop_assert_eq!(ab, o.compare(&b, &a).reverse());
            prop_assert_eq!(ab == Ordering::Equal, a == b);
        }

        #[test]
        fn order_is_multiplicative(o in order(), a in monomial(), b in monomial(), c in monomial()) {
            let ac = a.mul(&c).unwrap();
            let bc = b.mul(&c).unwrap();
            prop_assert_eq!(o.compare(&a, &b), o.compare(&ac, &bc));
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative((_, a, b) in poly_with_order()) {
            prop_assert!(a.add(&b).unwrap().approx_eq(&b.add(&a).unwrap()));
        }

        #[test]
        fn poly_add_associative(
            (a, b, c) in order().prop_flat_map(|o| (small_poly(o), small_poly(o), small_poly(o)))
        ) {
            let left = a.add(&b).unwrap().add(&c).unwrap();
            let right = a.add(&b.add(&c).unwrap()).unwrap();
            prop_assert!(left.approx_eq(&right));
        }

        #[test]
        fn poly_additive_inverse((_, a, _) in poly_with_order()) {
            let mut sum = a.clone();
            sum.add_scaled(&a, -1.0).unwrap();
            prop_assert!(sum.is_zero());
        }

        #[test]
        fn poly_terms_sorted_and_above_epsilon((o, a, b) in poly_with_order()) {
            let product = a.mul(&b).unwrap();
            for w in product.terms().windows(2) {
                prop_assert_eq!(o.compare(&w[0].0, &w[1].0), Ordering::Greater);
            }
            prop_assert!(product.terms().iter().all(|(_, c)| c.abs() >= product.epsilon()));
        }

        // Division

        #[test]
        fn division_reconstructs_dividend(
            (f, divisors) in order().prop_flat_map(|o| {
                (small_poly(o), proptest::collection::vec(monic_poly(o), 1..=3))
            })
        ) {
            let div = f.multivariate_division(&divisors).unwrap();

            let mut acc = div.remainder.clone();
            for (q, d) in div.quotients.iter().zip(&divisors) {
                acc = acc.add(&q.mul(d).unwrap()).unwrap();
            }
            prop_assert!(acc.approx_eq(&f));

            for (m, _) in div.remainder.terms() {
                for d in &divisors {
                    prop_assert!(!d.leading_monomial().unwrap().divides(m));
                }
            }
        }

        #[test]
        fn s_polynomial_cancels_leading_terms(
            (f, g) in order().prop_flat_map(|o| (monic_poly(o), monic_poly(o)))
        ) {
            let s = f.s_polynomial(&g).unwrap();
            let lcm = f
                .leading_monomial()
                .unwrap()
                .lcm(g.leading_monomial().unwrap())
                .unwrap();
            prop_assert!(s.coefficient(&lcm).is_none());
        }
    }
}
