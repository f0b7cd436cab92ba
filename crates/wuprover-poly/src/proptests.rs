//! Property-based tests for canonical polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wuprover_rings::traits::Ring;
    use wuprover_rings::Q;

    use crate::{Fraction, Monomial, Power, Term, UPolynomial, Variable};

    // Small polynomials in u1, u2 with coefficients in -5..=5
    fn small_upoly() -> impl Strategy<Value = UPolynomial> {
        prop::collection::vec((-5i64..=5i64, 0u32..3u32, 0u32..3u32), 0..5).prop_map(|terms| {
            terms
                .into_iter()
                .map(|(c, e1, e2)| {
                    let m = Monomial::from_powers([
                        Power::new(Variable::parameter(1), e1),
                        Power::new(Variable::parameter(2), e2),
                    ]);
                    Term::new(Q::from_integer(c), m)
                })
                .collect()
        })
    }

    fn non_zero_upoly() -> impl Strategy<Value = UPolynomial> {
        small_upoly().prop_filter("denominator must be non-zero", |p| !p.is_zero())
    }

    fn small_fraction() -> impl Strategy<Value = Fraction> {
        (small_upoly(), non_zero_upoly()).prop_map(|(n, d)| Fraction::new(n, d))
    }

    proptest! {
        #[test]
        fn insertion_order_does_not_matter(p in small_upoly()) {
            let forward = UPolynomial::new(p.to_terms());
            let backward = UPolynomial::new(p.to_terms().into_iter().rev());
            prop_assert_eq!(&forward, &backward);
            prop_assert_eq!(forward, p);
        }

        #[test]
        fn stored_coefficients_are_non_zero(a in small_upoly(), b in small_upoly()) {
            let sum = &a + &b;
            prop_assert!(sum.terms().all(|(_, c)| !c.is_zero()));
            let product = &a * &b;
            prop_assert!(product.terms().all(|(_, c)| !c.is_zero()));
        }

        #[test]
        fn add_commutative(a in small_upoly(), b in small_upoly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in small_upoly(), b in small_upoly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn distributive(a in small_upoly(), b in small_upoly(), c in small_upoly()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn sub_self_is_zero(a in small_upoly()) {
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn leading_term_is_greatest(a in small_upoly()) {
            if let Some((lead, _)) = a.leading_term() {
                prop_assert!(a.terms().all(|(m, _)| m <= lead));
            }
        }

        #[test]
        fn reduce_is_idempotent(n in small_upoly(), d in non_zero_upoly()) {
            let once = Fraction::from_parts(n, d).reduce();
            prop_assert_eq!(once.clone().reduce(), once);
        }

        #[test]
        fn reduced_denominator_is_monic(f in small_fraction()) {
            prop_assert_eq!(f.denominator().leading_coeff(), Some(&Q::one()));
        }

        #[test]
        fn fraction_sub_self_is_zero(f in small_fraction()) {
            prop_assert!(f.sub_ref(&f).is_zero());
        }

        #[test]
        fn fraction_times_inverse_is_one(f in small_fraction()) {
            if let Some(inv) = f.invert() {
                prop_assert!(f.mul_ref(&inv).is_one());
            }
        }
    }
}
