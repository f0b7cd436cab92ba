//! Property-based tests for pseudo-division and triangulation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wuprover_poly::{Monomial, Polynomial, Power, Term, Variable, XPolynomial};
    use wuprover_rings::Q;

    use crate::{pseudo_remainder, PolynomialSystem, ProverContext, Theorem};

    // Small polynomials in x1, x2 with coefficients over u1
    fn small_xpoly() -> impl Strategy<Value = XPolynomial> {
        prop::collection::vec((-3i64..=3i64, 0u32..2u32, 0u32..3u32, 0u32..3u32), 1..4).prop_map(
            |terms| {
                let flat: Polynomial<Q> = terms
                    .into_iter()
                    .map(|(c, eu, e1, e2)| {
                        let m = Monomial::from_powers([
                            Power::new(Variable::parameter(1), eu),
                            Power::new(Variable::dependent(1), e1),
                            Power::new(Variable::dependent(2), e2),
                        ]);
                        Term::new(Q::from_integer(c), m)
                    })
                    .collect();
                XPolynomial::from_flat(&flat)
            },
        )
    }

    proptest! {
        #[test]
        fn pseudo_remainder_degree_bound(p in small_xpoly(), q in small_xpoly()) {
            let v = Variable::dependent(1);
            let mut ctx = ProverContext::default();
            let r = pseudo_remainder(&p, &q, &v, &mut ctx).unwrap();
            let qe = q.degree_in(&v);
            if qe == 0 {
                prop_assert!(r.is_zero());
            } else {
                prop_assert!(r.degree_in(&v) < qe);
            }
        }

        #[test]
        fn triangulation_postcondition(p in small_xpoly(), q in small_xpoly()) {
            let mut system = PolynomialSystem::from_polys(vec![p, q]);
            let mut ctx = ProverContext::default();
            if system.triangulate(&mut ctx).is_ok() {
                let order = system.elimination_order().to_vec();
                prop_assert_eq!(order.len(), 2);
                for (i, poly) in system.polynomials().iter().enumerate() {
                    prop_assert!(poly.contains(&Variable::dependent(order[i])));
                    for later in &order[i + 1..] {
                        prop_assert!(!poly.contains(&Variable::dependent(*later)));
                    }
                }
            }
        }

        #[test]
        fn ndg_never_contains_one(p in small_xpoly(), q in small_xpoly()) {
            let mut theorem = Theorem::new(PolynomialSystem::from_polys(vec![p, q]), XPolynomial::zero());
            let mut ctx = ProverContext::default();
            if theorem.triangulate_hypotheses(&mut ctx).is_ok() {
                theorem.fill_ndg_conditions().unwrap();
                let before = theorem.ndg_conditions().len();
                let conditions = theorem.ndg_conditions().polynomials();
                prop_assert!(!conditions.iter().any(|c| c.is_one() || c.is_zero()));
                theorem.fill_ndg_conditions().unwrap();
                prop_assert_eq!(theorem.ndg_conditions().len(), before);
            }
        }
    }
}
