//! Multivariate pseudo-division.

use tracing::trace;
use wuprover_poly::{Variable, XPolynomial};

use crate::context::ProverContext;
use crate::error::TriangulationError;

/// Computes the pseudo-remainder of `p` by `q` with respect to `variable`.
///
/// With `q = c * v^e + ...` (where `c` is free of `v`), repeatedly cancels the
/// leading power of `v` in the remainder `r` by replacing it with
/// `r * c - q * lc(r) * v^(deg r - e)` until `deg_v r < e`. If `q` does not
/// contain `v` the result is zero.
///
/// # Errors
///
/// Propagates budget errors from [`ProverContext::check`], which is polled
/// after every step.
///
/// # Example
///
/// ```
/// use wuprover_poly::{Variable, XPolynomial};
/// use wuprover_solve::{pseudo_remainder, ProverContext};
///
/// let x1 = XPolynomial::dependent(1);
/// let p = &(&x1 * &x1) - &XPolynomial::parameter(2);
/// let q = &x1 - &XPolynomial::parameter(1);
///
/// let mut ctx = ProverContext::default();
/// let r = pseudo_remainder(&p, &q, &Variable::dependent(1), &mut ctx).unwrap();
///
/// let u1 = XPolynomial::parameter(1);
/// assert_eq!(r, &(&u1 * &u1) - &XPolynomial::parameter(2));
/// ```
pub fn pseudo_remainder(
    p: &XPolynomial,
    q: &XPolynomial,
    variable: &Variable,
    ctx: &mut ProverContext,
) -> Result<XPolynomial, TriangulationError> {
    let (qe, qc) = q.leading_in(variable);
    if qe == 0 {
        return Ok(XPolynomial::zero());
    }

    let mut r = p.clone();
    loop {
        let (re, rc) = r.leading_in_shifted(variable, qe);
        if re < qe || r.is_zero() {
            break;
        }
        r = &(&r * &qc) - &(q * &rc);
        let terms = r.total_term_count();
        trace!(%variable, degree = re, terms, "pseudo-reduction step");
        ctx.check(terms)?;
    }
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ProverConfig;
    use wuprover_poly::{Fraction, UPolynomial};

    fn x(i: u32) -> XPolynomial {
        XPolynomial::dependent(i)
    }

    fn u(i: u32) -> XPolynomial {
        XPolynomial::parameter(i)
    }

    #[test]
    fn test_worked_example() {
        // prem(x1^2 - u2, x1 - u1, x1) = u1^2 - u2
        let p = &(&x(1) * &x(1)) - &u(2);
        let q = &x(1) - &u(1);
        let mut ctx = ProverContext::default();
        let r = pseudo_remainder(&p, &q, &Variable::dependent(1), &mut ctx).unwrap();
        assert_eq!(r, &(&u(1) * &u(1)) - &u(2));
        assert_eq!(ctx.stats().reductions, 2);
    }

    #[test]
    fn test_divisor_without_variable() {
        let p = &x(2) * &x(1);
        let q = &x(1) + &u(1);
        let mut ctx = ProverContext::default();
        let r = pseudo_remainder(&p, &q, &Variable::dependent(2), &mut ctx).unwrap();
        assert!(r.is_zero());
    }

    #[test]
    fn test_non_monic_divisor() {
        // prem(x2^2 + x1, u1*x2 + 1, x2) = 1 + u1^2*x1
        let p = &(&x(2) * &x(2)) + &x(1);
        let q = &(&u(1) * &x(2)) + &XPolynomial::one();
        let mut ctx = ProverContext::default();
        let r = pseudo_remainder(&p, &q, &Variable::dependent(2), &mut ctx).unwrap();

        let expected = &XPolynomial::one() + &(&(&u(1) * &u(1)) * &x(1));
        assert_eq!(r, expected);
        assert_eq!(r.degree_in(&Variable::dependent(2)), 0);
    }

    #[test]
    fn test_fraction_coefficients() {
        // prem((1/u1)*x1 + u2, x1, x1) = u2
        let inv_u1 = Fraction::new(UPolynomial::one(), UPolynomial::var(Variable::parameter(1)));
        let p = &XPolynomial::constant(inv_u1) * &x(1);
        let p = &p + &u(2);
        let mut ctx = ProverContext::default();
        let r = pseudo_remainder(&p, &x(1), &Variable::dependent(1), &mut ctx).unwrap();
        assert_eq!(r, u(2));
    }

    #[test]
    fn test_space_budget_aborts() {
        let p = &(&(&x(1) * &x(1)) * &u(3)) - &u(2);
        let q = &(&x(1) * &u(4)) - &u(1);
        let mut ctx = ProverContext::new(ProverConfig::default().with_max_terms(1));
        let r = pseudo_remainder(&p, &q, &Variable::dependent(1), &mut ctx);
        assert!(matches!(r, Err(TriangulationError::SpaceLimitExceeded { .. })));
    }
}
