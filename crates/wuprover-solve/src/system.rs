//! Polynomial systems and their triangulation.
//!
//! A system of `n` polynomials in the dependent variables `x_1..x_n` is
//! brought into triangular form: the polynomial at position `i` introduces
//! exactly one variable, `elimination_order[i]`, and contains no variable
//! introduced later. The leading coefficients of these pivots in their
//! variables are the source of the non-degeneracy conditions.
//!
//! Triangulation first tries to reorder the system as it is. If that fails it
//! eliminates `x_n` down to `x_1`, choosing a pivot for each variable and
//! pseudo-reducing the other polynomials that contain it.

use std::fmt;

use tracing::{debug, trace};
use wuprover_poly::{Variable, XPolynomial};

use crate::context::ProverContext;
use crate::error::TriangulationError;
use crate::pseudo::pseudo_remainder;
use crate::var_set::VarSet;

/// An ordered system of dependent-variable polynomials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolynomialSystem {
    polys: Vec<XPolynomial>,
    elimination_order: Vec<u32>,
}

impl PolynomialSystem {
    /// Creates an empty system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a system from polynomials, keeping their order.
    #[must_use]
    pub fn from_polys(polys: Vec<XPolynomial>) -> Self {
        Self {
            polys,
            elimination_order: Vec::new(),
        }
    }

    /// Appends a polynomial. Any previous triangulation is discarded.
    pub fn push(&mut self, p: XPolynomial) {
        self.polys.push(p);
        self.elimination_order.clear();
    }

    /// Appends `p` unless a structurally equal polynomial is present.
    ///
    /// Returns true if the polynomial was added.
    pub fn add_unique(&mut self, p: XPolynomial) -> bool {
        if self.polys.contains(&p) {
            return false;
        }
        self.push(p);
        true
    }

    /// Returns the number of polynomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if the system has no polynomials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Returns the polynomial at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&XPolynomial> {
        self.polys.get(position)
    }

    /// Returns the polynomials in order.
    #[must_use]
    pub fn polynomials(&self) -> &[XPolynomial] {
        &self.polys
    }

    /// Returns the elimination order (empty until triangulated).
    #[must_use]
    pub fn elimination_order(&self) -> &[u32] {
        &self.elimination_order
    }

    /// Returns true once a triangulation has succeeded.
    #[must_use]
    pub fn is_triangulated(&self) -> bool {
        self.elimination_order.len() == self.polys.len()
    }

    /// Returns the pivots with their elimination variables.
    pub fn pivots(&self) -> impl Iterator<Item = (&XPolynomial, Variable)> + '_ {
        self.polys
            .iter()
            .zip(&self.elimination_order)
            .map(|(p, &i)| (p, Variable::dependent(i)))
    }

    /// Checks the validity invariant of an `n`-polynomial system.
    ///
    /// Every monomial variable must be a dependent `x_i` with `1 <= i <= n`,
    /// and each of `x_1..x_n` must occur somewhere.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::MalformedSystem`] describing the first
    /// violation found.
    pub fn validate(&self) -> Result<(), TriangulationError> {
        let n = self.polys.len();
        let mut used = VarSet::new();

        for (pos, p) in self.polys.iter().enumerate() {
            for v in p.variables() {
                let Some(i) = v.dependent_index() else {
                    return Err(TriangulationError::MalformedSystem(format!(
                        "polynomial {pos} contains non-dependent variable {v}"
                    )));
                };
                if i == 0 || i as usize > n {
                    return Err(TriangulationError::MalformedSystem(format!(
                        "polynomial {pos} contains x{i}, outside 1..={n}"
                    )));
                }
                used.insert(i);
            }
        }

        if let Some(missing) = (1..=n as u32).find(|&i| !used.contains(i)) {
            return Err(TriangulationError::MalformedSystem(format!(
                "x{missing} does not occur in the system"
            )));
        }
        Ok(())
    }

    /// Reorders an already triangular system and fills the elimination order.
    ///
    /// Repeatedly picks the first remaining polynomial that introduces
    /// exactly one variable not yet covered. Returns false, leaving the
    /// system untouched, if no such ordering is found.
    pub fn check_and_reorder_triangular(&mut self) -> bool {
        let sets: Vec<VarSet> = self
            .polys
            .iter()
            .map(|p| p.dependent_indices().into_iter().collect())
            .collect();

        let mut remaining: Vec<usize> = (0..self.polys.len()).collect();
        let mut covered = VarSet::new();
        let mut order = Vec::with_capacity(remaining.len());
        let mut positions = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let next = remaining.iter().enumerate().find_map(|(slot, &pos)| {
                let new = sets[pos].difference(&covered);
                (new.len() == 1).then(|| (slot, pos, new))
            });
            let Some((slot, pos, new)) = next else {
                return false;
            };
            remaining.remove(slot);
            covered.union_with(&new);
            order.extend(new.iter());
            positions.push(pos);
        }

        self.polys = positions.into_iter().map(|pos| self.polys[pos].clone()).collect();
        self.elimination_order = order;
        true
    }

    /// Triangulates the system in place.
    ///
    /// On failure the system is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::MalformedSystem`] if validation fails
    /// - [`TriangulationError::MissingVariable`] if a variable disappears
    ///   during elimination
    /// - [`TriangulationError::CommonFactor`] if two polynomials reduce to zero
    ///   against each other
    /// - budget errors from the context
    pub fn triangulate(&mut self, ctx: &mut ProverContext) -> Result<(), TriangulationError> {
        self.validate()?;

        if self.check_and_reorder_triangular() {
            debug!(order = ?self.elimination_order, "system is already triangular");
            return Ok(());
        }

        let n = u32::try_from(self.polys.len())
            .map_err(|_| TriangulationError::Internal("system too large"))?;
        let mut working = self.polys.clone();
        let mut pivots: Vec<XPolynomial> = Vec::with_capacity(working.len());

        for index in (1..=n).rev() {
            let v = Variable::dependent(index);
            let (mut non_free, mut free): (Vec<_>, Vec<_>) =
                working.into_iter().partition(|p| p.contains(&v));

            if non_free.is_empty() {
                return Err(TriangulationError::MissingVariable(index));
            }
            debug!(variable = %v, candidates = non_free.len(), "eliminating");

            let pivot = Self::select_pivot(&mut non_free, &mut free, &v, ctx)?;
            debug!(variable = %v, pivot = %pivot, "pivot chosen");

            pivots.push(pivot);
            working = free;
        }

        if !working.is_empty() {
            debug!(leftover = working.len(), "discarding polynomials free of dependent variables");
        }

        pivots.reverse();
        self.polys = pivots;
        self.elimination_order = (1..=n).collect();
        Ok(())
    }

    /// Chooses the pivot for `v` among `non_free`, moving every reduced
    /// polynomial that no longer contains `v` into `free`.
    fn select_pivot(
        non_free: &mut Vec<XPolynomial>,
        free: &mut Vec<XPolynomial>,
        v: &Variable,
        ctx: &mut ProverContext,
    ) -> Result<XPolynomial, TriangulationError> {
        loop {
            if non_free.len() == 1 {
                return non_free
                    .pop()
                    .ok_or(TriangulationError::Internal("empty candidate list"));
            }
            if non_free.is_empty() {
                return Err(TriangulationError::Internal("empty candidate list"));
            }

            non_free.sort_by_key(|p| p.degree_in(v));

            if non_free[0].degree_in(v) == 1 {
                let pivot = non_free.remove(0);
                for p in non_free.drain(..) {
                    let r = pseudo_remainder(&p, &pivot, v, ctx)?;
                    if r.is_zero() {
                        trace!(variable = %v, "dropping redundant polynomial");
                    } else {
                        free.push(r);
                    }
                }
                return Ok(pivot);
            }

            let higher = non_free.remove(1);
            let r = pseudo_remainder(&higher, &non_free[0], v, ctx)?;
            let degree = r.degree_in(v);
            trace!(variable = %v, degree, "pairwise reduction");

            if r.is_zero() {
                let variable = v.dependent_index().unwrap_or_default();
                return Err(TriangulationError::CommonFactor { variable });
            }
            if degree == 0 {
                free.push(r);
            } else {
                non_free.push(r);
            }
        }
    }
}

impl fmt::Display for PolynomialSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.polys.iter().enumerate() {
            match self.elimination_order.get(i) {
                Some(v) if self.is_triangulated() => writeln!(f, "[x{v}] {p} = 0")?,
                _ => writeln!(f, "{p} = 0")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ProverConfig;
    use std::time::Duration;
    use wuprover_poly::{Fraction, UPolynomial};
    use wuprover_rings::Q;

    fn x(i: u32) -> XPolynomial {
        XPolynomial::dependent(i)
    }

    fn u(i: u32) -> XPolynomial {
        XPolynomial::parameter(i)
    }

    fn c(n: i64) -> XPolynomial {
        XPolynomial::constant(Fraction::constant(Q::from_integer(n)))
    }

    fn assert_triangular(system: &PolynomialSystem) {
        let order = system.elimination_order();
        assert_eq!(order.len(), system.len());
        for (i, p) in system.polynomials().iter().enumerate() {
            assert!(p.contains(&Variable::dependent(order[i])));
            for later in &order[i + 1..] {
                assert!(!p.contains(&Variable::dependent(*later)));
            }
        }
    }

    #[test]
    fn test_validate() {
        assert!(PolynomialSystem::from_polys(vec![&x(1) - &u(1), x(2)]).validate().is_ok());

        let gap = PolynomialSystem::from_polys(vec![x(1), x(3)]);
        assert!(matches!(gap.validate(), Err(TriangulationError::MalformedSystem(_))));

        let missing = PolynomialSystem::from_polys(vec![x(1), &x(1) + &c(1)]);
        assert!(matches!(missing.validate(), Err(TriangulationError::MalformedSystem(_))));

        let param_in_monomial = XPolynomial::var(Variable::parameter(2));
        let bad = PolynomialSystem::from_polys(vec![param_in_monomial]);
        assert!(matches!(bad.validate(), Err(TriangulationError::MalformedSystem(_))));
    }

    #[test]
    fn test_fast_path_reorders() {
        // [x1*x2 - u1, x1 - u2] is triangular in the order x1, x2
        let mut system = PolynomialSystem::from_polys(vec![&(&x(1) * &x(2)) - &u(1), &x(1) - &u(2)]);
        let mut ctx = ProverContext::default();
        system.triangulate(&mut ctx).unwrap();

        assert_eq!(system.elimination_order(), &[1, 2]);
        assert_eq!(system.get(0), Some(&(&x(1) - &u(2))));
        assert_triangular(&system);
        assert_eq!(ctx.stats().reductions, 0);
    }

    #[test]
    fn test_fast_path_non_identity_order() {
        // x2 alone first, then x1 with x2
        let mut system = PolynomialSystem::from_polys(vec![&x(1) - &x(2), &x(2) - &u(1)]);
        assert!(system.check_and_reorder_triangular());
        assert_eq!(system.elimination_order(), &[2, 1]);
        assert_triangular(&system);
    }

    #[test]
    fn test_general_path_linear_pivot() {
        // x1 + x2 - u1 and x1 - x2 - u2: both contain both variables
        let p1 = &(&x(1) + &x(2)) - &u(1);
        let p2 = &(&x(1) - &x(2)) - &u(2);
        let mut system = PolynomialSystem::from_polys(vec![p1.clone(), p2]);
        let mut ctx = ProverContext::default();
        system.triangulate(&mut ctx).unwrap();

        assert_eq!(system.elimination_order(), &[1, 2]);
        assert_triangular(&system);
        assert_eq!(system.get(1), Some(&p1));
        // prem(p2, p1, x2) = 2*x1 - u1 - u2
        let expected = &(&x(1) * &c(2)) - &(&u(1) + &u(2));
        assert_eq!(system.get(0), Some(&expected));
    }

    #[test]
    fn test_general_path_euclidean_reduction() {
        // x2^2 - x1 and x2^2 + x2 - x1 - u1 reduce to the linear pivot x2 - u1
        let p1 = &(&x(2) * &x(2)) - &x(1);
        let p2 = &(&p1 + &x(2)) - &u(1);
        let mut system = PolynomialSystem::from_polys(vec![p1, p2]);
        let mut ctx = ProverContext::default();
        system.triangulate(&mut ctx).unwrap();

        assert_triangular(&system);
        assert_eq!(system.get(1), Some(&(&x(2) - &u(1))));
        // prem(x2^2 - x1, x2 - u1, x2) = u1^2 - x1
        assert_eq!(system.get(0), Some(&(&(&u(1) * &u(1)) - &x(1))));
    }

    #[test]
    fn test_general_path_constant_remainder() {
        // the pairwise remainder 2*x1 + u1 is free of x2, so x2^2 - x1 pivots
        let p1 = &(&x(2) * &x(2)) - &x(1);
        let p2 = &(&(&x(2) * &x(2)) + &x(1)) + &u(1);
        let mut system = PolynomialSystem::from_polys(vec![p1.clone(), p2]);
        let mut ctx = ProverContext::default();
        assert_eq!(system.triangulate(&mut ctx), Ok(()));

        assert_eq!(system.elimination_order(), &[1, 2]);
        assert_triangular(&system);
        assert_eq!(system.get(1), Some(&p1));
        assert_eq!(system.get(0), Some(&(&(&x(1) * &c(2)) + &u(1))));
    }

    #[test]
    fn test_common_factor() {
        // p and 2p share every factor
        let p = &(&(&x(2) * &x(2)) + &x(1)) - &u(1);
        let twice = &p * &c(2);
        let mut system = PolynomialSystem::from_polys(vec![p, twice]);
        let before = system.clone();
        let mut ctx = ProverContext::default();

        assert_eq!(
            system.triangulate(&mut ctx),
            Err(TriangulationError::CommonFactor { variable: 2 })
        );
        assert_eq!(system, before);
        assert!(!system.is_triangulated());
    }

    #[test]
    fn test_missing_variable_after_reduction() {
        // both reduce away x1 once x2 is eliminated
        let p1 = &x(2) - &x(1);
        let p2 = &(&x(2) - &x(1)) + &u(1);
        let mut system = PolynomialSystem::from_polys(vec![p1, p2]);
        let mut ctx = ProverContext::default();
        assert_eq!(
            system.triangulate(&mut ctx),
            Err(TriangulationError::MissingVariable(1))
        );
    }

    #[test]
    fn test_time_limit() {
        let p1 = &(&x(1) + &x(2)) - &u(1);
        let p2 = &(&x(1) - &x(2)) - &u(2);
        let mut system = PolynomialSystem::from_polys(vec![p1, p2]);
        let mut ctx = ProverContext::new(ProverConfig::default().with_time_limit(Duration::ZERO));
        ctx.arm();
        assert!(matches!(
            system.triangulate(&mut ctx),
            Err(TriangulationError::TimeLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_space_limit() {
        let p1 = &(&x(1) + &x(2)) - &u(1);
        let p2 = &(&x(1) - &x(2)) - &u(2);
        let mut system = PolynomialSystem::from_polys(vec![p1, p2]);
        let mut ctx = ProverContext::new(ProverConfig::default().with_max_terms(1));
        assert!(matches!(
            system.triangulate(&mut ctx),
            Err(TriangulationError::SpaceLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_add_unique() {
        let mut system = PolynomialSystem::new();
        assert!(system.add_unique(x(1)));
        assert!(!system.add_unique(x(1)));
        assert!(system.add_unique(XPolynomial::from_parameters(UPolynomial::one())));
        assert_eq!(system.len(), 2);
    }

    #[test]
    fn test_empty_system() {
        let mut system = PolynomialSystem::new();
        let mut ctx = ProverContext::default();
        system.triangulate(&mut ctx).unwrap();
        assert!(system.is_triangulated());
    }
}
