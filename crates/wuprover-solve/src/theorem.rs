//! Theorems: hypotheses, a statement and derived non-degeneracy conditions.

use tracing::debug;
use wuprover_poly::XPolynomial;

use crate::context::ProverContext;
use crate::error::TriangulationError;
use crate::ndg::NdgFactors;
use crate::pseudo::pseudo_remainder;
use crate::system::PolynomialSystem;

/// A theorem to be proved by Wu's method.
///
/// The statement holds generically if its successive pseudo-remainder by the
/// triangulated hypotheses is zero, provided the NDG conditions hold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Theorem {
    hypotheses: PolynomialSystem,
    statement: XPolynomial,
    ndg: PolynomialSystem,
}

impl Theorem {
    /// Creates a theorem with an empty NDG system.
    ///
    /// [`Theorem::default`] gives an empty theorem to fill with
    /// [`Theorem::set_hypotheses`] and [`Theorem::set_statement`].
    #[must_use]
    pub fn new(hypotheses: PolynomialSystem, statement: XPolynomial) -> Self {
        Self {
            hypotheses,
            statement,
            ndg: PolynomialSystem::new(),
        }
    }

    /// Replaces the hypotheses and clears the derived NDG conditions.
    pub fn set_hypotheses(&mut self, hypotheses: PolynomialSystem) {
        self.hypotheses = hypotheses;
        self.ndg = PolynomialSystem::new();
    }

    /// Replaces the statement and clears the derived NDG conditions.
    pub fn set_statement(&mut self, statement: XPolynomial) {
        self.statement = statement;
        self.ndg = PolynomialSystem::new();
    }

    /// Returns the hypothesis system.
    #[must_use]
    pub fn hypotheses(&self) -> &PolynomialSystem {
        &self.hypotheses
    }

    /// Returns the statement polynomial.
    #[must_use]
    pub fn statement(&self) -> &XPolynomial {
        &self.statement
    }

    /// Returns the NDG conditions derived so far.
    #[must_use]
    pub fn ndg_conditions(&self) -> &PolynomialSystem {
        &self.ndg
    }

    /// Triangulates the hypotheses.
    ///
    /// # Errors
    ///
    /// See [`PolynomialSystem::triangulate`].
    pub fn triangulate_hypotheses(
        &mut self,
        ctx: &mut ProverContext,
    ) -> Result<(), TriangulationError> {
        self.hypotheses.triangulate(ctx)
    }

    /// Adds the NDG conditions of every pivot of the triangulated hypotheses.
    ///
    /// A leading coefficient equal to 1 contributes nothing. Conditions
    /// already present are not added again, so calling this twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::Internal`] if the hypotheses have not
    /// been triangulated.
    pub fn fill_ndg_conditions(&mut self) -> Result<(), TriangulationError> {
        if !self.hypotheses.is_triangulated() {
            return Err(TriangulationError::Internal(
                "NDG conditions need a triangulated system",
            ));
        }

        for (pivot, v) in self.hypotheses.pivots() {
            let (_, lc) = pivot.leading_in(&v);
            if lc.is_one() {
                continue;
            }
            for condition in NdgFactors::of(&lc).into_conditions() {
                if self.ndg.add_unique(condition) {
                    debug!(variable = %v, "added NDG condition");
                }
            }
        }
        Ok(())
    }

    /// Pseudo-divides the statement by the triangulated hypotheses, last
    /// pivot first.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::Internal`] if the hypotheses have not
    /// been triangulated, or a budget error from the context.
    pub fn final_remainder(
        &self,
        ctx: &mut ProverContext,
    ) -> Result<XPolynomial, TriangulationError> {
        if !self.hypotheses.is_triangulated() {
            return Err(TriangulationError::Internal(
                "final remainder needs a triangulated system",
            ));
        }
        let pivots: Vec<_> = self.hypotheses.pivots().collect();
        let mut r = self.statement.clone();
        for (pivot, v) in pivots.into_iter().rev() {
            r = pseudo_remainder(&r, pivot, &v, ctx)?;
            if r.is_zero() {
                break;
            }
        }
        Ok(r)
    }
}
