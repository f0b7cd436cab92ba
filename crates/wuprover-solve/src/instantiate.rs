//! Binding symbolic point coordinates to concrete variables.
//!
//! Condition templates are written over `x_P`, `y_P` for named points. A
//! construction fixes each coordinate as a parameter `u_i` (free), the
//! literal zero `u_0`, or a dependent `x_i` (determined by the construction).
//! Instantiation substitutes those choices and moves parameter powers into
//! the fraction coefficients.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use wuprover_poly::{
    Axis, Monomial, Polynomial, Power, SymbolicPolynomial, Term, Variable, XPolynomial,
};
use wuprover_rings::Q;

use crate::error::InstantiationError;

/// Coordinates assigned to named points.
#[derive(Clone, Debug, Default)]
pub struct PointBindings {
    points: FxHashMap<Arc<str>, [Variable; 2]>,
}

impl PointBindings {
    /// Creates an empty binding table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the coordinates of `point`, replacing any earlier binding.
    pub fn bind(&mut self, point: &str, x: Variable, y: Variable) {
        self.points.insert(Arc::from(point), [x, y]);
    }

    /// Builder form of [`PointBindings::bind`].
    #[must_use]
    pub fn with(mut self, point: &str, x: Variable, y: Variable) -> Self {
        self.bind(point, x, y);
        self
    }

    /// Returns the variable bound to one coordinate of `point`.
    #[must_use]
    pub fn get(&self, point: &str, axis: Axis) -> Option<&Variable> {
        let [x, y] = self.points.get(point)?;
        Some(match axis {
            Axis::X => x,
            Axis::Y => y,
        })
    }

    /// Returns the number of bound points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no point is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Substitutes the bindings into a symbolic polynomial.
    ///
    /// Parameter and dependent variables already present are kept. A term
    /// containing `u_0` vanishes.
    ///
    /// # Errors
    ///
    /// Returns [`InstantiationError::UnboundPoint`] for a coordinate of an
    /// unknown point and [`InstantiationError::UnexpectedVariable`] if a
    /// binding is itself symbolic.
    pub fn instantiate(&self, p: &SymbolicPolynomial) -> Result<XPolynomial, InstantiationError> {
        let mut flat = Polynomial::<Q>::zero();

        'terms: for (m, c) in p.terms() {
            let mut powers = Vec::with_capacity(m.powers().len());
            for power in m.powers() {
                let v = self.resolve(power.variable())?;
                if v.is_zero_literal() {
                    continue 'terms;
                }
                powers.push(Power::new(v, power.exponent()));
            }
            flat.insert(Term::new(c.clone(), Monomial::from_powers(powers)));
        }

        Ok(XPolynomial::from_flat(&flat))
    }

    fn resolve(&self, v: &Variable) -> Result<Variable, InstantiationError> {
        let Variable::Symbolic { point, axis } = v else {
            return Ok(v.clone());
        };
        let bound = self
            .get(point, *axis)
            .ok_or_else(|| InstantiationError::UnboundPoint(point.to_string()))?;
        if bound.is_symbolic() {
            return Err(InstantiationError::UnexpectedVariable(bound.clone()));
        }
        Ok(bound.clone())
    }
}
