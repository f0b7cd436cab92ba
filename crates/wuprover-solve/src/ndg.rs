//! Non-degeneracy conditions.
//!
//! Every pivot of a triangular system is divided by during pseudo-division,
//! so its leading coefficient in the eliminated variable must not vanish.
//! The coefficient is split into single-variable factors (its monomial
//! content) and a residual with no such factor; each piece is one condition
//! "this polynomial is nonzero".

use wuprover_poly::{Monomial, Polynomial, Power, Variable, XPolynomial};
use wuprover_rings::Q;

/// A nonzero-condition polynomial split into its factors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NdgFactors {
    content: Vec<Variable>,
    residual: Option<Polynomial<Q>>,
}

impl NdgFactors {
    /// Factors `p` after clearing its fraction denominators.
    ///
    /// The residual is normalized to leading coefficient 1 and omitted when
    /// it is constant.
    #[must_use]
    pub fn of(p: &XPolynomial) -> Self {
        let flat = p.clear_denominators();
        let content = flat.monomial_content();
        let residual = flat
            .div_monomial(&content)
            .unwrap_or(flat)
            .make_monic();

        Self {
            content: content.variables().cloned().collect(),
            residual: (!residual.is_constant()).then_some(residual),
        }
    }

    /// Returns the variables of the monomial content.
    #[must_use]
    pub fn content(&self) -> &[Variable] {
        &self.content
    }

    /// Returns the non-constant residual, if any.
    #[must_use]
    pub fn residual(&self) -> Option<&Polynomial<Q>> {
        self.residual.as_ref()
    }

    /// Returns true if no condition arises.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.content.is_empty() && self.residual.is_none()
    }

    /// Returns the monomial content as a monomial.
    #[must_use]
    pub fn content_monomial(&self) -> Monomial {
        Monomial::from_powers(self.content.iter().map(|v| Power::new(v.clone(), 1)))
    }

    /// Converts the factors into condition polynomials, content first.
    #[must_use]
    pub fn into_conditions(self) -> Vec<XPolynomial> {
        let mut out: Vec<XPolynomial> = self
            .content
            .into_iter()
            .map(|v| XPolynomial::from_flat(&Polynomial::var(v)))
            .collect();
        if let Some(r) = self.residual {
            out.push(XPolynomial::from_flat(&r));
        }
        out
    }
}

/// Returns true if the position polynomial triggers the catalogued condition.
///
/// The position polynomial is factored as in [`NdgFactors::of`]. It matches
/// if one of its content variables or its residual equals the normalized
/// catalog polynomial, or if the catalog polynomial is a single term whose
/// monomial divides the position polynomial's content.
#[must_use]
pub fn matches_ndg_catalog_entry(position: &XPolynomial, catalog: &XPolynomial) -> bool {
    let catalog = catalog.clear_denominators().make_monic();
    if catalog.is_zero() {
        return false;
    }
    let factors = NdgFactors::of(position);

    if factors
        .content()
        .iter()
        .any(|v| Polynomial::<Q>::var(v.clone()) == catalog)
    {
        return true;
    }
    if factors.residual() == Some(&catalog) {
        return true;
    }
    if catalog.len() == 1 {
        if let Some((m, _)) = catalog.leading_term() {
            return m.divides(&factors.content_monomial());
        }
    }
    false
}
