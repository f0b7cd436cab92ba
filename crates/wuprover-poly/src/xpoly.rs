//! Helpers specific to dependent-variable polynomials.
//!
//! An `XPolynomial` keeps parameters inside its fraction coefficients. NDG
//! analysis needs the opposite view, a single polynomial over parameters and
//! dependent variables together with rational coefficients; this module
//! converts between the two.

use wuprover_rings::Q;

use crate::fraction::Fraction;
use crate::monomial::Monomial;
use crate::polynomial::Polynomial;
use crate::term::Term;
use crate::variable::Variable;
use crate::{UPolynomial, XPolynomial};

impl Polynomial<Fraction> {
    /// Creates the constant `u_i`.
    #[must_use]
    pub fn parameter(index: u32) -> Self {
        Self::constant(Fraction::parameter(index))
    }

    /// Creates the dependent variable `x_i`.
    #[must_use]
    pub fn dependent(index: u32) -> Self {
        Self::var(Variable::dependent(index))
    }

    /// Lifts a parameter polynomial to a constant `XPolynomial`.
    #[must_use]
    pub fn from_parameters(p: UPolynomial) -> Self {
        Self::constant(Fraction::from_poly(p))
    }

    /// Returns the number of parameter terms across all coefficients.
    ///
    /// This is the size measure used by the space budget.
    #[must_use]
    pub fn total_term_count(&self) -> usize {
        self.terms().map(|(_, c)| c.term_count()).sum()
    }

    /// Returns the indices of the dependent variables that occur.
    #[must_use]
    pub fn dependent_indices(&self) -> Vec<u32> {
        self.variables()
            .iter()
            .filter_map(Variable::dependent_index)
            .collect()
    }

    /// Multiplies through by the denominators of all coefficients.
    ///
    /// The result is a polynomial over parameters and dependent variables with
    /// rational coefficients that vanishes exactly where `self` does (away
    /// from the poles of the coefficients).
    #[must_use]
    pub fn clear_denominators(&self) -> Polynomial<Q> {
        let mut denominators: Vec<&UPolynomial> = Vec::new();
        for (_, c) in self.terms() {
            if !c.is_polynomial() && !denominators.contains(&c.denominator()) {
                denominators.push(c.denominator());
            }
        }

        let mut flat = Polynomial::zero();
        for (m, c) in self.terms() {
            let mut numerator = c.numerator().clone();
            for d in denominators.iter().filter(|d| **d != c.denominator()) {
                numerator = numerator.mul(d);
            }
            for (um, uc) in numerator.terms() {
                flat.insert(Term::new(uc.clone(), um.mul(m)));
            }
        }
        flat
    }

    /// Builds an `XPolynomial` from a polynomial over parameters and
    /// dependent variables, moving parameter powers into the coefficients.
    #[must_use]
    pub fn from_flat(flat: &Polynomial<Q>) -> Self {
        let mut out = XPolynomial::zero();
        for (m, c) in flat.terms() {
            let (params, rest): (Vec<_>, Vec<_>) = m
                .powers()
                .iter()
                .cloned()
                .partition(|p| p.variable().is_parameter());
            let coeff = UPolynomial::from_term(Term::new(c.clone(), Monomial::from_powers(params)));
            out.insert(Term::new(Fraction::from_poly(coeff), Monomial::from_powers(rest)));
        }
        out
    }

    /// Returns true if every coefficient has denominator 1.
    #[must_use]
    pub fn has_polynomial_coeffs(&self) -> bool {
        self.terms().all(|(_, c)| c.is_polynomial())
    }
}
