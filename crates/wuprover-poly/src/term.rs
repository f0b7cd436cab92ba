//! Terms: a coefficient tied to a monomial.

use std::fmt;

use wuprover_rings::traits::{Field, Ring};

use crate::monomial::Monomial;
use crate::variable::Variable;

/// A single term `coeff * monomial`.
///
/// Polynomials never store a term with a zero coefficient; a free-standing
/// term may be zero (e.g. the result of a merge) and reports it via
/// [`Term::is_zero`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Term<C> {
    coeff: C,
    monomial: Monomial,
}

impl<C: Ring> Term<C> {
    /// Creates a term.
    #[must_use]
    pub fn new(coeff: C, monomial: Monomial) -> Self {
        Self { coeff, monomial }
    }

    /// Creates a constant term.
    #[must_use]
    pub fn constant(coeff: C) -> Self {
        Self::new(coeff, Monomial::one())
    }

    /// Creates `variable^exponent` with unit coefficient.
    ///
    /// The zero literal `u_0` yields the zero term.
    #[must_use]
    pub fn var(variable: Variable, exponent: u32) -> Self {
        if variable.is_zero_literal() && exponent > 0 {
            return Self::constant(C::zero());
        }
        Self::new(C::one(), Monomial::var(variable, exponent))
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> &C {
        &self.coeff
    }

    /// Returns the monomial.
    #[must_use]
    pub fn monomial(&self) -> &Monomial {
        &self.monomial
    }

    /// Splits the term into its coefficient and monomial.
    #[must_use]
    pub fn into_parts(self) -> (C, Monomial) {
        (self.coeff, self.monomial)
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Adds the coefficient of a term with the same monomial.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the monomials differ.
    pub fn merge(&mut self, other: &Self) {
        debug_assert_eq!(self.monomial, other.monomial, "merging unlike terms");
        self.coeff = self.coeff.clone() + other.coeff.clone();
    }

    /// Multiplies two terms.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.coeff.clone() * other.coeff.clone(),
            self.monomial.mul(&other.monomial),
        )
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &C) -> Self {
        Self::new(self.coeff.clone() * c.clone(), self.monomial.clone())
    }

    /// Negates the coefficient.
    #[must_use]
    pub fn invert_sign(&self) -> Self {
        Self::new(-self.coeff.clone(), self.monomial.clone())
    }
}

impl<C: Field> Term<C> {
    /// Divides by another term.
    ///
    /// Returns `None` if the divisor coefficient is zero or a resulting
    /// exponent would be negative.
    #[must_use]
    pub fn divide(&self, other: &Self) -> Option<Self> {
        let coeff = self.coeff.checked_div(&other.coeff)?;
        let monomial = self.monomial.div(&other.monomial)?;
        Some(Self::new(coeff, monomial))
    }
}

impl<C: Ring + fmt::Display> fmt::Display for Term<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.monomial.is_one() {
            write!(f, "{}", self.coeff)
        } else if self.coeff.is_one() {
            write!(f, "{}", self.monomial)
        } else if (-self.coeff.clone()).is_one() {
            write!(f, "-{}", self.monomial)
        } else {
            write!(f, "{}*{}", self.coeff, self.monomial)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wuprover_rings::Q;

    fn t(c: i64, m: Monomial) -> Term<Q> {
        Term::new(Q::from_integer(c), m)
    }

    fn x(i: u32, e: u32) -> Monomial {
        Monomial::var(Variable::dependent(i), e)
    }

    #[test]
    fn test_merge() {
        let mut a = t(3, x(1, 2));
        a.merge(&t(-3, x(1, 2)));
        assert!(a.is_zero());
    }

    #[test]
    fn test_mul_and_divide() {
        let a = t(6, x(2, 1).mul(&x(1, 2)));
        let b = t(2, x(1, 1));

        let q = a.divide(&b).unwrap();
        assert_eq!(q, t(3, x(2, 1).mul(&x(1, 1))));
        assert_eq!(q.mul(&b), a);

        assert!(b.divide(&a).is_none());
        assert!(a.divide(&t(0, Monomial::one())).is_none());
    }

    #[test]
    fn test_zero_literal_term() {
        let z: Term<Q> = Term::var(Variable::parameter(0), 1);
        assert!(z.is_zero());
        let u: Term<Q> = Term::var(Variable::parameter(1), 2);
        assert!(!u.is_zero());
    }

    #[test]
    fn test_invert_sign() {
        let a = t(5, x(1, 1));
        assert_eq!(a.invert_sign(), t(-5, x(1, 1)));
        assert_eq!(a.invert_sign().to_string(), "-5*x1");
        assert_eq!(t(-1, x(1, 1)).to_string(), "-x1");
    }
}
