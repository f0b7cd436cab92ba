//! Fractions of parameter polynomials.
//!
//! A fraction `P(u)/Q(u)` is the coefficient domain of dependent-variable
//! polynomials. The representation is kept reduced:
//! - the monomial GCD of numerator and denominator has been divided out
//! - the denominator is monic (so a constant denominator is exactly 1)
//! - zero is represented as `0 / 1`
//!
//! Reduction only removes monomial factors; two fractions that differ by a
//! common non-monomial factor are equal as values but not structurally.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use wuprover_rings::traits::{Field, Ring};
use wuprover_rings::Q;

use crate::variable::Variable;
use crate::UPolynomial;

/// A quotient of two parameter polynomials.
///
/// # Invariants
///
/// - `denominator` is never the zero polynomial
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Fraction {
    numerator: UPolynomial,
    denominator: UPolynomial,
}

impl Fraction {
    /// Creates a reduced fraction.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: UPolynomial, denominator: UPolynomial) -> Self {
        Self::from_parts(numerator, denominator).reduce()
    }

    /// Creates a fraction without reducing it.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_parts(numerator: UPolynomial, denominator: UPolynomial) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a fraction from a polynomial (denominator = 1).
    #[must_use]
    pub fn from_poly(p: UPolynomial) -> Self {
        Self {
            numerator: p,
            denominator: UPolynomial::one(),
        }
    }

    /// Creates a constant fraction c/1.
    #[must_use]
    pub fn constant(c: Q) -> Self {
        Self::from_poly(UPolynomial::constant(c))
    }

    /// Creates the fraction `u_i / 1`.
    #[must_use]
    pub fn parameter(index: u32) -> Self {
        Self::from_poly(UPolynomial::var(Variable::parameter(index)))
    }

    /// Returns the numerator polynomial.
    #[must_use]
    pub fn numerator(&self) -> &UPolynomial {
        &self.numerator
    }

    /// Returns the denominator polynomial.
    #[must_use]
    pub fn denominator(&self) -> &UPolynomial {
        &self.denominator
    }

    /// Returns true if this is a polynomial (denominator = 1).
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns the total number of terms in numerator and denominator.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.numerator.len() + self.denominator.len()
    }

    /// Reduces the fraction.
    ///
    /// Divides numerator and denominator by the GCD monomial of all their
    /// terms, collapses `p / p` to 1, then makes the denominator monic. A
    /// constant denominator therefore becomes exactly 1.
    #[must_use]
    pub fn reduce(self) -> Self {
        let Self {
            mut numerator,
            mut denominator,
        } = self;

        if numerator.is_zero() {
            return Self::zero();
        }

        let g = numerator
            .monomial_content()
            .gcd(&denominator.monomial_content());
        if !g.is_one() {
            if let (Some(n), Some(d)) = (numerator.div_monomial(&g), denominator.div_monomial(&g)) {
                numerator = n;
                denominator = d;
            }
        }

        if numerator == denominator {
            return Self::one();
        }

        if let Some(inv) = denominator.leading_coeff().and_then(Field::inv) {
            if !inv.is_one() {
                numerator = numerator.scale(&inv);
                denominator = denominator.scale(&inv);
            }
        }

        Self {
            numerator,
            denominator,
        }
    }

    /// Adds two fractions by reference.
    #[must_use]
    pub fn add_ref(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.denominator == other.denominator {
            return Self::new(
                self.numerator.add(&other.numerator),
                self.denominator.clone(),
            );
        }

        // a/b + c/d = (ad + cb) / bd
        let num = self
            .numerator
            .mul(&other.denominator)
            .add(&other.numerator.mul(&self.denominator));
        let den = self.denominator.mul(&other.denominator);
        Self::new(num, den)
    }

    /// Subtracts another fraction from this one.
    #[must_use]
    pub fn sub_ref(&self, other: &Self) -> Self {
        self.add_ref(&other.neg_ref())
    }

    /// Multiplies two fractions.
    #[must_use]
    pub fn mul_ref(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        if self.is_one() {
            return other.clone();
        }
        if other.is_one() {
            return self.clone();
        }
        let num = self.numerator.mul(&other.numerator);
        let den = self.denominator.mul(&other.denominator);
        Self::new(num, den)
    }

    /// Multiplies by a rational scalar.
    #[must_use]
    pub fn scale(&self, c: &Q) -> Self {
        if self.is_zero() || c.is_zero() {
            return Self::zero();
        }
        Self::new(self.numerator.scale(c), self.denominator.clone())
    }

    /// Multiplies by a parameter polynomial.
    #[must_use]
    pub fn mul_poly(&self, p: &UPolynomial) -> Self {
        if self.is_zero() || p.is_zero() {
            return Self::zero();
        }
        Self::new(self.numerator.mul(p), self.denominator.clone())
    }

    /// Swaps numerator and denominator.
    ///
    /// Returns `None` for the zero fraction.
    #[must_use]
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::new(self.denominator.clone(), self.numerator.clone()))
        }
    }

    /// Negates the fraction.
    #[must_use]
    pub fn neg_ref(&self) -> Self {
        Self {
            numerator: self.numerator.neg(),
            denominator: self.denominator.clone(),
        }
    }
}

impl Ring for Fraction {
    fn zero() -> Self {
        Self::from_poly(UPolynomial::zero())
    }

    fn one() -> Self {
        Self::from_poly(UPolynomial::one())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }
}

impl Field for Fraction {
    fn inv(&self) -> Option<Self> {
        self.invert()
    }
}

impl Add for Fraction {
    type Output = Self;

    /// a/b + c/d = (ad + bc) / bd
    fn add(self, other: Self) -> Self::Output {
        self.add_ref(&other)
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.sub_ref(&other)
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.mul_ref(&other)
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: self.numerator.neg(),
            denominator: self.denominator,
        }
    }
}

impl From<UPolynomial> for Fraction {
    fn from(p: UPolynomial) -> Self {
        Self::from_poly(p)
    }
}

impl From<Q> for Fraction {
    fn from(c: Q) -> Self {
        Self::constant(c)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wrap = |p: &UPolynomial| {
            if p.len() > 1 {
                format!("({p})")
            } else {
                p.to_string()
            }
        };
        if self.is_polynomial() {
            write!(f, "{}", wrap(&self.numerator))
        } else {
            write!(f, "{}/{}", wrap(&self.numerator), wrap(&self.denominator))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn u(i: u32) -> UPolynomial {
        UPolynomial::var(Variable::parameter(i))
    }

    fn c(n: i64) -> UPolynomial {
        UPolynomial::constant(q(n))
    }

    #[test]
    fn test_reduce_monomial_gcd() {
        // (u1^2*u2 + u1*u2) / (u1*u2) = (u1 + 1) / 1
        let num = &(&(&u(1) * &u(1)) * &u(2)) + &(&u(1) * &u(2));
        let den = &u(1) * &u(2);
        let f = Fraction::new(num, den);

        assert!(f.is_polynomial());
        assert_eq!(f.numerator(), &(&u(1) + &c(1)));
    }

    #[test]
    fn test_reduce_constant_denominator() {
        // (2*u1 + 4) / 2 = u1 + 2
        let f = Fraction::new(&(&u(1) * &c(2)) + &c(4), c(2));
        assert!(f.is_polynomial());
        assert_eq!(f.numerator(), &(&u(1) + &c(2)));
    }

    #[test]
    fn test_reduce_monic_denominator() {
        // u1 / (3*u2 + 3) = (1/3 u1) / (u2 + 1)
        let f = Fraction::new(u(1), &(&u(2) * &c(3)) + &c(3));
        assert_eq!(f.denominator(), &(&u(2) + &c(1)));
        assert_eq!(f.numerator(), &u(1).scale(&Q::new(1, 3)));
    }

    #[test]
    fn test_reduce_idempotent_and_zero() {
        let f = Fraction::from_parts(&(&u(1) * &u(2)) * &c(6), &(&u(2) * &u(3)) * &c(4));
        let once = f.reduce();
        assert_eq!(once.clone().reduce(), once);

        let z = Fraction::from_parts(UPolynomial::zero(), &u(1) + &c(7)).reduce();
        assert!(z.is_zero());
        assert!(z.is_polynomial());
    }

    #[test]
    fn test_add_and_cancel() {
        let a = Fraction::new(u(1), u(2));
        let b = Fraction::new(u(3), &u(2) + &c(1));

        let sum = a.add_ref(&b);
        assert!(!sum.is_zero());
        assert!(sum.sub_ref(&b).sub_ref(&a).is_zero());
        assert!(a.sub_ref(&a).is_zero());
    }

    #[test]
    fn test_mul_and_invert() {
        let a = Fraction::new(&u(1) + &c(1), u(2));
        let inv = a.invert().unwrap();
        assert!(a.mul_ref(&inv).is_one());
        assert!(Fraction::zero().invert().is_none());
    }

    #[test]
    fn test_short_circuit_to_canonical_zero() {
        let a = Fraction::new(u(1), &u(2) + &c(1));
        let z = a.scale(&q(0));
        assert_eq!(z, Fraction::zero());
        assert_eq!(a.mul_poly(&UPolynomial::zero()), Fraction::zero());
        assert_eq!(Fraction::zero().mul_ref(&a), Fraction::zero());
    }

    #[test]
    #[should_panic(expected = "denominator cannot be zero")]
    fn test_zero_denominator_panics() {
        let _ = Fraction::new(u(1), UPolynomial::zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Fraction::new(u(1), c(1)).to_string(), "u1");
        assert_eq!(
            Fraction::new(&u(1) + &c(1), u(2)).to_string(),
            "(u1 + 1)/u2"
        );
    }
}
