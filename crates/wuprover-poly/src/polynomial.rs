//! Sparse multivariate polynomials in canonical form.
//!
//! Terms are keyed by monomial in an ordered map, so like terms merge on
//! insertion and the leading term is always the greatest key.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use wuprover_rings::traits::{Field, Ring};

use crate::monomial::Monomial;
use crate::term::Term;
use crate::variable::Variable;

/// A sparse multivariate polynomial.
///
/// # Invariants
///
/// - no two stored terms share a monomial
/// - no stored coefficient is zero
/// - the zero polynomial has no terms
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<C> {
    terms: BTreeMap<Monomial, C>,
}

impl<C: Ring> Default for Polynomial<C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<C: Ring> Polynomial<C> {
    /// Creates a polynomial from terms, merging like terms.
    #[must_use]
    pub fn new(terms: impl IntoIterator<Item = Term<C>>) -> Self {
        let mut poly = Self::zero();
        for t in terms {
            poly.insert(t);
        }
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: BTreeMap::new(),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(C::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: C) -> Self {
        Self::from_term(Term::constant(c))
    }

    /// Creates a single-term polynomial.
    #[must_use]
    pub fn from_term(term: Term<C>) -> Self {
        let mut poly = Self::zero();
        poly.insert(term);
        poly
    }

    /// Creates the polynomial `variable`; `u_0` gives zero.
    #[must_use]
    pub fn var(variable: Variable) -> Self {
        Self::from_term(Term::var(variable, 1))
    }

    /// Inserts a term, merging it with an existing term of the same monomial.
    ///
    /// The entry is removed if the merged coefficient is zero.
    pub fn insert(&mut self, term: Term<C>) {
        let (coeff, monomial) = term.into_parts();
        if coeff.is_zero() {
            return;
        }
        match self.terms.entry(monomial) {
            Entry::Vacant(slot) => {
                slot.insert(coeff);
            }
            Entry::Occupied(mut slot) => {
                let merged = slot.get().clone() + coeff;
                if merged.is_zero() {
                    slot.remove();
                } else {
                    *slot.get_mut() = merged;
                }
            }
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the constant 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.terms.len() == 1
            && self
                .terms
                .iter()
                .next()
                .is_some_and(|(m, c)| m.is_one() && c.is_one())
    }

    /// Returns true if the polynomial has no variables (zero included).
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.keys().all(Monomial::is_one)
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over `(monomial, coefficient)` in descending monomial order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (&Monomial, &C)> + ExactSizeIterator {
        self.terms.iter().rev()
    }

    /// Returns the terms as owned values, in descending order.
    #[must_use]
    pub fn to_terms(&self) -> Vec<Term<C>> {
        self.terms()
            .map(|(m, c)| Term::new(c.clone(), m.clone()))
            .collect()
    }

    /// Returns the leading term (monomial, coefficient).
    #[must_use]
    pub fn leading_term(&self) -> Option<(&Monomial, &C)> {
        self.terms.iter().next_back()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&C> {
        self.leading_term().map(|(_, c)| c)
    }

    /// Returns the coefficient of the monomial 1.
    #[must_use]
    pub fn constant_coeff(&self) -> C {
        self.terms
            .get(&Monomial::one())
            .cloned()
            .unwrap_or_else(C::zero)
    }

    /// Returns the set of variables occurring in the polynomial.
    #[must_use]
    pub fn variables(&self) -> BTreeSet<Variable> {
        self.terms
            .keys()
            .flat_map(Monomial::variables)
            .cloned()
            .collect()
    }

    /// Returns true if `variable` occurs.
    #[must_use]
    pub fn contains(&self, variable: &Variable) -> bool {
        self.terms.keys().any(|m| m.contains(variable))
    }

    /// Returns the degree in `variable` (0 if absent or zero polynomial).
    #[must_use]
    pub fn degree_in(&self, variable: &Variable) -> u32 {
        self.terms
            .keys()
            .map(|m| m.degree_in(variable))
            .max()
            .unwrap_or(0)
    }

    /// Returns the degree in `variable` and the pure leading coefficient.
    ///
    /// The coefficient collects every term of maximal degree with the power
    /// of `variable` removed, so it no longer contains `variable`.
    #[must_use]
    pub fn leading_in(&self, variable: &Variable) -> (u32, Self) {
        let degree = self.degree_in(variable);
        let coeff = self
            .terms
            .iter()
            .filter(|(m, _)| m.degree_in(variable) == degree)
            .map(|(m, c)| Term::new(c.clone(), m.without(variable)))
            .collect::<Vec<_>>();
        (degree, Self::new(coeff))
    }

    /// Returns the degree `e` in `variable` and the leading coefficient
    /// multiplied by `variable^(e - shift)` when `e > shift`.
    ///
    /// This is the reduction step of pseudo-division: with `shift` the degree
    /// of the divisor, the returned coefficient times the divisor has the
    /// same leading power of `variable` as `self`.
    #[must_use]
    pub fn leading_in_shifted(&self, variable: &Variable, shift: u32) -> (u32, Self) {
        let (degree, coeff) = self.leading_in(variable);
        if degree > shift {
            let m = Monomial::var(variable.clone(), degree - shift);
            (degree, coeff.mul_monomial(&m, &C::one()))
        } else {
            (degree, coeff)
        }
    }

    /// Computes the GCD of all monomials (1 for the zero polynomial).
    #[must_use]
    pub fn monomial_content(&self) -> Monomial {
        let mut keys = self.terms.keys();
        let Some(first) = keys.next() else {
            return Monomial::one();
        };
        let mut g = first.clone();
        for m in keys {
            if g.is_one() {
                break;
            }
            g = g.gcd(m);
        }
        g
    }

    /// Divides every monomial by `m`.
    ///
    /// Returns `None` if some monomial is not divisible.
    #[must_use]
    pub fn div_monomial(&self, m: &Monomial) -> Option<Self> {
        if m.is_one() {
            return Some(self.clone());
        }
        let terms = self
            .terms
            .iter()
            .map(|(k, c)| k.div(m).map(|q| (q, c.clone())))
            .collect::<Option<BTreeMap<_, _>>>()?;
        Some(Self { terms })
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (mut acc, rest) = if self.len() >= other.len() {
            (self.clone(), other)
        } else {
            (other.clone(), self)
        };
        for (m, c) in &rest.terms {
            acc.insert(Term::new(c.clone(), m.clone()));
        }
        acc
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), -c.clone()))
                .collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut acc = self.clone();
        for (m, c) in &other.terms {
            acc.insert(Term::new(-c.clone(), m.clone()));
        }
        acc
    }

    /// Multiplies two polynomials by full distribution.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut acc = Self::zero();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                acc.insert(Term::new(c1.clone() * c2.clone(), m1.mul(m2)));
            }
        }
        acc
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &C) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        if c.is_one() {
            return self.clone();
        }
        Self::new(
            self.terms
                .iter()
                .map(|(m, x)| Term::new(x.clone() * c.clone(), m.clone())),
        )
    }

    /// Multiplies by the term `c * m`.
    #[must_use]
    pub fn mul_monomial(&self, m: &Monomial, c: &C) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(
            self.terms
                .iter()
                .map(|(m2, c2)| Term::new(c2.clone() * c.clone(), m.mul(m2))),
        )
    }
}

impl<C: Field> Polynomial<C> {
    /// Divides every coefficient by the leading coefficient.
    ///
    /// The zero polynomial is returned unchanged.
    #[must_use]
    pub fn make_monic(&self) -> Self {
        match self.leading_coeff().and_then(Field::inv) {
            Some(inv) => self.scale(&inv),
            None => self.clone(),
        }
    }

    /// Divides by a term, if every term is evenly divisible.
    #[must_use]
    pub fn div_term(&self, term: &Term<C>) -> Option<Self> {
        let inv = term.coeff().inv()?;
        let divided = self.div_monomial(term.monomial())?;
        Some(divided.scale(&inv))
    }
}

impl<C: Ring> From<Term<C>> for Polynomial<C> {
    fn from(term: Term<C>) -> Self {
        Self::from_term(term)
    }
}

impl<C: Ring> FromIterator<Term<C>> for Polynomial<C> {
    fn from_iter<I: IntoIterator<Item = Term<C>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<C: Ring> Add for &Polynomial<C> {
    type Output = Polynomial<C>;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl<C: Ring> Sub for &Polynomial<C> {
    type Output = Polynomial<C>;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl<C: Ring> Mul for &Polynomial<C> {
    type Output = Polynomial<C>;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl<C: Ring> Neg for &Polynomial<C> {
    type Output = Polynomial<C>;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl<C: Ring + fmt::Display> fmt::Display for Polynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (m, c) in self.terms() {
            let text = Term::new(c.clone(), m.clone()).to_string();
            if first {
                write!(f, "{text}")?;
                first = false;
            } else if let Some(rest) = text.strip_prefix('-') {
                write!(f, " - {rest}")?;
            } else {
                write!(f, " + {text}")?;
            }
        }
        Ok(())
    }
}
