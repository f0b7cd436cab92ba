//! Monomials: canonical products of variable powers.
//!
//! A monomial stores at most one power per variable, sorted by descending
//! variable, with no zero exponents. Two algebraically equal monomials are
//! therefore structurally equal, which lets polynomials use them as keys.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::power::Power;
use crate::variable::Variable;

/// A product of powers in canonical form.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial(SmallVec<[Power; 4]>);

impl Monomial {
    /// Creates the monomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self(SmallVec::new())
    }

    /// Creates `variable^exponent`.
    #[must_use]
    pub fn var(variable: Variable, exponent: u32) -> Self {
        if exponent == 0 {
            return Self::one();
        }
        let mut powers = SmallVec::new();
        powers.push(Power::new(variable, exponent));
        Self(powers)
    }

    /// Creates a monomial from arbitrary powers.
    ///
    /// Powers are sorted, powers of the same variable are multiplied and
    /// zero exponents are dropped.
    #[must_use]
    pub fn from_powers(powers: impl IntoIterator<Item = Power>) -> Self {
        let mut sorted: SmallVec<[Power; 4]> = powers.into_iter().collect();
        sorted.sort_by(|a, b| b.variable().cmp(a.variable()));

        let mut merged: SmallVec<[Power; 4]> = SmallVec::with_capacity(sorted.len());
        for p in sorted {
            match merged.last_mut() {
                Some(last) if last.variable() == p.variable() => {
                    *last = Power::new(p.variable().clone(), last.exponent() + p.exponent());
                }
                _ => merged.push(p),
            }
        }
        merged.retain(|p| p.exponent() > 0);

        Self(merged)
    }

    /// Returns the powers in descending variable order.
    #[must_use]
    pub fn powers(&self) -> &[Power] {
        &self.0
    }

    /// Returns true for the monomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the exponent of `variable` (0 if absent).
    #[must_use]
    pub fn degree_in(&self, variable: &Variable) -> u32 {
        self.0
            .iter()
            .find(|p| p.variable() == variable)
            .map_or(0, Power::exponent)
    }

    /// Returns true if `variable` occurs.
    #[must_use]
    pub fn contains(&self, variable: &Variable) -> bool {
        self.0.iter().any(|p| p.variable() == variable)
    }

    /// Returns the highest variable, if any.
    #[must_use]
    pub fn highest_variable(&self) -> Option<&Variable> {
        self.0.first().map(Power::variable)
    }

    /// Iterates over the variables in descending order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.0.iter().map(Power::variable)
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().map(Power::exponent).sum()
    }

    /// Removes `variable` from the monomial.
    #[must_use]
    pub fn without(&self, variable: &Variable) -> Self {
        Self(self.0.iter().filter(|p| p.variable() != variable).cloned().collect())
    }

    /// Multiplies two monomials (adds exponents).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut out: SmallVec<[Power; 4]> = SmallVec::with_capacity(self.0.len() + other.0.len());
        let (mut i, mut j) = (0, 0);

        while i < self.0.len() && j < other.0.len() {
            let (a, b) = (&self.0[i], &other.0[j]);
            match a.variable().cmp(b.variable()) {
                Ordering::Greater => {
                    out.push(a.clone());
                    i += 1;
                }
                Ordering::Less => {
                    out.push(b.clone());
                    j += 1;
                }
                Ordering::Equal => {
                    out.push(Power::new(a.variable().clone(), a.exponent() + b.exponent()));
                    i += 1;
                    j += 1;
                }
            }
        }
        out.extend(self.0[i..].iter().cloned());
        out.extend(other.0[j..].iter().cloned());

        Self(out)
    }

    /// Divides by another monomial if possible.
    ///
    /// Returns `Some(quotient)` if self is divisible by other.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        let mut out: SmallVec<[Power; 4]> = SmallVec::with_capacity(self.0.len());
        let mut divisor = other.0.iter().peekable();

        for p in &self.0 {
            match divisor.peek() {
                Some(d) if d.variable() == p.variable() => {
                    let q = p.div(d)?;
                    if q.exponent() > 0 {
                        out.push(q);
                    }
                    divisor.next();
                }
                Some(d) if d.variable() > p.variable() => return None,
                _ => out.push(p.clone()),
            }
        }

        if divisor.next().is_some() {
            return None;
        }
        Some(Self(out))
    }

    /// Returns true if self divides other.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        other.div(self).is_some()
    }

    /// Computes the greatest common divisor of two monomials.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let out = self
            .0
            .iter()
            .filter_map(|p| {
                let e = p.exponent().min(other.degree_in(p.variable()));
                (e > 0).then(|| Power::new(p.variable().clone(), e))
            })
            .collect();
        Self(out)
    }
}

impl Ord for Monomial {
    /// Lexicographic order with the higher variable dominating.
    ///
    /// Powers are compared pairwise from the highest variable down: a higher
    /// variable beats a lower one, then a larger exponent wins; if one
    /// monomial runs out first it is the smaller.
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            match a.variable().cmp(b.variable()) {
                Ordering::Equal => {}
                ord => return ord,
            }
            match a.exponent().cmp(&b.exponent()) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "1");
        }
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("*"))
    }
}
