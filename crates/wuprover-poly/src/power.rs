//! Powers of a single variable.

use std::fmt;

use crate::variable::Variable;

/// A variable raised to a positive exponent.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Power {
    variable: Variable,
    exponent: u32,
}

impl Power {
    /// Creates `variable^exponent`.
    #[must_use]
    pub fn new(variable: Variable, exponent: u32) -> Self {
        Self { variable, exponent }
    }

    /// Returns the variable.
    #[must_use]
    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Multiplies two powers of the same variable (adds exponents).
    ///
    /// Returns `None` if the variables differ.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Option<Self> {
        (self.variable == other.variable)
            .then(|| Self::new(self.variable.clone(), self.exponent + other.exponent))
    }

    /// Divides by a power of the same variable (subtracts exponents).
    ///
    /// Returns `None` if the variables differ or the exponent would become
    /// negative. A zero exponent is returned as-is; monomials drop it.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        if self.variable != other.variable {
            return None;
        }
        self.exponent
            .checked_sub(other.exponent)
            .map(|e| Self::new(self.variable.clone(), e))
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponent == 1 {
            write!(f, "{}", self.variable)
        } else {
            write!(f, "{}^{}", self.variable, self.exponent)
        }
    }
}
