//! Algebraic variables.
//!
//! A construction is described with three kinds of symbols:
//!
//! - `u_i` parameters: independent degrees of freedom, never eliminated.
//!   `u_0` is reserved for the literal value zero.
//! - `x_i` dependent variables: coordinates determined by the parameters and
//!   earlier dependent variables; the targets of elimination.
//! - symbolic coordinates `x_A`, `y_A` of a named point, used by condition
//!   templates before they are bound to concrete variables.

use std::fmt;
use std::sync::Arc;

/// The coordinate axis of a symbolic point coordinate.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Axis {
    /// The x coordinate.
    X,
    /// The y coordinate.
    Y,
}

/// A variable of a polynomial.
///
/// The derived order compares the kind first (parameters, then dependent
/// variables, then symbolic coordinates) and then the index or label. Monomial
/// canonicalisation depends on this order being total.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Variable {
    /// An independent parameter `u_i`.
    Parameter(u32),
    /// A dependent variable `x_i`.
    Dependent(u32),
    /// A coordinate of a named point, not yet bound.
    Symbolic {
        /// The point label.
        point: Arc<str>,
        /// Which coordinate.
        axis: Axis,
    },
}

impl Variable {
    /// Creates the parameter `u_i`.
    #[must_use]
    pub const fn parameter(index: u32) -> Self {
        Variable::Parameter(index)
    }

    /// Creates the dependent variable `x_i`.
    #[must_use]
    pub const fn dependent(index: u32) -> Self {
        Variable::Dependent(index)
    }

    /// Creates a symbolic coordinate of `point`.
    #[must_use]
    pub fn symbolic(point: &str, axis: Axis) -> Self {
        Variable::Symbolic {
            point: Arc::from(point),
            axis,
        }
    }

    /// Returns true for `u_0`, which stands for the value zero.
    #[must_use]
    pub fn is_zero_literal(&self) -> bool {
        matches!(self, Variable::Parameter(0))
    }

    /// Returns true for parameters.
    #[must_use]
    pub fn is_parameter(&self) -> bool {
        matches!(self, Variable::Parameter(_))
    }

    /// Returns true for dependent variables.
    #[must_use]
    pub fn is_dependent(&self) -> bool {
        matches!(self, Variable::Dependent(_))
    }

    /// Returns true for symbolic coordinates.
    #[must_use]
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Variable::Symbolic { .. })
    }

    /// Returns the index of a parameter or dependent variable.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        match self {
            Variable::Parameter(i) | Variable::Dependent(i) => Some(*i),
            Variable::Symbolic { .. } => None,
        }
    }

    /// Returns the index if this is a dependent variable.
    #[must_use]
    pub fn dependent_index(&self) -> Option<u32> {
        match self {
            Variable::Dependent(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Parameter(i) => write!(f, "u{i}"),
            Variable::Dependent(i) => write!(f, "x{i}"),
            Variable::Symbolic { point, axis: Axis::X } => write!(f, "x_{point}"),
            Variable::Symbolic { point, axis: Axis::Y } => write!(f, "y_{point}"),
        }
    }
}
