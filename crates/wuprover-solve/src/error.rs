//! Error and status types.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use wuprover_poly::Variable;

/// Errors that abort a triangulation.
///
/// A failed triangulation leaves no partial result behind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// The system violates the validity invariant.
    #[error("malformed system: {0}")]
    MalformedSystem(String),

    /// A dependent variable vanished during elimination.
    #[error("no polynomial contains x{0}")]
    MissingVariable(u32),

    /// An internal consistency check failed.
    #[error("internal error: {0}")]
    Internal(&'static str),

    /// A polynomial grew past the term budget.
    #[error("space limit exceeded: {terms} terms (limit {limit})")]
    SpaceLimitExceeded {
        /// Term count of the offending polynomial.
        terms: usize,
        /// Configured term budget.
        limit: usize,
    },

    /// The armed deadline passed.
    #[error("time limit of {limit:?} exceeded")]
    TimeLimitExceeded {
        /// Configured time budget.
        limit: Duration,
    },

    /// Two polynomials reduced to zero against each other.
    #[error("polynomials share a common factor in x{variable}")]
    CommonFactor {
        /// Index of the dependent variable being eliminated.
        variable: u32,
    },
}

impl TriangulationError {
    /// Returns the status code reported for this error.
    #[must_use]
    pub fn status(&self) -> ProverStatus {
        match self {
            Self::MalformedSystem(_) | Self::MissingVariable(_) => ProverStatus::MalformedSystem,
            Self::Internal(_) => ProverStatus::Internal,
            Self::SpaceLimitExceeded { .. } => ProverStatus::SpaceLimitExceeded,
            Self::TimeLimitExceeded { .. } => ProverStatus::TimeLimitExceeded,
            Self::CommonFactor { .. } => ProverStatus::CommonFactor,
        }
    }
}

/// Outcome status of a triangulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProverStatus {
    /// The system was triangulated.
    Success,
    /// The system failed validation or lacks a variable.
    MalformedSystem,
    /// An internal consistency check failed.
    Internal,
    /// The term budget was exhausted.
    SpaceLimitExceeded,
    /// The deadline passed.
    TimeLimitExceeded,
    /// Two polynomials had a common factor in the eliminated variable.
    CommonFactor,
}

impl ProverStatus {
    /// Returns the numeric status code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::MalformedSystem => 1,
            Self::Internal => 2,
            Self::SpaceLimitExceeded => 3,
            Self::TimeLimitExceeded => 4,
            Self::CommonFactor => 5,
        }
    }

    /// Returns true for [`ProverStatus::Success`].
    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for ProverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::MalformedSystem => "malformed system",
            Self::Internal => "internal error",
            Self::SpaceLimitExceeded => "space limit exceeded",
            Self::TimeLimitExceeded => "time limit exceeded",
            Self::CommonFactor => "common factor",
        };
        write!(f, "{s}")
    }
}

impl<T> From<&Result<T, TriangulationError>> for ProverStatus {
    fn from(result: &Result<T, TriangulationError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(e) => e.status(),
        }
    }
}

/// Errors raised while instantiating symbolic polynomials.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InstantiationError {
    /// A symbolic coordinate names a point without a binding.
    #[error("point {0} has no coordinate binding")]
    UnboundPoint(String),

    /// A binding or term holds a variable that cannot be instantiated.
    #[error("unexpected variable {0} in symbolic polynomial")]
    UnexpectedVariable(Variable),
}
