//! # wuprover-poly
//!
//! Canonical polynomial arithmetic for the wuprover engine.
//!
//! This crate provides:
//! - Variables (`u` parameters, `x` dependent coordinates, symbolic point
//!   coordinates) and their powers
//! - Monomials kept in canonical (descending variable) order
//! - Sparse polynomials generic over the coefficient ring, with automatic
//!   merging of like terms
//! - Fractions of parameter polynomials, the coefficient domain of
//!   dependent-variable polynomials
//!
//! ## Flavors
//!
//! | alias                | coefficients | variables            |
//! |----------------------|--------------|----------------------|
//! | `UPolynomial`        | `Q`          | parameters           |
//! | `XPolynomial`        | `Fraction`   | dependent            |
//! | `SymbolicPolynomial` | `Q`          | symbolic coordinates |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fraction;
pub mod monomial;
pub mod polynomial;
pub mod power;
pub mod term;
pub mod variable;
pub mod xpoly;

#[cfg(test)]
mod proptests;

pub use fraction::Fraction;
pub use monomial::Monomial;
pub use polynomial::Polynomial;
pub use power::Power;
pub use term::Term;
pub use variable::{Axis, Variable};

use wuprover_rings::Q;

/// A polynomial over the independent parameters.
pub type UPolynomial = Polynomial<Q>;

/// A term over the independent parameters.
pub type UTerm = Term<Q>;

/// A polynomial over dependent variables with parameter-fraction coefficients.
pub type XPolynomial = Polynomial<Fraction>;

/// A term over dependent variables with a parameter-fraction coefficient.
pub type XTerm = Term<Fraction>;

/// A polynomial over symbolic point coordinates, before instantiation.
pub type SymbolicPolynomial = Polynomial<Q>;
