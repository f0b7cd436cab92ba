//! # wuprover-solve
//!
//! Wu's method on top of [`wuprover_poly`].
//!
//! This crate provides:
//! - Multivariate pseudo-division under space and time budgets
//! - Triangulation of hypothesis systems into a characteristic set
//! - Non-degeneracy (NDG) conditions from the pivots' leading coefficients
//! - [`Theorem`] and [`WuProver`], which decide whether a statement follows
//!   from the hypotheses
//! - Symbolic condition templates and their instantiation on concrete
//!   variables
//!
//! # Example
//!
//! ```
//! use wuprover_poly::XPolynomial;
//! use wuprover_solve::{PolynomialSystem, ProverContext, Theorem, Verdict, WuProver};
//!
//! // x1 = u1, x2 = x1  =>  x2 = u1
//! let x1 = XPolynomial::dependent(1);
//! let x2 = XPolynomial::dependent(2);
//! let u1 = XPolynomial::parameter(1);
//! let hypotheses = PolynomialSystem::from_polys(vec![&x1 - &u1, &x2 - &x1]);
//! let mut theorem = Theorem::new(hypotheses, &x2 - &u1);
//!
//! let outcome = WuProver::new().prove(&mut theorem, &mut ProverContext::default());
//! assert_eq!(outcome.verdict, Verdict::True);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod conditions;
pub mod context;
pub mod error;
pub mod instantiate;
pub mod ndg;
pub mod prover;
pub mod pseudo;
pub mod system;
pub mod theorem;
pub mod var_set;

#[cfg(test)]
mod proptests;

pub use context::{ContextStats, ProverConfig, ProverContext};
pub use error::{InstantiationError, ProverStatus, TriangulationError};
pub use instantiate::PointBindings;
pub use ndg::{matches_ndg_catalog_entry, NdgFactors};
pub use prover::{ProofOutcome, Verdict, WuProver};
pub use pseudo::pseudo_remainder;
pub use system::PolynomialSystem;
pub use theorem::Theorem;
