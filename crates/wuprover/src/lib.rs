//! # wuprover
//!
//! Geometric theorem proving by Wu's method.
//!
//! A construction is translated into polynomials: free coordinates become
//! parameters `u_i`, constrained coordinates become dependent variables
//! `x_i`. The hypotheses are triangulated into a characteristic set, the
//! statement is pseudo-divided by it, and a zero remainder proves the
//! statement under the non-degeneracy conditions read off the pivots.
//!
//! ## Features
//!
//! - **Exact arithmetic**: rational coefficients, fractions of parameter
//!   polynomials as the coefficient domain
//! - **Canonical polynomials**: sparse, ordered, like terms always merged
//! - **Triangulation**: fast reordering path and full pseudo-reduction with
//!   space and time budgets
//! - **NDG conditions**: factored into single-variable and residual parts
//!
//! ## Quick Start
//!
//! ```rust
//! use wuprover::prelude::*;
//! use wuprover::solve::conditions::{midpoint, parallel};
//!
//! // A(0,0), B(u1,0), C(u2,u3); M, N are the midpoints of AB and AC
//! let points = PointBindings::new()
//!     .with("A", Variable::parameter(0), Variable::parameter(0))
//!     .with("B", Variable::parameter(1), Variable::parameter(0))
//!     .with("C", Variable::parameter(2), Variable::parameter(3))
//!     .with("M", Variable::dependent(1), Variable::dependent(2))
//!     .with("N", Variable::dependent(3), Variable::dependent(4));
//!
//! let mut hypotheses = PolynomialSystem::new();
//! for p in midpoint("M", "A", "B").iter().chain(&midpoint("N", "A", "C")) {
//!     hypotheses.push(points.instantiate(p).unwrap());
//! }
//! let statement = points.instantiate(&parallel("M", "N", "B", "C")).unwrap();
//!
//! let mut theorem = Theorem::new(hypotheses, statement);
//! let outcome = WuProver::new().prove(&mut theorem, &mut ProverContext::default());
//! assert_eq!(outcome.verdict, Verdict::True);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use wuprover_poly as poly;
pub use wuprover_rings as rings;
pub use wuprover_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use wuprover_poly::{
        Axis, Fraction, Monomial, Polynomial, SymbolicPolynomial, Term, UPolynomial, Variable,
        XPolynomial,
    };
    pub use wuprover_rings::{Field, Ring, Q};
    pub use wuprover_solve::{
        PointBindings, PolynomialSystem, ProofOutcome, ProverConfig, ProverContext,
        ProverStatus, Theorem, TriangulationError, Verdict, WuProver,
    };
}
