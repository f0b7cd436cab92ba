//! # wuprover-rings
//!
//! Coefficient domains for the wuprover polynomial engine.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - Exact rational numbers `Q` backed by `dashu`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```
//!
//! Parameter polynomials use `Q` coefficients. Dependent-variable
//! polynomials use fractions of parameter polynomials, which implement the
//! same traits in `wuprover-poly`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod traits;

pub use rationals::Q;
pub use traits::{Field, Ring};
