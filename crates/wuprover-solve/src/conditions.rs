//! Symbolic templates for common geometric conditions.
//!
//! Each template is a polynomial over the symbolic coordinates of the named
//! points that vanishes exactly when the condition holds. Bind the points with
//! [`PointBindings`](crate::instantiate::PointBindings) to obtain hypothesis
//! or statement polynomials.

use wuprover_poly::{Axis, SymbolicPolynomial, Variable};
use wuprover_rings::Q;

fn x(point: &str) -> SymbolicPolynomial {
    SymbolicPolynomial::var(Variable::symbolic(point, Axis::X))
}

fn y(point: &str) -> SymbolicPolynomial {
    SymbolicPolynomial::var(Variable::symbolic(point, Axis::Y))
}

/// The vector `to - from` as a coordinate pair.
fn vector(from: &str, to: &str) -> (SymbolicPolynomial, SymbolicPolynomial) {
    (&x(to) - &x(from), &y(to) - &y(from))
}

/// `A`, `B`, `C` lie on one line.
#[must_use]
pub fn collinear(a: &str, b: &str, c: &str) -> SymbolicPolynomial {
    let (abx, aby) = vector(a, b);
    let (acx, acy) = vector(a, c);
    &(&abx * &acy) - &(&aby * &acx)
}

/// Line `AB` is parallel to line `CD`.
#[must_use]
pub fn parallel(a: &str, b: &str, c: &str, d: &str) -> SymbolicPolynomial {
    let (abx, aby) = vector(a, b);
    let (cdx, cdy) = vector(c, d);
    &(&abx * &cdy) - &(&aby * &cdx)
}

/// Line `AB` is perpendicular to line `CD`.
#[must_use]
pub fn perpendicular(a: &str, b: &str, c: &str, d: &str) -> SymbolicPolynomial {
    let (abx, aby) = vector(a, b);
    let (cdx, cdy) = vector(c, d);
    &(&abx * &cdx) + &(&aby * &cdy)
}

/// `|AB| = |CD|`.
#[must_use]
pub fn equal_distance(a: &str, b: &str, c: &str, d: &str) -> SymbolicPolynomial {
    let (abx, aby) = vector(a, b);
    let (cdx, cdy) = vector(c, d);
    let ab = &(&abx * &abx) + &(&aby * &aby);
    let cd = &(&cdx * &cdx) + &(&cdy * &cdy);
    &ab - &cd
}

/// `M` is the midpoint of `AB`; one polynomial per coordinate.
#[must_use]
pub fn midpoint(m: &str, a: &str, b: &str) -> [SymbolicPolynomial; 2] {
    let two = Q::from_integer(2);
    [
        &(&x(m).scale(&two) - &x(a)) - &x(b),
        &(&y(m).scale(&two) - &y(a)) - &y(b),
    ]
}
