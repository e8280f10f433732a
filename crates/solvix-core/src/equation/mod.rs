//! Closed-form equation solvers.
//!
//! | Equation | Type | Method |
//! |----------|------|--------|
//! | `a·x + b = 0` | [`LinearEquation`] | `x = -b / a` |
//! | `a·x² + b·x + c = 0` | [`QuadraticEquation`] | discriminant |
//! | 2x2 linear system | [`LinearSystem2x2`] | Cramer's rule |
//!
//! These do not go through [`Matrix`](crate::Matrix); the 2x2 system is
//! solved with its two determinants written out directly.

mod linear;
mod quadratic;
mod system;

pub use linear::LinearEquation;
pub use quadratic::{QuadraticEquation, QuadraticRoots};
pub use system::{LinearSystem2x2, Point2};

use crate::Float;
use crate::error::Result;

/// Solve `a·x + b = 0`.
///
/// ```
/// # use solvix_core::equation::solve_linear;
/// # use solvix_core::CoreError;
/// assert_eq!(solve_linear(2.0, -4.0), Ok(2.0));
/// assert_eq!(solve_linear(0.0, 5.0), Err(CoreError::NoSolution));
/// assert_eq!(solve_linear(0.0, 0.0), Err(CoreError::InfiniteSolutions));
/// ```
pub fn solve_linear<T: Float>(a: T, b: T) -> Result<T> {
    LinearEquation::new(a, b).solve()
}

/// Solve `a·x² + b·x + c = 0` over the reals.
///
/// ```
/// # use solvix_core::equation::{solve_quadratic, QuadraticRoots};
/// assert_eq!(solve_quadratic(1.0, -2.0, 1.0), Ok(QuadraticRoots::Double(1.0)));
/// ```
pub fn solve_quadratic<T: Float>(a: T, b: T, c: T) -> Result<QuadraticRoots<T>> {
    QuadraticEquation::new(a, b, c).solve()
}

/// Solve `a1·x + b1·y = c1`, `a2·x + b2·y = c2`.
///
/// ```
/// # use solvix_core::equation::{solve_linear_system_2x2, Point2};
/// let p = solve_linear_system_2x2(1.0, 1.0, 3.0, 2.0, -1.0, 0.0).unwrap();
/// assert_eq!(p, Point2 { x: 1.0, y: 2.0 });
/// ```
pub fn solve_linear_system_2x2<T: Float>(
    a1: T,
    b1: T,
    c1: T,
    a2: T,
    b2: T,
    c2: T,
) -> Result<Point2<T>> {
    LinearSystem2x2::new(a1, b1, c1, a2, b2, c2).solve()
}
