//! Two linear equations in two unknowns, solved by Cramer's rule.
//!
//! ```text
//! a1·x + b1·y = c1
//! a2·x + b2·y = c2
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Float;
use crate::error::{CoreError, Result};

/// Coefficients of a 2x2 linear system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearSystem2x2<T: Float> {
    pub a1: T,
    pub b1: T,
    pub c1: T,
    pub a2: T,
    pub b2: T,
    pub c2: T,
}

/// The unique solution of a 2x2 system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2<T: Float> {
    pub x: T,
    pub y: T,
}

impl<T: Float> LinearSystem2x2<T> {
    pub fn new(a1: T, b1: T, c1: T, a2: T, b2: T, c2: T) -> Self {
        Self {
            a1,
            b1,
            c1,
            a2,
            b2,
            c2,
        }
    }

    /// Coefficient determinant `Δ = a1·b2 - a2·b1`.
    pub fn determinant(&self) -> T {
        self.a1 * self.b2 - self.a2 * self.b1
    }

    /// Degeneracy test `Δ₂ = a1·c2 - a2·c1`, only meaningful when `Δ == 0`.
    ///
    /// Zero means the two equations describe the same line.
    pub fn secondary_determinant(&self) -> T {
        self.a1 * self.c2 - self.a2 * self.c1
    }

    /// Solve by Cramer's rule.
    ///
    /// With `Δ == 0` the lines are parallel: coincident lines give
    /// [`CoreError::InfiniteSolutions`], distinct ones [`CoreError::NoSolution`].
    pub fn solve(&self) -> Result<Point2<T>> {
        let Self {
            a1,
            b1,
            c1,
            a2,
            b2,
            c2,
        } = *self;

        let delta = self.determinant();
        if delta == T::zero() {
            let delta2 = self.secondary_determinant();
            debug!("2x2 system: Δ == 0, Δ₂ = {delta2}");
            return if delta2 == T::zero() {
                Err(CoreError::InfiniteSolutions)
            } else {
                Err(CoreError::NoSolution)
            };
        }

        Ok(Point2 {
            x: (b2 * c1 - b1 * c2) / delta,
            y: (a1 * c2 - a2 * c1) / delta,
        })
    }
}
