//! Quadratic equation `a·x² + b·x + c = 0`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Float;
use crate::equation::linear::LinearEquation;
use crate::error::{CoreError, Result};

/// Coefficients of `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticEquation<T: Float> {
    pub a: T,
    pub b: T,
    pub c: T,
}

/// Real roots of a quadratic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum QuadraticRoots<T: Float> {
    /// A single root: either a repeated root (zero discriminant) or the root
    /// of the degenerate linear equation when `a == 0`.
    Double(T),
    /// Two distinct roots `((-b + √D) / 2a, (-b - √D) / 2a)`.
    Distinct(T, T),
}

impl<T: Float> QuadraticRoots<T> {
    /// The roots as a vector, in the order they were computed.
    pub fn to_vec(&self) -> Vec<T> {
        match *self {
            Self::Double(x) => vec![x],
            Self::Distinct(x1, x2) => vec![x1, x2],
        }
    }
}

impl<T: Float> QuadraticEquation<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// `b² - 4ac`.
    pub fn discriminant(&self) -> T {
        self.b * self.b - T::from_f64(4.0) * self.a * self.c
    }

    /// Solve for the real roots.
    ///
    /// When `a == 0` the equation is solved as `b·x + c = 0` and any
    /// [`CoreError::NoSolution`] / [`CoreError::InfiniteSolutions`] from that
    /// is returned unchanged. Whether there is one root or two is decided by
    /// the sign of the discriminant, never by comparing computed roots.
    pub fn solve(&self) -> Result<QuadraticRoots<T>> {
        let Self { a, b, c } = *self;
        if a == T::zero() {
            debug!("quadratic: a == 0, solving {b}·x + {c} = 0");
            return LinearEquation::new(b, c).solve().map(QuadraticRoots::Double);
        }

        let d = self.discriminant();
        let two_a = T::from_f64(2.0) * a;
        if d < T::zero() {
            debug!("quadratic: discriminant {d} < 0");
            Err(CoreError::NoRealRoots)
        } else if d == T::zero() {
            Ok(QuadraticRoots::Double(-b / two_a))
        } else {
            let sqrt_d = d.sqrt();
            Ok(QuadraticRoots::Distinct(
                (-b + sqrt_d) / two_a,
                (-b - sqrt_d) / two_a,
            ))
        }
    }
}
