//! Linear equation `a·x + b = 0`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Float;
use crate::error::{CoreError, Result};

/// Coefficients of `a·x + b = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearEquation<T: Float> {
    pub a: T,
    pub b: T,
}

impl<T: Float> LinearEquation<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// The unique root `x = -b / a`.
    ///
    /// With `a == 0` the equation degenerates to `b = 0`, which is either
    /// always true ([`CoreError::InfiniteSolutions`]) or never true
    /// ([`CoreError::NoSolution`]).
    pub fn solve(&self) -> Result<T> {
        let Self { a, b } = *self;
        if a != T::zero() {
            return Ok(-b / a);
        }
        if b == T::zero() {
            debug!("linear: 0·x + 0 = 0 holds for every x");
            Err(CoreError::InfiniteSolutions)
        } else {
            debug!("linear: 0·x + {b} = 0 has no solution");
            Err(CoreError::NoSolution)
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_root() {
        assert_eq!(LinearEquation::new(2.0, -4.0).solve().unwrap(), 2.0);
        assert_eq!(LinearEquation::new(-0.5, 1.0).solve().unwrap(), 2.0);
    }

    #[test]
    fn test_zero_root_when_b_is_zero() {
        assert_eq!(LinearEquation::new(3.0, 0.0).solve().unwrap(), 0.0);
    }

    #[test]
    fn test_no_solution() {
        assert_eq!(LinearEquation::new(0.0, 5.0).solve(), Err(CoreError::NoSolution));
    }

    #[test]
    fn test_infinite_solutions() {
        assert_eq!(
            LinearEquation::new(0.0, 0.0).solve(),
            Err(CoreError::InfiniteSolutions)
        );
    }

    #[test]
    fn test_nan_propagates() {
        let x = LinearEquation::new(f64::NAN, 1.0).solve().unwrap();
        assert!(x.is_nan());
    }
}
