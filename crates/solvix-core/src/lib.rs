//! `solvix-core` — numeric kernel behind the solvix calculator.
//!
//! Provides a dense [`Matrix`] type with arithmetic, determinant and
//! inversion ([`linalg`]), closed-form equation solvers ([`equation`]), and a
//! small dispatch layer ([`ops`]) that front ends drive by operation name.
//!
//! # Design
//!
//! - Every operation is a pure function of its inputs. Nothing is cached and
//!   no state is shared between calls.
//! - Failures are values: each call returns `Ok(payload)` or one of the
//!   [`CoreError`] variants, never a sentinel and never a partial result.
//! - Generic over numeric types via the [`Scalar`] / [`Float`] traits;
//!   `f64` is the reference precision.
//! - Logging goes through the [`log`] facade; the crate never installs a
//!   logger.

pub mod config;
pub mod dtype;
pub mod equation;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod ops;

// Re-export key types at crate root for convenience.
pub use config::{ConfigError, KernelConfig};
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use matrix::Matrix;
pub use ops::{Equation, Evaluation, Kernel, MatrixOp, Solution};

/// Items intended for glob-import: `use solvix_core::prelude::*;`
pub mod prelude {
    pub use crate::config::KernelConfig;
    pub use crate::dtype::{Float, Scalar};
    pub use crate::equation::{
        LinearEquation, LinearSystem2x2, Point2, QuadraticEquation, QuadraticRoots,
        solve_linear, solve_linear_system_2x2, solve_quadratic,
    };
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{add, determinant, inverse, multiply, subtract, transpose};
    pub use crate::matrix::Matrix;
    pub use crate::ops::{Equation, Evaluation, Kernel, MatrixOp, Solution};
}
