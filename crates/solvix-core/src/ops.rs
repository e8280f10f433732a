//! Operation dispatch for calculator front ends.
//!
//! A front end picks an operation by name and hands over one or two parsed
//! grids, or a set of equation coefficients. [`Kernel`] applies it under a
//! [`KernelConfig`] and returns either a payload or a [`CoreError`].

use core::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Float;
use crate::config::KernelConfig;
use crate::equation::{LinearEquation, LinearSystem2x2, Point2, QuadraticEquation, QuadraticRoots};
use crate::error::{CoreError, Result};
use crate::linalg;
use crate::matrix::Matrix;

/// A matrix operation selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixOp {
    Transpose,
    Inverse,
    Determinant,
    Add,
    Subtract,
    Multiply,
}

impl MatrixOp {
    /// Number of matrix operands the operation takes.
    pub fn arity(self) -> usize {
        match self {
            MatrixOp::Transpose | MatrixOp::Inverse | MatrixOp::Determinant => 1,
            MatrixOp::Add | MatrixOp::Subtract | MatrixOp::Multiply => 2,
        }
    }
}

impl fmt::Display for MatrixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatrixOp::Transpose => "transpose",
            MatrixOp::Inverse => "inverse",
            MatrixOp::Determinant => "determinant",
            MatrixOp::Add => "add",
            MatrixOp::Subtract => "subtract",
            MatrixOp::Multiply => "multiply",
        };
        f.write_str(name)
    }
}

impl FromStr for MatrixOp {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "transpose" => Ok(MatrixOp::Transpose),
            "inverse" | "inv" => Ok(MatrixOp::Inverse),
            "determinant" | "det" => Ok(MatrixOp::Determinant),
            "add" => Ok(MatrixOp::Add),
            "subtract" | "sub" => Ok(MatrixOp::Subtract),
            "multiply" | "mul" => Ok(MatrixOp::Multiply),
            _ => Err(CoreError::InvalidArgument {
                reason: "unknown matrix operation",
            }),
        }
    }
}

/// Result payload of a [`MatrixOp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Evaluation<T: Float> {
    Matrix(Matrix<T>),
    /// A determinant.
    Scalar(T),
}

impl<T: Float> Evaluation<T> {
    pub fn into_matrix(self) -> Option<Matrix<T>> {
        match self {
            Evaluation::Matrix(m) => Some(m),
            Evaluation::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<T> {
        match *self {
            Evaluation::Scalar(x) => Some(x),
            Evaluation::Matrix(_) => None,
        }
    }
}

/// Any equation the solver understands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Equation<T: Float> {
    Linear(LinearEquation<T>),
    Quadratic(QuadraticEquation<T>),
    System(LinearSystem2x2<T>),
}

/// Result payload of an [`Equation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Solution<T: Float> {
    Root(T),
    Roots(QuadraticRoots<T>),
    Point(Point2<T>),
}

impl<T: Float> Equation<T> {
    pub fn solve(&self) -> Result<Solution<T>> {
        match self {
            Equation::Linear(eq) => eq.solve().map(Solution::Root),
            Equation::Quadratic(eq) => eq.solve().map(Solution::Roots),
            Equation::System(sys) => sys.solve().map(Solution::Point),
        }
    }
}

/// Applies operations under a fixed configuration.
///
/// Holds no state besides the configuration; one instance can serve every
/// request from every thread.
#[derive(Debug, Clone, Default)]
pub struct Kernel {
    config: KernelConfig,
}

impl Kernel {
    pub fn new(config: KernelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Apply a single-operand operation.
    pub fn apply_unary<T: Float>(&self, op: MatrixOp, a: &Matrix<T>) -> Result<Evaluation<T>> {
        debug!("apply {op} to {}x{}", a.rows(), a.cols());
        match op {
            MatrixOp::Transpose => Ok(Evaluation::Matrix(linalg::transpose(a))),
            MatrixOp::Determinant => {
                self.check_order(a)?;
                linalg::determinant(a).map(Evaluation::Scalar)
            }
            MatrixOp::Inverse => {
                self.check_order(a)?;
                let eps = T::from_f64(self.config.singular_epsilon);
                linalg::inverse_with_epsilon(a, eps).map(Evaluation::Matrix)
            }
            MatrixOp::Add | MatrixOp::Subtract | MatrixOp::Multiply => {
                Err(CoreError::InvalidArgument {
                    reason: "operation takes two matrices",
                })
            }
        }
    }

    /// Apply a two-operand operation.
    pub fn apply_binary<T: Float>(
        &self,
        op: MatrixOp,
        a: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<Evaluation<T>> {
        debug!(
            "apply {op} to {}x{} and {}x{}",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        );
        let out = match op {
            MatrixOp::Add => linalg::add(a, b)?,
            MatrixOp::Subtract => linalg::subtract(a, b)?,
            MatrixOp::Multiply => linalg::multiply(a, b)?,
            MatrixOp::Transpose | MatrixOp::Inverse | MatrixOp::Determinant => {
                return Err(CoreError::InvalidArgument {
                    reason: "operation takes one matrix",
                });
            }
        };
        Ok(Evaluation::Matrix(out))
    }

    /// Apply `op` to a slice of operands whose length must match its arity.
    pub fn evaluate<T: Float>(
        &self,
        op: MatrixOp,
        operands: &[Matrix<T>],
    ) -> Result<Evaluation<T>> {
        match operands {
            [a] if op.arity() == 1 => self.apply_unary(op, a),
            [a, b] if op.arity() == 2 => self.apply_binary(op, a, b),
            _ => Err(CoreError::InvalidArgument {
                reason: "operand count does not match operation",
            }),
        }
    }

    pub fn solve<T: Float>(&self, equation: &Equation<T>) -> Result<Solution<T>> {
        equation.solve()
    }

    /// Square shape first, then the order ceiling.
    fn check_order<T: Float>(&self, a: &Matrix<T>) -> Result<()> {
        if !a.is_square() {
            return Err(CoreError::NotSquare {
                rows: a.rows(),
                cols: a.cols(),
            });
        }
        let dim = a.rows();
        if dim > self.config.max_dimension {
            return Err(CoreError::TooLarge {
                dim,
                max: self.config.max_dimension,
            });
        }
        Ok(())
    }
}
