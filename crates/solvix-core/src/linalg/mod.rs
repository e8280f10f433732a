//! Linear algebra operations on [`Matrix`].
//!
//! All routines are implemented from scratch and are pure: operands are
//! borrowed, results are new matrices, and every shape violation is reported
//! before any arithmetic runs.
//!
//! | Operation | Requirement | Algorithm |
//! |-----------|-------------|-----------|
//! | [`add`], [`subtract`] | equal shapes | element-wise |
//! | [`multiply`] | `cols(A) == rows(B)` | triple loop, `O(n^3)` |
//! | [`transpose`] | none | copy |
//! | [`determinant`] | square | cofactor expansion, `O(n!)` |
//! | [`inverse`] | square, `det != 0` | Gauss-Jordan with partial pivoting |

mod arith;
mod det;
mod inverse;

pub use arith::{add, multiply, subtract, transpose};
pub use det::{determinant, first_row_minor};
pub use inverse::{inverse, inverse_with_epsilon};

use crate::Float;
use crate::error::Result;
use crate::matrix::Matrix;

// ======================================================================
// Convenience methods on Matrix
// ======================================================================

impl<T: Float> Matrix<T> {
    /// Element-wise `self + other`.
    pub fn add_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        add(self, other)
    }

    /// Element-wise `self - other`.
    pub fn sub_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        subtract(self, other)
    }

    /// Matrix-matrix multiply: returns `self @ other`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        multiply(self, other)
    }

    /// The transposed matrix.
    pub fn transposed(&self) -> Matrix<T> {
        transpose(self)
    }

    /// Determinant by cofactor expansion.
    pub fn det(&self) -> Result<T> {
        determinant(self)
    }

    /// Inverse by Gauss-Jordan elimination (exact-zero singularity test).
    pub fn inv(&self) -> Result<Matrix<T>> {
        inverse(self)
    }
}
