//! Element-wise arithmetic, matrix product and transpose.

use log::trace;

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Element-wise sum `A + B`.
///
/// Both operands must have identical shape.
///
/// ```
/// # use solvix_core::Matrix;
/// # use solvix_core::linalg::add;
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![10.0, 20.0], vec![30.0, 40.0]]).unwrap();
/// assert_eq!(add(&a, &b).unwrap().as_slice(), &[11.0, 22.0, 33.0, 44.0]);
/// ```
pub fn add<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    a.zip_map(b, |x, y| x + y)
}

/// Element-wise difference `A - B`.
///
/// Both operands must have identical shape.
pub fn subtract<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    a.zip_map(b, |x, y| x - y)
}

/// Matrix product `A @ B`.
///
/// Requires `cols(A) == rows(B)`; the result is `rows(A) x cols(B)`. Each
/// entry is accumulated over `k = 0..cols(A)` in index order.
///
/// ```
/// # use solvix_core::Matrix;
/// # use solvix_core::linalg::multiply;
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
/// assert_eq!(multiply(&a, &b).unwrap().as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let (m, k) = a.shape();
    let n = b.cols;

    if b.rows != k {
        return Err(CoreError::DimensionMismatch {
            expected: vec![k, n],
            got: vec![b.rows, b.cols],
        });
    }
    trace!("multiply {m}x{k} by {k}x{n}");

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let mut c_data = vec![T::zero(); m * n];

    // ijk loop order (row-major friendly for A and C)
    for i in 0..m {
        let a_row = i * k;
        for j in 0..n {
            let mut sum = T::zero();
            for p in 0..k {
                sum += a_data[a_row + p] * b_data[p * n + j];
            }
            c_data[i * n + j] = sum;
        }
    }

    Matrix::from_vec(c_data, m, n)
}

/// Transpose: `result[j][i] = A[i][j]`.
///
/// Always succeeds; the result has shape `(cols(A), rows(A))`.
pub fn transpose<T: Float>(a: &Matrix<T>) -> Matrix<T> {
    let (rows, cols) = a.shape();
    let src = a.as_slice();
    let mut data = Vec::with_capacity(src.len());
    for j in 0..cols {
        for i in 0..rows {
            data.push(src[i * cols + j]);
        }
    }
    Matrix {
        data,
        rows: cols,
        cols: rows,
    }
}

impl<T: Float> Matrix<T> {
    /// Multiply every element by `k`.
    pub fn scale(&self, k: T) -> Matrix<T> {
        self.map(|x| x * k)
    }

    /// Sum of the main diagonal. The matrix must be square.
    pub fn trace(&self) -> Result<T> {
        if !self.is_square() {
            return Err(CoreError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((0..self.rows).map(|i| self.data[i * self.cols + i]).sum())
    }
}
