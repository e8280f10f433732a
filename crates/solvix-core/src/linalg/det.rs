//! Determinant by cofactor (Laplace) expansion along the first row.
//!
//! The recursion visits every minor, so the cost grows as `O(n!)`. That is
//! fine for the small grids a calculator accepts (up to 4x4 in practice) but
//! is a hard scaling limit; [`Kernel`](crate::ops::Kernel) applies a
//! configurable order ceiling before calling in here.

use log::trace;

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Compute the determinant of a square matrix.
///
/// ```
/// # use solvix_core::Matrix;
/// # use solvix_core::linalg::determinant;
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(determinant(&a).unwrap(), -2.0);
/// ```
pub fn determinant<T: Float>(a: &Matrix<T>) -> Result<T> {
    if !a.is_square() {
        return Err(CoreError::NotSquare {
            rows: a.rows,
            cols: a.cols,
        });
    }
    trace!("determinant of {n}x{n}", n = a.rows);
    Ok(cofactor_det(a.as_slice(), a.rows))
}

/// Recursive expansion over a packed `n x n` row-major buffer.
fn cofactor_det<T: Float>(data: &[T], n: usize) -> T {
    if n == 1 {
        return data[0];
    }

    let mut det = T::zero();
    let mut minor = vec![T::zero(); (n - 1) * (n - 1)];
    for j in 0..n {
        fill_minor(data, n, j, &mut minor);
        let term = data[j] * cofactor_det(&minor, n - 1);
        if j % 2 == 0 {
            det += term;
        } else {
            det -= term;
        }
    }
    det
}

/// Write the minor obtained by deleting row 0 and column `skip` into `out`.
fn fill_minor<T: Float>(data: &[T], n: usize, skip: usize, out: &mut [T]) {
    let mut idx = 0;
    for i in 1..n {
        for k in (0..n).filter(|&k| k != skip) {
            out[idx] = data[i * n + k];
            idx += 1;
        }
    }
}

/// The minor of `a` with row 0 and column `col` removed.
///
/// Returns [`CoreError::InvalidShape`] for a 1x1 input (its minor would be
/// empty) and [`CoreError::IndexOutOfBounds`] for a bad column.
pub fn first_row_minor<T: Float>(a: &Matrix<T>, col: usize) -> Result<Matrix<T>> {
    if !a.is_square() {
        return Err(CoreError::NotSquare {
            rows: a.rows,
            cols: a.cols,
        });
    }
    if col >= a.cols {
        return Err(CoreError::IndexOutOfBounds {
            row: 0,
            col,
            shape: [a.rows, a.cols],
        });
    }
    let n = a.rows;
    let mut out = vec![T::zero(); (n - 1) * (n - 1)];
    fill_minor(a.as_slice(), n, col, &mut out);
    Matrix::from_vec(out, n - 1, n - 1)
}
