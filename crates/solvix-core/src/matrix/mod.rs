//! Dense, rectangular, real-valued matrix.
//!
//! [`Matrix`] stores its elements contiguously in row-major order and carries
//! an immutable `(rows, cols)` shape. Both dimensions are at least one. All
//! arithmetic lives in [`crate::linalg`]; operations there return new matrices
//! and never mutate their operands.

mod create;
mod display;

use serde::{Deserialize, Serialize};

use crate::Float;
use crate::error::{CoreError, Result};

/// A dense `rows x cols` matrix.
///
/// Serializes as a list of rows (`[[1.0, 2.0], [3.0, 4.0]]`); deserializing
/// goes through [`Matrix::from_rows`], so jagged or empty input is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<T>>", into = "Vec<Vec<T>>")]
pub struct Matrix<T: Float> {
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl<T: Float> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from a flat row-major buffer.
    ///
    /// Returns [`CoreError::InvalidShape`] if either dimension is zero, if
    /// `rows * cols` overflows, or if it does not equal `data.len()`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if checked_numel(rows, cols)? != data.len() {
            return Err(CoreError::InvalidShape {
                rows,
                cols,
                reason: "shape product does not match data length",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a flat slice (copies the data).
    pub fn from_slice(data: &[T], rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(data.to_vec(), rows, cols)
    }

    /// Create a matrix from nested rows.
    ///
    /// Every row must have the same length as the first; a jagged grid is
    /// reported as [`CoreError::DimensionMismatch`].
    ///
    /// ```
    /// # use solvix_core::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(CoreError::InvalidShape {
                rows: n_rows,
                cols: n_cols,
                reason: "matrix must have at least one row and one column",
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != n_cols) {
            return Err(CoreError::DimensionMismatch {
                expected: vec![n_cols],
                got: vec![bad.len()],
            });
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return the underlying row-major `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row,
                col,
                shape: [self.rows, self.cols],
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Borrow row `i` as a slice.
    pub fn row(&self, i: usize) -> Result<&[T]> {
        if i >= self.rows {
            return Err(CoreError::IndexOutOfBounds {
                row: i,
                col: 0,
                shape: [self.rows, self.cols],
            });
        }
        Ok(&self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Iterate over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    /// Copy out as nested rows (the shape the calculator UI works with).
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    // ------------------------------------------------------------------
    // Map / compare
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new matrix.
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Apply a function element-wise to two matrices of the same shape.
    pub fn zip_map<F>(&self, other: &Matrix<T>, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(CoreError::DimensionMismatch {
                expected: vec![self.rows, self.cols],
                got: vec![other.rows, other.cols],
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Whether both matrices have the same shape and every pair of entries
    /// differs by at most `tol`.
    pub fn approx_eq(&self, other: &Matrix<T>, tol: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(&a, &b)| (a - b).abs() <= tol)
    }
}

/// Element count of a `rows x cols` matrix.
///
/// Both dimensions must be non-zero and their product must fit in `usize`.
pub(crate) fn checked_numel(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(CoreError::InvalidShape {
            rows,
            cols,
            reason: "matrix must have at least one row and one column",
        });
    }
    rows.checked_mul(cols).ok_or(CoreError::InvalidShape {
        rows,
        cols,
        reason: "shape overflows usize",
    })
}

impl<T: Float> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = CoreError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl<T: Float> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.to_rows()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(!m.is_square());
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        let r = Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 3);
        assert!(matches!(r, Err(CoreError::InvalidShape { .. })));
    }

    #[test]
    fn test_from_vec_zero_dimension() {
        let r = Matrix::<f64>::from_vec(vec![], 0, 3);
        assert!(matches!(r, Err(CoreError::InvalidShape { rows: 0, .. })));
    }

    #[test]
    fn test_from_vec_shape_overflow() {
        let r = Matrix::from_vec(vec![1.0], usize::MAX, 2);
        assert_eq!(
            r,
            Err(CoreError::InvalidShape {
                rows: usize::MAX,
                cols: 2,
                reason: "shape overflows usize",
            })
        );
        // Wraps to 2 in unchecked arithmetic; must still be rejected.
        let r = Matrix::from_vec(vec![1.0, 2.0], usize::MAX / 2 + 2, 2);
        assert!(matches!(r, Err(CoreError::InvalidShape { .. })));
    }

    #[test]
    fn test_from_slice() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let m = Matrix::from_slice(&data, 3, 2).unwrap();
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        assert!(Matrix::from_slice(&data, 4, 2).is_err());
    }

    #[test]
    fn test_into_vec() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.into_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert!(m.is_square());
    }

    #[test]
    fn test_from_rows_jagged() {
        let r = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);
        assert_eq!(
            r,
            Err(CoreError::DimensionMismatch {
                expected: vec![2],
                got: vec![3],
            })
        );
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(Matrix::<f64>::from_rows(vec![]).is_err());
        assert!(Matrix::<f64>::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_get_and_row() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.get(1, 2).unwrap(), 6.0);
        assert_eq!(m.row(0).unwrap(), &[1.0, 2.0, 3.0]);
        assert!(m.get(2, 0).is_err());
        assert!(m.get(0, 3).is_err());
        assert!(m.row(5).is_err());
    }

    #[test]
    fn test_to_rows() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let m = Matrix::from_rows(rows.clone()).unwrap();
        assert_eq!(m.to_rows(), rows);
        assert_eq!(m.iter_rows().count(), 3);
    }

    #[test]
    fn test_map() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let doubled = m.map(|x| x * 2.0);
        assert_eq!(doubled.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_zip_map_shape_mismatch() {
        let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let b = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 1, 4).unwrap();
        assert!(a.zip_map(&b, |x, y| x + y).is_err());
    }

    #[test]
    fn test_approx_eq() {
        let a = Matrix::from_vec(vec![1.0, 2.0], 1, 2).unwrap();
        let b = Matrix::from_vec(vec![1.0 + 1e-12, 2.0], 1, 2).unwrap();
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&b, 1e-15));
        let c = Matrix::from_vec(vec![1.0, 2.0], 2, 1).unwrap();
        assert!(!a.approx_eq(&c, 1.0));
    }

    #[test]
    fn test_serde_as_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");
        let back: Matrix<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_serde_rejects_jagged() {
        let r: std::result::Result<Matrix<f64>, _> = serde_json::from_str("[[1.0,2.0],[3.0]]");
        assert!(r.is_err());
    }
}
