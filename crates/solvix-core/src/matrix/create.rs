//! Matrix creation functions.

use crate::Float;
use crate::error::Result;

use super::{Matrix, checked_numel};

impl<T: Float> Matrix<T> {
    /// Create a `rows x cols` matrix filled with zeros.
    ///
    /// This is the blank grid an input form starts from when the user picks a
    /// new size.
    ///
    /// ```
    /// # use solvix_core::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let numel = checked_numel(rows, cols)?;
        Self::from_vec(vec![T::zero(); numel], rows, cols)
    }

    /// Create an identity matrix of size `n x n`.
    ///
    /// ```
    /// # use solvix_core::Matrix;
    /// let eye = Matrix::<f64>::identity(3).unwrap();
    /// assert_eq!(eye.get(0, 0).unwrap(), 1.0);
    /// assert_eq!(eye.get(0, 1).unwrap(), 0.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Build a matrix by evaluating `f(row, col)` for every position.
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> T,
    {
        checked_numel(rows, cols)?;
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Ok(Self { data, rows, cols })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_zeros() {
        let m = Matrix::<f64>::zeros(3, 4).unwrap();
        assert_eq!(m.shape(), (3, 4));
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zeros_rejects_empty() {
        assert!(Matrix::<f64>::zeros(0, 2).is_err());
        assert!(Matrix::<f64>::zeros(2, 0).is_err());
    }

    #[test]
    fn test_zeros_shape_overflow() {
        assert!(matches!(
            Matrix::<f64>::zeros(usize::MAX, 2),
            Err(CoreError::InvalidShape { .. })
        ));
        assert!(Matrix::<f64>::identity(usize::MAX).is_err());
        assert!(Matrix::<f64>::from_fn(usize::MAX, 3, |_, _| 0.0).is_err());
    }

    #[test]
    fn test_identity() {
        let m = Matrix::<f32>::identity(3).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(Matrix::<f64>::identity(0).is_err());
    }

    #[test]
    fn test_from_fn() {
        let m = Matrix::<f64>::from_fn(2, 3, |i, j| (i * 10 + j) as f64).unwrap();
        assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
    }
}
