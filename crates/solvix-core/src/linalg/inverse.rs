//! Matrix inversion by Gauss-Jordan elimination on `[A | I]`.

use log::{debug, trace};

use crate::Float;
use crate::error::{CoreError, Result};
use crate::linalg::det::determinant;
use crate::matrix::Matrix;

/// Invert a square matrix, treating only an exactly-zero determinant as
/// singular.
///
/// ```
/// # use solvix_core::Matrix;
/// # use solvix_core::linalg::inverse;
/// let a = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 2.0]]).unwrap();
/// let inv = inverse(&a).unwrap();
/// assert_eq!(inv.to_rows(), vec![vec![0.5, 0.0], vec![0.0, 0.5]]);
/// ```
pub fn inverse<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    inverse_with_epsilon(a, T::zero())
}

/// Invert a square matrix, reporting [`CoreError::Singular`] when
/// `|det(A)| <= epsilon`.
///
/// Elimination uses partial pivoting: for each column the row with the
/// largest magnitude entry (first one on ties) is swapped into the pivot
/// position.
pub fn inverse_with_epsilon<T: Float>(a: &Matrix<T>, epsilon: T) -> Result<Matrix<T>> {
    if !a.is_square() {
        return Err(CoreError::NotSquare {
            rows: a.rows,
            cols: a.cols,
        });
    }

    let det = determinant(a)?;
    // NaN never compares `<=`, so a NaN determinant falls through to the
    // pivot checks below.
    if det.abs() <= epsilon {
        debug!(
            "inverse: determinant {} within {} of zero, matrix is singular",
            det.to_f64(),
            epsilon.to_f64()
        );
        return Err(CoreError::Singular);
    }

    let n = a.rows;
    let width = 2 * n;
    let mut aug = augment_with_identity(a);

    for i in 0..n {
        // Find pivot: row with largest |aug[r, i]| for r >= i
        let mut pivot_row = i;
        let mut max_val = aug[i * width + i].abs();
        for r in (i + 1)..n {
            let val = aug[r * width + i].abs();
            if val > max_val {
                max_val = val;
                pivot_row = r;
            }
        }

        if pivot_row != i {
            trace!("inverse: swap rows {i} and {pivot_row}");
            for j in 0..width {
                aug.swap(i * width + j, pivot_row * width + j);
            }
        }

        let pivot = aug[i * width + i];
        if pivot == T::zero() {
            debug!("inverse: zero pivot in column {i}");
            return Err(CoreError::Singular);
        }

        for j in 0..width {
            aug[i * width + j] /= pivot;
        }

        for r in (0..n).filter(|&r| r != i) {
            let factor = aug[r * width + i];
            if factor == T::zero() {
                continue;
            }
            for j in 0..width {
                let pj = aug[i * width + j];
                aug[r * width + j] -= factor * pj;
            }
        }
    }

    let data = aug
        .chunks_exact(width)
        .flat_map(|row| row[n..].iter().copied())
        .collect();
    Matrix::from_vec(data, n, n)
}

/// Build the `n x 2n` row-major buffer `[A | I]`.
fn augment_with_identity<T: Float>(a: &Matrix<T>) -> Vec<T> {
    let n = a.rows;
    let mut aug = Vec::with_capacity(2 * n * n);
    for (i, row) in a.iter_rows().enumerate() {
        aug.extend_from_slice(row);
        aug.extend((0..n).map(|j| if i == j { T::one() } else { T::zero() }));
    }
    aug
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::linalg::multiply;

    fn m(rows: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    fn assert_is_identity(p: &Matrix<f64>) {
        let eye = Matrix::identity(p.rows()).unwrap();
        assert!(p.approx_eq(&eye, 1e-9), "not identity:\n{p}");
    }

    #[test]
    fn test_inverse_diagonal() {
        let inv = inverse(&m(vec![vec![2.0, 0.0], vec![0.0, 2.0]])).unwrap();
        assert_eq!(inv, m(vec![vec![0.5, 0.0], vec![0.0, 0.5]]));
    }

    #[test]
    fn test_inverse_1x1() {
        assert_eq!(inverse(&m(vec![vec![4.0]])).unwrap().as_slice(), &[0.25]);
    }

    #[test]
    fn test_inverse_2x2() {
        // >>> np.linalg.inv([[2,1],[1,4]])
        // array([[ 0.57142857, -0.14285714],
        //        [-0.14285714,  0.28571429]])
        let a = m(vec![vec![2.0, 1.0], vec![1.0, 4.0]]);
        let inv = inverse(&a).unwrap();
        let expected = m(vec![
            vec![4.0 / 7.0, -1.0 / 7.0],
            vec![-1.0 / 7.0, 2.0 / 7.0],
        ]);
        assert!(inv.approx_eq(&expected, 1e-12));
        assert_is_identity(&multiply(&a, &inv).unwrap());
        assert_is_identity(&multiply(&inv, &a).unwrap());
    }

    #[test]
    fn test_inverse_needs_pivoting() {
        // Zero on the leading diagonal; only solvable with a row swap.
        let a = m(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![4.0, -3.0, 8.0],
        ]);
        let inv = inverse(&a).unwrap();
        assert_is_identity(&multiply(&inv, &a).unwrap());
    }

    #[test]
    fn test_inverse_4x4() {
        let a = m(vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0, 6.0, 7.0, 8.0],
            vec![2.0, 6.0, 4.0, 8.0],
            vec![3.0, 1.0, 1.0, 2.0],
        ]);
        let inv = inverse(&a).unwrap();
        assert_eq!(inv.shape(), (4, 4));
        assert_is_identity(&multiply(&inv, &a).unwrap());
    }

    #[test]
    fn test_inverse_singular() {
        let a = m(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert_eq!(inverse(&a), Err(CoreError::Singular));
    }

    #[test]
    fn test_inverse_zero_matrix() {
        let z = Matrix::<f64>::zeros(3, 3).unwrap();
        assert_eq!(inverse(&z), Err(CoreError::Singular));
    }

    #[test]
    fn test_inverse_nan_does_not_panic() {
        let inv = inverse(&m(vec![vec![f64::NAN, 1.0], vec![1.0, 1.0]])).unwrap();
        assert_eq!(inv.shape(), (2, 2));
        assert!(inv.as_slice().iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_inverse_not_square() {
        let a = m(vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(inverse(&a), Err(CoreError::NotSquare { rows: 1, cols: 3 }));
    }

    #[test]
    fn test_inverse_epsilon() {
        // det = 1e-12: invertible with exact-zero policy, singular with eps.
        let a = m(vec![vec![1.0, 0.0], vec![0.0, 1e-12]]);
        assert!(inverse(&a).is_ok());
        assert_eq!(inverse_with_epsilon(&a, 1e-9), Err(CoreError::Singular));
    }

    #[test]
    fn test_inverse_f32() {
        let a = Matrix::from_rows(vec![vec![4.0_f32, 7.0], vec![2.0, 6.0]]).unwrap();
        let inv = inverse(&a).unwrap();
        let p = multiply(&a, &inv).unwrap();
        assert!(p.approx_eq(&Matrix::identity(2).unwrap(), 1e-5));
    }

    #[test]
    fn test_augment_with_identity() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(
            augment_with_identity(&a),
            vec![1.0, 2.0, 1.0, 0.0, 3.0, 4.0, 0.0, 1.0]
        );
    }
}
