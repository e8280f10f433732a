//! `Display` formatting for [`Matrix`].

use core::fmt;

use crate::Float;

use super::Matrix;

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matrix([")?;
        for (r, row) in self.iter_rows().enumerate() {
            write!(f, "  [")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                // Forward the caller's precision, e.g. `{:.2}`.
                match f.precision() {
                    Some(p) => write!(f, "{v:.p$}")?,
                    None => write!(f, "{v}")?,
                }
            }
            if r < self.rows - 1 {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_2x2() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.5]]).unwrap();
        assert_eq!(m.to_string(), "matrix([\n  [1, 2],\n  [3, 4.5]\n])");
    }

    #[test]
    fn test_display_precision() {
        let m = Matrix::from_rows(vec![vec![0.5, 1.0 / 3.0]]).unwrap();
        assert_eq!(format!("{m:.2}"), "matrix([\n  [0.50, 0.33]\n])");
    }
}
