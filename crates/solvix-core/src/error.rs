use thiserror::Error;

/// All errors returned by `solvix-core`.
///
/// Every kernel operation reports failure through one of these variants; no
/// operation panics or returns a partially computed payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A determinant, inverse or trace was requested on a non-square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Matrix has a zero determinant and cannot be inverted.
    #[error("singular matrix")]
    Singular,

    /// A linear equation or system has no satisfying value.
    #[error("equation has no solution")]
    NoSolution,

    /// A linear equation or system is satisfied by every value.
    #[error("equation has infinitely many solutions")]
    InfiniteSolutions,

    /// A quadratic has a negative discriminant.
    #[error("equation has no real roots")]
    NoRealRoots,

    /// A shape specification is invalid.
    #[error("invalid shape {rows}x{cols}: {reason}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// A row/column index is out of bounds.
    #[error("index ({row}, {col}) out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        shape: [usize; 2],
    },

    /// Matrix order exceeds the configured ceiling.
    #[error("matrix order {dim} exceeds the configured maximum of {max}")]
    TooLarge { dim: usize, max: usize },

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

/// Convenience alias used throughout `solvix-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
