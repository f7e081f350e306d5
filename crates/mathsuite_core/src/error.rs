use thiserror::Error;

/// Failure taxonomy for the computation core.
///
/// Every failure is reported synchronously to the immediate caller. The
/// computations are deterministic, so nothing is retried, and no failure is
/// fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("matrix must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error(
        "{op}: dimensions {left_rows}x{left_cols} and {right_rows}x{right_cols} are incompatible"
    )]
    DimensionMismatch {
        op: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("matrix must be square to calculate determinant, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("no unique solution exists; the system of equations is singular")]
    SingularSystem,

    #[error("systems of {size} variables are not supported, expected 2 or 3")]
    UnsupportedSystemSize { size: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of a negative number")]
    NegativeSquareRoot,
}
