use crate::error::MathError;
use crate::traits::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// A rectangular matrix in row-major storage.
///
/// Dimensions are fixed at construction and every row has the same length.
/// Operations never mutate their operands; each produces a fresh matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Entry> Matrix<T> {
    /// Builds a matrix from nested rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MathError> {
        let nrows = rows.len();
        let ncols = rows.first().map(|row| row.len()).unwrap_or(0);
        if nrows == 0 || ncols == 0 {
            return Err(MathError::Empty);
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MathError::RaggedRows {
                    row: i,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Identity matrix of size `n`.
    pub fn identity(n: usize) -> Result<Self, MathError> {
        if n == 0 {
            return Err(MathError::Empty);
        }
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Ok(Self {
            rows: n,
            cols: n,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at (`row`, `col`), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        (row < self.rows && col < self.cols).then(|| self.at(row, col))
    }

    fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Submatrix with `row` and `col` removed, preserving the relative
    /// order of the remaining rows and columns.
    fn minor(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                data.push(self.at(i, j));
            }
        }
        Self {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        }
    }
}

impl<T: Entry> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
            if i + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Element-wise sum. Operands must share dimensions.
pub fn add<T: Entry>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MathError> {
    check_same_shape("add", a, b)?;
    let data = a.data.iter().zip(&b.data).map(|(&x, &y)| x + y).collect();
    Ok(Matrix {
        rows: a.rows,
        cols: a.cols,
        data,
    })
}

/// Element-wise difference. Operands must share dimensions.
pub fn subtract<T: Entry>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MathError> {
    check_same_shape("subtract", a, b)?;
    let data = a.data.iter().zip(&b.data).map(|(&x, &y)| x - y).collect();
    Ok(Matrix {
        rows: a.rows,
        cols: a.cols,
        data,
    })
}

/// Matrix product. The inner dimensions are validated against the actual
/// operand shapes: `a` must have as many columns as `b` has rows.
pub fn multiply<T: Entry>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MathError> {
    if a.cols != b.rows {
        return Err(MathError::DimensionMismatch {
            op: "multiply",
            left_rows: a.rows,
            left_cols: a.cols,
            right_rows: b.rows,
            right_cols: b.cols,
        });
    }
    let mut data = vec![T::zero(); a.rows * b.cols];
    for i in 0..a.rows {
        for j in 0..b.cols {
            let mut acc = T::zero();
            for k in 0..a.cols {
                acc = acc + a.at(i, k) * b.at(k, j);
            }
            data[i * b.cols + j] = acc;
        }
    }
    Ok(Matrix {
        rows: a.rows,
        cols: b.cols,
        data,
    })
}

/// Transpose: `out[j][i] = in[i][j]`. Always succeeds.
pub fn transpose<T: Entry>(a: &Matrix<T>) -> Matrix<T> {
    let mut data = Vec::with_capacity(a.data.len());
    for j in 0..a.cols {
        for i in 0..a.rows {
            data.push(a.at(i, j));
        }
    }
    Matrix {
        rows: a.cols,
        cols: a.rows,
        data,
    }
}

/// Determinant of a square matrix.
///
/// Sizes 1 through 3 use the closed forms; larger matrices fall back to
/// recursive cofactor expansion along the first row. The expansion is
/// exponential in the matrix size and only suitable for the modest,
/// interactively-entered dimensions the suite targets.
pub fn determinant<T: Entry>(a: &Matrix<T>) -> Result<T, MathError> {
    if !a.is_square() {
        return Err(MathError::NotSquare {
            rows: a.rows,
            cols: a.cols,
        });
    }
    Ok(det_by_size(a))
}

fn det_by_size<T: Entry>(m: &Matrix<T>) -> T {
    match m.rows {
        1 => m.at(0, 0),
        2 => m.at(0, 0) * m.at(1, 1) - m.at(0, 1) * m.at(1, 0),
        3 => {
            m.at(0, 0) * (m.at(1, 1) * m.at(2, 2) - m.at(1, 2) * m.at(2, 1))
                - m.at(0, 1) * (m.at(1, 0) * m.at(2, 2) - m.at(1, 2) * m.at(2, 0))
                + m.at(0, 2) * (m.at(1, 0) * m.at(2, 1) - m.at(1, 1) * m.at(2, 0))
        }
        n => {
            let mut det = T::zero();
            for i in 0..n {
                let term = m.at(0, i) * det_by_size(&m.minor(0, i));
                det = if i % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

fn check_same_shape<T: Entry>(
    op: &'static str,
    a: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<(), MathError> {
    if a.rows != b.rows || a.cols != b.cols {
        return Err(MathError::DimensionMismatch {
            op,
            left_rows: a.rows,
            left_cols: a.cols,
            right_rows: b.rows,
            right_cols: b.cols,
        });
    }
    Ok(())
}
