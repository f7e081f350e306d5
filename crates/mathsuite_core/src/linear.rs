use crate::error::MathError;
use crate::matrix::{self, Matrix};
use serde::{Deserialize, Serialize};

/// Coefficient determinant magnitudes below this are treated as singular.
/// This is the only numeric tolerance in the crate.
pub const SINGULARITY_TOLERANCE: f64 = 1e-10;

/// A system of n linear equations in n unknowns, n = 2 or 3.
///
/// The constructor enforces the shape invariants, so a held system is
/// always square with a matching constant vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSystem {
    coefficients: Matrix<f64>,
    constants: Vec<f64>,
}

impl LinearSystem {
    pub fn new(coefficients: Matrix<f64>, constants: Vec<f64>) -> Result<Self, MathError> {
        if !coefficients.is_square() {
            return Err(MathError::NotSquare {
                rows: coefficients.rows(),
                cols: coefficients.cols(),
            });
        }
        let size = coefficients.rows();
        if !(2..=3).contains(&size) {
            return Err(MathError::UnsupportedSystemSize { size });
        }
        if constants.len() != size {
            return Err(MathError::DimensionMismatch {
                op: "solve",
                left_rows: size,
                left_cols: size,
                right_rows: constants.len(),
                right_cols: 1,
            });
        }
        Ok(Self {
            coefficients,
            constants,
        })
    }

    pub fn size(&self) -> usize {
        self.constants.len()
    }

    /// Solves by Cramer's rule: each unknown is the ratio of the
    /// determinant of the column-substituted matrix to the coefficient
    /// determinant. A near-zero coefficient determinant means the system
    /// has no unique solution and fails as singular.
    ///
    /// The solution vector is ordered by variable index.
    pub fn solve(&self) -> Result<Vec<f64>, MathError> {
        let det = matrix::determinant(&self.coefficients)?;
        if det.abs() < SINGULARITY_TOLERANCE {
            return Err(MathError::SingularSystem);
        }
        let mut solution = Vec::with_capacity(self.size());
        for column in 0..self.size() {
            let substituted = self.replace_column(column)?;
            solution.push(matrix::determinant(&substituted)? / det);
        }
        Ok(solution)
    }

    /// Copy of the coefficient matrix with one column replaced by the
    /// constant vector.
    fn replace_column(&self, column: usize) -> Result<Matrix<f64>, MathError> {
        let n = self.size();
        let mut rows = Vec::with_capacity(n);
        for i in 0..n {
            let mut row = Vec::with_capacity(n);
            for j in 0..n {
                row.push(if j == column {
                    self.constants[i]
                } else {
                    self.coefficients[(i, j)]
                });
            }
            rows.push(row);
        }
        Matrix::from_rows(rows)
    }
}

/// Formats a solution component for display: four decimal places, then
/// trailing zeros and any bare decimal point trimmed (`2`, not `2.0000`).
pub fn format_solution(value: f64) -> String {
    let fixed = format!("{value:.4}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(rows: Vec<Vec<f64>>, constants: Vec<f64>) -> LinearSystem {
        let coefficients = Matrix::from_rows(rows).expect("matrix should build");
        LinearSystem::new(coefficients, constants).expect("system should build")
    }

    fn assert_err_contains<T: std::fmt::Debug>(result: Result<T, MathError>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn solves_a_two_variable_system() {
        // x + y = 3, x - y = 1.
        let system = system(vec![vec![1.0, 1.0], vec![1.0, -1.0]], vec![3.0, 1.0]);
        let solution = system.solve().expect("solution should compute");
        assert_eq!(solution.len(), 2);
        assert!((solution[0] - 2.0).abs() < 1e-12);
        assert!((solution[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn solves_a_three_variable_system() {
        let system = system(
            vec![
                vec![1.0, 1.0, 1.0],
                vec![0.0, 2.0, 5.0],
                vec![2.0, 5.0, -1.0],
            ],
            vec![6.0, -4.0, 27.0],
        );
        let solution = system.solve().expect("solution should compute");
        let expected = [5.0, 3.0, -2.0];
        for (got, want) in solution.iter().zip(&expected) {
            assert!((got - want).abs() < 1e-9, "expected {want}, got {got}");
        }
    }

    #[test]
    fn singular_system_is_rejected() {
        let system = system(vec![vec![1.0, 2.0], vec![2.0, 4.0]], vec![3.0, 1.0]);
        let err = system.solve().expect_err("singular system should fail");
        assert_eq!(err, MathError::SingularSystem);
        assert_err_contains(system.solve(), "no unique solution");
    }

    #[test]
    fn constructor_rejects_non_square_coefficients() {
        let coefficients =
            Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).expect("matrix");
        let err = LinearSystem::new(coefficients, vec![1.0, 2.0])
            .expect_err("non-square coefficients should fail");
        assert_eq!(err, MathError::NotSquare { rows: 2, cols: 3 });
    }

    #[test]
    fn constructor_rejects_unsupported_sizes() {
        let one = Matrix::from_rows(vec![vec![1.0]]).expect("matrix");
        let err = LinearSystem::new(one, vec![1.0]).expect_err("1 variable should fail");
        assert_eq!(err, MathError::UnsupportedSystemSize { size: 1 });

        let four = Matrix::<f64>::identity(4).expect("identity");
        let err =
            LinearSystem::new(four, vec![0.0; 4]).expect_err("4 variables should fail");
        assert_eq!(err, MathError::UnsupportedSystemSize { size: 4 });
    }

    #[test]
    fn constructor_rejects_mismatched_constant_length() {
        let coefficients = Matrix::<f64>::identity(2).expect("identity");
        let err = LinearSystem::new(coefficients, vec![1.0, 2.0, 3.0])
            .expect_err("constant length mismatch should fail");
        assert!(matches!(err, MathError::DimensionMismatch { .. }));
    }

    #[test]
    fn formats_solutions_without_trailing_zeros() {
        assert_eq!(format_solution(2.0), "2");
        assert_eq!(format_solution(0.5), "0.5");
        assert_eq!(format_solution(-0.75), "-0.75");
        assert_eq!(format_solution(1.23456), "1.2346");
    }
}
