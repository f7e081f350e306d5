use crate::error::MathError;
use serde::{Deserialize, Serialize};

/// Two-operand calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Applies a binary operation. Division by zero is the only failure.
pub fn evaluate(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, MathError> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Subtract => Ok(lhs - rhs),
        BinaryOp::Multiply => Ok(lhs * rhs),
        BinaryOp::Divide => {
            if rhs == 0.0 {
                Err(MathError::DivisionByZero)
            } else {
                Ok(lhs / rhs)
            }
        }
        BinaryOp::Power => Ok(lhs.powf(rhs)),
    }
}

/// Principal square root; negative inputs are rejected.
pub fn square_root(value: f64) -> Result<f64, MathError> {
    if value < 0.0 {
        return Err(MathError::NegativeSquareRoot);
    }
    Ok(value.sqrt())
}
