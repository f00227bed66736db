//! Arithmetic Operations Module
//!
//! Defines the closed set of supported calculations and the pure evaluation
//! function. Evaluation is stateless; all memoization lives in the cache layer.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CalcError;

// == Operation ==
/// A supported arithmetic operation.
///
/// Serializes to its lowercase route name ("add", "subtract", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All supported operations.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Route and display name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Whether operand order is irrelevant for the result.
    pub fn is_commutative(&self) -> bool {
        matches!(self, Operation::Add | Operation::Multiply)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            other => Err(CalcError::UnknownOperation(other.to_string())),
        }
    }
}

// == Evaluate ==
/// Computes the result of an operation over two operands.
///
/// Pure and stateless. Division by zero is the only failing input.
pub fn evaluate(operation: Operation, x: f64, y: f64) -> Result<f64, CalcError> {
    match operation {
        Operation::Add => Ok(x + y),
        Operation::Subtract => Ok(x - y),
        Operation::Multiply => Ok(x * y),
        Operation::Divide => {
            if y == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(x / y)
        }
    }
}
