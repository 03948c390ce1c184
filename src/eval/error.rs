//! Evaluation error types
//!
//! This module defines [`EvalError`], covering everything that can go wrong
//! while evaluating a postfix expression. Every variant is a returned value:
//! evaluation failures abort the current evaluation only, never the process.
//!
//! Errors carry the byte `position` of the offending character in the
//! expression where one exists, so callers can point at the exact spot.

use std::fmt;

/// Errors raised while evaluating a postfix expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The expression is structurally broken: an operator arrived with fewer
    /// than two operands available, or the whole input produced no result
    /// (empty or whitespace-only). `position` is absent in the latter case.
    InvalidExpression {
        message: String,
        position: Option<usize>,
    },

    /// Integer division with a zero divisor.
    DivisionByZero { position: usize },

    /// A character that is neither a digit, a separator, nor a known
    /// operator.
    UnknownOperator { symbol: char, position: usize },

    /// Checked arithmetic overflowed the `i64` range.
    IntegerOverflow { operation: String, position: usize },

    /// The working stack hit its capacity mid-evaluation, so an operand
    /// could not be stored.
    StackExhausted { capacity: usize, position: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidExpression { message, position } => {
                write!(f, "Invalid postfix expression: {}", message)?;
                if let Some(position) = position {
                    write!(f, " at position {}", position)?;
                }
                Ok(())
            }
            EvalError::DivisionByZero { position } => {
                write!(f, "Division by zero at position {}", position)
            }
            EvalError::UnknownOperator { symbol, position } => {
                write!(f, "Unknown operator '{}' at position {}", symbol, position)
            }
            EvalError::IntegerOverflow {
                operation,
                position,
            } => {
                write!(
                    f,
                    "Integer overflow in operation: {} at position {}",
                    operation, position
                )
            }
            EvalError::StackExhausted { capacity, position } => {
                write!(
                    f,
                    "Operand stack exhausted (capacity {}) at position {}",
                    capacity, position
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}
