//! Binary operators and their checked application

use super::error::EvalError;
use std::fmt;

/// The four postfix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Map an expression character to its operator; `None` for anything else.
    pub fn from_symbol(symbol: char) -> Option<BinOp> {
        match symbol {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }

    /// The character form used in expressions.
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }

    /// Compute `a op b` with checked arithmetic.
    ///
    /// `position` is the byte offset of the operator in the expression and is
    /// carried into any error. Division truncates toward zero and rejects a
    /// zero divisor with [`EvalError::DivisionByZero`].
    pub fn apply(self, a: i64, b: i64, position: usize) -> Result<i64, EvalError> {
        let result = match self {
            BinOp::Add => a.checked_add(b),
            BinOp::Sub => a.checked_sub(b),
            BinOp::Mul => a.checked_mul(b),
            BinOp::Div => {
                if b == 0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                // i64::MIN / -1 is the one quotient that does not fit.
                a.checked_div(b)
            }
        };

        result.ok_or_else(|| EvalError::IntegerOverflow {
            operation: format!("{} {} {}", a, self, b),
            position,
        })
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
