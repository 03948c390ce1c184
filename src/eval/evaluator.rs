//! Postfix expression evaluation
//!
//! A single left-to-right scan over the expression drives a fresh
//! [`BoundedStack`]: digits are pushed as operands, every other character
//! pops two operands and pushes the operator's result. After the scan the
//! top of the stack is the answer; anything beneath it is reported back as
//! leftover operands.
//!
//! Operands are single decimal digits only. `"23"` is the two operands 2
//! and 3, never twenty-three.

use super::error::EvalError;
use super::ops::BinOp;
use crate::stack::{BoundedStack, DEFAULT_CAPACITY};

/// A successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The result popped after the scan.
    pub value: i64,

    /// Operands still on the working stack beneath the result, top-down.
    /// Non-empty means the expression carried more operands than its
    /// operators consumed; the result is valid regardless.
    pub leftover: Vec<i64>,
}

impl Evaluation {
    /// Whether the expression left unconsumed operands behind.
    pub fn has_leftover(&self) -> bool {
        !self.leftover.is_empty()
    }
}

/// Evaluates postfix expressions over single-digit operands.
///
/// The evaluator itself is stateless: each [`evaluate`](Evaluator::evaluate)
/// call owns and drives a fresh working [`BoundedStack`] sized to
/// `capacity`.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    capacity: usize,
}

impl Evaluator {
    /// An evaluator whose working stack holds [`DEFAULT_CAPACITY`] operands.
    pub fn new() -> Self {
        Evaluator {
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// An evaluator with an explicit working-stack capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Evaluator { capacity }
    }

    /// Capacity of the working stack built for each evaluation.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Evaluate a postfix expression.
    ///
    /// Spaces and tabs separate operands; the scan ends at the first line
    /// terminator, even mid-string. Operands come off the stack before an
    /// operator character is classified, so an operator starved of operands
    /// reports [`EvalError::InvalidExpression`] rather than
    /// [`EvalError::UnknownOperator`].
    pub fn evaluate(&self, expr: &str) -> Result<Evaluation, EvalError> {
        let mut stack = BoundedStack::new(self.capacity);

        for (position, ch) in expr.char_indices() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            if ch == ' ' || ch == '\t' {
                continue;
            }

            if let Some(digit) = ch.to_digit(10) {
                push_operand(&mut stack, i64::from(digit), position)?;
                continue;
            }

            // Operator candidate: most recent operand is the right-hand side.
            let b = pop_operand(&mut stack, ch, position)?;
            let a = pop_operand(&mut stack, ch, position)?;

            let op = BinOp::from_symbol(ch).ok_or(EvalError::UnknownOperator {
                symbol: ch,
                position,
            })?;

            let result = op.apply(a, b, position)?;
            push_operand(&mut stack, result, position)?;
        }

        let value = stack.pop().map_err(|_| EvalError::InvalidExpression {
            message: "expression produced no result".to_string(),
            position: None,
        })?;

        let mut leftover = Vec::new();
        while let Ok(extra) = stack.pop() {
            leftover.push(extra);
        }

        Ok(Evaluation { value, leftover })
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate `expr` with the default working-stack capacity.
pub fn evaluate(expr: &str) -> Result<Evaluation, EvalError> {
    Evaluator::new().evaluate(expr)
}

fn push_operand(
    stack: &mut BoundedStack,
    value: i64,
    position: usize,
) -> Result<(), EvalError> {
    stack.push(value).map_err(|_| EvalError::StackExhausted {
        capacity: stack.capacity(),
        position,
    })
}

fn pop_operand(
    stack: &mut BoundedStack,
    operator: char,
    position: usize,
) -> Result<i64, EvalError> {
    stack.pop().map_err(|_| EvalError::InvalidExpression {
        message: format!("operator '{}' needs two operands", operator),
        position: Some(position),
    })
}
