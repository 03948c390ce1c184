//! Postfix expression evaluation engine
//!
//! This module provides the evaluator core:
//! - [`evaluator`]: the scan loop, [`Evaluator`] and its [`Evaluation`] output
//! - [`ops`]: the operator set and checked arithmetic
//! - [`error`]: typed evaluation errors
//!
//! # Evaluation Model
//!
//! One pass, left to right, with a [`BoundedStack`] as working memory:
//! digits push, operators pop two and push one, and the scan's final pop is
//! the result. Every failure mode (malformed structure, division by zero,
//! unknown symbols, arithmetic overflow, a spent working stack) comes back
//! as an [`EvalError`] value rather than ending the process.
//!
//! [`BoundedStack`]: crate::stack::BoundedStack

pub mod error;
pub mod evaluator;
pub mod ops;

// Re-export the working surface for convenience.
pub use error::EvalError;
pub use evaluator::{evaluate, Evaluation, Evaluator};
pub use ops::BinOp;
