//! # Introduction
//!
//! rustpn evaluates postfix (reverse Polish) expressions over single-digit
//! operands on a fixed-capacity integer stack, and ships a terminal UI built
//! with [ratatui](https://docs.rs/ratatui) for poking at a live stack
//! interactively.
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Expression → Scan → BoundedStack push/pop → Evaluation { value, leftover }
//! ```
//!
//! 1. [`stack`] — [`stack::BoundedStack`], a fixed-capacity LIFO of `i64`
//!    whose operations report failure as [`stack::StackError`] instead of
//!    mutating on overflow or underflow.
//! 2. [`eval`] — the scanner and operator machinery: digits push, operators
//!    pop two operands and push the checked result, errors surface as
//!    [`eval::EvalError`] with the offending byte position.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported expression grammar
//!
//! Operands: single decimal digits `0`-`9` (multi-digit numbers are not
//! lexed; `"23"` is two operands).
//! Operators: `+`, `-`, `*`, `/` (truncating integer division).
//! Separators: spaces and tabs are skipped; `\n` or `\r` ends the scan.

pub mod eval;
pub mod stack;
pub mod ui;
