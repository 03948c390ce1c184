//! Fixed-capacity operand stack
//!
//! [`BoundedStack`] is the LIFO working memory for postfix evaluation and the
//! session stack behind the interactive workbench. Capacity is fixed at
//! construction; a full stack rejects pushes instead of growing.
//!
//! Failed operations return a typed [`StackError`] and leave the stack
//! untouched. There is no sentinel value, so the full `i64` range is
//! legitimate data.

use std::fmt;

/// Default capacity of a [`BoundedStack`] when none is given.
pub const DEFAULT_CAPACITY: usize = 100;

/// Errors reported by [`BoundedStack`] operations.
///
/// All three are local and non-fatal: the operation that raised them did not
/// change the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Push onto a full stack. Carries the rejected value so callers can
    /// report what was discarded.
    Overflow { value: i64, capacity: usize },

    /// Pop from an empty stack.
    Underflow,

    /// Peek at an empty stack.
    EmptyPeek,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::Overflow { value, capacity } => {
                write!(
                    f,
                    "Stack overflow: cannot push {} (capacity {})",
                    value, capacity
                )
            }
            StackError::Underflow => write!(f, "Stack underflow: nothing to pop"),
            StackError::EmptyPeek => write!(f, "Stack is empty: no top element"),
        }
    }
}

impl std::error::Error for StackError {}

/// A last-in-first-out stack of `i64` values with a fixed capacity.
///
/// The top of the stack is the most recently pushed element. `len()` is
/// always in `[0, capacity]`.
#[derive(Debug, Clone)]
pub struct BoundedStack {
    slots: Vec<i64>,
    capacity: usize,
}

impl BoundedStack {
    /// Create an empty stack that holds at most `capacity` values.
    pub fn new(capacity: usize) -> Self {
        BoundedStack {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of values currently on the stack.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Maximum number of values this stack can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if the stack is at capacity.
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Push a value onto the stack.
    ///
    /// A full stack rejects the value with [`StackError::Overflow`] and is
    /// left unchanged.
    pub fn push(&mut self, value: i64) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Overflow {
                value,
                capacity: self.capacity,
            });
        }
        self.slots.push(value);
        Ok(())
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Result<i64, StackError> {
        self.slots.pop().ok_or(StackError::Underflow)
    }

    /// Return the top value without removing it.
    pub fn peek(&self) -> Result<i64, StackError> {
        self.slots.last().copied().ok_or(StackError::EmptyPeek)
    }

    /// Remove all values, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// All values, bottom of the stack first.
    pub fn values(&self) -> &[i64] {
        &self.slots
    }

    /// Iterate values from the top of the stack down to the bottom.
    pub fn iter_top_down(&self) -> impl Iterator<Item = i64> + '_ {
        self.slots.iter().rev().copied()
    }
}

impl Default for BoundedStack {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Human-readable listing from top to bottom, `(empty)` when there is
/// nothing to show. Pure observer.
impl fmt::Display for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        write!(f, "stack (top to bottom):")?;
        for value in self.iter_top_down() {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = BoundedStack::new(10);
        for value in [4, 8, 15, 16, 23, 42] {
            stack.push(value).unwrap();
        }

        let mut popped = Vec::new();
        while let Ok(value) = stack.pop() {
            popped.push(value);
        }

        assert_eq!(popped, vec![42, 23, 16, 15, 8, 4]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_overflow_leaves_stack_unchanged() {
        let mut stack = BoundedStack::new(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(stack.is_full());

        let err = stack.push(3).unwrap_err();
        assert_eq!(
            err,
            StackError::Overflow {
                value: 3,
                capacity: 2
            }
        );

        // The rejected value was discarded, the rest survives in order.
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
    }

    #[test]
    fn test_pop_underflow() {
        let mut stack = BoundedStack::new(4);
        assert_eq!(stack.pop(), Err(StackError::Underflow));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_peek_empty() {
        let stack = BoundedStack::new(4);
        assert_eq!(stack.peek(), Err(StackError::EmptyPeek));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = BoundedStack::new(4);
        stack.push(-1).unwrap();

        // -1 is ordinary data here, not a failure marker.
        assert_eq!(stack.peek(), Ok(-1));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pop(), Ok(-1));
    }

    #[test]
    fn test_is_empty_is_full_boundaries() {
        let mut stack = BoundedStack::new(1);
        assert!(stack.is_empty());
        assert!(!stack.is_full());

        stack.push(7).unwrap();
        assert!(!stack.is_empty());
        assert!(stack.is_full());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut stack = BoundedStack::new(3);
        stack.push(1).unwrap();
        stack.push(2).unwrap();

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), 3);
        stack.push(9).unwrap();
        assert_eq!(stack.peek(), Ok(9));
    }

    #[test]
    fn test_default_uses_default_capacity() {
        let stack = BoundedStack::default();
        assert_eq!(stack.capacity(), DEFAULT_CAPACITY);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_display_lists_top_to_bottom() {
        let mut stack = BoundedStack::new(5);
        stack.push(1).unwrap();
        stack.push(4).unwrap();
        stack.push(9).unwrap();

        assert_eq!(stack.to_string(), "stack (top to bottom): 9 4 1");
    }

    #[test]
    fn test_display_empty() {
        let stack = BoundedStack::new(5);
        assert_eq!(stack.to_string(), "(empty)");
    }
}
