// Integration tests for the bounded operand stack

use rustpn::stack::{BoundedStack, StackError, DEFAULT_CAPACITY};

#[test]
fn test_fill_and_drain_cycle() {
    let mut stack = BoundedStack::new(8);
    for value in 0..8 {
        stack.push(value).expect("push within capacity failed");
    }
    assert!(stack.is_full());
    assert_eq!(
        stack.push(99),
        Err(StackError::Overflow {
            value: 99,
            capacity: 8
        })
    );

    for expected in (0..8).rev() {
        assert_eq!(stack.pop(), Ok(expected));
    }
    assert_eq!(stack.pop(), Err(StackError::Underflow));
}

#[test]
fn test_failed_operations_never_mutate() {
    let mut stack = BoundedStack::new(1);
    assert!(stack.pop().is_err());
    assert!(stack.peek().is_err());
    assert_eq!(stack.len(), 0);

    stack.push(5).expect("push failed");
    assert!(stack.push(6).is_err());
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Ok(5));
}

#[test]
fn test_interleaved_push_pop() {
    let mut stack = BoundedStack::new(4);
    stack.push(1).expect("push failed");
    stack.push(2).expect("push failed");
    assert_eq!(stack.pop(), Ok(2));
    stack.push(3).expect("push failed");
    assert_eq!(stack.pop(), Ok(3));
    assert_eq!(stack.pop(), Ok(1));
    assert!(stack.is_empty());
}

#[test]
fn test_observers_and_iteration() {
    let mut stack = BoundedStack::new(5);
    for value in [1, 4, 9] {
        stack.push(value).expect("push failed");
    }

    assert_eq!(stack.values(), &[1, 4, 9]);
    let top_down: Vec<i64> = stack.iter_top_down().collect();
    assert_eq!(top_down, vec![9, 4, 1]);
    assert_eq!(stack.to_string(), "stack (top to bottom): 9 4 1");

    stack.clear();
    assert_eq!(stack.to_string(), "(empty)");
}

#[test]
fn test_default_capacity_holds_a_hundred() {
    let mut stack = BoundedStack::default();
    assert_eq!(stack.capacity(), DEFAULT_CAPACITY);

    for value in 0..DEFAULT_CAPACITY as i64 {
        stack.push(value).expect("push within default capacity failed");
    }
    assert!(stack.is_full());
    assert!(matches!(stack.push(0), Err(StackError::Overflow { .. })));
}

#[test]
fn test_full_value_range() {
    let mut stack = BoundedStack::new(3);
    stack.push(i64::MIN).expect("push failed");
    stack.push(-1).expect("push failed");
    stack.push(i64::MAX).expect("push failed");

    assert_eq!(stack.pop(), Ok(i64::MAX));
    assert_eq!(stack.pop(), Ok(-1));
    assert_eq!(stack.pop(), Ok(i64::MIN));
}
