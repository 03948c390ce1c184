// Integration tests for the postfix evaluator

use rustpn::eval::{evaluate, EvalError, Evaluator};

#[test]
fn test_worked_example() {
    // 2*3 + 5*4 - 9
    let eval = evaluate("23*54*+9-").expect("evaluation failed");
    assert_eq!(eval.value, 17);
    assert!(!eval.has_leftover());
}

#[test]
fn test_every_operator() {
    assert_eq!(evaluate("72+").expect("add failed").value, 9);
    assert_eq!(evaluate("72-").expect("sub failed").value, 5);
    assert_eq!(evaluate("72*").expect("mul failed").value, 14);
    assert_eq!(evaluate("72/").expect("div failed").value, 3);
}

#[test]
fn test_deep_operand_run() {
    // Push eight operands, then fold them back down with seven adds.
    let eval = evaluate("12345678+++++++").expect("evaluation failed");
    assert_eq!(eval.value, 36);
    assert!(!eval.has_leftover());
}

#[test]
fn test_whitespace_separated_rendition() {
    let compact = evaluate("23*54*+9-").expect("compact form failed");
    let spaced = evaluate("2 3 * 5 4 * + 9 -").expect("spaced form failed");
    assert_eq!(compact, spaced);
}

#[test]
fn test_input_after_newline_is_ignored() {
    // The scan stops at the line terminator; nothing after it is looked at.
    let eval = evaluate("23+\nnot an expression").expect("evaluation failed");
    assert_eq!(eval.value, 5);
    assert!(!eval.has_leftover());
}

#[test]
fn test_evaluator_reuse_is_stateless() {
    let evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("99*").expect("first eval failed").value, 81);

    // A failed evaluation leaves no residue behind for the next one.
    assert!(evaluator.evaluate("+").is_err());

    let eval = evaluator.evaluate("11+").expect("third eval failed");
    assert_eq!(eval.value, 2);
    assert!(!eval.has_leftover());
}

// === LEFTOVER OPERANDS ===

#[test]
fn test_leftover_reported_top_down() {
    let eval = evaluate("234").expect("evaluation failed");
    assert_eq!(eval.value, 4);
    assert_eq!(eval.leftover, vec![3, 2]);
}

#[test]
fn test_result_is_valid_despite_leftover() {
    // The top of the stack wins; earlier operands are surplus.
    let eval = evaluate("923*").expect("evaluation failed");
    assert_eq!(eval.value, 6);
    assert_eq!(eval.leftover, vec![9]);
    assert!(eval.has_leftover());
}

// === ERROR REPORTING ===

#[test]
fn test_starved_operator_reports_position() {
    let err = evaluate("9+").expect_err("starved operator should fail");
    assert_eq!(
        err,
        EvalError::InvalidExpression {
            message: "operator '+' needs two operands".to_string(),
            position: Some(1),
        }
    );
}

#[test]
fn test_empty_input_has_no_position() {
    let err = evaluate("").expect_err("empty input should fail");
    assert!(matches!(
        err,
        EvalError::InvalidExpression { position: None, .. }
    ));
    assert_eq!(
        err.to_string(),
        "Invalid postfix expression: expression produced no result"
    );

    assert!(evaluate(" \t ").is_err());
}

#[test]
fn test_division_by_zero_names_the_position() {
    let err = evaluate("20/").expect_err("zero divisor should fail");
    assert_eq!(err, EvalError::DivisionByZero { position: 2 });
    assert_eq!(err.to_string(), "Division by zero at position 2");
}

#[test]
fn test_unknown_operator_classified_after_operands_come_off() {
    // '#' with two operands available is classified and rejected by name.
    assert_eq!(
        evaluate("45#").expect_err("unknown operator should fail"),
        EvalError::UnknownOperator {
            symbol: '#',
            position: 2,
        }
    );

    // '#' with one operand never reaches classification.
    assert!(matches!(
        evaluate("5#").expect_err("starved '#' should fail"),
        EvalError::InvalidExpression {
            position: Some(1),
            ..
        }
    ));
}

#[test]
fn test_overflow_reports_the_operation() {
    // 9^20 is past i64::MAX; the final multiply trips the checked arithmetic.
    let expr = String::from("9") + &"9*".repeat(19);
    let err = Evaluator::new()
        .evaluate(&expr)
        .expect_err("9^20 should overflow");

    match err {
        EvalError::IntegerOverflow {
            operation,
            position,
        } => {
            assert!(operation.contains('*'), "unexpected operation: {}", operation);
            assert_eq!(position, expr.len() - 1);
        }
        other => panic!("expected IntegerOverflow, got {:?}", other),
    }
}

#[test]
fn test_exhausted_working_stack_names_capacity() {
    let evaluator = Evaluator::with_capacity(4);
    let err = evaluator
        .evaluate("12345")
        .expect_err("fifth operand should not fit");
    assert_eq!(
        err,
        EvalError::StackExhausted {
            capacity: 4,
            position: 4,
        }
    );
    assert_eq!(
        err.to_string(),
        "Operand stack exhausted (capacity 4) at position 4"
    );

    // One fewer operand fits.
    let eval = evaluator.evaluate("1234").expect("four operands should fit");
    assert_eq!(eval.value, 4);
    assert_eq!(eval.leftover, vec![3, 2, 1]);
}
