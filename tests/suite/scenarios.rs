//! End-to-end digit entry scenarios through a bound session.

use nncalc_engine::{CalcError, DigitEntryState, Operation};

use crate::common::{digit, registers, run, session};

#[test]
fn typing_digits_builds_the_bottom_operand() {
    let mut s = session("0", "0");
    assert_eq!(s.state(), DigitEntryState::Cleared);

    run(&mut s, &[digit(3), digit(4)]);
    assert_eq!(registers(s.controller()), ("0".into(), "34".into()));
    assert_eq!(s.state(), DigitEntryState::AfterDigit);
}

#[test]
fn digit_after_enter_starts_a_new_operand() {
    let mut s = session("0", "34");

    run(&mut s, &[Operation::Enter]);
    assert_eq!(registers(s.controller()), ("34".into(), "34".into()));
    assert_eq!(s.state(), DigitEntryState::EnteredOrSwapped);

    run(&mut s, &[digit(1)]);
    assert_eq!(registers(s.controller()), ("34".into(), "1".into()));
    assert_eq!(s.state(), DigitEntryState::AfterDigit);

    run(&mut s, &[digit(2)]);
    assert_eq!(registers(s.controller()), ("34".into(), "12".into()));
}

#[test]
fn digit_after_operator_pushes_the_result() {
    let mut s = session("2", "3");

    run(&mut s, &[Operation::Add]);
    assert_eq!(registers(s.controller()), ("0".into(), "5".into()));
    assert_eq!(s.state(), DigitEntryState::AfterOperator);

    run(&mut s, &[digit(9)]);
    assert_eq!(registers(s.controller()), ("5".into(), "9".into()));
    assert_eq!(s.state(), DigitEntryState::AfterDigit);
}

#[test]
fn divide_leaves_remainder_on_top() {
    let mut s = session("10", "3");
    run(&mut s, &[Operation::Divide]);
    assert_eq!(registers(s.controller()), ("1".into(), "3".into()));
}

#[test]
fn digit_after_swap_replaces_bottom() {
    let mut s = session("0", "0");
    run(&mut s, &[digit(7), Operation::Swap, digit(5)]);
    assert_eq!(registers(s.controller()), ("7".into(), "5".into()));
}

#[test]
fn clear_only_touches_bottom() {
    let mut s = session("0", "0");
    run(&mut s, &[digit(8), Operation::Enter, digit(6), Operation::Clear]);
    assert_eq!(registers(s.controller()), ("8".into(), "0".into()));
    assert_eq!(s.state(), DigitEntryState::Cleared);

    // a digit right after clear appends to the zero, with no pre-actions
    run(&mut s, &[digit(4)]);
    assert_eq!(registers(s.controller()), ("8".into(), "4".into()));
}

#[test]
fn chained_calculation() {
    // (12 + 30) * 2 = 84, then 84 ^ 2 = 7056, then sqrt = 84
    let mut s = session("0", "0");
    run(
        &mut s,
        &[
            digit(1),
            digit(2),
            Operation::Enter,
            digit(3),
            digit(0),
            Operation::Add,
            digit(2),
            Operation::Multiply,
        ],
    );
    assert_eq!(registers(s.controller()), ("0".into(), "84".into()));

    run(&mut s, &[digit(2), Operation::Power]);
    assert_eq!(registers(s.controller()), ("0".into(), "7056".into()));

    run(&mut s, &[digit(2), Operation::Root]);
    assert_eq!(registers(s.controller()), ("0".into(), "84".into()));
}

#[test]
fn subtract_then_digit() {
    let mut s = session("0", "0");
    run(
        &mut s,
        &[digit(9), Operation::Enter, digit(4), Operation::Subtract],
    );
    assert_eq!(registers(s.controller()), ("0".into(), "5".into()));
}

#[test]
fn disabled_operation_fails_without_side_effects() {
    let mut s = session("1", "2");
    let err = s.handle(Operation::Subtract).unwrap_err();
    assert!(matches!(
        err,
        CalcError::Precondition {
            operation: Operation::Subtract,
            ..
        }
    ));
    assert_eq!(registers(s.controller()), ("1".into(), "2".into()));
    assert_eq!(s.state(), DigitEntryState::Cleared);
}

#[test]
fn display_tracks_registers_and_enablement() {
    let mut s = session("0", "0");
    let display = s.controller().view();
    assert!(!display.enablement().divide);
    assert!(!display.enablement().root);

    run(&mut s, &[digit(3)]);
    let display = s.controller().view();
    assert_eq!(display.bottom(), "3");
    assert!(display.enablement().divide);
    assert!(display.enablement().root);
    assert!(!display.enablement().subtract);
    assert_eq!(display.busy(), None);
    assert_eq!(
        display.last_operation().map(|timing| timing.op),
        Some(digit(3))
    );
}
