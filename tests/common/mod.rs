//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use nncalc_engine::{Calculator, Digit, Display, Natural, Operation, Session};

pub type CalcSession = Session<Calculator<Display>>;

/// Parse a decimal literal. Panics on malformed input.
pub fn nat(value: &str) -> Natural {
    value.parse().expect("valid natural literal")
}

pub fn digit(d: u8) -> Operation {
    Operation::AppendDigit(Digit::new(d).expect("digit in range"))
}

/// A calculator preloaded with `(top, bottom)`, bound to a fresh session.
pub fn calculator(top: &str, bottom: &str) -> Calculator<Display> {
    Calculator::with_registers(nat(top), nat(bottom), Display::default())
}

pub fn session(top: &str, bottom: &str) -> CalcSession {
    Session::register_observer(calculator(top, bottom))
}

/// `(top, bottom)` as decimal strings.
pub fn registers(calc: &Calculator<Display>) -> (String, String) {
    let store = calc.registers();
    (store.top().to_string(), store.bottom().to_string())
}

/// Feeds every operation to the session, panicking on the first error.
pub fn run(session: &mut CalcSession, ops: &[Operation]) {
    for op in ops {
        session
            .handle(*op)
            .unwrap_or_else(|err| panic!("{op} failed: {err}"));
    }
}
