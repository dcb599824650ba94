//! The two seams between the engine and a presentation layer.
//!
//! A [`View`] receives register contents and enabling flags after every
//! operation. A [`Controller`] receives one call per user action. Any
//! presentation can implement `View`; the digit-entry [`Session`] drives any
//! `Controller`.
//!
//! [`Session`]: crate::Session

use std::time::Duration;

use nncalc_types::{Digit, Natural, Operation};

use crate::CalcError;

/// Controller to View: pushed after every operation.
pub trait View {
    fn update_top_display(&mut self, value: &Natural);
    fn update_bottom_display(&mut self, value: &Natural);
    fn update_subtract_allowed(&mut self, allowed: bool);
    fn update_divide_allowed(&mut self, allowed: bool);
    fn update_power_allowed(&mut self, allowed: bool);
    fn update_root_allowed(&mut self, allowed: bool);

    /// Called before an operation touches the registers.
    fn operation_started(&mut self, _op: Operation) {}

    /// Called once the operation has finished, successfully or not.
    fn operation_finished(&mut self, _op: Operation, _elapsed: Duration) {}
}

/// View to Controller: one call per user action.
///
/// Gated operations (subtract, divide, power, root) fail with
/// [`CalcError::Precondition`] when called while disabled. Callers are
/// expected to consult the enabling flags first; such a failure is fatal.
pub trait Controller {
    fn process_clear(&mut self) -> Result<(), CalcError>;
    fn process_swap(&mut self) -> Result<(), CalcError>;
    fn process_enter(&mut self) -> Result<(), CalcError>;
    fn process_add(&mut self) -> Result<(), CalcError>;
    fn process_subtract(&mut self) -> Result<(), CalcError>;
    fn process_multiply(&mut self) -> Result<(), CalcError>;
    fn process_divide(&mut self) -> Result<(), CalcError>;
    fn process_power(&mut self) -> Result<(), CalcError>;
    fn process_root(&mut self) -> Result<(), CalcError>;
    fn process_append_digit(&mut self, digit: Digit) -> Result<(), CalcError>;

    /// Dispatches an [`Operation`] to the matching `process_*` call.
    fn process(&mut self, op: Operation) -> Result<(), CalcError> {
        match op {
            Operation::Clear => self.process_clear(),
            Operation::Swap => self.process_swap(),
            Operation::Enter => self.process_enter(),
            Operation::Add => self.process_add(),
            Operation::Subtract => self.process_subtract(),
            Operation::Multiply => self.process_multiply(),
            Operation::Divide => self.process_divide(),
            Operation::Power => self.process_power(),
            Operation::Root => self.process_root(),
            Operation::AppendDigit(digit) => self.process_append_digit(digit),
        }
    }
}
