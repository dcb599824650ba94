//! The register controller.
//!
//! Every operation follows the same shape: check the enabling rule, bracket
//! the register mutation with the view's busy hooks, then push the new
//! registers and enabling flags to the view. Fallible steps run before any
//! register is written, so an error leaves the registers untouched.

use std::time::Instant;

use tracing::{debug, debug_span, error, warn};

use nncalc_types::{Digit, Natural, Operation};

use crate::store::{OperandStore, Register};
use crate::{CalcError, Controller, Enablement, View};

/// Owns the registers and the view they are presented through.
#[derive(Debug)]
pub struct Calculator<V> {
    store: OperandStore,
    view: V,
}

impl<V: View> Calculator<V> {
    /// Starts a session with both registers at zero and syncs the view.
    pub fn new(view: V) -> Self {
        Self::with_registers(Natural::zero(), Natural::zero(), view)
    }

    pub fn with_registers(top: Natural, bottom: Natural, view: V) -> Self {
        let mut calculator = Self {
            store: OperandStore::from_values(top, bottom),
            view,
        };
        calculator.refresh_view();
        calculator
    }

    pub fn registers(&self) -> &OperandStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn enablement(&self) -> Enablement {
        Enablement::compute(self.store.top(), self.store.bottom())
    }

    fn refresh_view(&mut self) {
        let enablement = self.enablement();
        self.view.update_top_display(self.store.top());
        self.view.update_bottom_display(self.store.bottom());
        self.view.update_subtract_allowed(enablement.subtract);
        self.view.update_divide_allowed(enablement.divide);
        self.view.update_power_allowed(enablement.power);
        self.view.update_root_allowed(enablement.root);
    }

    fn require(&self, op: Operation) -> Result<(), CalcError> {
        if self.enablement().allows(op) {
            return Ok(());
        }
        let rule = Enablement::rule(op).unwrap_or("operation is disabled");
        warn!(op = op.name(), rule, "Rejected operation that is currently disabled");
        Err(CalcError::Precondition {
            operation: op,
            rule,
        })
    }

    fn run<F>(&mut self, op: Operation, apply: F) -> Result<(), CalcError>
    where
        F: FnOnce(&mut OperandStore) -> Result<(), CalcError>,
    {
        self.require(op)?;

        let span = debug_span!("calc.op", op = op.name());
        let _enter = span.enter();

        self.view.operation_started(op);
        let started = Instant::now();
        let result = apply(&mut self.store);
        let elapsed = started.elapsed();
        self.view.operation_finished(op, elapsed);

        match &result {
            Ok(()) => debug!(?elapsed, "Operation complete"),
            Err(err) => error!(%err, "Operation failed"),
        }

        self.refresh_view();
        result
    }
}

impl<V: View> Controller for Calculator<V> {
    fn process_clear(&mut self) -> Result<(), CalcError> {
        self.run(Operation::Clear, |store| {
            store.clear(Register::Bottom);
            Ok(())
        })
    }

    fn process_swap(&mut self) -> Result<(), CalcError> {
        self.run(Operation::Swap, |store| {
            let (top, bottom) = store.split_mut();
            let mut temp = top.new_instance();
            temp.transfer_from(top);
            top.transfer_from(bottom);
            bottom.transfer_from(&mut temp);
            Ok(())
        })
    }

    fn process_enter(&mut self) -> Result<(), CalcError> {
        self.run(Operation::Enter, |store| {
            let (top, bottom) = store.split_mut();
            top.copy_from(bottom);
            Ok(())
        })
    }

    fn process_add(&mut self) -> Result<(), CalcError> {
        self.run(Operation::Add, |store| {
            let (top, bottom) = store.split_mut();
            bottom.add(top);
            top.clear();
            Ok(())
        })
    }

    fn process_subtract(&mut self) -> Result<(), CalcError> {
        self.run(Operation::Subtract, |store| {
            let (top, bottom) = store.split_mut();
            top.subtract(bottom)?;
            bottom.transfer_from(top);
            Ok(())
        })
    }

    fn process_multiply(&mut self) -> Result<(), CalcError> {
        self.run(Operation::Multiply, |store| {
            let (top, bottom) = store.split_mut();
            bottom.multiply(top);
            top.clear();
            Ok(())
        })
    }

    fn process_divide(&mut self) -> Result<(), CalcError> {
        self.run(Operation::Divide, |store| {
            let (top, bottom) = store.split_mut();
            // top becomes the quotient
            let mut remainder = top.divide(bottom)?;
            bottom.transfer_from(top);
            top.transfer_from(&mut remainder);
            Ok(())
        })
    }

    fn process_power(&mut self) -> Result<(), CalcError> {
        self.run(Operation::Power, |store| {
            let (top, bottom) = store.split_mut();
            // Exponent is captured before bottom is overwritten.
            let exponent = bottom.to_machine_int()?;
            top.power(exponent);
            bottom.transfer_from(top);
            Ok(())
        })
    }

    fn process_root(&mut self) -> Result<(), CalcError> {
        self.run(Operation::Root, |store| {
            let (top, bottom) = store.split_mut();
            let index = bottom.to_machine_int()?;
            top.root(index)?;
            bottom.transfer_from(top);
            Ok(())
        })
    }

    fn process_append_digit(&mut self, digit: Digit) -> Result<(), CalcError> {
        self.run(Operation::AppendDigit(digit), |store| {
            let (_, bottom) = store.split_mut();
            bottom.multiply_by_ten_plus(digit);
            Ok(())
        })
    }
}
