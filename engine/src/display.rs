//! Presentation state pushed by the controller.
//!
//! [`Display`] is the [`View`] the terminal front end renders from. It holds
//! rendered register text and the enabling flags, plus the busy marker and
//! the timing of the most recent operation.

use std::time::Duration;

use nncalc_types::{Natural, Operation};

use crate::{Enablement, View};

/// Timing of one completed controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationTiming {
    pub op: Operation,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct Display {
    top: String,
    bottom: String,
    enablement: Enablement,
    busy: Option<Operation>,
    last: Option<OperationTiming>,
}

impl Default for Display {
    fn default() -> Self {
        let zero = Natural::zero();
        Self {
            top: zero.to_string(),
            bottom: zero.to_string(),
            enablement: Enablement::compute(&zero, &zero),
            busy: None,
            last: None,
        }
    }
}

impl Display {
    #[must_use]
    pub fn top(&self) -> &str {
        &self.top
    }

    #[must_use]
    pub fn bottom(&self) -> &str {
        &self.bottom
    }

    #[must_use]
    pub fn enablement(&self) -> Enablement {
        self.enablement
    }

    /// Whether the key for `op` should be shown as available.
    #[must_use]
    pub fn allows(&self, op: Operation) -> bool {
        self.enablement.allows(op)
    }

    /// The operation currently between its start and finish hooks.
    #[must_use]
    pub fn busy(&self) -> Option<Operation> {
        self.busy
    }

    #[must_use]
    pub fn last_operation(&self) -> Option<OperationTiming> {
        self.last
    }
}

impl View for Display {
    fn update_top_display(&mut self, value: &Natural) {
        self.top = value.to_string();
    }

    fn update_bottom_display(&mut self, value: &Natural) {
        self.bottom = value.to_string();
    }

    fn update_subtract_allowed(&mut self, allowed: bool) {
        self.enablement.subtract = allowed;
    }

    fn update_divide_allowed(&mut self, allowed: bool) {
        self.enablement.divide = allowed;
    }

    fn update_power_allowed(&mut self, allowed: bool) {
        self.enablement.power = allowed;
    }

    fn update_root_allowed(&mut self, allowed: bool) {
        self.enablement.root = allowed;
    }

    fn operation_started(&mut self, op: Operation) {
        self.busy = Some(op);
    }

    fn operation_finished(&mut self, op: Operation, elapsed: Duration) {
        self.busy = None;
        self.last = Some(OperationTiming { op, elapsed });
    }
}
