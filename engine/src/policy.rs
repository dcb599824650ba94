//! Which operations are legal for the current register contents.

use nncalc_types::{Natural, Operation};

/// Snapshot of the enabling rules. Always derived, never stored as truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enablement {
    /// `bottom <= top`
    pub subtract: bool,
    /// `bottom != 0`
    pub divide: bool,
    /// `bottom <= INT_LIMIT`
    pub power: bool,
    /// `2 <= bottom <= INT_LIMIT`
    pub root: bool,
}

impl Enablement {
    #[must_use]
    pub fn compute(top: &Natural, bottom: &Natural) -> Self {
        let exponent = bottom.to_machine_int().ok();
        Self {
            subtract: bottom <= top,
            divide: !bottom.is_zero(),
            power: exponent.is_some(),
            root: exponent.is_some_and(|index| index >= 2),
        }
    }

    #[must_use]
    pub fn allows(self, op: Operation) -> bool {
        match op {
            Operation::Subtract => self.subtract,
            Operation::Divide => self.divide,
            Operation::Power => self.power,
            Operation::Root => self.root,
            Operation::Clear
            | Operation::Swap
            | Operation::Enter
            | Operation::Add
            | Operation::Multiply
            | Operation::AppendDigit(_) => true,
        }
    }

    /// The rule an operation is gated on, if any.
    #[must_use]
    pub const fn rule(op: Operation) -> Option<&'static str> {
        match op {
            Operation::Subtract => Some("bottom must not exceed top"),
            Operation::Divide => Some("bottom must be non-zero"),
            Operation::Power => Some("exponent must fit in a machine integer"),
            Operation::Root => Some("root index must be between 2 and the machine integer limit"),
            _ => None,
        }
    }
}
