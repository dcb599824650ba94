//! The two operand registers.

use nncalc_types::Natural;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Top,
    Bottom,
}

/// Holds `top` and `bottom`; both start at zero.
///
/// Readers get shared borrows. Mutation is only reachable from inside this
/// crate, through [`OperandStore::split_mut`] or [`OperandStore::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandStore {
    top: Natural,
    bottom: Natural,
}

impl OperandStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_values(top: Natural, bottom: Natural) -> Self {
        Self { top, bottom }
    }

    #[must_use]
    pub fn top(&self) -> &Natural {
        &self.top
    }

    #[must_use]
    pub fn bottom(&self) -> &Natural {
        &self.bottom
    }

    #[must_use]
    pub fn get(&self, register: Register) -> &Natural {
        match register {
            Register::Top => &self.top,
            Register::Bottom => &self.bottom,
        }
    }

    pub(crate) fn clear(&mut self, register: Register) {
        match register {
            Register::Top => self.top.clear(),
            Register::Bottom => self.bottom.clear(),
        }
    }

    /// Disjoint mutable borrows of `(top, bottom)`.
    pub(crate) fn split_mut(&mut self) -> (&mut Natural, &mut Natural) {
        (&mut self.top, &mut self.bottom)
    }
}
