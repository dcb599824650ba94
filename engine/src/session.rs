//! Digit-entry dispatch between raw user events and a [`Controller`].

use tracing::debug;

use nncalc_types::{DigitEntryState, Operation, PreAction};

use crate::{CalcError, Controller};

/// One interactive session: a bound controller plus the digit-entry state.
#[derive(Debug)]
pub struct Session<C> {
    controller: C,
    state: DigitEntryState,
}

impl<C: Controller> Session<C> {
    /// Binds `controller` as the observer of this session's events.
    ///
    /// The session takes ownership, so a controller is bound exactly once.
    pub fn register_observer(controller: C) -> Self {
        Self {
            controller,
            state: DigitEntryState::default(),
        }
    }

    pub fn state(&self) -> DigitEntryState {
        self.state
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Processes one user event to completion.
    ///
    /// Implicit pre-actions from the transition table run first, then the
    /// event's own call. The state only advances if every call succeeded.
    pub fn handle(&mut self, op: Operation) -> Result<(), CalcError> {
        let transition = self.state.transition(op.category());

        for pre in transition.pre_actions {
            match pre {
                PreAction::Clear => self.controller.process_clear()?,
                PreAction::Enter => self.controller.process_enter()?,
            }
        }
        self.controller.process(op)?;

        if self.state != transition.next {
            debug!(from = ?self.state, to = ?transition.next, %op, "Digit entry state changed");
        }
        self.state = transition.next;
        Ok(())
    }
}
