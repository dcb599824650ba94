//! Application state owned by the frame loop.

use std::collections::VecDeque;

use anyhow::{Context, Result};
use tracing::debug;

use nncalc_types::{DigitEntryState, Operation, UiOptions};

use crate::store::OperandStore;
use crate::{Calculator, Display, Enablement, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

#[derive(Debug)]
pub struct App {
    session: Session<Calculator<Display>>,
    ui_options: UiOptions,
    /// Submitted but not yet executed. Drained on the frame after submission,
    /// so the busy indicator gets drawn once before a long computation.
    pending: VecDeque<Operation>,
    status: Option<(StatusKind, String)>,
    tick: usize,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            session: Session::register_observer(Calculator::new(Display::default())),
            ui_options,
            pending: VecDeque::new(),
            status: None,
            tick: 0,
            should_quit: false,
        }
    }

    pub fn display(&self) -> &Display {
        self.session.controller().view()
    }

    pub fn registers(&self) -> &OperandStore {
        self.session.controller().registers()
    }

    pub fn entry_state(&self) -> DigitEntryState {
        self.session.state()
    }

    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Queues a user action for the next [`App::run_pending`].
    pub fn submit(&mut self, op: Operation) {
        self.status = None;
        self.pending.push_back(op);
    }

    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The operation the busy indicator is waiting on.
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending.front().copied()
    }

    /// Executes queued actions in order.
    ///
    /// Actions the display currently shows as disabled are dropped with a
    /// warning. Any controller error is fatal and returned to the caller.
    pub fn run_pending(&mut self) -> Result<()> {
        while let Some(op) = self.pending.pop_front() {
            if !self.display().allows(op) {
                let rule = Enablement::rule(op).unwrap_or("operation is disabled");
                debug!(%op, rule, "Ignoring key for disabled operation");
                self.set_status(StatusKind::Warning, format!("Cannot {}: {rule}", op.name()));
                continue;
            }
            self.session
                .handle(op)
                .with_context(|| format!("{op} failed"))?;
        }
        Ok(())
    }

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some((kind, message.into()));
    }

    pub fn status(&self) -> Option<(StatusKind, &str)> {
        self.status
            .as_ref()
            .map(|(kind, message)| (*kind, message.as_str()))
    }

    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
