//! Core engine for nncalc - registers, controller and digit-entry state machine.
//!
//! This crate contains the calculator state without TUI dependencies.
//!
//! ```text
//! key -> App::submit -> App::run_pending -> Session::handle
//!                                              | pre-actions + primary call
//!                                              v
//!                                   Calculator (Controller) -> Display (View)
//! ```

mod app;
mod calculator;
mod config;
mod contract;
mod display;
mod error;
mod policy;
mod session;
mod store;

pub use app::{App, StatusKind};
pub use calculator::Calculator;
pub use config::{AppConfig, CalcConfig, ConfigError, config_path};
pub use contract::{Controller, View};
pub use display::{Display, OperationTiming};
pub use error::CalcError;
pub use policy::Enablement;
pub use session::Session;
pub use store::{OperandStore, Register};

pub use nncalc_types::{
    Digit, DigitEntryState, EventCategory, INT_LIMIT, MachineInt, Natural, NaturalError, Operation,
    UiOptions,
};
