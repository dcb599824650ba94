//! Core domain types for nncalc.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod digit;
mod entry;
mod natural;
mod operation;
mod ui_options;

pub use digit::{Digit, DigitError};
pub use entry::{DigitEntryState, PreAction, Transition};
pub use natural::{INT_LIMIT, MachineInt, Natural, NaturalError};
pub use operation::{EventCategory, Operation};
pub use ui_options::UiOptions;
