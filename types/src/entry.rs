//! Digit-entry state machine.
//!
//! The calculator needs to know, for each digit keystroke, whether the digit
//! extends the operand being typed or starts a new one. [`DigitEntryState`]
//! remembers what kind of event came last, and [`DigitEntryState::transition`]
//! is the complete table of (state, event category) to implicit pre-actions
//! and successor state.

use crate::EventCategory;

/// What kind of event was processed most recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigitEntryState {
    #[default]
    Cleared,
    EnteredOrSwapped,
    AfterOperator,
    AfterDigit,
}

/// Controller call issued implicitly before a digit is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreAction {
    Clear,
    Enter,
}

/// Row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Run in order before the event's own controller call.
    pub pre_actions: &'static [PreAction],
    pub next: DigitEntryState,
}

const NONE: &[PreAction] = &[];
const CLEAR_FIRST: &[PreAction] = &[PreAction::Clear];
const COMMIT_THEN_CLEAR: &[PreAction] = &[PreAction::Enter, PreAction::Clear];

impl DigitEntryState {
    pub const ALL: [Self; 4] = [
        Self::Cleared,
        Self::EnteredOrSwapped,
        Self::AfterOperator,
        Self::AfterDigit,
    ];

    /// Looks up the table row for an incoming event.
    ///
    /// Non-digit events never carry pre-actions; their successor depends only
    /// on the event. Digit events always land in `AfterDigit`.
    #[must_use]
    pub const fn transition(self, category: EventCategory) -> Transition {
        let (pre_actions, next) = match (self, category) {
            (_, EventCategory::Clear) => (NONE, Self::Cleared),
            (_, EventCategory::EnterOrSwap) => (NONE, Self::EnteredOrSwapped),
            (_, EventCategory::Operator) => (NONE, Self::AfterOperator),
            (Self::EnteredOrSwapped, EventCategory::Digit) => (CLEAR_FIRST, Self::AfterDigit),
            (Self::AfterOperator, EventCategory::Digit) => (COMMIT_THEN_CLEAR, Self::AfterDigit),
            (Self::Cleared | Self::AfterDigit, EventCategory::Digit) => (NONE, Self::AfterDigit),
        };
        Transition { pre_actions, next }
    }
}
