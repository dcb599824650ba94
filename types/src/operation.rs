use std::fmt;

use crate::Digit;

/// One user action, and the controller call that carries it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Clear,
    Swap,
    Enter,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
    AppendDigit(Digit),
}

/// Coarse classification of an [`Operation`] used by the digit-entry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Clear,
    EnterOrSwap,
    Operator,
    Digit,
}

impl EventCategory {
    pub const ALL: [Self; 4] = [Self::Clear, Self::EnterOrSwap, Self::Operator, Self::Digit];
}

impl Operation {
    /// Every non-digit operation, in key-pad order.
    pub const NON_DIGIT: [Self; 9] = [
        Self::Clear,
        Self::Swap,
        Self::Enter,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Root,
    ];

    #[must_use]
    pub const fn category(self) -> EventCategory {
        match self {
            Self::Clear => EventCategory::Clear,
            Self::Swap | Self::Enter => EventCategory::EnterOrSwap,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power | Self::Root => {
                EventCategory::Operator
            }
            Self::AppendDigit(_) => EventCategory::Digit,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Swap => "swap",
            Self::Enter => "enter",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Root => "root",
            Self::AppendDigit(_) => "digit",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AppendDigit(d) => write!(f, "digit {d}"),
            other => f.write_str(other.name()),
        }
    }
}
