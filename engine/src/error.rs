use nncalc_types::{NaturalError, Operation};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operation was invoked while the enabling rules forbid it.
    #[error("{operation} invoked while disabled: {rule}")]
    Precondition {
        operation: Operation,
        rule: &'static str,
    },
    #[error(transparent)]
    Arithmetic(#[from] NaturalError),
}
