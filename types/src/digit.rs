use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("digit out of range: {0}")]
    OutOfRange(u8),
    #[error("not a decimal digit: {0:?}")]
    NotADigit(char),
}

/// A single decimal digit, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);
    pub const NINE: Self = Self(9);

    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=9).map(Self)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = DigitError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Self)
            .ok_or(DigitError::NotADigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
