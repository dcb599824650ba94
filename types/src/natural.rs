//! Unbounded non-negative integers.
//!
//! [`Natural`] is the value stored in each calculator register. It wraps a
//! [`BigUint`] and exposes the small, explicit operation set the engine
//! relies on: in-place arithmetic, copy, and transfer.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::str::FromStr;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

use crate::Digit;

/// Machine integer type used for exponents and root indices.
pub type MachineInt = u32;

/// Largest value [`Natural::to_machine_int`] accepts.
pub const INT_LIMIT: MachineInt = MachineInt::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NaturalError {
    #[error("value does not fit in a machine integer (limit {limit})")]
    Range { limit: MachineInt },
    #[error("subtraction would go below zero")]
    Underflow,
    #[error("division by zero")]
    DivideByZero,
    #[error("root index must be at least 2, got {index}")]
    InvalidArgument { index: MachineInt },
    #[error("not a decimal natural number: {input:?}")]
    Parse { input: String },
}

/// A non-negative integer of unbounded magnitude.
///
/// `Clone` (and [`Natural::copy_from`]) produce an independent duplicate.
/// [`Natural::transfer_from`] moves a value and leaves the source at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Natural(BigUint);

impl Natural {
    #[must_use]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// A fresh zero value of the same representation.
    #[must_use]
    pub fn new_instance(&self) -> Self {
        Self::zero()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Reads the value as an exponent or root index.
    pub fn to_machine_int(&self) -> Result<MachineInt, NaturalError> {
        self.0
            .to_u32()
            .ok_or(NaturalError::Range { limit: INT_LIMIT })
    }

    pub fn add(&mut self, other: &Self) {
        self.0 += &other.0;
    }

    pub fn subtract(&mut self, other: &Self) -> Result<(), NaturalError> {
        if self.0 < other.0 {
            return Err(NaturalError::Underflow);
        }
        self.0 -= &other.0;
        Ok(())
    }

    pub fn multiply(&mut self, other: &Self) {
        self.0 *= &other.0;
    }

    /// Divides in place; `self` becomes the quotient and the remainder is returned.
    pub fn divide(&mut self, divisor: &Self) -> Result<Self, NaturalError> {
        if divisor.is_zero() {
            return Err(NaturalError::DivideByZero);
        }
        let (quotient, remainder) = self.0.div_rem(&divisor.0);
        self.0 = quotient;
        Ok(Self(remainder))
    }

    pub fn power(&mut self, exponent: MachineInt) {
        self.0 = self.0.pow(exponent);
    }

    /// Replaces `self` with the floor of its `index`-th root.
    pub fn root(&mut self, index: MachineInt) -> Result<(), NaturalError> {
        if index < 2 {
            return Err(NaturalError::InvalidArgument { index });
        }
        self.0 = self.0.nth_root(index);
        Ok(())
    }

    /// `self := self * 10 + digit`
    pub fn multiply_by_ten_plus(&mut self, digit: Digit) {
        self.0 *= 10u32;
        self.0 += u32::from(digit.value());
    }

    pub fn clear(&mut self) {
        self.0.set_zero();
    }

    pub fn copy_from(&mut self, other: &Self) {
        self.0.clone_from(&other.0);
    }

    /// Moves `other` into `self`; `other` is left at zero.
    pub fn transfer_from(&mut self, other: &mut Self) {
        self.0 = mem::take(&mut other.0);
    }

    /// Number of decimal digits in the value (zero has one digit).
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.0.to_str_radix(10).len()
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Natural {
    type Err = NaturalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || NaturalError::Parse {
            input: s.to_string(),
        };
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_error());
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or_else(parse_error)
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for Natural {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<Natural> for BigUint {
    fn from(value: Natural) -> Self {
        value.0
    }
}
